use chrono::NaiveDateTime;
use eframe::egui;
use egui_plot::{HLine, LineStyle, PlotBounds, PlotPoint, Points, Text};

use crate::filter::{FilterCriteria, FilterOutcome, PlottedApproach};
use crate::units::{convert, DistanceUnit, EARTH_RADIUS_KM, GEOSYNC_KM, LUNAR_DISTANCE_KM};

const POINT_COLOR: egui::Color32 = egui::Color32::from_rgb(30, 144, 255);
const EARTH_LINE_COLOR: egui::Color32 = egui::Color32::GRAY;
const LUNAR_LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 140, 0);
const GEOSYNC_LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(147, 112, 219);

/// One filter-and-render pass, frozen until the next button press.
pub struct ApproachPlot {
    pub approaches: Vec<PlottedApproach>,
    pub output_unit: DistanceUnit,
    pub annotate_n: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub show_lunar: bool,
    pub skipped: usize,
}

impl ApproachPlot {
    pub fn new(outcome: FilterOutcome, criteria: &FilterCriteria) -> Self {
        Self {
            approaches: outcome.approaches,
            skipped: outcome.skipped,
            output_unit: criteria.output_unit,
            annotate_n: criteria.annotate_n,
            x_min: time_x(criteria.start),
            x_max: time_x(criteria.end),
            show_lunar: lunar_line_visible(criteria.limit_value, criteria.limit_unit),
        }
    }

    pub fn max_display_dist(&self) -> f64 {
        self.approaches
            .iter()
            .map(|a| a.display_dist)
            .fold(0.0, f64::max)
    }
}

fn time_x(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp() as f64
}

pub fn format_date_tick(secs: f64) -> String {
    match chrono::DateTime::from_timestamp(secs as i64, 0) {
        Some(t) => t.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// The lunar reference only means something when the chosen cutoff is at
/// least one lunar distance wide.
pub fn lunar_line_visible(limit_value: f64, limit_unit: DistanceUnit) -> bool {
    convert(limit_value, limit_unit, DistanceUnit::Lunar) >= 1.0
}

/// The geosynchronous reference is drawn only while it stays within 120%
/// of the highest plotted distance; beyond that it would sit off-scale.
pub fn geo_line_visible(max_display_dist: f64, output_unit: DistanceUnit) -> bool {
    convert(GEOSYNC_KM, DistanceUnit::Kilometers, output_unit) < max_display_dist * 1.2
}

pub fn draw_approach_plot(
    plot_ui: &mut egui_plot::PlotUi,
    plot: &ApproachPlot,
    reset_bounds: bool,
    dark_mode: bool,
) {
    let y_max = plot.max_display_dist();
    if reset_bounds {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [plot.x_min, 0.0],
            [plot.x_max, y_max * 1.1],
        ));
    }
    let bounds = plot_ui.plot_bounds();
    let x_span = (bounds.max()[0] - bounds.min()[0]).max(f64::EPSILON);
    let y_span = (bounds.max()[1] - bounds.min()[1]).max(f64::EPSILON);

    let earth_y = convert(EARTH_RADIUS_KM, DistanceUnit::Kilometers, plot.output_unit);
    plot_ui.hline(
        HLine::new("", earth_y)
            .color(EARTH_LINE_COLOR)
            .style(LineStyle::Dashed { length: 8.0 }),
    );
    if plot.show_lunar {
        let lunar_y = convert(LUNAR_DISTANCE_KM, DistanceUnit::Kilometers, plot.output_unit);
        plot_ui.hline(
            HLine::new("", lunar_y)
                .color(LUNAR_LINE_COLOR)
                .style(LineStyle::Dashed { length: 8.0 }),
        );
    }
    if geo_line_visible(y_max, plot.output_unit) {
        let geo_y = convert(GEOSYNC_KM, DistanceUnit::Kilometers, plot.output_unit);
        plot_ui.hline(
            HLine::new("", geo_y)
                .color(GEOSYNC_LINE_COLOR)
                .style(LineStyle::Dashed { length: 8.0 }),
        );
    }

    let pts: Vec<[f64; 2]> = plot
        .approaches
        .iter()
        .map(|a| [time_x(a.time), a.display_dist])
        .collect();
    plot_ui.points(Points::new("", pts).color(POINT_COLOR).radius(3.0));

    let label_color = if dark_mode {
        egui::Color32::WHITE
    } else {
        egui::Color32::BLACK
    };
    let y_offset = y_span * 0.012;
    for a in plot.approaches.iter().take(plot.annotate_n) {
        plot_ui.text(
            Text::new(
                "",
                PlotPoint::new(time_x(a.time), a.display_dist + y_offset),
                egui::RichText::new(a.name.as_str()).size(9.0),
            )
            .color(label_color)
            .anchor(egui::Align2::LEFT_BOTTOM),
        );
    }

    if plot_ui.response().hovered() {
        if let Some(pointer) = plot_ui.pointer_coordinate() {
            let mut best: Option<(usize, f64)> = None;
            for (idx, a) in plot.approaches.iter().enumerate() {
                let dx = (pointer.x - time_x(a.time)) / x_span;
                let dy = (pointer.y - a.display_dist) / y_span;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= 0.015 && best.map_or(true, |(_, bd)| dist < bd) {
                    best = Some((idx, dist));
                }
            }
            if let Some((idx, _)) = best {
                let a = &plot.approaches[idx];
                egui::Tooltip::always_open(
                    plot_ui.ctx().clone(),
                    egui::LayerId::background(),
                    egui::Id::new("approach_tooltip"),
                    egui::PopupAnchor::Pointer,
                )
                .gap(12.0)
                .show(|ui| {
                    ui.label(egui::RichText::new(a.name.as_str()).strong().size(14.0));
                    ui.separator();
                    egui::Grid::new("approach_tooltip_grid")
                        .num_columns(2)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Date:");
                            ui.label(a.time.format("%Y-%m-%d %H:%M").to_string());
                            ui.end_row();
                            ui.label("Distance:");
                            ui.label(format!(
                                "{:.4} {}",
                                a.display_dist,
                                plot.output_unit.label()
                            ));
                            ui.end_row();
                            ui.label("Kilometers:");
                            ui.label(format!("{:.0} km", a.dist_km));
                            ui.end_row();
                        });
                });
            }
        }
    }
}
