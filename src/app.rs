//! Application shell and eframe integration.
//!
//! Defines the App struct holding the form state, and the update loop
//! that draws the side-panel controls and the central scatter plot. One
//! button press runs one load-filter-render pass against the cache file.

use std::path::Path;

use eframe::egui;
use egui_plot::Plot;

use crate::cad::{load_cad_file, CACHE_FILE};
use crate::errors::CadError;
use crate::filter::{filter_approaches, FilterCriteria};
use crate::plot::{draw_approach_plot, format_date_tick, ApproachPlot};
use crate::time::parse_form_date;
use crate::units::DistanceUnit;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 99, 71);

enum Notice {
    Error(String),
    NoData,
}

pub struct App {
    start_date: String,
    end_date: String,
    limit_value: String,
    limit_unit: DistanceUnit,
    output_unit: DistanceUnit,
    top_n: u32,
    annotate_n: u32,
    plot: Option<ApproachPlot>,
    notice: Option<Notice>,
    reset_bounds: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            start_date: "2004-01-01".to_string(),
            end_date: "2029-12-31".to_string(),
            limit_value: "42157".to_string(),
            limit_unit: DistanceUnit::Kilometers,
            output_unit: DistanceUnit::EarthRadii,
            top_n: 0,
            annotate_n: 100,
            plot: None,
            notice: None,
            reset_bounds: false,
        }
    }
}

impl App {
    fn build_criteria(&self) -> Result<FilterCriteria, CadError> {
        let start = parse_form_date(&self.start_date)?;
        let end = parse_form_date(&self.end_date)?;
        if end < start {
            return Err(CadError::BadInput(
                "end date lies before start date".to_string(),
            ));
        }
        let limit_value = self.limit_value.trim().parse::<f64>().map_err(|_| {
            CadError::BadInput(format!(
                "limit distance '{}' is not a number",
                self.limit_value
            ))
        })?;
        Ok(FilterCriteria {
            start,
            end,
            limit_value,
            limit_unit: self.limit_unit,
            output_unit: self.output_unit,
            top_n: self.top_n as usize,
            annotate_n: self.annotate_n as usize,
        })
    }

    fn refresh_plot(&mut self) {
        self.notice = None;
        let criteria = match self.build_criteria() {
            Ok(c) => c,
            Err(e) => {
                self.notice = Some(Notice::Error(e.to_string()));
                return;
            }
        };
        let dataset = match load_cad_file(Path::new(CACHE_FILE)) {
            Ok(d) => d,
            Err(e) => {
                self.notice = Some(Notice::Error(e.to_string()));
                return;
            }
        };
        let outcome = filter_approaches(&dataset, &criteria);
        if outcome.approaches.is_empty() {
            self.notice = Some(Notice::NoData);
            self.plot = None;
            return;
        }
        self.plot = Some(ApproachPlot::new(outcome, &criteria));
        self.reset_bounds = true;
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("NEO Close Approaches");

        ui.add_space(10.0);
        ui.label("Date window");
        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Start:");
            ui.add(egui::TextEdit::singleline(&mut self.start_date).desired_width(110.0));
        });
        ui.horizontal(|ui| {
            ui.label("End:");
            ui.add(egui::TextEdit::singleline(&mut self.end_date).desired_width(110.0));
        });
        ui.weak("YYYY-MM-DD");

        ui.add_space(10.0);
        ui.label("Distance cutoff");
        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Limit:");
            ui.add(egui::TextEdit::singleline(&mut self.limit_value).desired_width(90.0));
            egui::ComboBox::from_id_salt("limit_unit")
                .selected_text(self.limit_unit.label())
                .show_ui(ui, |ui| {
                    for unit in DistanceUnit::ALL {
                        ui.selectable_value(&mut self.limit_unit, unit, unit.label());
                    }
                });
        });
        ui.horizontal(|ui| {
            ui.label("Output unit:");
            egui::ComboBox::from_id_salt("output_unit")
                .selected_text(self.output_unit.label())
                .show_ui(ui, |ui| {
                    for unit in DistanceUnit::ALL {
                        ui.selectable_value(&mut self.output_unit, unit, unit.label());
                    }
                });
        });

        ui.add_space(10.0);
        ui.label("Display");
        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Top N closest (0 = all):");
            ui.add(egui::DragValue::new(&mut self.top_n).range(0..=10_000));
        });
        ui.horizontal(|ui| {
            ui.label("Annotations (0 = none):");
            ui.add(egui::DragValue::new(&mut self.annotate_n).range(0..=1_000));
        });

        ui.add_space(10.0);
        ui.separator();
        if ui.button("Plot cached data").clicked() {
            self.refresh_plot();
        }
        if self.plot.is_some() && ui.button("Reset view").clicked() {
            self.reset_bounds = true;
        }

        match &self.notice {
            Some(Notice::Error(msg)) => {
                ui.add_space(5.0);
                ui.colored_label(ERROR_COLOR, msg.as_str());
            }
            Some(Notice::NoData) => {
                ui.add_space(5.0);
                ui.label("No NEOs within the given filters.");
            }
            None => {}
        }

        ui.add_space(20.0);
        ui.weak(if env!("GIT_HASH").is_empty() {
            format!("neo-viz {}", env!("CARGO_PKG_VERSION"))
        } else {
            format!("neo-viz {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"))
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        let reset_bounds = std::mem::take(&mut self.reset_bounds);
        egui::CentralPanel::default().show(ctx, |ui| {
            let dark_mode = ui.visuals().dark_mode;
            match &self.plot {
                Some(plot) => {
                    let y_label = format!("Distance ({})", plot.output_unit.label());
                    Plot::new("approach_plot")
                        .x_axis_label("Date")
                        .y_axis_label(y_label)
                        .x_axis_formatter(|mark, _range| format_date_tick(mark.value))
                        .show(ui, |plot_ui| {
                            draw_approach_plot(plot_ui, plot, reset_bounds, dark_mode);
                        });
                    if plot.skipped > 0 {
                        ui.weak(format!(
                            "{} approaches plotted ({} malformed rows skipped)",
                            plot.approaches.len(),
                            plot.skipped
                        ));
                    } else {
                        ui.weak(format!("{} approaches plotted", plot.approaches.len()));
                    }
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.weak(
                            "No plot yet. Refresh the cache with the fetch_cad binary, \
                             then press \"Plot cached data\".",
                        );
                    });
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_builds_valid_criteria() {
        let criteria = App::default().build_criteria().unwrap();
        assert_eq!(criteria.limit_value, 42157.0);
        assert_eq!(criteria.limit_unit, DistanceUnit::Kilometers);
        assert_eq!(criteria.output_unit, DistanceUnit::EarthRadii);
        assert_eq!(criteria.top_n, 0);
        assert_eq!(criteria.annotate_n, 100);
        assert!(criteria.start < criteria.end);
    }

    #[test]
    fn malformed_date_is_rejected_at_the_boundary() {
        let mut app = App::default();
        app.start_date = "01/01/2004".to_string();
        assert!(matches!(app.build_criteria(), Err(CadError::BadInput(_))));
    }

    #[test]
    fn non_numeric_limit_is_rejected_at_the_boundary() {
        let mut app = App::default();
        app.limit_value = "forty".to_string();
        assert!(matches!(app.build_criteria(), Err(CadError::BadInput(_))));
    }

    #[test]
    fn inverted_date_window_is_rejected() {
        let mut app = App::default();
        app.start_date = "2030-01-01".to_string();
        assert!(matches!(app.build_criteria(), Err(CadError::BadInput(_))));
    }
}
