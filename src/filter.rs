use chrono::NaiveDateTime;

use crate::cad::CadDataset;
use crate::time::parse_approach_time;
use crate::units::{convert, DistanceUnit};

pub struct FilterCriteria {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub limit_value: f64,
    pub limit_unit: DistanceUnit,
    pub output_unit: DistanceUnit,
    pub top_n: usize,
    pub annotate_n: usize,
}

pub struct PlottedApproach {
    pub time: NaiveDateTime,
    pub display_dist: f64,
    pub name: String,
    pub dist_km: f64,
}

pub struct FilterOutcome {
    pub approaches: Vec<PlottedApproach>,
    /// Rows dropped because their timestamp or distance failed to parse.
    pub skipped: usize,
}

/// Walks the dataset in source order, keeping approaches inside the
/// inclusive date window and under the distance limit. Comparison happens
/// in kilometers; the display distance is precomputed in the output unit.
/// With `top_n > 0` the survivors are re-sorted ascending by kilometer
/// distance and truncated, otherwise source order is preserved.
pub fn filter_approaches(dataset: &CadDataset, criteria: &FilterCriteria) -> FilterOutcome {
    let limit_km = convert(
        criteria.limit_value,
        criteria.limit_unit,
        DistanceUnit::Kilometers,
    );

    let mut approaches = Vec::new();
    let mut skipped = 0usize;
    for raw in &dataset.approaches {
        let time = match parse_approach_time(&raw.time) {
            Ok(t) => t,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let au = match raw.dist_au.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let dist_km = convert(au, DistanceUnit::Au, DistanceUnit::Kilometers);
        if time < criteria.start || time > criteria.end || dist_km > limit_km {
            continue;
        }
        approaches.push(PlottedApproach {
            time,
            display_dist: convert(dist_km, DistanceUnit::Kilometers, criteria.output_unit),
            name: raw.fullname.clone(),
            dist_km,
        });
    }

    if criteria.top_n > 0 {
        approaches.sort_by(|a, b| {
            a.dist_km
                .partial_cmp(&b.dist_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        approaches.truncate(criteria.top_n);
    }

    FilterOutcome { approaches, skipped }
}
