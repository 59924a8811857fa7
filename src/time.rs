//! Close-approach timestamp parsing.
//!
//! The cad.api emits `cd` values at inconsistent granularity: most rows
//! carry seconds, older ones only hours and minutes, a few only the date.
//! Formats are tried in that order and the first match wins.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::CadError;

const APPROACH_TIME_FORMATS: [&str; 2] = ["%Y-%b-%d %H:%M:%S", "%Y-%b-%d %H:%M"];
const APPROACH_DATE_FORMAT: &str = "%Y-%b-%d";
const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_approach_time(s: &str) -> Result<NaiveDateTime, CadError> {
    for fmt in APPROACH_TIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(t);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, APPROACH_DATE_FORMAT) {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    Err(CadError::UnparseableDate(s.to_string()))
}

/// Strict `YYYY-MM-DD` parsing for the form fields; the resulting bound
/// sits at midnight, so an end date includes approaches up to 00:00:00
/// of that day.
pub fn parse_form_date(s: &str) -> Result<NaiveDateTime, CadError> {
    NaiveDate::parse_from_str(s.trim(), FORM_DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| CadError::BadInput(format!("'{s}' is not a YYYY-MM-DD date")))
}
