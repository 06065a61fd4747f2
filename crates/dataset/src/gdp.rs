use chrono::Datelike;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One quarterly GDP observation.
#[derive(Debug, Clone, PartialEq)]
pub struct GdpObservation {
    pub date: NaiveDate,
    pub value: f64,
}

impl GdpObservation {
    /// The fiscal quarter of the observation, derived from the month:
    /// Jan-Mar is Q1, Apr-Jun is Q2, Jul-Sep is Q3 and Oct-Dec is Q4.
    pub fn quarter(&self) -> &'static str {
        match self.date.month0() {
            0..=2 => "Q1",
            3..=5 => "Q2",
            6..=8 => "Q3",
            _ => "Q4",
        }
    }
}

// The wire document carries the observations as `[date, value]` pairs
// under the `data` key, next to metadata keys that are not needed here.
#[derive(Debug, Deserialize)]
struct GdpDocument {
    data: Vec<(String, f64)>,
}

/// Deserializes the GDP document body into observations, preserving the
/// source order of the `data` array.
pub fn parse(body: &str) -> Result<Vec<GdpObservation>> {
    let document: GdpDocument = serde_json::from_str(body)?;

    document
        .data
        .into_iter()
        .map(|(date, value)| {
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)?;
            Ok(GdpObservation { date, value })
        })
        .collect()
}
