//! Current-conditions view.

use serde::Serialize;

use crate::codes;
use crate::model::ForecastResponse;

use super::fmt_value;

/// Flat mapping of current conditions at a coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentView {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub weather: String,
    /// Raw WMO code for programmatic consumers; null when absent upstream.
    pub weather_code: Option<i64>,
    pub temperature: String,
    pub humidity: String,
    pub windspeed: String,
}

/// Build the current-conditions view.
///
/// Absent numeric fields become `"N/A"`; an absent weather code is
/// described as code 0 while the raw `weather_code` field stays null.
pub fn build(raw: &ForecastResponse, latitude: f64, longitude: f64, label: &str) -> CurrentView {
    let snapshot = raw.current.clone().unwrap_or_default();

    CurrentView {
        location: label.to_string(),
        latitude,
        longitude,
        weather: codes::describe(snapshot.weather_code.unwrap_or(0)),
        weather_code: snapshot.weather_code,
        temperature: fmt_value(snapshot.temperature_2m, "°C"),
        humidity: fmt_value(snapshot.relative_humidity_2m, "%"),
        windspeed: fmt_value(snapshot.windspeed_10m, " km/h"),
    }
}
