//! Weekly-forecast view.

use serde::Serialize;

use crate::model::ForecastResponse;

use super::{describe_at, fmt_at};

/// Descriptive label for the requested horizon.
const PERIOD: &str = "7-day";

/// One day of the forecast.
#[derive(Debug, Clone, Serialize)]
pub struct DayForecast {
    pub date: String,
    pub weather: String,
    pub temperature_max: String,
    pub temperature_min: String,
    pub precipitation: String,
}

/// Multi-day forecast for a coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyView {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub period: String,
    pub days: Vec<DayForecast>,
}

/// Build the weekly view.
///
/// `daily.time` is the authoritative index range: its length defines how
/// many day records appear, in original order. Value arrays shorter than
/// `time` degrade to `"N/A"` / `"unknown"` at the missing indices.
pub fn build(raw: &ForecastResponse, latitude: f64, longitude: f64, label: &str) -> WeeklyView {
    let daily = raw.daily.clone().unwrap_or_default();

    let days = daily
        .time
        .iter()
        .enumerate()
        .map(|(i, date)| DayForecast {
            date: date.clone(),
            weather: describe_at(&daily.weather_code, i),
            temperature_max: fmt_at(&daily.temperature_2m_max, i, "°C"),
            temperature_min: fmt_at(&daily.temperature_2m_min, i, "°C"),
            precipitation: fmt_at(&daily.precipitation_sum, i, " mm"),
        })
        .collect();

    WeeklyView {
        location: label.to_string(),
        latitude,
        longitude,
        period: PERIOD.to_string(),
        days,
    }
}
