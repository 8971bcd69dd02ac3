//! Raw Open-Meteo response types.
//!
//! Every group and every series field is optional or defaults to empty:
//! a value array shorter than its `time` array is valid data (missing
//! entries, not an error), so nothing here can fail decoding on absence.
//! The view builders do all index access through bounds-checked `get`.

use serde::Deserialize;

/// Decoded `/forecast` payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    /// IANA zone identifier reported by the upstream for the location.
    pub timezone: Option<String>,
    pub current: Option<CurrentSnapshot>,
    pub daily: Option<DailySeries>,
    pub hourly: Option<HourlySeries>,
}

/// Single-point current conditions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentSnapshot {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub weather_code: Option<i64>,
    pub windspeed_10m: Option<f64>,
}

/// Per-day parallel arrays, aligned by index to `time`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub weather_code: Vec<i64>,
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub precipitation_sum: Vec<f64>,
}

/// Per-hour parallel arrays, aligned by index to `time`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub weather_code: Vec<i64>,
    #[serde(default)]
    pub precipitation: Vec<f64>,
}
