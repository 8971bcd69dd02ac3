//! Presentation views built from a raw forecast response.
//!
//! Three sibling builders, each consuming the decoded payload and
//! producing one serializable shape: [`current`] for the snapshot,
//! [`weekly`] for the daily series, [`hourly`] for today's hours in the
//! location's local time. Missing data always degrades to a sentinel
//! (`"N/A"`, `"unknown"`, null) instead of failing the whole view.

use thiserror::Error;

pub mod current;
pub mod hourly;
pub mod weekly;

pub use current::CurrentView;
pub use hourly::{HourForecast, HourlyTodayView};
pub use weekly::{DayForecast, WeeklyView};

/// Sentinel for a numeric field absent from the upstream response.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel description when the weather-code array is too short.
pub const UNKNOWN_WEATHER: &str = "unknown";

/// View-local errors. These are distinct from [`crate::FetchError`]: the
/// fetch succeeded, but the payload cannot support this particular view.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("hourly data is unavailable for this location")]
    HourlyUnavailable,
}

/// Format an optional value with a unit suffix, degrading to `"N/A"`.
fn fmt_value(value: Option<f64>, suffix: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v}{suffix}"))
}

/// Bounds-checked formatting of the i-th entry of a parallel array.
fn fmt_at(values: &[f64], index: usize, suffix: &str) -> String {
    fmt_value(values.get(index).copied(), suffix)
}

/// Bounds-checked description of the i-th weather code, `"unknown"` when
/// the array is too short.
fn describe_at(codes: &[i64], index: usize) -> String {
    codes
        .get(index)
        .map_or_else(|| UNKNOWN_WEATHER.to_string(), |code| crate::codes::describe(*code))
}
