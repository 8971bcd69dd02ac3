//! Hourly breakdown for "today" in the location's local time.
//!
//! "Today" is resolved from the upstream-reported IANA zone, not the
//! caller's clock. When the resolved date matches nothing in the series,
//! one fallback pass reuses the date prefix of the current snapshot's own
//! timestamp. An empty result after both passes is valid data.

use chrono::{Local, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::model::{ForecastResponse, HourlySeries};

use super::{ViewError, describe_at, fmt_at};

/// Zone assumed when the upstream omits its `timezone` field.
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// One hour of the breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct HourForecast {
    pub time: String,
    pub temperature: String,
    pub weather: String,
    pub weather_code: Option<i64>,
    pub precipitation: String,
}

/// Today's hours for a coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyTodayView {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// The date token actually used to bucket the hours.
    pub date: String,
    pub hours: Vec<HourForecast>,
}

/// Build the hourly-today view.
///
/// # Errors
///
/// Returns [`ViewError::HourlyUnavailable`] when the hourly time series is
/// empty — the fetch succeeded but promised no hours at all.
pub fn build(
    raw: &ForecastResponse,
    latitude: f64,
    longitude: f64,
    label: &str,
) -> Result<HourlyTodayView, ViewError> {
    let hourly = raw.hourly.clone().unwrap_or_default();
    if hourly.time.is_empty() {
        return Err(ViewError::HourlyUnavailable);
    }

    let mut date = local_date_token(raw.timezone.as_deref());
    let mut hours = collect_hours(&hourly, &date);

    // Fallback only on zero matches: re-derive the date from the current
    // snapshot's own timestamp, even if that picks a different day.
    if hours.is_empty() {
        let snapshot_date = raw
            .current
            .as_ref()
            .and_then(|c| c.time.as_deref())
            .and_then(|t| t.get(..10))
            .map(str::to_string);

        if let Some(snapshot_date) = snapshot_date {
            hours = collect_hours(&hourly, &snapshot_date);
            date = snapshot_date;
        }
    }

    Ok(HourlyTodayView { location: label.to_string(), latitude, longitude, date, hours })
}

/// Today's "YYYY-MM-DD" in the given zone; falls back to the process-local
/// date when the zone identifier does not resolve.
fn local_date_token(timezone: Option<&str>) -> String {
    let name = timezone.unwrap_or(DEFAULT_TIMEZONE);
    match name.parse::<Tz>() {
        Ok(tz) => Utc::now().with_timezone(&tz).format("%Y-%m-%d").to_string(),
        Err(_) => Local::now().format("%Y-%m-%d").to_string(),
    }
}

fn collect_hours(hourly: &HourlySeries, date: &str) -> Vec<HourForecast> {
    hourly
        .time
        .iter()
        .enumerate()
        .filter(|(_, time)| time.starts_with(date))
        .map(|(i, time)| HourForecast {
            time: time.clone(),
            temperature: fmt_at(&hourly.temperature_2m, i, "°C"),
            weather: describe_at(&hourly.weather_code, i),
            weather_code: hourly.weather_code.get(i).copied(),
            precipitation: fmt_at(&hourly.precipitation, i, " mm"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CurrentSnapshot;

    fn utc_today() -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }

    fn raw_with(hourly: HourlySeries) -> ForecastResponse {
        ForecastResponse {
            timezone: Some("UTC".to_string()),
            hourly: Some(hourly),
            ..Default::default()
        }
    }

    #[test]
    fn empty_series_is_a_distinct_error() {
        let raw = raw_with(HourlySeries::default());
        let err = build(&raw, 0.0, 0.0, "spot").unwrap_err();
        assert!(matches!(err, ViewError::HourlyUnavailable));
    }

    #[test]
    fn selects_only_hours_matching_todays_prefix() {
        let today = utc_today();
        let raw = raw_with(HourlySeries {
            time: vec![
                "1999-12-31T23:00".to_string(),
                format!("{today}T00:00"),
                format!("{today}T01:00"),
                "2199-01-01T00:00".to_string(),
            ],
            temperature_2m: vec![3.0, 4.5, 5.0, 9.0],
            weather_code: vec![0, 1, 61, 0],
            precipitation: vec![0.0, 0.0, 2.5, 0.0],
        });

        let view = build(&raw, 51.5, -0.1, "London").unwrap();
        assert_eq!(view.date, today);
        assert_eq!(view.hours.len(), 2);
        assert_eq!(view.hours[0].time, format!("{today}T00:00"));
        assert_eq!(view.hours[0].temperature, "4.5°C");
        assert_eq!(view.hours[0].weather, "Mainly clear");
        assert_eq!(view.hours[1].weather_code, Some(61));
        assert_eq!(view.hours[1].precipitation, "2.5 mm");
    }

    #[test]
    fn ragged_hourly_arrays_degrade_per_index() {
        let today = utc_today();
        let raw = raw_with(HourlySeries {
            time: vec![format!("{today}T00:00"), format!("{today}T01:00")],
            temperature_2m: vec![4.5],
            weather_code: vec![],
            precipitation: vec![0.0],
        });

        let view = build(&raw, 0.0, 0.0, "spot").unwrap();
        assert_eq!(view.hours.len(), 2);
        assert_eq!(view.hours[1].temperature, "N/A");
        assert_eq!(view.hours[1].weather, "unknown");
        assert_eq!(view.hours[1].weather_code, None);
        assert_eq!(view.hours[1].precipitation, "N/A");
    }

    #[test]
    fn falls_back_to_snapshot_date_when_today_matches_nothing() {
        let mut raw = raw_with(HourlySeries {
            time: vec![
                "2024-01-01T09:00".to_string(),
                "2024-01-01T10:00".to_string(),
                "2024-01-02T09:00".to_string(),
            ],
            temperature_2m: vec![5.0, 6.0, 7.0],
            weather_code: vec![0, 0, 0],
            precipitation: vec![0.0, 0.0, 0.0],
        });
        raw.current = Some(CurrentSnapshot {
            time: Some("2024-01-01T09:30".to_string()),
            ..Default::default()
        });

        let view = build(&raw, 0.0, 0.0, "spot").unwrap();
        assert_eq!(view.date, "2024-01-01");
        assert_eq!(view.hours.len(), 2);
    }

    #[test]
    fn empty_after_both_passes_is_still_ok() {
        let mut raw = raw_with(HourlySeries {
            time: vec!["2000-06-01T00:00".to_string()],
            ..Default::default()
        });
        raw.current = Some(CurrentSnapshot {
            time: Some("1999-12-31T23:00".to_string()),
            ..Default::default()
        });

        let view = build(&raw, 0.0, 0.0, "spot").unwrap();
        assert_eq!(view.date, "1999-12-31");
        assert!(view.hours.is_empty());
    }

    #[test]
    fn short_snapshot_timestamp_skips_the_fallback() {
        let mut raw = raw_with(HourlySeries {
            time: vec!["2000-06-01T00:00".to_string()],
            ..Default::default()
        });
        raw.current = Some(CurrentSnapshot {
            time: Some("short".to_string()),
            ..Default::default()
        });

        let view = build(&raw, 0.0, 0.0, "spot").unwrap();
        assert_eq!(view.date, utc_today());
        assert!(view.hours.is_empty());
    }

    #[test]
    fn unresolvable_zone_falls_back_to_process_local_date() {
        let local_today = Local::now().format("%Y-%m-%d").to_string();
        let raw = ForecastResponse {
            timezone: Some("Not/AZone".to_string()),
            hourly: Some(HourlySeries {
                time: vec![format!("{local_today}T12:00")],
                temperature_2m: vec![20.0],
                weather_code: vec![2],
                precipitation: vec![0.0],
            }),
            ..Default::default()
        };

        let view = build(&raw, 0.0, 0.0, "spot").unwrap();
        assert_eq!(view.date, local_today);
        assert_eq!(view.hours.len(), 1);
        assert_eq!(view.hours[0].weather, "Partly cloudy");
    }

    #[test]
    fn default_timezone_applies_when_upstream_omits_it() {
        let tokyo_today = Utc::now()
            .with_timezone(&chrono_tz::Asia::Tokyo)
            .format("%Y-%m-%d")
            .to_string();
        let raw = ForecastResponse {
            hourly: Some(HourlySeries {
                time: vec![format!("{tokyo_today}T09:00")],
                temperature_2m: vec![18.5],
                weather_code: vec![1],
                precipitation: vec![0.0],
            }),
            ..Default::default()
        };

        let view = build(&raw, 35.6762, 139.6503, "Tokyo").unwrap();
        assert_eq!(view.date, tokyo_today);
        assert_eq!(view.hours.len(), 1);
    }
}
