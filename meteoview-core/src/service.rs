//! Collaborator boundary: the three operations exposed to hosting layers.
//!
//! Each operation takes a coordinate plus an optional location label and
//! returns a JSON-serializable mapping. Errors never escape as panics or
//! raised values: any failure surfaces as `{"error": <message>}`, and the
//! presence of an `error` key is the sole failure signal for callers.

use serde::Serialize;
use serde_json::{Value, json};

use crate::config::Config;
use crate::source::{FetchError, ForecastSource, open_meteo::OpenMeteoClient};
use crate::view;

/// Label used when the caller does not name the location.
pub const DEFAULT_LOCATION_LABEL: &str = "specified location";

/// Stateless facade over a forecast source.
#[derive(Debug)]
pub struct WeatherService {
    source: Box<dyn ForecastSource>,
}

impl WeatherService {
    pub fn new(source: Box<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// Service backed by the real Open-Meteo client.
    pub fn open_meteo(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(Box::new(OpenMeteoClient::new(config)?)))
    }

    /// Current conditions at a coordinate.
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
        label: Option<&str>,
    ) -> Value {
        let label = label.unwrap_or(DEFAULT_LOCATION_LABEL);
        match self.source.fetch(latitude, longitude).await {
            Ok(raw) => to_mapping(&view::current::build(&raw, latitude, longitude, label)),
            Err(err) => error_value(&err),
        }
    }

    /// 7-day forecast at a coordinate.
    pub async fn weekly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        label: Option<&str>,
    ) -> Value {
        let label = label.unwrap_or(DEFAULT_LOCATION_LABEL);
        match self.source.fetch(latitude, longitude).await {
            Ok(raw) => to_mapping(&view::weekly::build(&raw, latitude, longitude, label)),
            Err(err) => error_value(&err),
        }
    }

    /// Hourly breakdown for today in the location's local time.
    pub async fn hourly_today(
        &self,
        latitude: f64,
        longitude: f64,
        label: Option<&str>,
    ) -> Value {
        let label = label.unwrap_or(DEFAULT_LOCATION_LABEL);
        match self.source.fetch(latitude, longitude).await {
            Ok(raw) => match view::hourly::build(&raw, latitude, longitude, label) {
                Ok(built) => to_mapping(&built),
                Err(err) => error_value(&err),
            },
            Err(err) => error_value(&err),
        }
    }
}

fn to_mapping<T: Serialize>(built: &T) -> Value {
    serde_json::to_value(built)
        .unwrap_or_else(|err| error_value(&format!("failed to serialize view: {err}")))
}

fn error_value(err: &dyn std::fmt::Display) -> Value {
    json!({ "error": err.to_string() })
}
