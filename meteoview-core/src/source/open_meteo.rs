//! HTTP client for the Open-Meteo forecast API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::model::ForecastResponse;

use super::{FetchError, ForecastSource};

/// Fixed forecast horizon requested upstream.
pub const FORECAST_DAYS: u8 = 7;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,windspeed_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,precipitation";

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Build a client from the given settings.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { http, base_url: config.base_url.clone() })
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), FetchError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(FetchError::InvalidCoordinates);
        }
        Ok(())
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, FetchError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.base_url);
        debug!(url = %url, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
