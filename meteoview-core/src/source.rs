//! Abstraction over the upstream forecast source.
//!
//! `ForecastSource` is the seam between the view pipeline and the network:
//! the real implementation lives in [`open_meteo`], and tests substitute
//! canned sources. All transport, HTTP and decode failures are normalized
//! into [`FetchError`], the single error channel of the pipeline.

use crate::model::ForecastResponse;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod open_meteo;

/// Errors produced while fetching a forecast.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid coordinates: latitude must be within -90..=90, longitude within -180..=180")]
    InvalidCoordinates,

    /// Transport-level failure (connect, timeout, body read).
    #[error("forecast request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-success status.
    #[error("forecast request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Upstream answered 2xx but the body was not a decodable payload.
    #[error("failed to decode forecast response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// Fetch the raw forecast for a coordinate.
    ///
    /// One round trip, no retry, no caching.
    async fn fetch(&self, latitude: f64, longitude: f64)
    -> Result<ForecastResponse, FetchError>;
}
