//! Core library for the `meteoview` forecast tools.
//!
//! This crate defines:
//! - The Open-Meteo forecast fetcher and its single error channel
//! - Translation of WMO weather codes into descriptions
//! - The three presentation views (current, weekly, hourly-today)
//! - The service boundary returning JSON-serializable mappings
//!
//! It is used by `meteoview-cli`, but can also be reused by other binaries
//! or hosting layers.

pub mod codes;
pub mod config;
pub mod model;
pub mod service;
pub mod source;
pub mod view;

pub use config::Config;
pub use model::ForecastResponse;
pub use service::{DEFAULT_LOCATION_LABEL, WeatherService};
pub use source::{FetchError, ForecastSource, open_meteo::OpenMeteoClient};
pub use view::{CurrentView, HourlyTodayView, ViewError, WeeklyView};
