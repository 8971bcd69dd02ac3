use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use meteoview_core::{Config, WeatherService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteoview", version, about = "Open-Meteo forecast views")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Coordinate plus optional label, shared by the view subcommands.
#[derive(Debug, Args)]
pub struct Place {
    /// Latitude in decimal degrees, -90 to 90.
    pub latitude: f64,

    /// Longitude in decimal degrees, -180 to 180.
    pub longitude: f64,

    /// Human-readable location name used in the output.
    #[arg(long)]
    pub label: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Current conditions for a coordinate.
    Current(Place),

    /// 7-day forecast for a coordinate.
    Weekly(Place),

    /// Hourly breakdown for today in the location's local time.
    Hourly(Place),

    /// Persist client settings.
    Configure {
        /// Forecast API base URL.
        #[arg(long)]
        base_url: Option<String>,

        /// Request timeout in seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Current(place) => {
                let service = service()?;
                let value = service
                    .current_weather(place.latitude, place.longitude, place.label.as_deref())
                    .await;
                print_value(&value)
            }
            Command::Weekly(place) => {
                let service = service()?;
                let value = service
                    .weekly_forecast(place.latitude, place.longitude, place.label.as_deref())
                    .await;
                print_value(&value)
            }
            Command::Hourly(place) => {
                let service = service()?;
                let value = service
                    .hourly_today(place.latitude, place.longitude, place.label.as_deref())
                    .await;
                print_value(&value)
            }
            Command::Configure { base_url, timeout_secs } => {
                let mut config = Config::load()?;
                if let Some(url) = base_url {
                    config.base_url = url;
                }
                if let Some(secs) = timeout_secs {
                    config.timeout_secs = secs;
                }
                config.save()?;
                println!("Saved configuration to {}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn service() -> Result<WeatherService> {
    let config = Config::load()?;
    Ok(WeatherService::open_meteo(&config)?)
}

fn print_value(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
