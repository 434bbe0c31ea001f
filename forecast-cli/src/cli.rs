use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use forecast_core::{ForecastReporter, OpenMeteoClient, model::MAX_FORECAST_DAYS};
use inquire::{Confirm, CustomType};
use tracing::{debug, info};

use crate::config::{Config, Overrides};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Open-Meteo forecast report")]
pub struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the default location and report options.
    Configure,

    /// Print the forecast report.
    Show(ShowArgs),

    /// Print where the configuration file lives.
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Latitude in degrees; defaults to the configured one.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees; defaults to the configured one.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Number of forecast days to request.
    #[arg(long)]
    pub days: Option<u8>,

    /// Append tomorrow's forecast even before 18:00.
    #[arg(long)]
    pub tomorrow: bool,
}

impl From<ShowArgs> for Overrides {
    fn from(args: ShowArgs) -> Self {
        Self {
            latitude: args.lat,
            longitude: args.lon,
            forecast_days: args.days,
            tomorrow: args.tomorrow,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show(args) => show(args.into()).await,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

async fn show(overrides: Overrides) -> anyhow::Result<()> {
    let config = Config::load()?;
    let request = config.request_config(&overrides);
    debug!(?request, "Resolved request");

    let mut client = OpenMeteoClient::new();
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url);
    }

    let report = ForecastReporter::new(client)
        .generate_report(&request)
        .await
        .context("Failed to build forecast report")?;

    println!("{report}");
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let current = Config::load()?;

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(current.latitude)
        .with_validator(|v: &f64| {
            Ok(if (-90.0..=90.0).contains(v) {
                inquire::validator::Validation::Valid
            } else {
                inquire::validator::Validation::Invalid("must be within -90..=90".into())
            })
        })
        .prompt()?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(current.longitude)
        .with_validator(|v: &f64| {
            Ok(if (-180.0..=180.0).contains(v) {
                inquire::validator::Validation::Valid
            } else {
                inquire::validator::Validation::Invalid("must be within -180..=180".into())
            })
        })
        .prompt()?;

    let forecast_days = CustomType::<u8>::new("Forecast days:")
        .with_default(current.forecast_days)
        .with_help_message("2 or more to be able to show tomorrow")
        .with_validator(|v: &u8| {
            Ok(if (1..=MAX_FORECAST_DAYS).contains(v) {
                inquire::validator::Validation::Valid
            } else {
                inquire::validator::Validation::Invalid(
                    format!("must be within 1..={MAX_FORECAST_DAYS}").into(),
                )
            })
        })
        .prompt()?;

    let tomorrow = Confirm::new("Always include tomorrow?")
        .with_default(current.tomorrow)
        .prompt()?;

    let config = Config { latitude, longitude, forecast_days, tomorrow, ..current };
    let path = config.save()?;

    info!(path = %path.display(), "Configuration saved");
    println!("Saved configuration to {}", path.display());
    Ok(())
}
