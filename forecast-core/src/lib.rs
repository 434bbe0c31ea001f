//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The request model and the Open-Meteo response shape
//! - A client for the Open-Meteo forecast endpoint
//! - Rendering of the Russian-language text report
//!
//! It is used by `forecast-cli`, but can also be embedded in a chat bot.
//!
//! ```no_run
//! use forecast_core::{ForecastReporter, OpenMeteoClient, RequestConfig};
//!
//! # async fn run() -> Result<(), forecast_core::ReportError> {
//! let reporter = ForecastReporter::new(OpenMeteoClient::new());
//! let text = reporter
//!     .generate_report(&RequestConfig::new(55.6302, 37.6045, 2, true))
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod provider;
pub mod report;
pub mod weather_code;

pub use error::{DecodeError, ReportError, ValidationError};
pub use model::{ForecastResponse, RequestConfig};
pub use provider::{ForecastSource, OpenMeteoClient};
pub use report::{ForecastReporter, render_report};
