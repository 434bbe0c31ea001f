use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::ReportError, model::{ForecastResponse, RequestConfig}};

pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;

/// Anything that can answer a forecast request with an Open-Meteo shaped body.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch_forecast(&self, config: &RequestConfig) -> Result<ForecastResponse, ReportError>;
}
