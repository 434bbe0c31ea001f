use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use crate::{
    error::{ReportError, ValidationError},
    model::{ForecastResponse, RequestConfig},
};

use super::ForecastSource;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min,sunrise,sunset";
const TIMEZONE: &str = "Europe/Moscow";

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    base_url: String,
    http: Client,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Points the client at another Open-Meteo compatible host, e.g. a mirror.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the HTTP client, e.g. to configure a timeout.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn forecast_url(&self, config: &RequestConfig) -> Result<Url, ValidationError> {
        let endpoint = format!("{}/forecast", self.base_url.trim_end_matches('/'));

        Url::parse_with_params(
            &endpoint,
            &[
                ("latitude", config.latitude.to_string()),
                ("longitude", config.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("current_weather", "true".to_string()),
                ("windspeed_unit", "ms".to_string()),
                ("timeformat", "unixtime".to_string()),
                ("timezone", TIMEZONE.to_string()),
                ("forecast_days", config.forecast_days.to_string()),
            ],
        )
        .map_err(|e| ValidationError::BaseUrl(format!("{endpoint}: {e}")))
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %config.latitude, lon = %config.longitude, days = config.forecast_days))]
    async fn fetch_forecast(&self, config: &RequestConfig) -> Result<ForecastResponse, ReportError> {
        let url = self.forecast_url(config)?;
        debug!(url = %url, "Fetching forecast");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "Forecast response received");

        if !status.is_success() {
            return Err(ReportError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
