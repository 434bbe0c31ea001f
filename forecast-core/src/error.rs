use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to reach Open-Meteo: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Open-Meteo request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected Open-Meteo response: {0}")]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("forecast_days is empty")]
    NoForecastDays,

    #[error("forecast_days must be at most {max}, got {requested}")]
    TooManyForecastDays { requested: u8, max: u8 },

    #[error("latitude must be within -90..=90, got {0}")]
    Latitude(f64),

    #[error("longitude must be within -180..=180, got {0}")]
    Longitude(f64),

    #[error("malformed base url: {0}")]
    BaseUrl(String),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("requested {requested} forecast day(s) but the response has {available}")]
    MissingDays { requested: usize, available: usize },

    #[error("timestamp {0} is out of range")]
    Timestamp(i64),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(DecodeError::Json(err))
    }
}
