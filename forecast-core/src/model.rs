use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound Open-Meteo accepts for `forecast_days`.
pub const MAX_FORECAST_DAYS: u8 = 16;

/// Parameters of a single report request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub forecast_days: u8,
    /// Render tomorrow's block regardless of the local hour.
    pub include_tomorrow: bool,
}

impl RequestConfig {
    pub fn new(latitude: f64, longitude: f64, forecast_days: u8, include_tomorrow: bool) -> Self {
        Self { latitude, longitude, forecast_days, include_tomorrow }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.forecast_days == 0 {
            return Err(ValidationError::NoForecastDays);
        }
        if self.forecast_days > MAX_FORECAST_DAYS {
            return Err(ValidationError::TooManyForecastDays {
                requested: self.forecast_days,
                max: MAX_FORECAST_DAYS,
            });
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::Latitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::Longitude(self.longitude));
        }
        Ok(())
    }

    /// Whether tomorrow's block belongs in a report produced at `local_now`.
    ///
    /// In the evening (18:00 and later) tomorrow is shown automatically; at
    /// any hour it is shown when asked for. Either way the response must
    /// cover at least two days.
    pub fn wants_tomorrow<T: Timelike>(&self, local_now: &T) -> bool {
        (local_now.hour() >= 18 || self.include_tomorrow) && self.forecast_days >= 2
    }
}

/// Body of `GET /v1/forecast`, limited to the fields this crate asks for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub generationtime_ms: f64,
    pub utc_offset_seconds: i32,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub elevation: f64,
    pub current_weather: CurrentWeather,
    pub daily_units: DailyUnits,
    pub daily: DailySeries,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
    pub is_day: u8,
    pub time: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyUnits {
    pub time: String,
    pub weathercode: String,
    pub temperature_2m_max: String,
    pub temperature_2m_min: String,
    pub sunrise: String,
    pub sunset: String,
}

/// Parallel per-day sequences; index 0 is today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySeries {
    pub time: Vec<i64>,
    pub weathercode: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub sunrise: Vec<i64>,
    pub sunset: Vec<i64>,
}

/// One row across the daily sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEntry {
    pub time: i64,
    pub weathercode: i32,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub sunrise: i64,
    pub sunset: i64,
}

impl DailySeries {
    /// Number of complete days, i.e. the length of the shortest sequence.
    pub fn len(&self) -> usize {
        [
            self.time.len(),
            self.weathercode.len(),
            self.temperature_2m_max.len(),
            self.temperature_2m_min.len(),
            self.sunrise.len(),
            self.sunset.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn day(&self, index: usize) -> Option<DailyEntry> {
        Some(DailyEntry {
            time: *self.time.get(index)?,
            weathercode: *self.weathercode.get(index)?,
            temperature_max: *self.temperature_2m_max.get(index)?,
            temperature_min: *self.temperature_2m_min.get(index)?,
            sunrise: *self.sunrise.get(index)?,
            sunset: *self.sunset.get(index)?,
        })
    }
}
