//! Turns a [`ForecastResponse`] into the text report.
//!
//! The report is Russian-language and line oriented:
//!
//! ```text
//! 15.11.2023
//! Текущая температура: -1.5°C
//! Скорость ветра: 3.2 m/s
//! Погода: 🌥 Пасмурная погода 🌥
//! Максимальная температура: 0.4°C
//! Минимальная температура: -3°C
//! Рассвет: 07:55
//! Закат: 16:17
//! Световой день: 8ч 22мин
//! ```
//!
//! followed, when requested or in the evening, by a blank line and the same
//! daily fields for tomorrow under a `Завтра DD.MM.YYYY ожидается` header.

use std::fmt::Write as _;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, Offset, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::{
    error::{DecodeError, ReportError},
    model::{DailyEntry, ForecastResponse, RequestConfig},
    provider::ForecastSource,
    weather_code,
};

/// Fetches a forecast and renders it.
#[derive(Debug, Clone)]
pub struct ForecastReporter<S> {
    source: S,
}

impl<S: ForecastSource> ForecastReporter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validates `config`, performs one request and renders the report.
    ///
    /// Nothing is fetched when validation fails.
    pub async fn generate_report(&self, config: &RequestConfig) -> Result<String, ReportError> {
        config.validate()?;

        let response = self.source.fetch_forecast(config).await?;
        render_report(&response, config, Utc::now())
    }
}

/// Renders `response` as seen at the instant `now`.
pub fn render_report(
    response: &ForecastResponse,
    config: &RequestConfig,
    now: DateTime<Utc>,
) -> Result<String, ReportError> {
    let requested = usize::from(config.forecast_days);
    let available = response.daily.len();
    if available < requested.max(1) {
        return Err(DecodeError::MissingDays { requested: requested.max(1), available }.into());
    }

    let zone = ReportZone::from_response(response);
    let local_now = zone.localize(now);

    // Bounds were checked above.
    let today = response.daily.day(0).ok_or(DecodeError::MissingDays { requested: 1, available })?;

    let mut out = String::new();
    let _ = writeln!(out, "{}", format_date(local_now.date_naive()));
    let _ = writeln!(out, "Текущая температура: {}°C", response.current_weather.temperature);
    let _ = writeln!(out, "Скорость ветра: {} m/s", response.current_weather.windspeed);
    write_daily(&mut out, &today, &zone)?;

    if config.wants_tomorrow(&local_now) {
        let tomorrow = response
            .daily
            .day(1)
            .ok_or(DecodeError::MissingDays { requested: 2, available })?;
        let date = local_now.date_naive() + Days::new(1);

        debug!(%date, "Appending tomorrow's forecast");

        out.push('\n');
        let _ = writeln!(out, "Завтра {} ожидается", format_date(date));
        write_daily(&mut out, &tomorrow, &zone)?;
    }

    Ok(out.trim_end_matches('\n').to_string())
}

fn write_daily(out: &mut String, day: &DailyEntry, zone: &ReportZone) -> Result<(), DecodeError> {
    let sunrise = unix_to_utc(day.sunrise)?;
    let sunset = unix_to_utc(day.sunset)?;

    let _ = writeln!(out, "Погода: {}", weather_code::describe(day.weathercode));
    let _ = writeln!(out, "Максимальная температура: {}°C", day.temperature_max);
    let _ = writeln!(out, "Минимальная температура: {}°C", day.temperature_min);
    let _ = writeln!(out, "Рассвет: {}", format_time(&zone.localize(sunrise)));
    let _ = writeln!(out, "Закат: {}", format_time(&zone.localize(sunset)));
    let _ = writeln!(out, "Световой день: {}", format_day_length(sunset - sunrise));
    Ok(())
}

/// Zone used for every local date and time in a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl ReportZone {
    /// Prefers the IANA zone name; falls back to the reported UTC offset.
    pub fn from_response(response: &ForecastResponse) -> Self {
        if let Ok(tz) = response.timezone.parse::<Tz>() {
            return Self::Named(tz);
        }

        warn!(
            timezone = %response.timezone,
            offset = response.utc_offset_seconds,
            "Unknown timezone, using fixed UTC offset"
        );
        let offset = FixedOffset::east_opt(response.utc_offset_seconds)
            .unwrap_or_else(|| Utc.fix());
        Self::Fixed(offset)
    }

    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Named(tz) => instant.with_timezone(tz).fixed_offset(),
            Self::Fixed(offset) => instant.with_timezone(offset),
        }
    }
}

pub fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>, DecodeError> {
    DateTime::from_timestamp(ts, 0).ok_or(DecodeError::Timestamp(ts))
}

/// `DD.MM.YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `HH:MM`, 24-hour.
pub fn format_time(time: &DateTime<FixedOffset>) -> String {
    time.format("%H:%M").to_string()
}

/// Hours and zero-padded minutes, e.g. `8ч 05мин`. Negative spans render as zero.
pub fn format_day_length(length: chrono::Duration) -> String {
    let minutes = length.num_minutes().max(0);
    format!("{}ч {:02}мин", minutes / 60, minutes % 60)
}
