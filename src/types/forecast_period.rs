//! Defines the forecast period shapes returned by the gridpoint forecast
//! endpoints: the shared [`ForecastPeriod`] and its daily and hourly variants.

use crate::types::forecast_kind::ForecastKind;
use crate::types::quantitative_value::QuantitativeValue;
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One time-bounded forecast interval.
///
/// The interval covers `start_time` (inclusive) up to `end_time` (exclusive).
/// Temperature and wind speed are quantitative values because every request
/// opts into the `forecast_temperature_qv` and `forecast_wind_speed_qv`
/// feature flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// 1-based ordinal of this period within the forecast.
    pub number: u32,
    /// Human-readable name such as `"Tonight"` or `"Wednesday Night"`. Empty for hourly periods.
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub is_daytime: bool,
    pub temperature: QuantitativeValue,
    /// `"rising"` or `"falling"` when the temperature moves against the diurnal trend.
    #[serde(default)]
    pub temperature_trend: Option<String>,
    pub wind_speed: QuantitativeValue,
    /// `None` when no gust is forecast.
    #[serde(default)]
    pub wind_gust: Option<QuantitativeValue>,
    /// Compass direction such as `"NW"` or `"SSE"`.
    pub wind_direction: String,
    /// URL of the icon representing the forecast conditions.
    pub icon: String,
    pub short_forecast: String,
    pub detailed_forecast: String,
    pub probability_of_precipitation: QuantitativeValue,
}

/// Binds a period shape to the forecast endpoint that produces it.
///
/// Implemented by [`GridpointDailyForecastPeriod`] and
/// [`GridpointHourlyForecastPeriod`]; the request types in this crate are
/// generic over it.
pub trait PeriodVariant: DeserializeOwned {
    /// The forecast granularity whose endpoint returns periods of this shape.
    const KIND: ForecastKind;

    /// The fields shared by every period variant.
    fn period(&self) -> &ForecastPeriod;
}

/// A period of the daily (12-hour) forecast. Carries exactly the shared fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridpointDailyForecastPeriod {
    #[serde(flatten)]
    pub period: ForecastPeriod,
}

/// A period of the hourly forecast, adding dewpoint and relative humidity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridpointHourlyForecastPeriod {
    #[serde(flatten)]
    pub period: ForecastPeriod,
    pub dewpoint: QuantitativeValue,
    pub relative_humidity: QuantitativeValue,
}

impl PeriodVariant for GridpointDailyForecastPeriod {
    const KIND: ForecastKind = ForecastKind::Daily;

    fn period(&self) -> &ForecastPeriod {
        &self.period
    }
}

impl PeriodVariant for GridpointHourlyForecastPeriod {
    const KIND: ForecastKind = ForecastKind::Hourly;

    fn period(&self) -> &ForecastPeriod {
        &self.period
    }
}
