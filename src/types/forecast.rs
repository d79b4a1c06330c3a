//! Defines the forecast response envelope: the GeoJSON feature [`Forecast`],
//! its [`GridpointForecast`] properties, and [`AnyForecast`] for callers that
//! choose the granularity at runtime.

use crate::error::ForecastValidationError;
use crate::types::forecast_kind::ForecastKind;
use crate::types::forecast_period::{
    ForecastPeriod, GridpointDailyForecastPeriod, GridpointHourlyForecastPeriod, PeriodVariant,
};
use crate::types::quantitative_value::QuantitativeValue;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Forecast returned by `/gridpoints/{gridId}/{gridX},{gridY}/forecast`.
pub type GridpointDailyForecast = Forecast<GridpointDailyForecastPeriod>;
/// Forecast returned by `/gridpoints/{gridId}/{gridX},{gridY}/forecast/hourly`.
pub type GridpointHourlyForecast = Forecast<GridpointHourlyForecastPeriod>;

/// Top-level forecast response, a GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast<P> {
    /// GeoJSON type discriminant, `"Feature"` in practice.
    #[serde(rename = "type")]
    pub feature_type: String,
    /// The polygon of the grid cell. Kept as raw GeoJSON.
    pub geometry: serde_json::Value,
    pub properties: GridpointForecast<P>,
}

/// Forecast metadata together with the ordered sequence of periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridpointForecast<P> {
    /// Unit system label, `"us"` or `"si"`.
    pub units: String,
    pub forecast_generator: String,
    pub generated_at: DateTime<FixedOffset>,
    pub update_time: DateTime<FixedOffset>,
    /// ISO-8601 interval expression, e.g. `"2025-03-04T17:00:00+00:00/P7DT20H"`.
    pub valid_times: String,
    pub elevation: QuantitativeValue,
    /// Periods in chronological order.
    pub periods: Vec<P>,
}

impl<P: PeriodVariant> Forecast<P> {
    pub fn kind(&self) -> ForecastKind {
        P::KIND
    }

    pub fn periods(&self) -> &[P] {
        &self.properties.periods
    }

    /// Checks that the periods are non-empty, numbered `1..=n` in order, and
    /// that each period starts exactly where the previous one ends.
    pub fn validate(&self) -> Result<(), ForecastValidationError> {
        let periods = self.periods();
        if periods.is_empty() {
            return Err(ForecastValidationError::NoPeriods);
        }

        for (index, variant) in periods.iter().enumerate() {
            let expected = index as u32 + 1;
            let found = variant.period().number;
            if found != expected {
                return Err(ForecastValidationError::OutOfOrder {
                    index,
                    expected,
                    found,
                });
            }
        }

        for pair in periods.windows(2) {
            let (previous, current) = (pair[0].period(), pair[1].period());
            if current.start_time != previous.end_time {
                return Err(ForecastValidationError::Discontiguous {
                    number: current.number,
                    previous_end: previous.end_time,
                    start: current.start_time,
                });
            }
        }

        Ok(())
    }
}

/// A daily or hourly forecast, tagged by the granularity it was requested with.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyForecast {
    Daily(GridpointDailyForecast),
    Hourly(GridpointHourlyForecast),
}

impl AnyForecast {
    pub fn kind(&self) -> ForecastKind {
        match self {
            AnyForecast::Daily(_) => ForecastKind::Daily,
            AnyForecast::Hourly(_) => ForecastKind::Hourly,
        }
    }

    /// The shared fields of every period, in order.
    pub fn periods(&self) -> Vec<&ForecastPeriod> {
        match self {
            AnyForecast::Daily(forecast) => {
                forecast.periods().iter().map(|p| p.period()).collect()
            }
            AnyForecast::Hourly(forecast) => {
                forecast.periods().iter().map(|p| p.period()).collect()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ForecastValidationError> {
        match self {
            AnyForecast::Daily(forecast) => forecast.validate(),
            AnyForecast::Hourly(forecast) => forecast.validate(),
        }
    }
}

impl From<GridpointDailyForecast> for AnyForecast {
    fn from(forecast: GridpointDailyForecast) -> Self {
        AnyForecast::Daily(forecast)
    }
}

impl From<GridpointHourlyForecast> for AnyForecast {
    fn from(forecast: GridpointHourlyForecast) -> Self {
        AnyForecast::Hourly(forecast)
    }
}
