//! Defines the closed set of gridpoint forecast granularities and the endpoint
//! each one is served from.

use std::fmt;

/// The granularity of a gridpoint forecast.
///
/// Selects both the endpoint suffix of the request and the period shape of
/// the response (see [`crate::AnyForecast`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastKind {
    /// Twelve-hour day and night periods, roughly a week ahead.
    Daily,
    /// One-hour periods, including dewpoint and relative humidity.
    Hourly,
}

impl ForecastKind {
    /// The path segment appended after `/gridpoints/{gridId}/{gridX},{gridY}/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ForecastKind::Daily => "forecast",
            ForecastKind::Hourly => "forecast/hourly",
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            ForecastKind::Daily => "daily",
            ForecastKind::Hourly => "hourly",
        }
    }
}

/// Formats a `ForecastKind` by its lowercase name.
///
/// # Examples
///
/// ```
/// use nws_forecast::ForecastKind;
///
/// assert_eq!(ForecastKind::Hourly.to_string(), "hourly");
/// assert_eq!(format!("{}", ForecastKind::Daily), "daily");
/// ```
impl fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
