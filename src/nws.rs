//! This module provides the main entry point for requesting gridpoint forecasts
//! from the National Weather Service API (<https://api.weather.gov>).
//! A [`NationalWeatherService`] client owns the HTTP connection pool and the
//! client-wide settings; forecasts are fetched for an already resolved
//! [`Gridpoint`].

use crate::clients::daily_client::DailyForecast;
use crate::clients::hourly_client::HourlyForecast;
use crate::error::NwsError;
use crate::transport::fetcher::JsonFetcher;
use crate::types::forecast::{AnyForecast, GridpointDailyForecast, GridpointHourlyForecast};
use crate::types::forecast_kind::ForecastKind;
use crate::types::gridpoint::Gridpoint;
use bon::bon;
use std::time::Duration;

/// Base URL of the public weather API.
pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The client for fetching daily and hourly gridpoint forecasts.
///
/// Create an instance with [`NationalWeatherService::new()`] for the public API
/// with default settings, or with [`NationalWeatherService::with_options()`] to
/// set the base URL, user agent, timeout, or period validation.
///
/// Each fetch performs exactly one HTTP request. Nothing is retried or cached.
///
/// # Examples
///
/// ```no_run
/// # use nws_forecast::{Gridpoint, NationalWeatherService, NwsError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), NwsError> {
/// let client = NationalWeatherService::new()?;
/// let forecast = client.fetch_daily(&Gridpoint::new("TOP", 31, 80)).await?;
/// println!("{} periods", forecast.periods().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NationalWeatherService {
    fetcher: JsonFetcher,
    validate_periods: bool,
}

#[bon]
impl NationalWeatherService {
    /// Creates a client for the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`NwsError::ClientBuild`] if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, NwsError> {
        Self::with_options().call()
    }

    /// Creates a client with custom settings.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.base_url(impl Into<String>)`: Optional. API root to send requests to. Defaults to [`DEFAULT_BASE_URL`].
    /// * `.user_agent(impl Into<String>)`: Optional. The API asks clients to identify themselves, ideally with contact details. Defaults to `nws-forecast/<version>`.
    /// * `.timeout(Duration)`: Optional. Per-request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    /// * `.validate_periods(bool)`: Optional. When `true`, every decoded forecast is checked with
    ///   [`crate::Forecast::validate`] and a violation is returned as [`NwsError::InvalidForecast`].
    ///   Defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`NwsError::ClientBuild`] if the HTTP client cannot be initialized,
    /// for example when the user agent is not a valid header value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nws_forecast::{NationalWeatherService, NwsError};
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), NwsError> {
    /// let client = NationalWeatherService::with_options()
    ///     .user_agent("(my-weather-app, ops@example.com)")
    ///     .timeout(Duration::from_secs(10))
    ///     .validate_periods(true)
    ///     .call()?;
    /// assert_eq!(client.base_url(), "https://api.weather.gov");
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn with_options(
        #[builder(into)] base_url: Option<String>,
        #[builder(into)] user_agent: Option<String>,
        timeout: Option<Duration>,
        validate_periods: Option<bool>,
    ) -> Result<Self, NwsError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let user_agent = user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);

        let fetcher =
            JsonFetcher::new(base_url, &user_agent, timeout).map_err(NwsError::ClientBuild)?;

        Ok(Self {
            fetcher,
            validate_periods: validate_periods.unwrap_or(false),
        })
    }

    pub fn base_url(&self) -> &str {
        self.fetcher.base_url()
    }

    pub(crate) fn fetcher(&self) -> &JsonFetcher {
        &self.fetcher
    }

    pub(crate) fn validates_periods(&self) -> bool {
        self.validate_periods
    }

    /// Fetches the 12-hour day/night forecast for `gridpoint`.
    ///
    /// Shorthand for `DailyForecast::new(gridpoint).send(self)`.
    pub async fn fetch_daily(
        &self,
        gridpoint: &Gridpoint,
    ) -> Result<GridpointDailyForecast, NwsError> {
        DailyForecast::new(gridpoint).send(self).await
    }

    /// Fetches the hourly forecast for `gridpoint`.
    ///
    /// Shorthand for `HourlyForecast::new(gridpoint).send(self)`.
    pub async fn fetch_hourly(
        &self,
        gridpoint: &Gridpoint,
    ) -> Result<GridpointHourlyForecast, NwsError> {
        HourlyForecast::new(gridpoint).send(self).await
    }

    /// Fetches the forecast of the given granularity, chosen at runtime.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use nws_forecast::{AnyForecast, ForecastKind, Gridpoint, NationalWeatherService, NwsError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), NwsError> {
    /// let client = NationalWeatherService::new()?;
    /// let point = Gridpoint::new("LWX", 97, 71);
    ///
    /// match client.forecast(ForecastKind::Hourly, &point).await? {
    ///     AnyForecast::Hourly(hourly) => println!("{} hours", hourly.periods().len()),
    ///     AnyForecast::Daily(_) => unreachable!(),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn forecast(
        &self,
        kind: ForecastKind,
        gridpoint: &Gridpoint,
    ) -> Result<AnyForecast, NwsError> {
        Ok(match kind {
            ForecastKind::Daily => self.fetch_daily(gridpoint).await?.into(),
            ForecastKind::Hourly => self.fetch_hourly(gridpoint).await?.into(),
        })
    }

    /// Fetches the daily and hourly forecasts for `gridpoint` concurrently.
    ///
    /// # Errors
    ///
    /// Fails with the first error of either request.
    pub async fn forecasts(
        &self,
        gridpoint: &Gridpoint,
    ) -> Result<(GridpointDailyForecast, GridpointHourlyForecast), NwsError> {
        tokio::try_join!(self.fetch_daily(gridpoint), self.fetch_hourly(gridpoint))
    }
}
