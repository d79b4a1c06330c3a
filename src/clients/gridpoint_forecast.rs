//! Provides `GridpointForecastRequest`, the request shared by the daily and hourly
//! gridpoint forecasts.
//!
//! A request is a gridpoint reference plus a header collection. The endpoint
//! and the response shape both follow from the period type `P`, so the daily
//! and hourly requests differ only in their type parameter
//! (see [`crate::DailyForecast`] and [`crate::HourlyForecast`]).

use crate::error::NwsError;
use crate::nws::NationalWeatherService;
use crate::types::forecast::Forecast;
use crate::types::forecast_kind::ForecastKind;
use crate::types::forecast_period::PeriodVariant;
use crate::types::gridpoint::Gridpoint;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};
use std::marker::PhantomData;

/// Name of the header used to opt into alternate API representations.
pub const FEATURE_FLAGS_HEADER: &str = "Feature-Flags";

/// Feature flags that switch temperature and wind speed to quantitative values.
///
/// See <https://www.weather.gov/documentation/services-web-api>.
pub const FORECAST_FEATURE_FLAGS: &str = "forecast_temperature_qv, forecast_wind_speed_qv";

/// Builds the resource path `/gridpoints/{gridId}/{gridX},{gridY}/{endpoint}`.
///
/// The grid id is inserted verbatim and the coordinates as plain decimal integers.
///
/// # Examples
///
/// ```
/// use nws_forecast::{resource_path, ForecastKind, Gridpoint};
///
/// let point = Gridpoint::new("ABC", 12, 34);
/// assert_eq!(resource_path(&point, ForecastKind::Daily), "/gridpoints/ABC/12,34/forecast");
/// assert_eq!(
///     resource_path(&point, ForecastKind::Hourly),
///     "/gridpoints/ABC/12,34/forecast/hourly"
/// );
/// ```
pub fn resource_path(gridpoint: &Gridpoint, kind: ForecastKind) -> String {
    format!("/gridpoints/{}/{}", gridpoint, kind.endpoint())
}

/// A forecast request for one gridpoint, not yet sent.
///
/// Construction always adds the `Feature-Flags` header; the period type `P`
/// fixes the endpoint and the shape the response is decoded into. Sending
/// consumes the request.
#[derive(Debug, Clone)]
pub struct GridpointForecastRequest<'a, P> {
    gridpoint: &'a Gridpoint,
    headers: HeaderMap,
    period: PhantomData<fn() -> P>,
}

impl<'a, P: PeriodVariant> GridpointForecastRequest<'a, P> {
    /// Creates a new request for `gridpoint` with the `Feature-Flags` header set.
    ///
    /// The gridpoint is trusted as given; its coordinates are not validated.
    ///
    /// # Arguments
    ///
    /// * `gridpoint` - The already resolved [`Gridpoint`] to request a forecast for.
    ///
    /// # Returns
    ///
    /// A new, unsent `GridpointForecastRequest`.
    pub fn new(gridpoint: &'a Gridpoint) -> Self {
        let mut headers = HeaderMap::new();
        headers.append(
            FEATURE_FLAGS_HEADER,
            HeaderValue::from_static(FORECAST_FEATURE_FLAGS),
        );
        Self {
            gridpoint,
            headers,
            period: PhantomData,
        }
    }

    pub fn gridpoint(&self) -> &'a Gridpoint {
        self.gridpoint
    }

    pub fn kind(&self) -> ForecastKind {
        P::KIND
    }

    /// The path segment after the gridpoint, `"forecast"` or `"forecast/hourly"`.
    pub fn endpoint(&self) -> &'static str {
        P::KIND.endpoint()
    }

    /// The resource path of this request, recomputed from the gridpoint on every call.
    pub fn resource(&self) -> String {
        resource_path(self.gridpoint, P::KIND)
    }

    /// Headers sent with this request, on top of the client defaults.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Sends the request through `client` and decodes the forecast.
    ///
    /// # Errors
    ///
    /// Returns [`NwsError::Transport`] when the request fails, the server
    /// answers with a non-success status, or the body does not decode into
    /// [`Forecast<P>`]. Returns [`NwsError::InvalidForecast`] only when the
    /// client was built with period validation enabled.
    pub async fn send(self, client: &NationalWeatherService) -> Result<Forecast<P>, NwsError> {
        let forecast: Forecast<P> = client
            .fetcher()
            .get_json(&self.resource(), &self.headers)
            .await?;
        debug!(
            "Received {} {} periods for gridpoint {}",
            forecast.periods().len(),
            P::KIND,
            self.gridpoint
        );

        if client.validates_periods() {
            forecast
                .validate()
                .map_err(|source| NwsError::InvalidForecast {
                    gridpoint: self.gridpoint.to_string(),
                    source,
                })?;
        }

        Ok(forecast)
    }
}
