//! Provides `HourlyForecast`, the request for the hour-by-hour forecast of a gridpoint.

use crate::clients::gridpoint_forecast::GridpointForecastRequest;
use crate::types::forecast_period::GridpointHourlyForecastPeriod;

/// A request for `/gridpoints/{gridId}/{gridX},{gridY}/forecast/hourly`.
///
/// Sending it yields a [`crate::GridpointHourlyForecast`], whose periods also
/// carry dewpoint and relative humidity.
///
/// # Example
///
/// ```no_run
/// use nws_forecast::{Gridpoint, HourlyForecast, NationalWeatherService, NwsError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), NwsError> {
/// let client = NationalWeatherService::new()?;
/// let topeka = Gridpoint::new("TOP", 31, 80);
///
/// let forecast = HourlyForecast::new(&topeka).send(&client).await?;
/// if let Some(next_hour) = forecast.periods().first() {
///     println!(
///         "{:?} {}, humidity {:?}",
///         next_hour.period.temperature.value,
///         next_hour.period.temperature.unit(),
///         next_hour.relative_humidity.value
///     );
/// }
/// # Ok(())
/// # }
/// ```
pub type HourlyForecast<'a> = GridpointForecastRequest<'a, GridpointHourlyForecastPeriod>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::gridpoint_forecast::{FEATURE_FLAGS_HEADER, FORECAST_FEATURE_FLAGS};
    use crate::{ForecastKind, Gridpoint};

    #[test]
    fn test_hourly_resource_path() {
        let point = Gridpoint::new("ABC", 12, 34);
        let request = HourlyForecast::new(&point);
        assert_eq!(request.kind(), ForecastKind::Hourly);
        assert_eq!(request.endpoint(), "forecast/hourly");
        assert_eq!(request.resource(), "/gridpoints/ABC/12,34/forecast/hourly");
    }

    #[test]
    fn test_hourly_feature_flags() {
        let point = Gridpoint::new("TOP", 0, 0);
        let request = HourlyForecast::new(&point);
        assert_eq!(
            request
                .headers()
                .get(FEATURE_FLAGS_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some(FORECAST_FEATURE_FLAGS)
        );
        assert_eq!(request.headers().get_all(FEATURE_FLAGS_HEADER).iter().count(), 1);
    }
}
