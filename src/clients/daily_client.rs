//! Provides `DailyForecast`, the request for the 12-hour day/night forecast of a gridpoint.

use crate::clients::gridpoint_forecast::GridpointForecastRequest;
use crate::types::forecast_period::GridpointDailyForecastPeriod;

/// A request for `/gridpoints/{gridId}/{gridX},{gridY}/forecast`.
///
/// Sending it yields a [`crate::GridpointDailyForecast`].
///
/// # Example
///
/// ```no_run
/// use nws_forecast::{DailyForecast, Gridpoint, NationalWeatherService, NwsError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), NwsError> {
/// let client = NationalWeatherService::new()?;
/// let topeka = Gridpoint::new("TOP", 31, 80);
///
/// let forecast = DailyForecast::new(&topeka).send(&client).await?;
/// for period in forecast.periods() {
///     println!("{}: {}", period.period.name, period.period.short_forecast);
/// }
/// # Ok(())
/// # }
/// ```
pub type DailyForecast<'a> = GridpointForecastRequest<'a, GridpointDailyForecastPeriod>;
