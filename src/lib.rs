mod clients;
mod error;
mod nws;
mod transport;
mod types;
mod utils;

pub use error::{ForecastValidationError, NwsError};
pub use nws::*;

pub use clients::daily_client::DailyForecast;
pub use clients::gridpoint_forecast::*;
pub use clients::hourly_client::HourlyForecast;

pub use types::forecast::*;
pub use types::forecast_kind::ForecastKind;
pub use types::forecast_period::*;
pub use types::gridpoint::*;
pub use types::quantitative_value::QuantitativeValue;

pub use transport::error::TransportError;
pub use transport::fetcher::JsonFetcher;
