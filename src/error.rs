use crate::transport::error::TransportError;
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NwsError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Forecast for gridpoint '{gridpoint}' failed validation")]
    InvalidForecast {
        gridpoint: String,
        #[source]
        source: ForecastValidationError,
    },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

/// A forecast payload that decoded successfully but breaks the period ordering contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastValidationError {
    #[error("Forecast contains no periods")]
    NoPeriods,

    #[error("Period at index {index} has number {found}, expected {expected}")]
    OutOfOrder {
        index: usize,
        expected: u32,
        found: u32,
    },

    #[error("Period {number} starts at {start} but the previous period ends at {previous_end}")]
    Discontiguous {
        number: u32,
        previous_end: DateTime<FixedOffset>,
        start: DateTime<FixedOffset>,
    },
}
