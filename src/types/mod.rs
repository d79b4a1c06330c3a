pub mod forecast;
pub mod forecast_kind;
pub mod forecast_period;
pub mod gridpoint;
pub mod quantitative_value;
