pub mod daily_client;
pub mod gridpoint_forecast;
pub mod hourly_client;
