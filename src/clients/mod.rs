pub mod aqi_client;
pub mod calendar_client;
pub mod dashboard_client;
pub mod weather_client;
