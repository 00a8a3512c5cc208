pub mod analysis;
pub mod aqi;
pub mod daily_weather;
pub mod weather;
