pub mod aqi_band;
pub mod data_source;
pub mod date_window;
pub mod geo_point;
pub mod month;
pub mod numeric;
pub mod records;
pub mod timestamp;
pub mod weather_icon;
