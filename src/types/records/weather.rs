use crate::types::data_source::DataSource;
use crate::types::numeric::deserialize_nullable_f64;
use crate::types::timestamp::deserialize_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One hourly weather observation as returned by `/weather` and `/weather/hourly`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherRecord {
    #[serde(
        default,
        alias = "time",
        alias = "timestamp",
        alias = "datetime",
        deserialize_with = "deserialize_timestamp"
    )]
    pub date: Option<NaiveDateTime>,
    /// °C
    #[serde(
        default,
        alias = "temperature_2m",
        alias = "temp",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub temperature: Option<f64>,
    /// Relative humidity, %.
    #[serde(
        default,
        alias = "relative_humidity",
        alias = "relative_humidity_2m",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub humidity: Option<f64>,
    /// km/h
    #[serde(default, alias = "wind_speed_10m", deserialize_with = "deserialize_nullable_f64")]
    pub wind_speed: Option<f64>,
    /// Degrees from north.
    #[serde(
        default,
        alias = "wind_direction_10m",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub wind_direction: Option<f64>,
    /// mm
    #[serde(default, alias = "rain", deserialize_with = "deserialize_nullable_f64")]
    pub precipitation: Option<f64>,
    /// hPa
    #[serde(
        default,
        alias = "surface_pressure",
        alias = "pressure_msl",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub pressure: Option<f64>,
    /// %
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub cloud_cover: Option<f64>,
    #[serde(default, alias = "source")]
    pub data_source: DataSource,
}

impl WeatherRecord {
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.map(|dt| dt.date())
    }
}
