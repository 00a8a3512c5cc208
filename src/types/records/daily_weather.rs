use crate::types::numeric::{deserialize_nullable_f64, finite};
use crate::types::timestamp::{day_key, deserialize_day};
use crate::types::weather_icon::WeatherIcon;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of aggregated weather, as listed by `/weather/monthly`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyWeather {
    /// Normalized to a calendar day, whatever time-of-day the backend attached.
    #[serde(
        default,
        alias = "time",
        alias = "day",
        alias = "datetime",
        deserialize_with = "deserialize_day"
    )]
    pub date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "temperature_2m_max",
        alias = "temp_max",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub temperature_max: Option<f64>,
    #[serde(
        default,
        alias = "temperature_2m_min",
        alias = "temp_min",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub temperature_min: Option<f64>,
    #[serde(
        default,
        alias = "temperature_2m_mean",
        alias = "temp_mean",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub temperature_mean: Option<f64>,
    #[serde(
        default,
        alias = "precipitation",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub precipitation_sum: Option<f64>,
    #[serde(
        default,
        alias = "wind_speed_10m_max",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub wind_speed_max: Option<f64>,
    #[serde(
        default,
        alias = "relative_humidity_2m_mean",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub humidity_mean: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub cloud_cover_mean: Option<f64>,
}

impl DailyWeather {
    /// Returns the record with every non-finite numeric field replaced by `None`.
    ///
    /// Deserialized records are already clean; this covers records assembled by hand
    /// or carried over from other sources.
    pub fn normalized(self) -> Self {
        Self {
            date: self.date,
            temperature_max: finite(self.temperature_max),
            temperature_min: finite(self.temperature_min),
            temperature_mean: finite(self.temperature_mean),
            precipitation_sum: finite(self.precipitation_sum),
            wind_speed_max: finite(self.wind_speed_max),
            humidity_mean: finite(self.humidity_mean),
            cloud_cover_mean: finite(self.cloud_cover_mean),
        }
    }

    pub fn day_key(&self) -> Option<String> {
        self.date.map(day_key)
    }

    pub fn icon(&self) -> WeatherIcon {
        WeatherIcon::from_daily(self)
    }

    /// Whether at least one numeric field holds a finite value.
    pub fn has_any_value(&self) -> bool {
        [
            self.temperature_max,
            self.temperature_min,
            self.temperature_mean,
            self.precipitation_sum,
            self.wind_speed_max,
            self.humidity_mean,
            self.cloud_cover_mean,
        ]
        .into_iter()
        .any(|v| finite(v).is_some())
    }
}
