use crate::types::data_source::DataSource;
use crate::types::numeric::deserialize_nullable_f64;
use crate::types::timestamp::deserialize_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One hourly air-quality measurement as returned by `/aqi`, `/aqi/hourly` and
/// `/aqi/hourly/range`.
///
/// Every numeric field is `None` when the backend sent `null`, a non-finite value,
/// or nothing at all. Pollutant concentrations are in µg/m³ except `co` (mg/m³).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AqiRecord {
    #[serde(
        default,
        alias = "time",
        alias = "timestamp",
        alias = "datetime",
        deserialize_with = "deserialize_timestamp"
    )]
    pub date: Option<NaiveDateTime>,
    #[serde(default, alias = "us_aqi", deserialize_with = "deserialize_nullable_f64")]
    pub aqi: Option<f64>,
    #[serde(default, alias = "pm25", deserialize_with = "deserialize_nullable_f64")]
    pub pm2_5: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub pm10: Option<f64>,
    #[serde(default, alias = "ozone", deserialize_with = "deserialize_nullable_f64")]
    pub o3: Option<f64>,
    #[serde(default, alias = "nitrogen_dioxide", deserialize_with = "deserialize_nullable_f64")]
    pub no2: Option<f64>,
    #[serde(default, alias = "sulphur_dioxide", deserialize_with = "deserialize_nullable_f64")]
    pub so2: Option<f64>,
    #[serde(default, alias = "carbon_monoxide", deserialize_with = "deserialize_nullable_f64")]
    pub co: Option<f64>,
    #[serde(default, alias = "source")]
    pub data_source: DataSource,
}

impl AqiRecord {
    /// Calendar day of the record, if it carried a parseable timestamp.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.map(|dt| dt.date())
    }

    /// The pollutant with the highest concentration, by field name.
    pub fn dominant_pollutant(&self) -> Option<&'static str> {
        [
            ("pm2_5", self.pm2_5),
            ("pm10", self.pm10),
            ("o3", self.o3),
            ("no2", self.no2),
            ("so2", self.so2),
            ("co", self.co),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| v.is_finite()).map(|v| (name, v)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
    }
}
