use crate::types::aqi_band::AqiBand;
use crate::types::numeric::deserialize_nullable_f64;
use crate::types::records::aqi::AqiRecord;
use serde::{Deserialize, Serialize};

/// Summary returned by `/aqi/analyze` for a date range.
///
/// The backend omits fields it could not compute, so everything is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(
        default,
        alias = "avg_aqi",
        alias = "mean_aqi",
        deserialize_with = "deserialize_nullable_f64"
    )]
    pub average_aqi: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub max_aqi: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub min_aqi: Option<f64>,
    #[serde(default)]
    pub dominant_pollutant: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default, alias = "hourly_data")]
    pub records: Vec<AqiRecord>,
}

impl AnalysisReport {
    pub fn average_band(&self) -> Option<AqiBand> {
        self.average_aqi.and_then(AqiBand::from_aqi)
    }

    pub fn worst_band(&self) -> Option<AqiBand> {
        self.max_aqi.and_then(AqiBand::from_aqi)
    }
}
