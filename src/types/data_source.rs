//! Defines the provenance tag the backend attaches to each record.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Where a record's values came from, as reported in its `data_source` field.
///
/// Unrecognized or missing tags map to [`DataSource::Unknown`] rather than failing
/// the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Measured by a monitoring station.
    Observed,
    /// Produced by a forecast run for a time that has not happened yet.
    Forecast,
    /// Reanalysis or other model output for a past time.
    Model,
    /// Archived values served from the backend's historical store.
    Historical,
    #[default]
    Unknown,
}

impl DataSource {
    /// Maps a backend tag to a variant, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use airquality::DataSource;
    ///
    /// assert_eq!(DataSource::from_label("Observed"), DataSource::Observed);
    /// assert_eq!(DataSource::from_label("forecast "), DataSource::Forecast);
    /// assert_eq!(DataSource::from_label("satellite"), DataSource::Unknown);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "observed" | "observation" | "measured" | "station" => DataSource::Observed,
            "forecast" | "predicted" => DataSource::Forecast,
            "model" | "modelled" | "modeled" | "reanalysis" => DataSource::Model,
            "historical" | "archive" | "archived" => DataSource::Historical,
            _ => DataSource::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Observed => "observed",
            DataSource::Forecast => "forecast",
            DataSource::Model => "model",
            DataSource::Historical => "historical",
            DataSource::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for DataSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(label)) => DataSource::from_label(&label),
            _ => DataSource::Unknown,
        })
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_known_and_unknown_tags() {
        let parsed: Vec<DataSource> =
            serde_json::from_str(r#"["observed", "MODEL", null, 3, "mystery"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                DataSource::Observed,
                DataSource::Model,
                DataSource::Unknown,
                DataSource::Unknown,
                DataSource::Unknown,
            ]
        );
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&DataSource::Historical).unwrap(),
            "\"historical\""
        );
    }
}
