//! Defines the `AqiBand` enum, mapping AQI values to the US EPA health categories
//! and the colors the dashboard draws them in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A US EPA AQI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiBand {
    /// 0–50.
    Good,
    /// 51–100.
    Moderate,
    /// 101–150.
    UnhealthyForSensitiveGroups,
    /// 151–200.
    Unhealthy,
    /// 201–300.
    VeryUnhealthy,
    /// Above 300.
    Hazardous,
}

impl AqiBand {
    /// Finds the band for an AQI value.
    ///
    /// A breakpoint belongs to the band it closes, and values above a breakpoint belong
    /// to the next band: `50.0` is `Good` while `50.1` is `Moderate`.
    ///
    /// # Returns
    ///
    /// * `None` if `aqi` is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use airquality::AqiBand;
    ///
    /// assert_eq!(AqiBand::from_aqi(42.0), Some(AqiBand::Good));
    /// assert_eq!(AqiBand::from_aqi(155.0), Some(AqiBand::Unhealthy));
    /// assert_eq!(AqiBand::from_aqi(f64::NAN), None);
    /// ```
    pub fn from_aqi(aqi: f64) -> Option<Self> {
        if !aqi.is_finite() || aqi < 0.0 {
            return None;
        }
        Some(match aqi {
            a if a <= 50.0 => AqiBand::Good,
            a if a <= 100.0 => AqiBand::Moderate,
            a if a <= 150.0 => AqiBand::UnhealthyForSensitiveGroups,
            a if a <= 200.0 => AqiBand::Unhealthy,
            a if a <= 300.0 => AqiBand::VeryUnhealthy,
            _ => AqiBand::Hazardous,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Moderate => "Moderate",
            AqiBand::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiBand::Unhealthy => "Unhealthy",
            AqiBand::VeryUnhealthy => "Very Unhealthy",
            AqiBand::Hazardous => "Hazardous",
        }
    }

    /// Hex color used for this band on gauges and calendar cells.
    pub fn color(&self) -> &'static str {
        match self {
            AqiBand::Good => "#00e400",
            AqiBand::Moderate => "#ffff00",
            AqiBand::UnhealthyForSensitiveGroups => "#ff7e00",
            AqiBand::Unhealthy => "#ff0000",
            AqiBand::VeryUnhealthy => "#8f3f97",
            AqiBand::Hazardous => "#7e0023",
        }
    }

    /// Short health advice shown next to the band.
    pub fn advice(&self) -> &'static str {
        match self {
            AqiBand::Good => "Air quality is satisfactory.",
            AqiBand::Moderate => "Unusually sensitive people should limit prolonged outdoor exertion.",
            AqiBand::UnhealthyForSensitiveGroups => {
                "Sensitive groups should reduce prolonged outdoor exertion."
            }
            AqiBand::Unhealthy => "Everyone should reduce prolonged outdoor exertion.",
            AqiBand::VeryUnhealthy => "Everyone should avoid prolonged outdoor exertion.",
            AqiBand::Hazardous => "Everyone should avoid all outdoor activity.",
        }
    }
}

impl fmt::Display for AqiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
