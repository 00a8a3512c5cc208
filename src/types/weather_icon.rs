//! Defines the `WeatherIcon` enum shown on calendar days, derived from a day's
//! weather summary.

use crate::types::numeric::finite;
use crate::types::records::daily_weather::DailyWeather;
use serde::{Deserialize, Serialize};

/// Precipitation (mm) at or above which a day counts as wet.
const WET_DAY_MM: f64 = 1.0;
const CLOUDY_PERCENT: f64 = 70.0;
const PARTLY_CLOUDY_PERCENT: f64 = 30.0;

/// Summary icon for one day of weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    Snow,
    /// No usable weather fields for the day.
    #[default]
    Unknown,
}

impl WeatherIcon {
    /// Picks an icon for a day.
    ///
    /// Wet days (≥ 1 mm) are `Snow` when the maximum temperature is at or below 0 °C and
    /// `Rain` otherwise. Dry days are classified by mean cloud cover: ≥ 70 % `Cloudy`,
    /// ≥ 30 % `PartlyCloudy`, below that `Sunny`. A dry day without cloud data is `Sunny`
    /// as long as any other field is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use airquality::{DailyWeather, WeatherIcon};
    ///
    /// let day = DailyWeather {
    ///     precipitation_sum: Some(4.2),
    ///     temperature_max: Some(-3.0),
    ///     ..Default::default()
    /// };
    /// assert_eq!(WeatherIcon::from_daily(&day), WeatherIcon::Snow);
    /// assert_eq!(WeatherIcon::from_daily(&DailyWeather::default()), WeatherIcon::Unknown);
    /// ```
    pub fn from_daily(day: &DailyWeather) -> Self {
        if let Some(precipitation) = finite(day.precipitation_sum) {
            if precipitation >= WET_DAY_MM {
                return match finite(day.temperature_max) {
                    Some(t) if t <= 0.0 => WeatherIcon::Snow,
                    _ => WeatherIcon::Rain,
                };
            }
        }
        match finite(day.cloud_cover_mean) {
            Some(c) if c >= CLOUDY_PERCENT => WeatherIcon::Cloudy,
            Some(c) if c >= PARTLY_CLOUDY_PERCENT => WeatherIcon::PartlyCloudy,
            Some(_) => WeatherIcon::Sunny,
            None if day.has_any_value() => WeatherIcon::Sunny,
            None => WeatherIcon::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "sunny",
            WeatherIcon::PartlyCloudy => "partly_cloudy",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
            WeatherIcon::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> DailyWeather {
        DailyWeather {
            temperature_max: Some(12.0),
            temperature_min: Some(4.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_rain_beats_cloud_cover() {
        let wet = DailyWeather {
            precipitation_sum: Some(5.0),
            cloud_cover_mean: Some(10.0),
            ..day()
        };
        assert_eq!(WeatherIcon::from_daily(&wet), WeatherIcon::Rain);
    }

    #[test]
    fn test_drizzle_below_threshold_is_dry() {
        let damp = DailyWeather {
            precipitation_sum: Some(0.4),
            cloud_cover_mean: Some(80.0),
            ..day()
        };
        assert_eq!(WeatherIcon::from_daily(&damp), WeatherIcon::Cloudy);
    }

    #[test]
    fn test_cloud_cover_thresholds() {
        let with_cover = |c| DailyWeather {
            cloud_cover_mean: Some(c),
            ..day()
        };
        assert_eq!(WeatherIcon::from_daily(&with_cover(70.0)), WeatherIcon::Cloudy);
        assert_eq!(WeatherIcon::from_daily(&with_cover(30.0)), WeatherIcon::PartlyCloudy);
        assert_eq!(WeatherIcon::from_daily(&with_cover(29.9)), WeatherIcon::Sunny);
    }

    #[test]
    fn test_no_cloud_data_but_temperatures_is_sunny() {
        assert_eq!(WeatherIcon::from_daily(&day()), WeatherIcon::Sunny);
    }

    #[test]
    fn test_non_finite_fields_are_ignored() {
        let broken = DailyWeather {
            precipitation_sum: Some(f64::NAN),
            cloud_cover_mean: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(WeatherIcon::from_daily(&broken), WeatherIcon::Unknown);
    }
}
