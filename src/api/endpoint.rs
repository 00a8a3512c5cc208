//! The backend's REST endpoints.

use std::fmt;

/// A backend endpoint. All of them are `POST` with a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Instantaneous AQI for one hour.
    Aqi,
    /// Instantaneous weather for one hour.
    Weather,
    /// Hourly AQI records for one day.
    AqiHourly,
    /// Hourly AQI records for an inclusive date range.
    AqiHourlyRange,
    /// Hourly weather records for one day.
    WeatherHourly,
    /// Daily weather aggregates for one month.
    WeatherMonthly,
    /// Summary statistics for a date range.
    AqiAnalyze,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Aqi => "/aqi",
            Endpoint::Weather => "/weather",
            Endpoint::AqiHourly => "/aqi/hourly",
            Endpoint::AqiHourlyRange => "/aqi/hourly/range",
            Endpoint::WeatherHourly => "/weather/hourly",
            Endpoint::WeatherMonthly => "/weather/monthly",
            Endpoint::AqiAnalyze => "/aqi/analyze",
        }
    }

    pub(crate) fn cache_file_prefix(&self) -> String {
        format!("{}-", self.path().trim_start_matches('/').replace('/', "-"))
    }

    /// Joins the endpoint path onto a base URL, tolerating a trailing slash on the base.
    pub(crate) fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        assert_eq!(
            Endpoint::AqiHourlyRange.url("http://localhost:8000/"),
            "http://localhost:8000/aqi/hourly/range"
        );
        assert_eq!(Endpoint::Aqi.url("http://api"), "http://api/aqi");
    }

    #[test]
    fn test_cache_prefix_is_filename_safe() {
        assert_eq!(Endpoint::WeatherMonthly.cache_file_prefix(), "weather-monthly-");
        assert_eq!(Endpoint::AqiHourlyRange.cache_file_prefix(), "aqi-hourly-range-");
    }
}
