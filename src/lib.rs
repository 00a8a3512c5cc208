mod aggregation;
mod air_quality;
mod api;
mod clients;
mod error;
mod status;
mod types;
mod utils;

#[cfg(test)]
mod testing;

pub use air_quality::*;
pub use error::AirQualityError;
pub use status::StatusMessage;

pub use clients::aqi_client::*;
pub use clients::calendar_client::*;
pub use clients::dashboard_client::*;
pub use clients::weather_client::*;

pub use aggregation::calendar::{CalendarMonth, DailyAggregate};
pub use aggregation::daily_max::{daily_max_aqi, max_aqi};
pub use aggregation::series::{daily_series, hourly_series, DailyPoint, HourlyPoint};

pub use api::api_client::ApiClient;
pub use api::backend::AirQualityApi;
pub use api::endpoint::Endpoint;
pub use api::error::ApiError;
pub use api::requests::{ApiRequest, DayRequest, MonthRequest, PointInTimeRequest, RangeRequest};
pub use api::response_cache::ResponseCache;
pub use api::sanitize::repair_non_finite;
pub use api::window_fetch::{fetch_aqi_window, fetch_weather_window};

pub use types::aqi_band::AqiBand;
pub use types::data_source::DataSource;
pub use types::date_window::{DateWindow, DateWindowError, MAX_MONTHS_BACK};
pub use types::geo_point::{centroid, GeoPoint, Polygon};
pub use types::month::{Month, StartEndDate};
pub use types::numeric::finite;
pub use types::records::analysis::AnalysisReport;
pub use types::records::aqi::AqiRecord;
pub use types::records::daily_weather::DailyWeather;
pub use types::records::weather::WeatherRecord;
pub use types::timestamp::{day_key, parse_timestamp};
pub use types::weather_icon::WeatherIcon;
