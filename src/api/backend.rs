use crate::api::error::ApiError;
use crate::types::geo_point::GeoPoint;
use crate::types::month::Month;
use crate::types::records::analysis::AnalysisReport;
use crate::types::records::aqi::AqiRecord;
use crate::types::records::daily_weather::DailyWeather;
use crate::types::records::weather::WeatherRecord;
use chrono::{NaiveDate, NaiveDateTime};
use std::future::Future;

/// The backend operations the aggregation layer depends on.
///
/// [`crate::ApiClient`] implements this over HTTP. Any other source (a recorded
/// fixture, a different service) can be plugged into [`crate::CalendarClient`] and
/// [`crate::DashboardClient`] by implementing it.
pub trait AirQualityApi: Send + Sync {
    /// `POST /aqi` for the hour containing `at`.
    fn current_aqi(
        &self,
        point: GeoPoint,
        at: NaiveDateTime,
    ) -> impl Future<Output = Result<AqiRecord, ApiError>> + Send;

    /// `POST /weather` for the hour containing `at`.
    fn current_weather(
        &self,
        point: GeoPoint,
        at: NaiveDateTime,
    ) -> impl Future<Output = Result<WeatherRecord, ApiError>> + Send;

    /// `POST /aqi/hourly` for one day.
    fn hourly_aqi(
        &self,
        point: GeoPoint,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<AqiRecord>, ApiError>> + Send;

    /// `POST /aqi/hourly/range` for an inclusive span of days.
    fn hourly_aqi_range(
        &self,
        point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<Vec<AqiRecord>, ApiError>> + Send;

    /// `POST /weather/hourly` for one day.
    fn hourly_weather(
        &self,
        point: GeoPoint,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<WeatherRecord>, ApiError>> + Send;

    /// `POST /weather/monthly`: one daily aggregate per day of `month`.
    fn monthly_weather(
        &self,
        point: GeoPoint,
        month: Month,
    ) -> impl Future<Output = Result<Vec<DailyWeather>, ApiError>> + Send;

    /// `POST /aqi/analyze` for an inclusive span of days.
    fn analyze(
        &self,
        point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<AnalysisReport, ApiError>> + Send;
}
