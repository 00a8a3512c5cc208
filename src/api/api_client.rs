use crate::api::backend::AirQualityApi;
use crate::api::endpoint::Endpoint;
use crate::api::error::ApiError;
use crate::api::requests::{
    ApiRequest, DayRequest, MonthRequest, PointInTimeRequest, RangeRequest,
};
use crate::api::response_cache::ResponseCache;
use crate::api::responses::{ListResponse, SingleResponse};
use crate::api::sanitize::repair_non_finite;
use crate::types::geo_point::GeoPoint;
use crate::types::month::Month;
use crate::types::records::analysis::AnalysisReport;
use crate::types::records::aqi::AqiRecord;
use crate::types::records::daily_weather::DailyWeather;
use crate::types::records::weather::WeatherRecord;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP implementation of [`AirQualityApi`].
///
/// Responses describing days before today are immutable, so when a
/// [`ResponseCache`] is configured they are stored on disk and served from there
/// on later requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    cache: Option<ResponseCache>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, cache: Option<ResponseCache>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    /// Posts `request` to `endpoint` and decodes the (repaired) JSON body.
    pub async fn post<R, T>(&self, endpoint: Endpoint, request: &R) -> Result<T, ApiError>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base_url);
        let cache = self
            .cache
            .as_ref()
            .filter(|_| is_history(request.last_day(), Local::now().date_naive()));
        let key = request.cache_key();

        if let Some(cache) = cache {
            match cache.read(endpoint, &key).await {
                Ok(Some(body)) => return decode_body(&url, &body),
                Ok(None) => {}
                Err(e) => warn!("Ignoring unreadable cache entry for {}: {}", url, e),
            }
        }

        let body = self.download(&url, request).await?;
        let decoded = decode_body(&url, &body)?;

        if let Some(cache) = cache {
            if let Err(e) = cache.write(endpoint, &key, &url, &body).await {
                warn!("Failed to cache response for {}: {}", url, e);
            }
        }
        Ok(decoded)
    }

    async fn download<R: ApiRequest>(&self, url: &str, request: &R) -> Result<String, ApiError> {
        info!("Requesting {}", url);

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error for {}: {}", url, status);
            return Err(ApiError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::ResponseBody(url.to_string(), e))
    }

    async fn post_list<R, T>(&self, endpoint: Endpoint, request: &R) -> Result<Vec<T>, ApiError>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        Ok(self
            .post::<R, ListResponse<T>>(endpoint, request)
            .await?
            .into_vec())
    }

    async fn post_single<R, T>(&self, endpoint: Endpoint, request: &R) -> Result<T, ApiError>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        Ok(self
            .post::<R, SingleResponse<T>>(endpoint, request)
            .await?
            .into_inner())
    }
}

impl AirQualityApi for ApiClient {
    async fn current_aqi(&self, point: GeoPoint, at: NaiveDateTime) -> Result<AqiRecord, ApiError> {
        let request = PointInTimeRequest::new(point, at.date(), at.hour());
        self.post_single(Endpoint::Aqi, &request).await
    }

    async fn current_weather(
        &self,
        point: GeoPoint,
        at: NaiveDateTime,
    ) -> Result<WeatherRecord, ApiError> {
        let request = PointInTimeRequest::new(point, at.date(), at.hour());
        self.post_single(Endpoint::Weather, &request).await
    }

    async fn hourly_aqi(&self, point: GeoPoint, date: NaiveDate) -> Result<Vec<AqiRecord>, ApiError> {
        self.post_list(Endpoint::AqiHourly, &DayRequest::new(point, date))
            .await
    }

    async fn hourly_aqi_range(
        &self,
        point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AqiRecord>, ApiError> {
        self.post_list(Endpoint::AqiHourlyRange, &RangeRequest::new(point, start, end))
            .await
    }

    async fn hourly_weather(
        &self,
        point: GeoPoint,
        date: NaiveDate,
    ) -> Result<Vec<WeatherRecord>, ApiError> {
        self.post_list(Endpoint::WeatherHourly, &DayRequest::new(point, date))
            .await
    }

    async fn monthly_weather(
        &self,
        point: GeoPoint,
        month: Month,
    ) -> Result<Vec<DailyWeather>, ApiError> {
        let days: Vec<DailyWeather> = self
            .post_list(Endpoint::WeatherMonthly, &MonthRequest::new(point, month))
            .await?;
        Ok(days.into_iter().map(DailyWeather::normalized).collect())
    }

    async fn analyze(
        &self,
        point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AnalysisReport, ApiError> {
        self.post_single(Endpoint::AqiAnalyze, &RangeRequest::new(point, start, end))
            .await
    }
}

fn is_history(last_day: Option<NaiveDate>, today: NaiveDate) -> bool {
    last_day.is_some_and(|day| day < today)
}

fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    let repaired = repair_non_finite(body);
    serde_json::from_str(&repaired).map_err(|e| ApiError::JsonParse {
        url: url.to_string(),
        source: e,
    })
}
