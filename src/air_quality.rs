//! This module provides the main entry point for the air-quality data layer. It owns the
//! backend configuration and hands out the per-concern clients.

use crate::api::api_client::ApiClient;
use crate::api::response_cache::ResponseCache;
use crate::clients::aqi_client::AqiClient;
use crate::clients::calendar_client::CalendarClient;
use crate::clients::dashboard_client::DashboardClient;
use crate::clients::weather_client::WeatherClient;
use crate::error::AirQualityError;
use crate::types::geo_point::{GeoPoint, Polygon};
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use log::info;
use std::path::PathBuf;

/// Environment variable holding the backend's base URL.
pub const BASE_URL_ENV: &str = "AIRQUALITY_API_URL";

/// Base URL used when [`BASE_URL_ENV`] is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// The main client.
///
/// Create one with [`AirQuality::new()`] for the defaults, or with
/// [`AirQuality::builder()`] to choose the backend URL and cache location.
///
/// # Examples
///
/// ```rust
/// # use airquality::{AirQuality, AirQualityError};
/// # async fn run() -> Result<(), AirQualityError> {
/// let client = AirQuality::builder()
///     .base_url("http://localhost:9000")
///     .use_cache(false)
///     .build()
///     .await?;
/// assert_eq!(client.api().base_url(), "http://localhost:9000");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AirQuality {
    api: ApiClient,
}

#[bon]
impl AirQuality {
    /// Creates a client from explicit options.
    ///
    /// * `base_url` defaults to `$AIRQUALITY_API_URL`, then [`DEFAULT_BASE_URL`].
    /// * `cache_folder` defaults to `airquality_rs_cache` in the platform cache directory.
    /// * `use_cache` defaults to `true`; when `false` nothing is read from or written to disk.
    ///
    /// # Errors
    ///
    /// * [`AirQualityError::CacheDirResolution`] if no cache folder was given and the
    ///   platform has no cache directory.
    /// * [`AirQualityError::CacheDirCreation`] if the cache folder cannot be created.
    #[builder(start_fn = builder, finish_fn = build)]
    pub async fn with_options(
        #[builder(into)] base_url: Option<String>,
        cache_folder: Option<PathBuf>,
        use_cache: Option<bool>,
    ) -> Result<Self, AirQualityError> {
        let base_url = base_url
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let cache = if use_cache.unwrap_or(true) {
            let cache_folder = match cache_folder {
                Some(folder) => folder,
                None => get_cache_dir().map_err(AirQualityError::CacheDirResolution)?,
            };
            ensure_cache_dir_exists(&cache_folder)
                .await
                .map_err(|e| AirQualityError::CacheDirCreation(cache_folder.clone(), e))?;
            Some(ResponseCache::new(&cache_folder))
        } else {
            None
        };

        info!("Using backend at {}", base_url);
        Ok(Self {
            api: ApiClient::new(base_url, cache),
        })
    }

    /// Creates a client with the default backend URL and cache directory.
    ///
    /// # Errors
    ///
    /// See [`AirQuality::builder()`].
    pub async fn new() -> Result<Self, AirQualityError> {
        Self::builder().build().await
    }

    /// The underlying HTTP client, usable directly as an [`AirQualityApi`](crate::AirQualityApi).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn aqi(&self) -> AqiClient<'_, ApiClient> {
        AqiClient::new(&self.api)
    }

    pub fn weather(&self) -> WeatherClient<'_, ApiClient> {
        WeatherClient::new(&self.api)
    }

    pub fn calendar(&self) -> CalendarClient<'_, ApiClient> {
        CalendarClient::new(&self.api)
    }

    pub fn dashboard(&self) -> DashboardClient<'_, ApiClient> {
        DashboardClient::new(&self.api)
    }

    /// The point requests for `area` are made at: the mean of its vertices.
    ///
    /// # Errors
    ///
    /// [`AirQualityError::EmptyGeometry`] if the polygon has no vertices.
    pub fn locate(area: &Polygon) -> Result<GeoPoint, AirQualityError> {
        area.centroid().ok_or(AirQualityError::EmptyGeometry)
    }
}
