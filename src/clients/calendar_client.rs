//! Provides the `CalendarClient`, which loads a month or week of per-day AQI maxima and
//! daily weather for calendar rendering.
//!
//! Obtained via [`AirQuality::calendar()`](crate::AirQuality::calendar). Loading never
//! fails outright: every outcome is a [`CalendarStatus`] a view can render.

use crate::aggregation::calendar::CalendarMonth;
use crate::aggregation::daily_max::daily_max_aqi;
use crate::api::backend::AirQualityApi;
use crate::api::window_fetch::{fetch_aqi_window, fetch_weather_window};
use crate::error::AirQualityError;
use crate::status::StatusMessage;
use crate::types::date_window::{DateWindow, DateWindowError};
use crate::types::geo_point::GeoPoint;
use crate::types::month::Month;
use bon::bon;
use chrono::{Local, NaiveDate};
use log::{info, warn};

/// Outcome of loading a calendar window.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarStatus {
    Loaded(CalendarMonth),
    /// The window was rejected before any request was made.
    OutOfRange(DateWindowError),
    /// No AQI data could be fetched for any day of the window.
    Unavailable(StatusMessage),
}

impl CalendarStatus {
    /// The message to show in place of the calendar, if it did not load.
    pub fn message(&self) -> Option<StatusMessage> {
        match self {
            CalendarStatus::Loaded(_) => None,
            CalendarStatus::OutOfRange(_) => Some(StatusMessage::OutOfRange),
            CalendarStatus::Unavailable(message) => Some(*message),
        }
    }

    pub fn calendar(&self) -> Option<&CalendarMonth> {
        match self {
            CalendarStatus::Loaded(calendar) => Some(calendar),
            _ => None,
        }
    }
}

/// A client for calendar views.
///
/// Generic over the backend so the same logic runs against [`crate::ApiClient`] or any
/// other [`AirQualityApi`].
pub struct CalendarClient<'a, A: AirQualityApi> {
    api: &'a A,
}

#[bon]
impl<'a, A: AirQualityApi> CalendarClient<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Fetches and assembles `window` around `point`, as of `today`.
    ///
    /// # Errors
    ///
    /// * [`AirQualityError::DateWindow`] if the window is outside the requestable
    ///   range. No request is made in that case.
    /// * [`AirQualityError::Api`] with the range endpoint's error if neither the range
    ///   request nor any per-day fallback request succeeded.
    ///
    /// A failed weather request is not an error; it is recorded in
    /// [`CalendarMonth::weather_error`].
    pub async fn load(
        &self,
        point: GeoPoint,
        window: DateWindow,
        today: NaiveDate,
    ) -> Result<CalendarMonth, AirQualityError> {
        let fetched = window.validate(today)?;
        let nominal = window.nominal_bounds()?;
        info!("Loading calendar for {} ({} to {})", window, fetched.start, fetched.end);

        let (aqi, weather) = tokio::join!(
            fetch_aqi_window(self.api, point, fetched),
            fetch_weather_window(self.api, point, fetched),
        );
        let max_aqi = daily_max_aqi(&aqi?);

        let (weather, weather_error) = match weather {
            Ok(days) => (days, None),
            Err(e) => {
                warn!("Weather for {} unavailable: {}", window, e);
                (Vec::new(), Some(e.status_message()))
            }
        };

        Ok(CalendarMonth::assemble(
            window,
            nominal,
            fetched,
            max_aqi,
            weather,
            weather_error,
        ))
    }

    /// Loads a calendar window for a location and classifies the outcome.
    ///
    /// Starts a builder: pass the location, optionally set `.window(..)` (defaults to
    /// the month containing today) and `.today(..)` (defaults to the local date), then
    /// `.call().await`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use airquality::{AirQuality, AirQualityError, CalendarStatus, DateWindow, GeoPoint};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), AirQualityError> {
    /// let client = AirQuality::new().await?;
    /// let status = client
    ///     .calendar()
    ///     .location(GeoPoint::new(28.61, 77.21))
    ///     .window(DateWindow::month(2025, 1))
    ///     .call()
    ///     .await;
    ///
    /// match status {
    ///     CalendarStatus::Loaded(calendar) => println!("{} days", calendar.days.len()),
    ///     other => println!("{:?}", other.message()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        window: Option<DateWindow>,
        today: Option<NaiveDate>,
    ) -> CalendarStatus {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let window = window.unwrap_or_else(|| DateWindow::Month(Month::of(today)));

        match self.load(point, window, today).await {
            Ok(calendar) => CalendarStatus::Loaded(calendar),
            Err(AirQualityError::DateWindow(e)) => {
                info!("Calendar window {} rejected: {}", window, e);
                CalendarStatus::OutOfRange(e)
            }
            Err(e) => {
                warn!("Calendar for {} unavailable: {}", window, e);
                CalendarStatus::Unavailable(e.status_message())
            }
        }
    }
}
