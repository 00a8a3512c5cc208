//! Provides the `DashboardClient`, which fetches and reshapes data for the dashboard's
//! live, daily, weekly and monthly views.

use crate::aggregation::series::{daily_series, hourly_series, DailyPoint, HourlyPoint};
use crate::api::backend::AirQualityApi;
use crate::api::window_fetch::fetch_aqi_window;
use crate::error::AirQualityError;
use crate::status::StatusMessage;
use crate::types::aqi_band::AqiBand;
use crate::types::date_window::{DateWindow, DateWindowError};
use crate::types::geo_point::GeoPoint;
use crate::types::month::{Month, StartEndDate};
use crate::types::records::aqi::AqiRecord;
use crate::types::records::weather::WeatherRecord;
use bon::bon;
use chrono::{Local, NaiveDate, NaiveDateTime};
use log::warn;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// The dashboard's view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Live,
    Daily,
    Weekly,
    Monthly,
}

/// Current conditions at one point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveSnapshot {
    pub aqi: AqiRecord,
    /// `None` when the weather request failed; see `weather_error`.
    pub weather: Option<WeatherRecord>,
    pub weather_error: Option<StatusMessage>,
    pub band: Option<AqiBand>,
}

/// Hour-by-hour charts for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySeries {
    pub date: NaiveDate,
    pub points: Vec<HourlyPoint>,
}

/// Day-by-day charts for a week or month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    pub bounds: StartEndDate,
    pub points: Vec<DailyPoint>,
}

impl DailySeries {
    /// The day with the highest maximum AQI.
    pub fn worst_day(&self) -> Option<&DailyPoint> {
        self.points
            .iter()
            .filter_map(|p| p.max_aqi.map(|max| (OrderedFloat(max), p)))
            .max_by_key(|(max, _)| *max)
            .map(|(_, p)| p)
    }
}

/// Data for one rendered dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DashboardView {
    Live(LiveSnapshot),
    Daily(HourlySeries),
    Weekly(DailySeries),
    Monthly(DailySeries),
}

pub struct DashboardClient<'a, A: AirQualityApi> {
    api: &'a A,
}

#[bon]
impl<'a, A: AirQualityApi> DashboardClient<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Current AQI and weather for the hour containing `at`, fetched concurrently.
    ///
    /// # Errors
    ///
    /// Fails only if the AQI request fails; a weather failure is recorded in
    /// [`LiveSnapshot::weather_error`].
    pub async fn live(
        &self,
        point: GeoPoint,
        at: NaiveDateTime,
    ) -> Result<LiveSnapshot, AirQualityError> {
        let (aqi, weather) = tokio::join!(
            self.api.current_aqi(point, at),
            self.api.current_weather(point, at)
        );
        let aqi = aqi?;
        let (weather, weather_error) = match weather {
            Ok(record) => (Some(record), None),
            Err(e) => {
                warn!("Current weather unavailable: {}", e);
                (None, Some(e.status_message()))
            }
        };
        Ok(LiveSnapshot {
            band: aqi.aqi.and_then(AqiBand::from_aqi),
            aqi,
            weather,
            weather_error,
        })
    }

    /// Hourly AQI joined with hourly weather for `date`.
    ///
    /// # Errors
    ///
    /// Fails only if the AQI request fails; hours simply lack weather fields when the
    /// weather request fails.
    pub async fn daily(
        &self,
        point: GeoPoint,
        date: NaiveDate,
    ) -> Result<HourlySeries, AirQualityError> {
        let (aqi, weather) = tokio::join!(
            self.api.hourly_aqi(point, date),
            self.api.hourly_weather(point, date)
        );
        let weather = weather.unwrap_or_else(|e| {
            warn!("Hourly weather for {} unavailable: {}", date, e);
            Vec::new()
        });
        Ok(HourlySeries {
            date,
            points: hourly_series(&aqi?, &weather),
        })
    }

    /// Per-day statistics for the seven days ending at `end`.
    pub async fn weekly(
        &self,
        point: GeoPoint,
        end: NaiveDate,
    ) -> Result<DailySeries, AirQualityError> {
        let bounds = DateWindow::week_ending(end)
            .ok_or(DateWindowError::InvalidDate)?
            .nominal_bounds()?;
        self.daily_points(point, bounds).await
    }

    /// Per-day statistics for `month`, up to `today`.
    ///
    /// # Errors
    ///
    /// [`AirQualityError::DateWindow`] if the month is in the future or too old.
    pub async fn monthly(
        &self,
        point: GeoPoint,
        month: Month,
        today: NaiveDate,
    ) -> Result<DailySeries, AirQualityError> {
        let bounds = DateWindow::Month(month).validate(today)?;
        self.daily_points(point, bounds).await
    }

    async fn daily_points(
        &self,
        point: GeoPoint,
        bounds: StartEndDate,
    ) -> Result<DailySeries, AirQualityError> {
        let records = fetch_aqi_window(self.api, point, bounds).await?;
        Ok(DailySeries {
            bounds,
            points: daily_series(&records),
        })
    }

    /// Loads the data for one view mode.
    ///
    /// `.at(..)` anchors the view: the hour for `Live`, the day for `Daily`, the last
    /// day for `Weekly` and a day in the month for `Monthly`. It defaults to now.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use airquality::{AirQuality, AirQualityError, DashboardView, GeoPoint, ViewMode};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), AirQualityError> {
    /// let client = AirQuality::new().await?;
    /// let view = client
    ///     .dashboard()
    ///     .location(GeoPoint::new(51.51, -0.13))
    ///     .mode(ViewMode::Weekly)
    ///     .call()
    ///     .await?;
    ///
    /// if let DashboardView::Weekly(series) = view {
    ///     for point in series.points {
    ///         println!("{}: {:?}", point.date, point.max_aqi);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        #[builder(default)] mode: ViewMode,
        at: Option<NaiveDateTime>,
    ) -> Result<DashboardView, AirQualityError> {
        let now = Local::now().naive_local();
        let at = at.unwrap_or(now);
        Ok(match mode {
            ViewMode::Live => DashboardView::Live(self.live(point, at).await?),
            ViewMode::Daily => DashboardView::Daily(self.daily(point, at.date()).await?),
            ViewMode::Weekly => DashboardView::Weekly(self.weekly(point, at.date()).await?),
            ViewMode::Monthly => DashboardView::Monthly(
                self.monthly(point, Month::of(at.date()), now.date()).await?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at_hour, date, FakeApi};

    fn london() -> GeoPoint {
        GeoPoint::new(51.51, -0.13)
    }

    #[tokio::test]
    async fn test_live_snapshot_has_band() -> Result<(), Box<dyn std::error::Error>> {
        let api = FakeApi::default().with_current(AqiRecord {
            aqi: Some(72.0),
            pm2_5: Some(22.5),
            ..Default::default()
        });
        let snapshot = DashboardClient::new(&api)
            .live(london(), at_hour(date(2025, 3, 1), 14))
            .await?;
        assert_eq!(snapshot.band, Some(AqiBand::Moderate));
        assert_eq!(snapshot.aqi.date, Some(at_hour(date(2025, 3, 1), 14)));
        assert_eq!(snapshot.weather.and_then(|w| w.temperature), Some(21.0));
        assert!(snapshot.weather_error.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_live_weather_failure_is_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let api = FakeApi::default()
            .with_current(AqiRecord {
                aqi: Some(12.0),
                ..Default::default()
            })
            .failing_weather(503);
        let snapshot = DashboardClient::new(&api)
            .live(london(), at_hour(date(2025, 3, 1), 9))
            .await?;
        assert!(snapshot.weather.is_none());
        assert_eq!(
            snapshot.weather_error,
            Some(StatusMessage::TemporarilyUnavailable)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_live_without_aqi_is_no_data() {
        let api = FakeApi::default();
        let err = DashboardClient::new(&api)
            .live(london(), at_hour(date(2025, 3, 1), 9))
            .await
            .unwrap_err();
        assert_eq!(err.status_message(), StatusMessage::NoData);
    }

    #[tokio::test]
    async fn test_daily_view_joins_weather() -> Result<(), Box<dyn std::error::Error>> {
        let day = date(2025, 3, 2);
        let api = FakeApi::with_hourly_days(&[(day, &[30.0, 35.0, f64::NAN])])
            .with_hourly_weather(day, &[4.0, 5.0]);
        let view = DashboardClient::new(&api)
            .location(london())
            .mode(ViewMode::Daily)
            .at(at_hour(day, 0))
            .call()
            .await?;

        let DashboardView::Daily(series) = view else {
            panic!("expected daily view");
        };
        assert_eq!(series.points.len(), 3);
        assert_eq!(series.points[1].aqi, Some(35.0));
        assert_eq!(series.points[1].temperature, Some(5.0));
        assert_eq!(series.points[2].aqi, None);
        assert_eq!(series.points[2].temperature, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_weekly_view_before_first_date_is_an_error() {
        let api = FakeApi::default();
        let err = DashboardClient::new(&api)
            .weekly(london(), NaiveDate::MIN)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AirQualityError::DateWindow(DateWindowError::InvalidDate)
        ));
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_weekly_view_covers_seven_days() -> Result<(), Box<dyn std::error::Error>> {
        let api = FakeApi::with_hourly_days(&[
            (date(2025, 2, 24), &[10.0]),
            (date(2025, 3, 1), &[40.0, 80.0]),
            (date(2025, 3, 2), &[5.0]),
        ]);
        let series = DashboardClient::new(&api)
            .weekly(london(), date(2025, 3, 1))
            .await?;
        assert_eq!(
            series.bounds,
            StartEndDate::new(date(2025, 2, 23), date(2025, 3, 1))
        );
        assert_eq!(series.points.len(), 2);
        let worst = series.worst_day().unwrap();
        assert_eq!(worst.date, date(2025, 3, 1));
        assert_eq!(worst.average_aqi, Some(60.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_monthly_view_rejects_old_months() {
        let api = FakeApi::default();
        let err = DashboardClient::new(&api)
            .monthly(london(), Month::new(2024, 6), date(2025, 3, 1))
            .await
            .unwrap_err();
        assert_eq!(err.status_message(), StatusMessage::OutOfRange);
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_monthly_view_falls_back_per_day() -> Result<(), Box<dyn std::error::Error>> {
        let api = FakeApi::with_hourly_days(&[(date(2025, 3, 2), &[90.0])]).failing_range(500);
        let series = DashboardClient::new(&api)
            .monthly(london(), Month::new(2025, 3), date(2025, 3, 3))
            .await?;
        assert_eq!(api.day_calls(), 3);
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].max_aqi, Some(90.0));
        Ok(())
    }
}
