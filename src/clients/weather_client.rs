//! Provides the `WeatherClient` for weather requests: the current hour, one day of hourly
//! observations, or a month of daily aggregates.

use crate::api::backend::AirQualityApi;
use crate::error::AirQualityError;
use crate::types::geo_point::GeoPoint;
use crate::types::month::Month;
use crate::types::records::daily_weather::DailyWeather;
use crate::types::records::weather::WeatherRecord;
use bon::bon;
use chrono::{Local, NaiveDate, NaiveDateTime};

/// A client builder for weather data.
///
/// Instances are created by calling [`AirQuality::weather()`](crate::AirQuality::weather).
pub struct WeatherClient<'a, A: AirQualityApi> {
    api: &'a A,
}

#[bon]
impl<'a, A: AirQualityApi> WeatherClient<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    #[builder(start_fn = current)]
    #[doc(hidden)]
    pub async fn build_current(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        at: Option<NaiveDateTime>,
    ) -> Result<WeatherRecord, AirQualityError> {
        let at = at.unwrap_or_else(|| Local::now().naive_local());
        Ok(self.api.current_weather(point, at).await?)
    }

    #[builder(start_fn = hourly)]
    #[doc(hidden)]
    pub async fn build_hourly(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        date: Option<NaiveDate>,
    ) -> Result<Vec<WeatherRecord>, AirQualityError> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        Ok(self.api.hourly_weather(point, date).await?)
    }

    /// One normalized daily aggregate per day of the month, in date order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use airquality::{AirQuality, AirQualityError, GeoPoint, Month};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), AirQualityError> {
    /// let client = AirQuality::new().await?;
    /// let days = client
    ///     .weather()
    ///     .monthly(GeoPoint::new(48.86, 2.35))
    ///     .month(Month::new(2025, 1))
    ///     .call()
    ///     .await?;
    /// for day in days {
    ///     println!("{:?}: {:?} {}", day.date, day.temperature_max, day.icon().name());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = monthly)]
    #[doc(hidden)]
    pub async fn build_monthly(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        month: Option<Month>,
    ) -> Result<Vec<DailyWeather>, AirQualityError> {
        let month = month.unwrap_or_else(|| Month::of(Local::now().date_naive()));
        let mut days: Vec<DailyWeather> = self
            .api
            .monthly_weather(point, month)
            .await?
            .into_iter()
            .map(DailyWeather::normalized)
            .collect();
        days.sort_by_key(|day| day.date);
        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusMessage;
    use crate::testing::{date, FakeApi};

    fn paris() -> GeoPoint {
        GeoPoint::new(48.86, 2.35)
    }

    #[tokio::test]
    async fn test_monthly_is_sorted_and_scoped() -> Result<(), Box<dyn std::error::Error>> {
        let api = FakeApi::default().with_monthly_weather(&[
            (date(2025, 1, 3), 4.0),
            (date(2025, 1, 1), 2.0),
            (date(2025, 2, 1), 9.0),
        ]);
        let days = WeatherClient::new(&api)
            .monthly(paris())
            .month(Month::new(2025, 1))
            .call()
            .await?;
        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![Some(date(2025, 1, 1)), Some(date(2025, 1, 3))]);
        Ok(())
    }

    #[tokio::test]
    async fn test_hourly_weather() -> Result<(), Box<dyn std::error::Error>> {
        let day = date(2025, 1, 9);
        let api = FakeApi::default().with_hourly_weather(day, &[1.5, f64::NAN]);
        let records = WeatherClient::new(&api).hourly(paris()).date(day).call().await?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].temperature, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_weather_failure_is_classified() {
        let api = FakeApi::default().failing_weather(404);
        let err = WeatherClient::new(&api)
            .current(paris())
            .call()
            .await
            .unwrap_err();
        assert_eq!(err.status_message(), StatusMessage::NoData);
    }
}
