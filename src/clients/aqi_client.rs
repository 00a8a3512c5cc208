//! Provides the `AqiClient` for single air-quality requests: the current hour, one day
//! of hourly readings, a range of days, or a server-side analysis.

use crate::api::backend::AirQualityApi;
use crate::error::AirQualityError;
use crate::types::geo_point::GeoPoint;
use crate::types::month::StartEndDate;
use crate::types::records::analysis::AnalysisReport;
use crate::types::records::aqi::AqiRecord;
use bon::bon;
use chrono::{Local, NaiveDate, NaiveDateTime};

/// A client builder for air-quality data.
///
/// Instances are created by calling [`AirQuality::aqi()`](crate::AirQuality::aqi).
pub struct AqiClient<'a, A: AirQualityApi> {
    api: &'a A,
}

#[bon]
impl<'a, A: AirQualityApi> AqiClient<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// The reading for the hour containing `.at(..)` (default: now).
    #[builder(start_fn = current)]
    #[doc(hidden)]
    pub async fn build_current(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        at: Option<NaiveDateTime>,
    ) -> Result<AqiRecord, AirQualityError> {
        let at = at.unwrap_or_else(|| Local::now().naive_local());
        Ok(self.api.current_aqi(point, at).await?)
    }

    /// Hourly readings for `.date(..)` (default: today).
    #[builder(start_fn = hourly)]
    #[doc(hidden)]
    pub async fn build_hourly(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AqiRecord>, AirQualityError> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        Ok(self.api.hourly_aqi(point, date).await?)
    }

    /// Hourly readings for an inclusive span of days, in a single request.
    ///
    /// Unlike the calendar and dashboard views this does not fall back to per-day
    /// requests.
    #[builder(start_fn = range)]
    #[doc(hidden)]
    pub async fn build_range(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        #[builder(start_fn)] span: StartEndDate,
    ) -> Result<Vec<AqiRecord>, AirQualityError> {
        Ok(self.api.hourly_aqi_range(point, span.start, span.end).await?)
    }

    /// Server-side statistics for an inclusive span of days.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use airquality::{AirQuality, AirQualityError, GeoPoint, StartEndDate};
    /// use chrono::NaiveDate;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), AirQualityError> {
    /// let client = AirQuality::new().await?;
    /// let span = StartEndDate::new(
    ///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
    /// );
    /// let report = client.aqi().analyze(GeoPoint::new(40.71, -74.01), span).call().await?;
    /// println!("average {:?}, worst band {:?}", report.average_aqi, report.worst_band());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = analyze)]
    #[doc(hidden)]
    pub async fn build_analyze(
        &self,
        #[builder(start_fn)] point: GeoPoint,
        #[builder(start_fn)] span: StartEndDate,
    ) -> Result<AnalysisReport, AirQualityError> {
        Ok(self.api.analyze(point, span.start, span.end).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusMessage;
    use crate::testing::{at_hour, date, FakeApi};

    fn point() -> GeoPoint {
        GeoPoint::new(40.71, -74.01)
    }

    #[tokio::test]
    async fn test_current_at_hour() -> Result<(), Box<dyn std::error::Error>> {
        let api = FakeApi::default().with_current(AqiRecord {
            aqi: Some(42.0),
            ..Default::default()
        });
        let at = at_hour(date(2025, 4, 2), 8);
        let record = AqiClient::new(&api).current(point()).at(at).call().await?;
        assert_eq!(record.aqi, Some(42.0));
        assert_eq!(record.date, Some(at));
        Ok(())
    }

    #[tokio::test]
    async fn test_hourly_for_date() -> Result<(), Box<dyn std::error::Error>> {
        let day = date(2025, 4, 2);
        let api = FakeApi::with_hourly_days(&[(day, &[1.0, 2.0, 3.0])]);
        let records = AqiClient::new(&api).hourly(point()).date(day).call().await?;
        assert_eq!(records.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_range_does_not_fall_back() {
        let api = FakeApi::with_hourly_days(&[(date(2025, 4, 2), &[1.0])]).failing_range(500);
        let span = StartEndDate::new(date(2025, 4, 1), date(2025, 4, 3));
        let err = AqiClient::new(&api).range(point(), span).call().await.unwrap_err();
        assert_eq!(err.status_message(), StatusMessage::TemporarilyUnavailable);
        assert_eq!(api.day_calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_returns_report() -> Result<(), Box<dyn std::error::Error>> {
        let api = FakeApi::with_hourly_days(&[
            (date(2025, 4, 1), &[10.0]),
            (date(2025, 4, 5), &[20.0]),
        ]);
        let span = StartEndDate::new(date(2025, 4, 1), date(2025, 4, 3));
        let report = AqiClient::new(&api).analyze(point(), span).call().await?;
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.average_aqi, None);
        Ok(())
    }
}
