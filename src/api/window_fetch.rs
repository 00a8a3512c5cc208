//! Fetching a span of days, with the per-day fallback used when the range endpoint fails.

use crate::api::backend::AirQualityApi;
use crate::api::error::ApiError;
use crate::types::geo_point::GeoPoint;
use crate::types::month::StartEndDate;
use crate::types::records::aqi::AqiRecord;
use crate::types::records::daily_weather::DailyWeather;
use chrono::NaiveDate;
use futures_util::future::join_all;
use log::{debug, warn};

/// Hourly AQI records for every day in `bounds`.
///
/// Tries the range endpoint once. If that fails, requests each day separately and
/// concurrently, keeping the days that succeed (in date order) and dropping the rest.
/// Records dated outside `bounds`, or not dated at all, are discarded either way.
///
/// # Errors
///
/// Returns the range endpoint's error only when every per-day request failed too.
pub async fn fetch_aqi_window<A: AirQualityApi>(
    api: &A,
    point: GeoPoint,
    bounds: StartEndDate,
) -> Result<Vec<AqiRecord>, ApiError> {
    let range_error = match api.hourly_aqi_range(point, bounds.start, bounds.end).await {
        Ok(records) => return Ok(within(records, bounds)),
        Err(e) => e,
    };
    warn!(
        "Range request for {} to {} failed ({}), falling back to {} daily requests",
        bounds.start,
        bounds.end,
        range_error,
        bounds.len()
    );

    let days: Vec<NaiveDate> = bounds.days().collect();
    let results = join_all(days.iter().map(|day| api.hourly_aqi(point, *day))).await;

    let mut records = Vec::new();
    let mut succeeded = 0;
    for (day, result) in days.iter().zip(results) {
        match result {
            Ok(mut day_records) => {
                succeeded += 1;
                records.append(&mut day_records);
            }
            Err(e) => debug!("Discarding {} from fallback: {}", day, e),
        }
    }

    if succeeded == 0 && !days.is_empty() {
        return Err(range_error);
    }
    Ok(within(records, bounds))
}

fn within(mut records: Vec<AqiRecord>, bounds: StartEndDate) -> Vec<AqiRecord> {
    let before = records.len();
    records.retain(|record| record.day().is_some_and(|d| bounds.contains(d)));
    if records.len() < before {
        debug!(
            "Dropped {} AQI records outside {} to {}",
            before - records.len(),
            bounds.start,
            bounds.end
        );
    }
    records
}

/// Daily weather aggregates for every month `bounds` touches, restricted to `bounds`.
///
/// Months are fetched concurrently with no fallback: any failing month fails the call.
pub async fn fetch_weather_window<A: AirQualityApi>(
    api: &A,
    point: GeoPoint,
    bounds: StartEndDate,
) -> Result<Vec<DailyWeather>, ApiError> {
    let months = bounds.months();
    let results = join_all(months.iter().map(|month| api.monthly_weather(point, *month))).await;

    let mut days = Vec::new();
    for result in results {
        days.extend(
            result?
                .into_iter()
                .map(DailyWeather::normalized)
                .filter(|day| day.date.is_some_and(|d| bounds.contains(d))),
        );
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{aqi_record, date, FakeApi};

    fn january() -> StartEndDate {
        StartEndDate::new(date(2025, 1, 1), date(2025, 1, 5))
    }

    #[tokio::test]
    async fn test_range_success_skips_fallback() {
        let api = FakeApi::with_hourly_days(&[(date(2025, 1, 1), &[10.0, 20.0])]);
        let records = fetch_aqi_window(&api, GeoPoint::new(0.0, 0.0), january())
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(api.range_calls(), 1);
        assert_eq!(api.day_calls(), 0);
    }

    #[tokio::test]
    async fn test_range_failure_falls_back_and_drops_failed_days() {
        let api = FakeApi::with_hourly_days(&[
            (date(2025, 1, 1), &[10.0]),
            (date(2025, 1, 2), &[20.0]),
            (date(2025, 1, 4), &[40.0]),
        ])
        .failing_range(500)
        .failing_day(date(2025, 1, 2), 404);

        let records = fetch_aqi_window(&api, GeoPoint::new(0.0, 0.0), january())
            .await
            .unwrap();

        assert_eq!(api.day_calls(), 5);
        let aqi: Vec<_> = records.iter().map(|r| r.aqi).collect();
        assert_eq!(aqi, vec![Some(10.0), Some(40.0)]);
    }

    #[tokio::test]
    async fn test_range_records_outside_bounds_are_dropped() {
        let api = FakeApi::with_hourly_days(&[(date(2025, 1, 5), &[40.0])])
            .with_range_extras(&[(date(2024, 12, 31), &[300.0]), (date(2025, 1, 6), &[400.0])]);
        let records = fetch_aqi_window(&api, GeoPoint::new(0.0, 0.0), january())
            .await
            .unwrap();
        let aqi: Vec<_> = records.iter().map(|r| r.aqi).collect();
        assert_eq!(aqi, vec![Some(40.0)]);
    }

    #[tokio::test]
    async fn test_fallback_records_outside_bounds_are_dropped() {
        let stray = aqi_record(date(2025, 1, 6), 0, Some(90.0));
        let api = FakeApi::with_hourly_days(&[(date(2025, 1, 2), &[20.0])])
            .with_day_record(date(2025, 1, 5), stray)
            .failing_range(500);
        let records = fetch_aqi_window(&api, GeoPoint::new(0.0, 0.0), january())
            .await
            .unwrap();
        let aqi: Vec<_> = records.iter().map(|r| r.aqi).collect();
        assert_eq!(aqi, vec![Some(20.0)]);
    }

    #[tokio::test]
    async fn test_all_days_failing_returns_range_error() {
        let api = FakeApi::default()
            .failing_range(503)
            .failing_all_days(500);
        let err = fetch_aqi_window(&api, GeoPoint::new(0.0, 0.0), january())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_weather_window_spans_months_and_filters() {
        let api = FakeApi::default().with_monthly_weather(&[
            (date(2025, 1, 30), 5.0),
            (date(2025, 1, 31), 6.0),
            (date(2025, 2, 1), 7.0),
            (date(2025, 2, 2), 8.0),
        ]);
        let bounds = StartEndDate::new(date(2025, 1, 31), date(2025, 2, 1));
        let days = fetch_weather_window(&api, GeoPoint::new(0.0, 0.0), bounds)
            .await
            .unwrap();
        let maxes: Vec<_> = days.iter().map(|d| d.temperature_max).collect();
        assert_eq!(maxes, vec![Some(6.0), Some(7.0)]);
        assert_eq!(api.weather_calls(), 2);
    }

    #[tokio::test]
    async fn test_weather_window_has_no_fallback() {
        let api = FakeApi::default().failing_weather(404);
        let err = fetch_weather_window(&api, GeoPoint::new(0.0, 0.0), january())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }
}
