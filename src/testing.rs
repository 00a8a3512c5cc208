//! In-memory backend used by unit tests.

use crate::api::backend::AirQualityApi;
use crate::api::error::ApiError;
use crate::types::geo_point::GeoPoint;
use crate::types::month::Month;
use crate::types::numeric::finite;
use crate::types::records::analysis::AnalysisReport;
use crate::types::records::aqi::AqiRecord;
use crate::types::records::daily_weather::DailyWeather;
use crate::types::records::weather::WeatherRecord;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::StatusCode;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn at_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0).unwrap()
}

pub(crate) fn aqi_record(day: NaiveDate, hour: u32, aqi: Option<f64>) -> AqiRecord {
    AqiRecord {
        date: Some(at_hour(day, hour)),
        aqi,
        ..Default::default()
    }
}

fn http_error(status: u16) -> ApiError {
    ApiError::HttpStatus {
        url: "http://fake.invalid".to_string(),
        status: StatusCode::from_u16(status).unwrap(),
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    hourly: BTreeMap<NaiveDate, Vec<AqiRecord>>,
    range_extras: Vec<AqiRecord>,
    hourly_weather: BTreeMap<NaiveDate, Vec<WeatherRecord>>,
    monthly: Vec<DailyWeather>,
    current: Option<AqiRecord>,
    range_failure: Option<u16>,
    all_days_failure: Option<u16>,
    day_failures: HashMap<NaiveDate, u16>,
    weather_failure: Option<u16>,
    range_calls: AtomicUsize,
    day_calls: AtomicUsize,
    weather_calls: AtomicUsize,
    other_calls: AtomicUsize,
}

impl FakeApi {
    /// One record per value, at hours 0, 1, 2, ... of the day. NaN stands for a null AQI.
    pub(crate) fn with_hourly_days(days: &[(NaiveDate, &[f64])]) -> Self {
        Self::default().with_more_hourly_days(days)
    }

    pub(crate) fn with_more_hourly_days(mut self, days: &[(NaiveDate, &[f64])]) -> Self {
        for (day, values) in days {
            let records = values
                .iter()
                .enumerate()
                .map(|(hour, v)| aqi_record(*day, hour as u32, finite(Some(*v))));
            self.hourly.entry(*day).or_default().extend(records);
        }
        self
    }

    /// Records the range endpoint returns on top of the requested days, whatever the span.
    pub(crate) fn with_range_extras(mut self, days: &[(NaiveDate, &[f64])]) -> Self {
        for (day, values) in days {
            self.range_extras.extend(
                values
                    .iter()
                    .enumerate()
                    .map(|(hour, v)| aqi_record(*day, hour as u32, finite(Some(*v)))),
            );
        }
        self
    }

    /// Adds `record` to the answer for `day`, keeping its own timestamp.
    pub(crate) fn with_day_record(mut self, day: NaiveDate, record: AqiRecord) -> Self {
        self.hourly.entry(day).or_default().push(record);
        self
    }

    pub(crate) fn with_hourly_weather(mut self, day: NaiveDate, temperatures: &[f64]) -> Self {
        let records = temperatures.iter().enumerate().map(|(hour, t)| WeatherRecord {
            date: Some(at_hour(day, hour as u32)),
            temperature: finite(Some(*t)),
            ..Default::default()
        });
        self.hourly_weather.entry(day).or_default().extend(records);
        self
    }

    /// `(day, temperature_max)` rows for the monthly endpoint.
    pub(crate) fn with_monthly_weather(mut self, days: &[(NaiveDate, f64)]) -> Self {
        self.monthly.extend(days.iter().map(|(day, t_max)| DailyWeather {
            date: Some(*day),
            temperature_max: Some(*t_max),
            temperature_min: Some(*t_max - 8.0),
            ..Default::default()
        }));
        self
    }

    pub(crate) fn with_current(mut self, record: AqiRecord) -> Self {
        self.current = Some(record);
        self
    }

    pub(crate) fn failing_range(mut self, status: u16) -> Self {
        self.range_failure = Some(status);
        self
    }

    pub(crate) fn failing_day(mut self, day: NaiveDate, status: u16) -> Self {
        self.day_failures.insert(day, status);
        self
    }

    pub(crate) fn failing_all_days(mut self, status: u16) -> Self {
        self.all_days_failure = Some(status);
        self
    }

    pub(crate) fn failing_weather(mut self, status: u16) -> Self {
        self.weather_failure = Some(status);
        self
    }

    pub(crate) fn range_calls(&self) -> usize {
        self.range_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn day_calls(&self) -> usize {
        self.day_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn weather_calls(&self) -> usize {
        self.weather_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.range_calls() + self.day_calls() + self.weather_calls()
            + self.other_calls.load(Ordering::SeqCst)
    }

    fn records_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<AqiRecord> {
        self.hourly
            .range(start..=end)
            .flat_map(|(_, records)| records.iter().cloned())
            .collect()
    }
}

impl AirQualityApi for FakeApi {
    async fn current_aqi(&self, _point: GeoPoint, at: NaiveDateTime) -> Result<AqiRecord, ApiError> {
        self.other_calls.fetch_add(1, Ordering::SeqCst);
        match &self.current {
            Some(record) => Ok(AqiRecord {
                date: Some(at),
                ..record.clone()
            }),
            None => Err(http_error(404)),
        }
    }

    async fn current_weather(
        &self,
        _point: GeoPoint,
        at: NaiveDateTime,
    ) -> Result<WeatherRecord, ApiError> {
        self.other_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.weather_failure {
            return Err(http_error(status));
        }
        Ok(WeatherRecord {
            date: Some(at),
            temperature: Some(21.0),
            ..Default::default()
        })
    }

    async fn hourly_aqi(&self, _point: GeoPoint, date: NaiveDate) -> Result<Vec<AqiRecord>, ApiError> {
        self.day_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.all_days_failure.or(self.day_failures.get(&date).copied()) {
            return Err(http_error(status));
        }
        Ok(self.hourly.get(&date).cloned().unwrap_or_default())
    }

    async fn hourly_aqi_range(
        &self,
        _point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AqiRecord>, ApiError> {
        self.range_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.range_failure {
            return Err(http_error(status));
        }
        let mut records = self.records_between(start, end);
        records.extend(self.range_extras.iter().cloned());
        Ok(records)
    }

    async fn hourly_weather(
        &self,
        _point: GeoPoint,
        date: NaiveDate,
    ) -> Result<Vec<WeatherRecord>, ApiError> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.weather_failure {
            return Err(http_error(status));
        }
        Ok(self.hourly_weather.get(&date).cloned().unwrap_or_default())
    }

    async fn monthly_weather(
        &self,
        _point: GeoPoint,
        month: Month,
    ) -> Result<Vec<DailyWeather>, ApiError> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.weather_failure {
            return Err(http_error(status));
        }
        Ok(self
            .monthly
            .iter()
            .filter(|day| day.date.map(Month::of) == Some(month))
            .cloned()
            .collect())
    }

    async fn analyze(
        &self,
        _point: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AnalysisReport, ApiError> {
        self.other_calls.fetch_add(1, Ordering::SeqCst);
        Ok(AnalysisReport {
            records: self.records_between(start, end),
            ..Default::default()
        })
    }
}
