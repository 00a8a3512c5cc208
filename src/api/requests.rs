//! JSON request bodies for each endpoint.

use crate::types::geo_point::GeoPoint;
use crate::types::month::Month;
use chrono::NaiveDate;
use serde::Serialize;

/// A serializable request body that also knows how it is cached.
pub trait ApiRequest: Serialize + Send + Sync {
    /// Filename-safe identity of the request, used for the response cache.
    fn cache_key(&self) -> String;

    /// Last day the response describes. Requests whose last day is before today
    /// ask for history, which no longer changes and may be cached.
    fn last_day(&self) -> Option<NaiveDate>;
}

fn coordinate_key(latitude: f64, longitude: f64) -> String {
    format!("{latitude}_{longitude}")
}

#[derive(Debug, Clone, Serialize)]
pub struct PointInTimeRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub hour: u32,
}

impl PointInTimeRequest {
    pub fn new(point: GeoPoint, date: NaiveDate, hour: u32) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            date,
            hour,
        }
    }
}

impl ApiRequest for PointInTimeRequest {
    fn cache_key(&self) -> String {
        format!(
            "{}_{}_{:02}",
            coordinate_key(self.latitude, self.longitude),
            self.date,
            self.hour
        )
    }

    fn last_day(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
}

impl DayRequest {
    pub fn new(point: GeoPoint, date: NaiveDate) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            date,
        }
    }
}

impl ApiRequest for DayRequest {
    fn cache_key(&self) -> String {
        format!("{}_{}", coordinate_key(self.latitude, self.longitude), self.date)
    }

    fn last_day(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RangeRequest {
    pub fn new(point: GeoPoint, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            start_date,
            end_date,
        }
    }
}

impl ApiRequest for RangeRequest {
    fn cache_key(&self) -> String {
        format!(
            "{}_{}_{}",
            coordinate_key(self.latitude, self.longitude),
            self.start_date,
            self.end_date
        )
    }

    fn last_day(&self) -> Option<NaiveDate> {
        Some(self.end_date)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub year: i32,
    pub month: u32,
}

impl MonthRequest {
    pub fn new(point: GeoPoint, month: Month) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            year: month.year(),
            month: month.month(),
        }
    }
}

impl ApiRequest for MonthRequest {
    fn cache_key(&self) -> String {
        format!(
            "{}_{}",
            coordinate_key(self.latitude, self.longitude),
            Month::new(self.year, self.month)
        )
    }

    fn last_day(&self) -> Option<NaiveDate> {
        Month::new(self.year, self.month).last_day()
    }
}
