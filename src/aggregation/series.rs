//! Reshapes hourly records into the chart series the dashboard views plot.

use crate::aggregation::daily_max::max_aqi;
use crate::types::aqi_band::AqiBand;
use crate::types::numeric::{finite, Mean};
use crate::types::records::aqi::AqiRecord;
use crate::types::records::weather::WeatherRecord;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BTreeMap;

/// One hour on the daily view's charts. AQI and weather for the same hour are joined.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HourlyPoint {
    pub time: NaiveDateTime,
    pub aqi: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation: Option<f64>,
}

/// One day on the weekly and monthly views' charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub average_aqi: Option<f64>,
    pub max_aqi: Option<f64>,
    pub min_aqi: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
    /// Number of hourly records that fell on this day.
    pub samples: usize,
}

impl DailyPoint {
    /// Band of the day's worst hour.
    pub fn band(&self) -> Option<AqiBand> {
        self.max_aqi.and_then(AqiBand::from_aqi)
    }
}

#[derive(Default)]
struct PollutantMeans {
    aqi: Mean,
    pm2_5: Mean,
    pm10: Mean,
    o3: Mean,
    no2: Mean,
    so2: Mean,
    co: Mean,
}

impl PollutantMeans {
    fn push(&mut self, record: &AqiRecord) {
        self.aqi.push(record.aqi);
        self.pm2_5.push(record.pm2_5);
        self.pm10.push(record.pm10);
        self.o3.push(record.o3);
        self.no2.push(record.no2);
        self.so2.push(record.so2);
        self.co.push(record.co);
    }
}

#[derive(Default)]
struct WeatherMeans {
    temperature: Mean,
    humidity: Mean,
    wind_speed: Mean,
    precipitation: Mean,
}

fn truncate_to_hour(time: NaiveDateTime) -> NaiveDateTime {
    time.date().and_hms_opt(time.hour(), 0, 0).unwrap_or(time)
}

/// Joins hourly AQI and weather records into one point per hour, sorted by time.
///
/// Timestamps are truncated to the hour; when the backend repeats an hour the values
/// are averaged. Records without a timestamp are dropped.
pub fn hourly_series(aqi: &[AqiRecord], weather: &[WeatherRecord]) -> Vec<HourlyPoint> {
    let mut hours: BTreeMap<NaiveDateTime, (PollutantMeans, WeatherMeans)> = BTreeMap::new();

    for record in aqi {
        if let Some(time) = record.date {
            hours.entry(truncate_to_hour(time)).or_default().0.push(record);
        }
    }
    for record in weather {
        if let Some(time) = record.date {
            let means = &mut hours.entry(truncate_to_hour(time)).or_default().1;
            means.temperature.push(record.temperature);
            means.humidity.push(record.humidity);
            means.wind_speed.push(record.wind_speed);
            means.precipitation.push(record.precipitation);
        }
    }

    hours
        .into_iter()
        .map(|(time, (pollutants, weather))| HourlyPoint {
            time,
            aqi: pollutants.aqi.value(),
            pm2_5: pollutants.pm2_5.value(),
            pm10: pollutants.pm10.value(),
            o3: pollutants.o3.value(),
            no2: pollutants.no2.value(),
            so2: pollutants.so2.value(),
            co: pollutants.co.value(),
            temperature: weather.temperature.value(),
            humidity: weather.humidity.value(),
            wind_speed: weather.wind_speed.value(),
            precipitation: weather.precipitation.value(),
        })
        .collect()
}

/// Reduces hourly AQI records to one point per day, sorted by date.
///
/// Averages and extremes ignore missing values; a field with no usable values on a
/// day is `None`.
pub fn daily_series(records: &[AqiRecord]) -> Vec<DailyPoint> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&AqiRecord>> = BTreeMap::new();
    for record in records {
        if let Some(day) = record.day() {
            by_day.entry(day).or_default().push(record);
        }
    }

    by_day
        .into_iter()
        .map(|(date, day_records)| {
            let mut means = PollutantMeans::default();
            day_records.iter().for_each(|r| means.push(r));
            let min_aqi = day_records
                .iter()
                .filter_map(|r| finite(r.aqi))
                .map(OrderedFloat)
                .min()
                .map(|min| min.0);
            DailyPoint {
                date,
                average_aqi: means.aqi.value(),
                max_aqi: max_aqi(day_records.iter().copied()),
                min_aqi,
                pm2_5: means.pm2_5.value(),
                pm10: means.pm10.value(),
                o3: means.o3.value(),
                no2: means.no2.value(),
                so2: means.so2.value(),
                co: means.co.value(),
                samples: day_records.len(),
            }
        })
        .collect()
}
