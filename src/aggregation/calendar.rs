//! Lines per-day AQI maxima and daily weather up against a calendar grid.

use crate::status::StatusMessage;
use crate::types::aqi_band::AqiBand;
use crate::types::date_window::DateWindow;
use crate::types::month::StartEndDate;
use crate::types::records::daily_weather::DailyWeather;
use crate::types::timestamp::day_key;
use crate::types::weather_icon::WeatherIcon;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Everything one calendar cell shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    /// Highest hourly AQI of the day; `None` means no data, not zero.
    pub max_aqi: Option<f64>,
    pub band: Option<AqiBand>,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub icon: WeatherIcon,
}

/// A loaded calendar: the window, the raw reconciled inputs, and one cell per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMonth {
    pub window: DateWindow,
    /// The days actually fetched (the window clamped to today).
    pub fetched: StartEndDate,
    pub max_aqi: BTreeMap<NaiveDate, f64>,
    pub weather: Vec<DailyWeather>,
    /// Set when the weather request failed; AQI cells are still populated.
    pub weather_error: Option<StatusMessage>,
    /// One cell per day of the whole window, including days after `fetched.end`.
    pub days: Vec<DailyAggregate>,
}

impl CalendarMonth {
    /// Builds the calendar cells for `window`.
    ///
    /// Each day of the nominal window gets a cell. AQI and weather are matched by
    /// calendar-day key; when several weather rows share a day the first one wins.
    pub fn assemble(
        window: DateWindow,
        nominal: StartEndDate,
        fetched: StartEndDate,
        max_aqi: BTreeMap<NaiveDate, f64>,
        weather: Vec<DailyWeather>,
        weather_error: Option<StatusMessage>,
    ) -> Self {
        let mut weather_by_day: HashMap<String, &DailyWeather> = HashMap::new();
        for day in &weather {
            if let Some(key) = day.day_key() {
                weather_by_day.entry(key).or_insert(day);
            }
        }

        let days = nominal
            .days()
            .map(|date| {
                let max = max_aqi.get(&date).copied();
                let day_weather = weather_by_day.get(&day_key(date)).copied();
                DailyAggregate {
                    date,
                    max_aqi: max,
                    band: max.and_then(AqiBand::from_aqi),
                    temperature_max: day_weather.and_then(|w| w.temperature_max),
                    temperature_min: day_weather.and_then(|w| w.temperature_min),
                    icon: day_weather.map(DailyWeather::icon).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            window,
            fetched,
            max_aqi,
            weather,
            weather_error,
            days,
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DailyAggregate> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Cells laid out in Sunday-first weeks, padded with `None` before the first day
    /// and after the last.
    pub fn weeks(&self) -> Vec<[Option<&DailyAggregate>; 7]> {
        let Some(first) = self.days.first() else {
            return Vec::new();
        };
        let leading = first.date.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::new();
        let mut week: [Option<&DailyAggregate>; 7] = [None; 7];
        let mut column = leading;
        for day in &self.days {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column != 0 {
            weeks.push(week);
        }
        weeks
    }

    /// Highest daily maximum in the window, with its date.
    pub fn worst_day(&self) -> Option<(NaiveDate, f64)> {
        self.max_aqi
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(d, v)| (*d, *v))
    }
}
