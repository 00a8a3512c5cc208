use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar month, stored as `(year, month)` with `month` in `1..=12`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Month(pub i32, pub u32);

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Self(year, month)
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.0
    }

    pub fn month(self) -> u32 {
        self.1
    }

    pub fn is_valid(self) -> bool {
        (1..=12).contains(&self.1)
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, self.1, 1)
    }

    pub fn last_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, self.1, days_in_month(self.0, self.1)?)
    }

    /// Number of months from `self` to `later`; negative if `later` lies before `self`.
    pub fn months_until(self, later: Month) -> i64 {
        (i64::from(later.0) - i64::from(self.0)) * 12 + i64::from(later.1) - i64::from(self.1)
    }

    /// Shifts the month by `offset` months (may be negative).
    ///
    /// Returns `None` when the resulting year does not fit in an `i32`.
    pub fn offset(self, offset: i64) -> Option<Self> {
        let index = (i64::from(self.0) * 12 + i64::from(self.1) - 1).checked_add(offset)?;
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        Some(Self(year, index.rem_euclid(12) as u32 + 1))
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

/// An inclusive span of calendar days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartEndDate {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StartEndDate {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Every day in the span, in order. Empty when `end < start`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The distinct months the span touches, in order.
    pub fn months(&self) -> Vec<Month> {
        if self.is_empty() {
            return Vec::new();
        }
        let first = Month::of(self.start);
        let last = Month::of(self.end);
        (0..=first.months_until(last))
            .filter_map(|offset| first.offset(offset))
            .collect()
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_month_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_day_of_next_month = NaiveDate::from_ymd_opt(next_month_year, next_month, 1)?;
    let last_day_of_current_month = first_day_of_next_month - Duration::days(1);
    Some(last_day_of_current_month.day())
}
