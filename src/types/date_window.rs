//! Calendar windows (a month or a 7-day week) and the rules deciding which of them
//! may be requested from the backend.

use crate::types::month::{Month, StartEndDate};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How many whole months before the current one a window may start in.
pub const MAX_MONTHS_BACK: i32 = 2;

const WEEK_DAYS: i64 = 7;

/// The span a calendar view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    /// A whole calendar month.
    Month(Month),
    /// Seven consecutive days starting at `start`.
    Week { start: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateWindowError {
    #[error("Window starting {start} lies in the future (today is {today})")]
    Future { start: NaiveDate, today: NaiveDate },

    #[error("Window starting {start} is older than the earliest available month {earliest}")]
    TooOld { start: NaiveDate, earliest: Month },

    #[error("Invalid month {0}")]
    InvalidMonth(Month),

    #[error("Window bounds overflow the supported date range")]
    InvalidDate,
}

impl DateWindow {
    pub fn month(year: i32, month: u32) -> Self {
        DateWindow::Month(Month::new(year, month))
    }

    pub fn week_starting(start: NaiveDate) -> Self {
        DateWindow::Week { start }
    }

    /// The seven days ending at (and including) `end`.
    ///
    /// Returns `None` if the week would start before [`NaiveDate::MIN`].
    pub fn week_ending(end: NaiveDate) -> Option<Self> {
        end.checked_sub_signed(Duration::days(WEEK_DAYS - 1))
            .map(Self::week_starting)
    }

    /// Bounds of the window before any clamping.
    pub fn nominal_bounds(&self) -> Result<StartEndDate, DateWindowError> {
        match *self {
            DateWindow::Month(month) => {
                let start = month
                    .first_day()
                    .ok_or(DateWindowError::InvalidMonth(month))?;
                let end = month
                    .last_day()
                    .ok_or(DateWindowError::InvalidMonth(month))?;
                Ok(StartEndDate::new(start, end))
            }
            DateWindow::Week { start } => {
                let end = start
                    .checked_add_signed(Duration::days(WEEK_DAYS - 1))
                    .ok_or(DateWindowError::InvalidDate)?;
                Ok(StartEndDate::new(start, end))
            }
        }
    }

    /// Checks the window against `today` and returns the bounds to fetch.
    ///
    /// A window may not start after `today`, nor in a month more than
    /// [`MAX_MONTHS_BACK`] months before today's month. The returned end is clamped
    /// to `today`.
    ///
    /// # Errors
    ///
    /// * [`DateWindowError::Future`] for windows starting after `today`.
    /// * [`DateWindowError::TooOld`] for windows starting before the earliest month.
    /// * [`DateWindowError::InvalidMonth`] for a month outside `1..=12`.
    ///
    /// # Examples
    ///
    /// ```
    /// use airquality::{DateWindow, DateWindowError};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    ///
    /// let bounds = DateWindow::month(2025, 3).validate(today).unwrap();
    /// assert_eq!(bounds.end, today);
    ///
    /// assert!(DateWindow::month(2025, 1).validate(today).is_ok());
    /// assert!(matches!(
    ///     DateWindow::month(2024, 12).validate(today),
    ///     Err(DateWindowError::TooOld { .. })
    /// ));
    /// ```
    pub fn validate(&self, today: NaiveDate) -> Result<StartEndDate, DateWindowError> {
        let bounds = self.nominal_bounds()?;
        if bounds.start > today {
            return Err(DateWindowError::Future {
                start: bounds.start,
                today,
            });
        }
        let earliest = Month::of(today)
            .offset(-i64::from(MAX_MONTHS_BACK))
            .ok_or(DateWindowError::InvalidDate)?;
        if Month::of(bounds.start) < earliest {
            return Err(DateWindowError::TooOld {
                start: bounds.start,
                earliest,
            });
        }
        Ok(StartEndDate::new(bounds.start, bounds.end.min(today)))
    }

    /// The window immediately before this one (previous month, or previous 7 days).
    ///
    /// `None` at the edge of the representable dates.
    pub fn previous(&self) -> Option<Self> {
        match *self {
            DateWindow::Month(month) => month.offset(-1).map(DateWindow::Month),
            DateWindow::Week { start } => start
                .checked_sub_signed(Duration::days(WEEK_DAYS))
                .map(Self::week_starting),
        }
    }

    pub fn next(&self) -> Option<Self> {
        match *self {
            DateWindow::Month(month) => month.offset(1).map(DateWindow::Month),
            DateWindow::Week { start } => start
                .checked_add_signed(Duration::days(WEEK_DAYS))
                .map(Self::week_starting),
        }
    }
}

impl From<Month> for DateWindow {
    fn from(month: Month) -> Self {
        DateWindow::Month(month)
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindow::Month(month) => write!(f, "{month}"),
            DateWindow::Week { start } => write!(f, "week of {start}"),
        }
    }
}
