//! User-facing messages for failed or impossible requests.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to tell the user when a view cannot show data.
///
/// Failures never propagate as panics into a view; they are classified into one of
/// these and displayed inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMessage {
    /// The backend has nothing for this location and date (HTTP 404).
    NoData,
    /// The backend is failing or overloaded (HTTP 500/503); trying later may help.
    TemporarilyUnavailable,
    /// The requested dates fall outside what can be requested.
    OutOfRange,
    /// Any other failure, including network errors.
    Generic,
}

impl StatusMessage {
    /// Classifies an HTTP status.
    ///
    /// # Examples
    ///
    /// ```
    /// use airquality::StatusMessage;
    /// use reqwest::StatusCode;
    ///
    /// assert_eq!(StatusMessage::from_status(StatusCode::NOT_FOUND), StatusMessage::NoData);
    /// assert_eq!(
    ///     StatusMessage::from_status(StatusCode::SERVICE_UNAVAILABLE),
    ///     StatusMessage::TemporarilyUnavailable
    /// );
    /// assert_eq!(StatusMessage::from_status(StatusCode::BAD_REQUEST), StatusMessage::Generic);
    /// ```
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => StatusMessage::NoData,
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                StatusMessage::TemporarilyUnavailable
            }
            _ => StatusMessage::Generic,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            StatusMessage::NoData => "No data available for the selected location and date.",
            StatusMessage::TemporarilyUnavailable => {
                "The data service is temporarily unavailable. Please try again later."
            }
            StatusMessage::OutOfRange => {
                "Data is only available for the current month and the two months before it."
            }
            StatusMessage::Generic => "Failed to load data. Please try again.",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
