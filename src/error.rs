use crate::api::error::ApiError;
use crate::status::StatusMessage;
use crate::types::date_window::DateWindowError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    DateWindow(#[from] DateWindowError),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),

    #[error("Cannot compute the centroid of an empty geometry")]
    EmptyGeometry,
}

impl AirQualityError {
    /// The message a view shows instead of its data.
    pub fn status_message(&self) -> StatusMessage {
        match self {
            AirQualityError::Api(e) => e.status_message(),
            AirQualityError::DateWindow(_) => StatusMessage::OutOfRange,
            _ => StatusMessage::Generic,
        }
    }
}
