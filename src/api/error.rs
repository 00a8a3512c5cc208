use crate::status::StatusMessage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    #[error("Failed to parse JSON response from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read cache file '{0}'")]
    CacheRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write cache file '{0}'")]
    CacheWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode cache data from '{0}'")]
    CacheDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode cache data")]
    CacheEncode(#[source] Box<bincode::error::EncodeError>),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            ApiError::NetworkRequest(_, e) | ApiError::ResponseBody(_, e) => e.status(),
            _ => None,
        }
    }

    /// The message to show in place of the data this request would have produced.
    pub fn status_message(&self) -> StatusMessage {
        self.status()
            .map(StatusMessage::from_status)
            .unwrap_or(StatusMessage::Generic)
    }
}
