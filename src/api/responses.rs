//! The envelope shapes the backend wraps its payloads in.

use serde::Deserialize;

/// A list payload. Different endpoints (and backend versions) return the records bare
/// or under one of several keys; all are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse<T> {
    Bare(Vec<T>),
    Data { data: Vec<T> },
    Hourly { hourly_data: Vec<T> },
    Daily { daily_data: Vec<T> },
}

impl<T> ListResponse<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Bare(records)
            | ListResponse::Data { data: records }
            | ListResponse::Hourly {
                hourly_data: records,
            }
            | ListResponse::Daily {
                daily_data: records,
            } => records,
        }
    }
}

/// A single-record payload, either bare or under `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SingleResponse<T> {
    // Tried first: a bare record would otherwise swallow the wrapper with all fields defaulted.
    Wrapped { data: T },
    Bare(T),
}

impl<T> SingleResponse<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            SingleResponse::Wrapped { data } | SingleResponse::Bare(data) => data,
        }
    }
}
