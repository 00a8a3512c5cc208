pub mod api_client;
pub mod backend;
pub mod endpoint;
pub mod error;
pub mod requests;
pub mod response_cache;
pub(crate) mod responses;
pub mod sanitize;
pub mod window_fetch;
