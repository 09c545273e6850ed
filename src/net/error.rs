//! Error type shared by the REST helpers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{endpoint} failed: {status}")]
    Status { endpoint: String, status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}
