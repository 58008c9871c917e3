//! Unified error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unexpected status {status} (expected {expected:?}): {body}")]
    UnexpectedStatus {
        expected: Vec<u16>,
        status: u16,
        body: String,
    },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl HttpError {
    /// The HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::UnexpectedStatus { status, .. } => Some(*status),
            HttpError::RateLimited => Some(429),
            HttpError::Unauthorized => Some(401),
            HttpError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

/// Errors raised while waiting on a server-side asynchronous operation.
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Expected status {expected} not reached after {attempts} attempts (last: {last_status})")]
    StatusNotReached {
        expected: String,
        attempts: u32,
        last_status: String,
    },

    #[error("Operation response carried no href")]
    MissingHref,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Assertion failures raised by the scenario runner.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Listing of {folder} has no entry at index {index} (expected {expected})")]
    MissingEntry {
        folder: String,
        index: usize,
        expected: String,
    },

    #[error("Listing of {folder} at index {index}: expected {expected}, found {actual}")]
    NameMismatch {
        folder: String,
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("Listing of {folder} has {actual} entries, expected {expected}")]
    UnexpectedEntryCount {
        folder: String,
        expected: usize,
        actual: usize,
    },

    #[error("Breed pool is empty")]
    EmptyBreedPool,
}
