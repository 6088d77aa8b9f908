//! Unified error types for the Gingrsnap web client
//!
//! This module defines error types for each layer:
//! - `ClientError`: HTTP feed endpoint errors
//! - `FeedError`: Pager errors (wraps client errors, server error flags, cancellation)
//! - `ConfigError`: Environment configuration errors
//! - `MailError`: Mail delivery errors

use thiserror::Error;

/// Feed endpoint client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Pager errors returned from `FeedPager::load_more`
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed request failed: {0}")]
    Client(#[from] ClientError),

    /// The endpoint answered with `"error": true`
    #[error("Server reported an error while loading the feed")]
    Server,

    #[error("No items rendered yet, nothing to page from")]
    NoCursor,

    #[error("Feed request cancelled")]
    Cancelled,

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl FeedError {
    /// Whether activating the control again may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeedError::Client(_) | FeedError::Server)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: String, value: String },
}

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}
