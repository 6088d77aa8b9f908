//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod mail;

pub use http::HttpFeedSource;
pub use mail::LogMailer;
