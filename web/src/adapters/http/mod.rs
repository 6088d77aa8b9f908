//! HTTP adapter
//!
//! reqwest implementation of the feed endpoints.

pub mod client;

pub use client::HttpFeedSource;
