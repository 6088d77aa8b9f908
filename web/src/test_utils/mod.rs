//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks script feed responses page by page and record every request,
//! so tests can assert on cursors without a server.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
