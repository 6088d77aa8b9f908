//! Domain ports (traits)
//!
//! Port traits define interfaces that the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_source;
pub mod mailer;

pub use feed_source::FeedSource;
pub use mailer::Mailer;
