//! Gingrsnap web client
//!
//! Paginated activity and recipe feeds for the Gingrsnap recipe site: an
//! owned list model, a pager that loads the next page behind a "load more"
//! control, and HTML rendering of every item. Also carries the signup form
//! rules and transactional mail composition.
//!
//! Layered like the server side: `domain` holds entities and ports,
//! `adapters` implement the ports, `app` holds the services.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::{HttpFeedSource, LogMailer};
pub use app::{EventPager, FeedContext, FeedList, FeedPager, LoadMoreState, LoadOutcome, RecipePager};
pub use config::{Config, FeedKind};
pub use domain::entities::{EventType, FeedEvent, FeedRecipe, PageCursor};
pub use error::{ClientError, ConfigError, FeedError};
