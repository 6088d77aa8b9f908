//! Feed endpoint port

use async_trait::async_trait;

use crate::domain::entities::{FeedEvent, FeedRecipe, Page, PageRequest};
use crate::error::ClientError;

/// Source of feed pages
///
/// One method per endpoint; each takes the same four form fields.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the next page of the activity feed
    async fn fetch_events(&self, request: &PageRequest) -> Result<Page<FeedEvent>, ClientError>;

    /// Fetch the next page of the recipe feed
    async fn fetch_recipes(&self, request: &PageRequest)
        -> Result<Page<FeedRecipe>, ClientError>;
}
