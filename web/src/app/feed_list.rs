//! Feed list model
//!
//! The owned, append-only list of feed items terminated by the "load more"
//! control. Rendering is a projection of this model; nothing else holds list state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{FeedEvent, FeedRecipe, Page, PageCursor, PageRequest};
use crate::domain::ports::FeedSource;
use crate::error::ClientError;
use crate::feed::{render_event_body, render_item, render_recipe_body};

/// An item that can live in a feed list
#[async_trait]
pub trait FeedEntry: Clone + Send + Sync + 'static {
    /// Absolute timestamp, the cursor source for the next page
    fn timestamp(&self) -> DateTime<Utc>;

    /// Render the item as a list element
    fn render(&self, now: DateTime<Utc>) -> askama::Result<String>;

    /// Fetch a page of this item type from its endpoint
    async fn fetch_page<S: FeedSource>(
        source: &S,
        request: &PageRequest,
    ) -> Result<Page<Self>, ClientError>;
}

#[async_trait]
impl FeedEntry for FeedEvent {
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn render(&self, now: DateTime<Utc>) -> askama::Result<String> {
        let body = render_event_body(self)?;
        render_item(&body, self.thumbnail_url.as_deref(), self.created_at, now)
    }

    async fn fetch_page<S: FeedSource>(
        source: &S,
        request: &PageRequest,
    ) -> Result<Page<Self>, ClientError> {
        source.fetch_events(request).await
    }
}

#[async_trait]
impl FeedEntry for FeedRecipe {
    fn timestamp(&self) -> DateTime<Utc> {
        self.modified_at
    }

    fn render(&self, now: DateTime<Utc>) -> askama::Result<String> {
        let body = render_recipe_body(self)?;
        render_item(&body, None, self.modified_at, now)
    }

    async fn fetch_page<S: FeedSource>(
        source: &S,
        request: &PageRequest,
    ) -> Result<Page<Self>, ClientError> {
        source.fetch_recipes(request).await
    }
}

/// State of the "load more" control at the end of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMoreState {
    Ready,
    Loading,
    /// Last request failed; activating the control retries
    Failed { reason: String },
    /// The server had nothing more; terminal
    Removed,
}

impl LoadMoreState {
    pub fn is_present(&self) -> bool {
        !matches!(self, LoadMoreState::Removed)
    }
}

#[derive(Debug, Clone)]
pub struct FeedList<I: FeedEntry> {
    items: Vec<I>,
    /// Timestamp of the last server-rendered item, used until something is appended
    seed: Option<PageCursor>,
    control: LoadMoreState,
}

impl<I: FeedEntry> FeedList<I> {
    /// A list holding already-rendered items
    pub fn new(items: Vec<I>) -> Self {
        Self {
            items,
            seed: None,
            control: LoadMoreState::Ready,
        }
    }

    /// An empty list continuing after a server-rendered page whose last item is at `cursor`
    pub fn resume_after(cursor: PageCursor) -> Self {
        Self {
            items: Vec::new(),
            seed: Some(cursor),
            control: LoadMoreState::Ready,
        }
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn control(&self) -> &LoadMoreState {
        &self.control
    }

    /// Cursor for the next request: the last item's timestamp, else the seed
    pub fn cursor(&self) -> Option<PageCursor> {
        self.items
            .last()
            .map(|item| PageCursor::new(item.timestamp()))
            .or(self.seed)
    }

    pub(crate) fn set_control(&mut self, control: LoadMoreState) {
        // A removed control never comes back
        if self.control.is_present() {
            self.control = control;
        }
    }

    /// Append a page in server order; the control stays last
    pub(crate) fn append(&mut self, page: Vec<I>) {
        self.items.extend(page);
    }
}
