//! Feed pager
//!
//! Loads the next page of a feed when the "load more" control is activated
//! and appends it to the owned `FeedList`. One pager drives one list; the
//! event and recipe feeds are two instantiations of the same type.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::app::{FeedEntry, FeedList, LoadMoreState};
use crate::config::Config;
use crate::domain::entities::{FeedEvent, FeedRecipe, PageCursor, PageRequest};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;
use crate::feed::render_list;

/// Shown next to the control after a failed page load
const FAILED_REASON: &str = "Couldn't load more items.";

/// The request fields that stay fixed for a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedContext {
    pub feed_type: String,
    pub user_id: i64,
    pub page_size: u32,
}

impl FeedContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            feed_type: config.feed_type.clone(),
            user_id: config.user_id,
            page_size: config.page_size,
        }
    }

    fn request(&self, cursor: PageCursor) -> PageRequest {
        PageRequest {
            feed_type: self.feed_type.clone(),
            last_timestamp: cursor.as_millis(),
            user_id: self.user_id,
            page_size: self.page_size,
        }
    }
}

/// Result of activating the control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many items were appended before the control
    Appended(usize),
    /// The feed has no more items and the control is gone
    Exhausted,
    /// A request is already in flight; nothing was sent
    AlreadyLoading,
}

pub type EventPager<S> = FeedPager<S, FeedEvent>;
pub type RecipePager<S> = FeedPager<S, FeedRecipe>;

pub struct FeedPager<S, I>
where
    S: FeedSource,
    I: FeedEntry,
{
    source: Arc<S>,
    context: FeedContext,
    list: Mutex<FeedList<I>>,
    disposed: watch::Sender<bool>,
}

impl<S, I> FeedPager<S, I>
where
    S: FeedSource,
    I: FeedEntry,
{
    pub fn new(source: Arc<S>, context: FeedContext, list: FeedList<I>) -> Self {
        let (disposed, _) = watch::channel(false);
        Self {
            source,
            context,
            list: Mutex::new(list),
            disposed,
        }
    }

    /// Activate the "load more" control
    ///
    /// Marks the control loading, requests the page after the current cursor and
    /// applies the response to the list. While a request is in flight further
    /// calls return `AlreadyLoading` without sending anything.
    pub async fn load_more(&self) -> Result<LoadOutcome, FeedError> {
        let mut disposed = self.disposed.subscribe();
        if *disposed.borrow() {
            return Err(FeedError::Cancelled);
        }

        let request = {
            let mut list = self.lock();
            match list.control() {
                LoadMoreState::Removed => return Ok(LoadOutcome::Exhausted),
                LoadMoreState::Loading => {
                    tracing::debug!(feed_type = %self.context.feed_type, "Page already loading");
                    return Ok(LoadOutcome::AlreadyLoading);
                }
                LoadMoreState::Ready | LoadMoreState::Failed { .. } => {}
            }

            let cursor = list.cursor().ok_or(FeedError::NoCursor)?;
            list.set_control(LoadMoreState::Loading);
            self.context.request(cursor)
        };
        let in_flight = InFlight::new(&self.list);

        let fetched = tokio::select! {
            result = I::fetch_page(self.source.as_ref(), &request) => result,
            _ = disposed.wait_for(|disposed| *disposed) => {
                tracing::debug!(feed_type = %self.context.feed_type, "Page request cancelled");
                return Err(FeedError::Cancelled);
            }
        };

        in_flight.finish();
        let mut list = self.lock();
        match fetched {
            Ok(page) if page.error => {
                tracing::warn!(
                    feed_type = %self.context.feed_type,
                    last_timestamp = request.last_timestamp,
                    "Server reported an error loading feed page"
                );
                list.set_control(LoadMoreState::Failed {
                    reason: FAILED_REASON.to_string(),
                });
                Err(FeedError::Server)
            }
            Ok(page) if page.items.is_empty() => {
                tracing::info!(feed_type = %self.context.feed_type, "Feed exhausted");
                list.set_control(LoadMoreState::Removed);
                Ok(LoadOutcome::Exhausted)
            }
            Ok(page) => {
                let count = page.items.len();
                list.append(page.items);
                list.set_control(LoadMoreState::Ready);
                tracing::info!(
                    feed_type = %self.context.feed_type,
                    count,
                    total = list.len(),
                    "Appended feed page"
                );
                Ok(LoadOutcome::Appended(count))
            }
            Err(e) => {
                tracing::warn!(feed_type = %self.context.feed_type, "Feed page request failed: {}", e);
                list.set_control(LoadMoreState::Failed {
                    reason: FAILED_REASON.to_string(),
                });
                Err(e.into())
            }
        }
    }

    /// Dispose of the control, cancelling any in-flight request
    pub fn dispose(&self) {
        self.disposed.send_replace(true);
    }

    pub fn is_disposed(&self) -> bool {
        *self.disposed.borrow()
    }

    pub fn control(&self) -> LoadMoreState {
        self.lock().control().clone()
    }

    pub fn cursor(&self) -> Option<PageCursor> {
        self.lock().cursor()
    }

    /// Copy of the current list model
    pub fn snapshot(&self) -> FeedList<I> {
        self.lock().clone()
    }

    /// Project the list to HTML
    pub fn render(&self, now: DateTime<Utc>) -> Result<String, FeedError> {
        let list = self.lock();
        Ok(render_list(&*list, now)?)
    }

    fn lock(&self) -> MutexGuard<'_, FeedList<I>> {
        self.list.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks a page request in flight
///
/// Dropped before `finish`, it puts a `Loading` control back to `Ready` so the
/// next activation sends a fresh request. This covers disposal as well as a
/// caller dropping the `load_more` future.
struct InFlight<'a, I: FeedEntry> {
    list: &'a Mutex<FeedList<I>>,
    finished: bool,
}

impl<'a, I: FeedEntry> InFlight<'a, I> {
    fn new(list: &'a Mutex<FeedList<I>>) -> Self {
        Self {
            list,
            finished: false,
        }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl<I: FeedEntry> Drop for InFlight<'_, I> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut list = self.list.lock().unwrap_or_else(PoisonError::into_inner);
        if *list.control() == LoadMoreState::Loading {
            list.set_control(LoadMoreState::Ready);
        }
    }
}
