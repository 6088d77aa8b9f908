//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, RwLock};

use tokio::sync::Notify;

use crate::domain::entities::{Email, FeedEvent, FeedRecipe, Page, PageRequest};
use crate::domain::ports::{FeedSource, Mailer};
use crate::error::{ClientError, MailError};

// ============================================================================
// In-Memory Feed Source
// ============================================================================

/// One scripted endpoint response
#[derive(Debug, Clone)]
pub enum ScriptedPage<T> {
    Items(Vec<T>),
    /// `{"error": true}`
    ErrorFlag,
    /// Non-2xx status
    Fail(u16),
}

impl<T> ScriptedPage<T> {
    fn into_result(self) -> Result<Page<T>, ClientError> {
        match self {
            ScriptedPage::Items(items) => Ok(Page::with_items(items)),
            ScriptedPage::ErrorFlag => Ok(Page::failed()),
            ScriptedPage::Fail(status) => Err(ClientError::Api {
                status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

#[derive(Default)]
pub struct InMemoryFeedSource {
    event_pages: Mutex<VecDeque<ScriptedPage<FeedEvent>>>,
    recipe_pages: Mutex<VecDeque<ScriptedPage<FeedRecipe>>>,
    requests: RwLock<Vec<PageRequest>>,
    event_calls: RwLock<usize>,
    recipe_calls: RwLock<usize>,
    gate: Option<Notify>,
}

impl InMemoryFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next event page; an empty queue answers with no items
    pub fn with_event_page(self, page: ScriptedPage<FeedEvent>) -> Self {
        self.event_pages.lock().unwrap().push_back(page);
        self
    }

    pub fn with_recipe_page(self, page: ScriptedPage<FeedRecipe>) -> Self {
        self.recipe_pages.lock().unwrap().push_back(page);
        self
    }

    /// Hold every response until `release` is called
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.read().unwrap().clone()
    }

    pub fn event_requests(&self) -> usize {
        *self.event_calls.read().unwrap()
    }

    pub fn recipe_requests(&self) -> usize {
        *self.recipe_calls.read().unwrap()
    }

    /// Yield until at least `count` requests were received
    pub async fn wait_for_requests(&self, count: usize) {
        while self.requests.read().unwrap().len() < count {
            tokio::task::yield_now().await;
        }
    }

    async fn record(&self, request: &PageRequest) {
        self.requests.write().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn fetch_events(&self, request: &PageRequest) -> Result<Page<FeedEvent>, ClientError> {
        *self.event_calls.write().unwrap() += 1;
        self.record(request).await;
        let page = self.event_pages.lock().unwrap().pop_front();
        page.unwrap_or(ScriptedPage::Items(vec![])).into_result()
    }

    async fn fetch_recipes(
        &self,
        request: &PageRequest,
    ) -> Result<Page<FeedRecipe>, ClientError> {
        *self.recipe_calls.write().unwrap() += 1;
        self.record(request).await;
        let page = self.recipe_pages.lock().unwrap().pop_front();
        page.unwrap_or(ScriptedPage::Items(vec![])).into_result()
    }
}

// ============================================================================
// Recording Mailer
// ============================================================================

#[derive(Default)]
pub struct RecordingMailer {
    sent: RwLock<Vec<Email>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        self.sent.write().unwrap().push(email.clone());
        Ok(())
    }
}
