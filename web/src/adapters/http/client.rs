//! HTTP feed endpoint client
//!
//! Both feeds are POSTed as form fields even though they are reads; the
//! endpoints only accept POST.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::domain::entities::{FeedEvent, FeedRecipe, Page, PageRequest};
use crate::domain::ports::FeedSource;
use crate::error::ClientError;

/// Implementation of `FeedSource` over HTTP
#[derive(Clone)]
pub struct HttpFeedSource {
    http: Client,
    base_url: String,
    events_path: String,
    recipes_path: String,
}

impl HttpFeedSource {
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(
            &config.base_url,
            &config.events_path,
            &config.recipes_path,
            config.request_timeout,
        )
    }

    /// Create a new client with explicit configuration
    pub fn new(
        base_url: &str,
        events_path: &str,
        recipes_path: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            events_path: normalize_path(events_path),
            recipes_path: normalize_path(recipes_path),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_form<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        request: &PageRequest,
    ) -> Result<T, ClientError> {
        tracing::debug!(
            path,
            feed_type = %request.feed_type,
            last_timestamp = request.last_timestamp,
            "Requesting feed page"
        );

        let response = self.http.post(self.url(path)).form(request).send().await?;

        handle_response(response).await
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

async fn handle_response<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialization(e.to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

// --- Response Types ---

#[derive(Debug, Deserialize)]
struct EventPageResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    events: Vec<FeedEvent>,
}

#[derive(Debug, Deserialize)]
struct RecipePageResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    recipes: Vec<FeedRecipe>,
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_events(&self, request: &PageRequest) -> Result<Page<FeedEvent>, ClientError> {
        let body: EventPageResponse = self.post_form(&self.events_path, request).await?;
        Ok(into_page(body.error, body.events))
    }

    async fn fetch_recipes(
        &self,
        request: &PageRequest,
    ) -> Result<Page<FeedRecipe>, ClientError> {
        let body: RecipePageResponse = self.post_form(&self.recipes_path, request).await?;
        Ok(into_page(body.error, body.recipes))
    }
}

/// Items that arrive alongside the error flag are discarded
fn into_page<T>(error: bool, items: Vec<T>) -> Page<T> {
    if error {
        Page::failed()
    } else {
        Page::with_items(items)
    }
}
