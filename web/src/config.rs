use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Which paginated feed to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Events,
    Recipes,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Events => write!(f, "events"),
            FeedKind::Recipes => write!(f, "recipes"),
        }
    }
}

impl FromStr for FeedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "events" => Ok(FeedKind::Events),
            "recipes" => Ok(FeedKind::Recipes),
            _ => Err(format!("Unknown feed: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub events_path: String,
    pub recipes_path: String,
    /// Owner of the feed being paged
    pub user_id: i64,
    /// Feed-type discriminator sent with every page request
    pub feed_type: String,
    pub page_size: u32,
    pub request_timeout: Duration,
    pub feed: FeedKind,
    /// Milliseconds timestamp of the last server-rendered item
    pub start_cursor: Option<i64>,
    pub max_pages: u32,
    pub mail: MailConfig,
}

/// Sender and recipient addresses for transactional mail
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub team_from: String,
    pub noreply_from: String,
    pub feedback_inbox: String,
    pub feedback_address: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            team_from: "Gingrsnap <team@gingrsnap.com>".to_string(),
            noreply_from: "Gingrsnap <noreply@gingrsnap.com>".to_string(),
            feedback_inbox: "evan@gingrsnap.com".to_string(),
            feedback_address: "feedback@gingrsnap.com".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let user_id = lookup("GINGRSNAP_USER_ID")
            .ok_or_else(|| ConfigError::Missing("GINGRSNAP_USER_ID".to_string()))?;
        let user_id = parse_var("GINGRSNAP_USER_ID", &user_id)?;

        let page_size: u32 = parse_var("GINGRSNAP_PAGE_SIZE", &or_default("GINGRSNAP_PAGE_SIZE", "10"))?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                var: "GINGRSNAP_PAGE_SIZE".to_string(),
                value: "0".to_string(),
            });
        }

        let timeout_secs: u64 = parse_var(
            "GINGRSNAP_REQUEST_TIMEOUT_SECS",
            &or_default("GINGRSNAP_REQUEST_TIMEOUT_SECS", "30"),
        )?;

        let start_cursor = lookup("GINGRSNAP_START_CURSOR")
            .map(|value| parse_var("GINGRSNAP_START_CURSOR", &value))
            .transpose()?;

        Ok(Self {
            base_url: or_default("GINGRSNAP_BASE_URL", "http://localhost:9000"),
            events_path: or_default("GINGRSNAP_EVENTS_PATH", "/feeds/events"),
            recipes_path: or_default("GINGRSNAP_RECIPES_PATH", "/feeds/recipes"),
            user_id,
            feed_type: or_default("GINGRSNAP_FEED_TYPE", "home"),
            page_size,
            request_timeout: Duration::from_secs(timeout_secs),
            feed: parse_var("GINGRSNAP_FEED", &or_default("GINGRSNAP_FEED", "events"))?,
            start_cursor,
            max_pages: parse_var("GINGRSNAP_MAX_PAGES", &or_default("GINGRSNAP_MAX_PAGES", "5"))?,
            mail: MailConfig::default(),
        })
    }
}

fn parse_var<T: FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var: var.to_string(),
        value: value.to_string(),
    })
}
