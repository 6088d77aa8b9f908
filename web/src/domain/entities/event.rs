//! Activity event entity
//!
//! One entry of a user's activity feed: who did what to which recipe, list or person.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of activity, carried on the wire as an integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum EventType {
    Published,
    Forked,
    Updated,
    Made,
    Tipped,
    Followed,
    ListCreated,
    Unknown(i32),
}

impl From<i32> for EventType {
    fn from(code: i32) -> Self {
        match code {
            0 => EventType::Published,
            1 => EventType::Forked,
            2 => EventType::Updated,
            3 => EventType::Made,
            4 => EventType::Tipped,
            5 => EventType::Followed,
            6 => EventType::ListCreated,
            other => EventType::Unknown(other),
        }
    }
}

impl From<EventType> for i32 {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Published => 0,
            EventType::Forked => 1,
            EventType::Updated => 2,
            EventType::Made => 3,
            EventType::Tipped => 4,
            EventType::Followed => 5,
            EventType::ListCreated => 6,
            EventType::Unknown(code) => code,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Published => write!(f, "published"),
            EventType::Forked => write!(f, "forked"),
            EventType::Updated => write!(f, "updated"),
            EventType::Made => write!(f, "made"),
            EventType::Tipped => write!(f, "tipped"),
            EventType::Followed => write!(f, "followed"),
            EventType::ListCreated => write!(f, "list_created"),
            EventType::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}

/// An activity feed event
///
/// Only the fields relevant to `event_type` are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEvent {
    pub event_type: EventType,
    #[serde(default)]
    pub subject_slug: Option<String>,
    #[serde(default)]
    pub subject_fullname: Option<String>,
    #[serde(default)]
    pub author_slug: Option<String>,
    #[serde(default)]
    pub recipe_slug: Option<String>,
    #[serde(default)]
    pub recipe_title: Option<String>,
    #[serde(default)]
    pub obj_slug: Option<String>,
    #[serde(default)]
    pub obj_fullname: Option<String>,
    #[serde(default)]
    pub list_slug: Option<String>,
    #[serde(default)]
    pub list_title: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}
