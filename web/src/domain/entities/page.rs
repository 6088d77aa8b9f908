//! Paging primitives shared by both feeds

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Timestamp boundary where the next page resumes
///
/// Always taken from an item's absolute timestamp, never from its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCursor(DateTime<Utc>);

impl PageCursor {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Cursor from a milliseconds timestamp; `None` when out of range
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for PageCursor {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl std::fmt::Display for PageCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_millis())
    }
}

/// Form fields of a page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub feed_type: String,
    /// Milliseconds since the epoch of the last rendered item
    pub last_timestamp: i64,
    pub user_id: i64,
    pub page_size: u32,
}

/// A decoded page response
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The endpoint's explicit error flag
    pub error: bool,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            error: false,
            items,
        }
    }

    pub fn failed() -> Self {
        Self {
            error: true,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_millis() {
        let cursor = PageCursor::from_millis(1_300_000_000_123).unwrap();

        assert_eq!(cursor.as_millis(), 1_300_000_000_123);
        assert_eq!(cursor.to_string(), "1300000000123");
    }

    #[test]
    fn page_request_form_encoding_names() {
        let request = PageRequest {
            feed_type: "home".to_string(),
            last_timestamp: 1_300_000_000_000,
            user_id: 7,
            page_size: 10,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["feedType"], "home");
        assert_eq!(json["lastTimestamp"], 1_300_000_000_000_i64);
        assert_eq!(json["userId"], 7);
        assert_eq!(json["pageSize"], 10);
    }
}
