//! User entity

use serde::{Deserialize, Serialize};

/// A Gingrsnap member, as seen by mail composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub slug: String,
    pub fullname: String,
    #[serde(default)]
    pub email_addr: Option<String>,
}

impl User {
    /// Check if the user gave an email address
    pub fn has_email(&self) -> bool {
        self.email_addr
            .as_deref()
            .map(|addr| !addr.trim().is_empty())
            .unwrap_or(false)
    }
}
