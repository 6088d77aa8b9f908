//! Outgoing email entity

use serde::Serialize;

/// Body template an email is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MailTemplate {
    Welcome,
    Feedback,
    ResetPassword,
}

impl std::fmt::Display for MailTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MailTemplate::Welcome => write!(f, "welcome"),
            MailTemplate::Feedback => write!(f, "feedback"),
            MailTemplate::ResetPassword => write!(f, "reset_password"),
        }
    }
}

/// A composed email, ready for a `Mailer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub subject: String,
    pub from: String,
    pub recipients: Vec<String>,
    pub template: MailTemplate,
    /// Named values handed to the body template
    pub args: Vec<(String, String)>,
}

impl Email {
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
