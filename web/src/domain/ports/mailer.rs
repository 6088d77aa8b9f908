//! Mail delivery port

use async_trait::async_trait;

use crate::domain::entities::Email;
use crate::error::MailError;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}
