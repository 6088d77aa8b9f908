//! Mail adapter that records outgoing mail in the log

use async_trait::async_trait;

use crate::domain::entities::Email;
use crate::domain::ports::Mailer;
use crate::error::MailError;

#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        if email.recipients.is_empty() {
            return Err(MailError::Delivery("no recipients".to_string()));
        }

        tracing::info!(
            subject = %email.subject,
            from = %email.from,
            to = %email.recipients.join(", "),
            template = %email.template,
            "Sending email"
        );
        Ok(())
    }
}
