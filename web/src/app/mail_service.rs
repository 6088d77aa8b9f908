//! Mail service
//!
//! Composes the transactional emails (welcome, feedback, password reset)
//! and hands them to a `Mailer`.

use std::sync::Arc;

use crate::config::MailConfig;
use crate::domain::entities::{Email, MailTemplate, User};
use crate::domain::ports::Mailer;
use crate::error::MailError;

pub struct MailService<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    config: MailConfig,
}

impl<M> MailService<M>
where
    M: Mailer,
{
    pub fn new(mailer: Arc<M>, config: MailConfig) -> Self {
        Self { mailer, config }
    }

    /// Welcome a new member; a no-op when they have no email address
    pub fn compose_welcome(&self, user: &User) -> Option<Email> {
        let recipient = user.email_addr.as_deref().filter(|_| user.has_email())?;

        Some(Email {
            subject: "Welcome to Gingrsnap!".to_string(),
            from: self.config.team_from.clone(),
            recipients: vec![recipient.to_string()],
            template: MailTemplate::Welcome,
            args: vec![
                ("fullname".to_string(), user.fullname.clone()),
                ("slug".to_string(), user.slug.clone()),
            ],
        })
    }

    /// Feedback for the team inbox, signed by the user when there is one
    pub fn compose_feedback(&self, body: &str, user: Option<&User>) -> Email {
        let (subject, from) = match user {
            Some(user) => {
                let address = user
                    .email_addr
                    .as_deref()
                    .filter(|_| user.has_email())
                    .unwrap_or(&self.config.feedback_address);
                (
                    format!("Feedback from {}", user.fullname),
                    format!("'{}' <{}>", user.fullname, address),
                )
            }
            None => (
                "Anonymous Feedback".to_string(),
                format!("Feedback <{}>", self.config.feedback_address),
            ),
        };

        Email {
            subject,
            from,
            recipients: vec![self.config.feedback_inbox.clone()],
            template: MailTemplate::Feedback,
            args: vec![("body".to_string(), body.to_string())],
        }
    }

    pub fn compose_reset_password(
        &self,
        email_addr: &str,
        fullname: &str,
        confirmation_url: &str,
    ) -> Email {
        Email {
            subject: "Reset your Gingrsnap password".to_string(),
            from: self.config.noreply_from.clone(),
            recipients: vec![email_addr.to_string()],
            template: MailTemplate::ResetPassword,
            args: vec![
                ("fullname".to_string(), fullname.to_string()),
                ("confirmationUrl".to_string(), confirmation_url.to_string()),
            ],
        }
    }

    /// Send the welcome email; returns whether one was sent
    pub async fn welcome(&self, user: &User) -> Result<bool, MailError> {
        match self.compose_welcome(user) {
            Some(email) => {
                self.mailer.send(&email).await?;
                Ok(true)
            }
            None => {
                tracing::debug!(user = %user.slug, "No email address, skipping welcome mail");
                Ok(false)
            }
        }
    }

    pub async fn feedback(&self, body: &str, user: Option<&User>) -> Result<(), MailError> {
        self.mailer.send(&self.compose_feedback(body, user)).await
    }

    pub async fn reset_password(
        &self,
        email_addr: &str,
        fullname: &str,
        confirmation_url: &str,
    ) -> Result<(), MailError> {
        let email = self.compose_reset_password(email_addr, fullname, confirmation_url);
        self.mailer.send(&email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_user, RecordingMailer};

    fn create_service() -> (Arc<RecordingMailer>, MailService<RecordingMailer>) {
        let mailer = Arc::new(RecordingMailer::new());
        let service = MailService::new(mailer.clone(), MailConfig::default());
        (mailer, service)
    }

    #[tokio::test]
    async fn welcome_sent_to_user() {
        let (mailer, service) = create_service();

        let sent = service.welcome(&test_user()).await.unwrap();

        assert!(sent);
        let emails = mailer.sent();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].subject, "Welcome to Gingrsnap!");
        assert_eq!(emails[0].from, "Gingrsnap <team@gingrsnap.com>");
        assert_eq!(emails[0].recipients, vec!["alice@example.com".to_string()]);
        assert_eq!(emails[0].template, MailTemplate::Welcome);
    }

    #[tokio::test]
    async fn welcome_skipped_without_email() {
        let (mailer, service) = create_service();
        let mut user = test_user();
        user.email_addr = None;

        let sent = service.welcome(&user).await.unwrap();

        assert!(!sent);
        assert!(mailer.sent().is_empty());
    }

    #[test]
    fn feedback_from_user_with_email() {
        let (_, service) = create_service();

        let email = service.compose_feedback("Love it", Some(&test_user()));

        assert_eq!(email.subject, "Feedback from Alice Waters");
        assert_eq!(email.from, "'Alice Waters' <alice@example.com>");
        assert_eq!(email.recipients, vec!["evan@gingrsnap.com".to_string()]);
        assert_eq!(email.arg("body"), Some("Love it"));
    }

    #[test]
    fn feedback_from_user_without_email() {
        let (_, service) = create_service();
        let mut user = test_user();
        user.email_addr = None;

        let email = service.compose_feedback("Love it", Some(&user));

        assert_eq!(email.from, "'Alice Waters' <feedback@gingrsnap.com>");
    }

    #[tokio::test]
    async fn anonymous_feedback() {
        let (mailer, service) = create_service();

        service.feedback("Where is search?", None).await.unwrap();

        let emails = mailer.sent();
        assert_eq!(emails[0].subject, "Anonymous Feedback");
        assert_eq!(emails[0].from, "Feedback <feedback@gingrsnap.com>");
    }

    #[tokio::test]
    async fn reset_password_mail() {
        let (mailer, service) = create_service();

        service
            .reset_password(
                "alice@example.com",
                "Alice Waters",
                "https://gingrsnap.com/reset/abc123",
            )
            .await
            .unwrap();

        let email = &mailer.sent()[0];
        assert_eq!(email.subject, "Reset your Gingrsnap password");
        assert_eq!(email.from, "Gingrsnap <noreply@gingrsnap.com>");
        assert_eq!(email.recipients, vec!["alice@example.com".to_string()]);
        assert_eq!(
            email.arg("confirmationUrl"),
            Some("https://gingrsnap.com/reset/abc123")
        );
    }
}
