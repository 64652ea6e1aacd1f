//! Noop sender
//!
//! Logs instead of sending. Used when `NOTIFICATION_BACKEND=noop`, e.g. for
//! front-end development without provider credentials.

use async_trait::async_trait;
use rigour_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(
            to = %email.to,
            reply_to = email.reply_to.as_deref().unwrap_or("-"),
            subject = %email.subject,
            "Noop: skipping email send"
        );
        Ok(())
    }
}
