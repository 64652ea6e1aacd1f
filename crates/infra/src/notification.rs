//! # Notification senders
//!
//! Infrastructure that delivers operator notification emails.
//!
//! ## Design
//!
//! - **trait abstraction**: `NotificationSender` hides the transport
//! - **four implementations**: SendGrid (default, HTTP API), SES, SMTP
//!   (Mailpit for development) and Noop (log only)
//! - **selected at startup**: `NOTIFICATION_BACKEND`. The sender is built
//!   once and shared read-only by every request
//! - **no retry**: a failed send is returned to the caller as-is

mod noop;
mod sendgrid;
mod ses;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
use rigour_domain::notification::{EmailMessage, NotificationError};
pub use sendgrid::SendGridNotificationSender;
pub use ses::SesNotificationSender;
pub use smtp::SmtpNotificationSender;

/// Sends one email
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}

/// Sender address shared by every backend, `NotConfigured` when unset
fn from_address(configured: &Option<String>) -> Result<&str, NotificationError> {
    configured
        .as_deref()
        .ok_or_else(|| NotificationError::NotConfigured("SENDGRID_FROM_EMAIL".to_string()))
}
