//! # In-memory senders for tests
//!
//! Available to other crates through the `test-utils` feature.
//!
//! ```toml
//! [dev-dependencies]
//! rigour-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use rigour_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

// ===== MockNotificationSender =====

/// Records every email and always succeeds
///
/// Clones share the same record, so a test can keep one handle and give the
/// other to the app.
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent_emails: Arc<Mutex<Vec<EmailMessage>>>,
    latency:     Option<Duration>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits `latency` before recording each email, like a slow provider
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.sent_emails.lock().unwrap().push(email.clone());
        Ok(())
    }
}

// ===== FailingNotificationSender =====

/// Counts attempts and always fails with `SendFailed`
#[derive(Clone, Default)]
pub struct FailingNotificationSender {
    attempts: Arc<Mutex<usize>>,
}

impl FailingNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl NotificationSender for FailingNotificationSender {
    async fn send_email(&self, _email: &EmailMessage) -> Result<(), NotificationError> {
        *self.attempts.lock().unwrap() += 1;
        Err(NotificationError::SendFailed(
            "provider rejected the message: 401 unauthorized".to_string(),
        ))
    }
}
