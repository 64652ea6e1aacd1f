//! # Notification dispatcher
//!
//! Sends one rendered notification to the operator inbox. The caller awaits
//! the provider call. There is no retry and no queue.

use std::sync::Arc;

use rigour_domain::notification::{EmailMessage, NotificationError, OutboundNotification};
use rigour_infra::NotificationSender;

pub struct NotificationDispatcher {
    sender:           Arc<dyn NotificationSender>,
    operator_address: Option<String>,
}

impl NotificationDispatcher {
    /// # Arguments
    ///
    /// - `sender`: backend built at startup
    /// - `operator_address`: recipient of every notification (`NOTIFICATION_EMAIL`)
    pub fn new(sender: Arc<dyn NotificationSender>, operator_address: Option<String>) -> Self {
        Self {
            sender,
            operator_address,
        }
    }

    /// Addresses the notification to the operator and sends it
    ///
    /// Fails with `NotConfigured` before contacting the provider when no
    /// operator address is configured.
    pub async fn dispatch(&self, notification: OutboundNotification) -> Result<(), NotificationError> {
        let to = self
            .operator_address
            .clone()
            .ok_or_else(|| NotificationError::NotConfigured("NOTIFICATION_EMAIL".to_string()))?;

        let email = EmailMessage {
            to,
            reply_to: Some(notification.reply_to),
            subject: notification.subject,
            html_body: notification.html_body,
            text_body: notification.text_body,
        };

        self.sender.send_email(&email).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rigour_infra::mock::{FailingNotificationSender, MockNotificationSender};

    use super::*;

    fn outbound() -> OutboundNotification {
        OutboundNotification {
            subject:   "New Contact Form Message - Jane".to_string(),
            text_body: "Hello".to_string(),
            html_body: "<p>Hello</p>".to_string(),
            reply_to:  "jane@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_to_operator_with_reply_to() {
        let sender = MockNotificationSender::new();
        let dispatcher = NotificationDispatcher::new(
            Arc::new(sender.clone()),
            Some("office@rigourrealty.co.ke".to_string()),
        );

        dispatcher.dispatch(outbound()).await.unwrap();

        assert_eq!(
            sender.sent_emails(),
            vec![EmailMessage {
                to:        "office@rigourrealty.co.ke".to_string(),
                reply_to:  Some("jane@x.com".to_string()),
                subject:   "New Contact Form Message - Jane".to_string(),
                html_body: "<p>Hello</p>".to_string(),
                text_body: "Hello".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_dispatch_without_operator_address_sends_nothing() {
        let sender = MockNotificationSender::new();
        let dispatcher = NotificationDispatcher::new(Arc::new(sender.clone()), None);

        let err = dispatcher.dispatch(outbound()).await.unwrap_err();

        assert!(matches!(err, NotificationError::NotConfigured(key) if key == "NOTIFICATION_EMAIL"));
        assert!(sender.sent_emails().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_propagates_provider_error() {
        let sender = FailingNotificationSender::new();
        let dispatcher = NotificationDispatcher::new(
            Arc::new(sender.clone()),
            Some("office@rigourrealty.co.ke".to_string()),
        );

        let err = dispatcher.dispatch(outbound()).await.unwrap_err();

        assert!(matches!(err, NotificationError::SendFailed(_)));
        assert_eq!(sender.attempts(), 1);
    }
}
