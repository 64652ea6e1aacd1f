//! SMTP sender
//!
//! Sends through lettre's `AsyncSmtpTransport`. In development this points at
//! Mailpit on `localhost:1025`, so submissions can be inspected in a browser.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, MultiPart, SinglePart, header::ContentType},
};
use rigour_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

pub struct SmtpNotificationSender {
    transport:    AsyncSmtpTransport<Tokio1Executor>,
    from_address: Option<String>,
}

impl SmtpNotificationSender {
    /// # Arguments
    ///
    /// - `host`: SMTP host (e.g. "localhost")
    /// - `port`: SMTP port (e.g. 1025 for Mailpit)
    /// - `from_address`: envelope sender
    pub fn new(host: &str, port: u16, from_address: Option<String>) -> Self {
        // plain connection, no TLS: local relays only
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            transport,
            from_address,
        }
    }
}

fn parse_mailbox(address: &str, role: &str) -> Result<Mailbox, NotificationError> {
    address
        .parse()
        .map_err(|e| NotificationError::SendFailed(format!("invalid {role} address {address:?}: {e}")))
}

/// Builds a multipart/alternative message (text first, then HTML)
fn build_message(from: &str, email: &EmailMessage) -> Result<Message, NotificationError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(from, "from")?)
        .to(parse_mailbox(&email.to, "to")?)
        .subject(&email.subject);

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(parse_mailbox(reply_to, "reply-to")?);
    }

    builder
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html_body.clone()),
                ),
        )
        .map_err(|e| NotificationError::SendFailed(format!("failed to build message: {e}")))
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let from = super::from_address(&self.from_address)?;
        let message = build_message(from, email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP send failed: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_email(reply_to: Option<&str>) -> EmailMessage {
        EmailMessage {
            to:        "office@rigourrealty.co.ke".to_string(),
            reply_to:  reply_to.map(str::to_string),
            subject:   "New Contact Form Message - Jane".to_string(),
            html_body: "<p>Hello</p>".to_string(),
            text_body: "Hello".to_string(),
        }
    }

    #[test]
    fn test_sender_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmtpNotificationSender>();
    }

    #[test]
    fn test_build_message_sets_reply_to() {
        let message = build_message("website@rigourrealty.co.ke", &make_email(Some("jane@x.com")))
            .unwrap();

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Reply-To: jane@x.com"), "{raw}");
        assert!(raw.contains("Subject: New Contact Form Message - Jane"), "{raw}");
    }

    #[tokio::test]
    async fn test_send_email_without_sender_is_not_configured() {
        let sender = SmtpNotificationSender::new("localhost", 1025, None);

        let err = sender.send_email(&make_email(None)).await.unwrap_err();

        assert!(
            matches!(err, NotificationError::NotConfigured(key) if key == "SENDGRID_FROM_EMAIL")
        );
    }

    #[test]
    fn test_build_message_rejects_malformed_reply_to() {
        let result = build_message("website@rigourrealty.co.ke", &make_email(Some("not an address")));

        assert!(matches!(result, Err(NotificationError::SendFailed(_))));
    }
}
