//! SES sender
//!
//! Sends through the AWS SES v2 API. Alternative production backend for
//! deployments that already run inside AWS.

use async_trait::async_trait;
use aws_sdk_sesv2::{
    Client,
    types::{Body, Content, Destination, EmailContent, Message},
};
use rigour_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// SES v2 sender
///
/// `from_address` must be a verified SES identity.
pub struct SesNotificationSender {
    client:       Client,
    from_address: Option<String>,
}

impl SesNotificationSender {
    pub fn new(client: Client, from_address: Option<String>) -> Self {
        Self {
            client,
            from_address,
        }
    }
}

/// Builds one UTF-8 content part, naming the part on failure
fn content_part(data: &str, part: &str) -> Result<Content, NotificationError> {
    Content::builder()
        .data(data)
        .charset("UTF-8")
        .build()
        .map_err(|e| NotificationError::SendFailed(format!("failed to build SES {part}: {e}")))
}

fn email_content(email: &EmailMessage) -> Result<EmailContent, NotificationError> {
    let body = Body::builder()
        .text(content_part(&email.text_body, "text body")?)
        .html(content_part(&email.html_body, "html body")?)
        .build();

    let message = Message::builder()
        .subject(content_part(&email.subject, "subject")?)
        .body(body)
        .build();

    Ok(EmailContent::builder().simple(message).build())
}

#[async_trait]
impl NotificationSender for SesNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let from = super::from_address(&self.from_address)?;
        let mut request = self
            .client
            .send_email()
            .from_email_address(from)
            .destination(Destination::builder().to_addresses(&email.to).build())
            .content(email_content(email)?);

        if let Some(reply_to) = &email.reply_to {
            request = request.reply_to_addresses(reply_to);
        }

        let output = request
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SES send failed: {e}")))?;

        tracing::debug!(message_id = ?output.message_id(), "SES accepted the message");
        Ok(())
    }
}
