//! SendGrid sender
//!
//! Sends through the SendGrid v3 Web API (`POST /v3/mail/send`).
//! Default backend in production.

use async_trait::async_trait;
use rigour_domain::notification::{EmailMessage, NotificationError};
use serde::Serialize;

use super::NotificationSender;

/// SendGrid v3 sender
///
/// Wraps one `reqwest::Client`, built at startup and reused by every request.
/// A missing API key is not fatal at construction time. Each send then fails
/// with [`NotificationError::NotConfigured`].
pub struct SendGridNotificationSender {
    client:       reqwest::Client,
    base_url:     String,
    api_key:      Option<String>,
    from_address: Option<String>,
}

impl SendGridNotificationSender {
    /// # Arguments
    ///
    /// - `base_url`: API base URL (`https://api.sendgrid.com`)
    /// - `api_key`: `SENDGRID_API_KEY`
    /// - `from_address`: verified sender (`SENDGRID_FROM_EMAIL`)
    pub fn new(base_url: &str, api_key: Option<String>, from_address: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            from_address,
        }
    }
}

// --- v3 mail/send payload ---

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from:             Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to:         Option<Address<'a>>,
    subject:          &'a str,
    content:          [Content<'a>; 2],
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value:        &'a str,
}

impl<'a> MailSendRequest<'a> {
    fn new(from: &'a str, email: &'a EmailMessage) -> Self {
        Self {
            personalizations: [Personalization {
                to: [Address { email: &email.to }],
            }],
            from: Address { email: from },
            reply_to: email.reply_to.as_deref().map(|r| Address { email: r }),
            subject: &email.subject,
            // SendGrid requires text/plain before text/html
            content: [
                Content {
                    content_type: "text/plain",
                    value:        &email.text_body,
                },
                Content {
                    content_type: "text/html",
                    value:        &email.html_body,
                },
            ],
        }
    }
}

#[async_trait]
impl NotificationSender for SendGridNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| NotificationError::NotConfigured("SENDGRID_API_KEY".to_string()))?;
        let from = super::from_address(&self.from_address)?;

        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(api_key)
            .json(&MailSendRequest::new(from, email))
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SendGrid request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "SendGrid accepted the message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotificationError::SendFailed(format!(
            "SendGrid responded with {status}: {body}"
        )))
    }
}
