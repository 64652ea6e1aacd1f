//! # Notification
//!
//! Domain model of the operator notification that each accepted submission
//! produces.
//!
//! ## Domain terms
//!
//! | Type | Meaning |
//! |---|---|
//! | [`FormNotification`] | accepted submission waiting to be rendered |
//! | [`OutboundNotification`] | rendered subject and bodies plus the reply-to address |
//! | [`EmailMessage`] | what a `NotificationSender` actually sends (adds the recipient) |
//!
//! ## Design
//!
//! - **one email per submission**: no retry, no queue, no persistence
//! - **template separation**: rendering lives in the app
//!   (`TemplateRenderer`), sending lives in infra (`NotificationSender`)

use thiserror::Error;

use crate::{
    FormKind,
    Reference,
    submission::{ContactSubmission, QuoteSubmission},
};

/// Notification failure
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The provider rejected the message or could not be reached
    #[error("email send failed: {0}")]
    SendFailed(String),

    /// The message could not be rendered
    #[error("template rendering failed: {0}")]
    TemplateFailed(String),

    /// A required setting (API key, operator address) is missing
    #[error("notification is not configured: {0}")]
    NotConfigured(String),
}

/// Email handed to a sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to:        String,
    pub reply_to:  Option<String>,
    pub subject:   String,
    pub html_body: String,
    pub text_body: String,
}

/// Rendered notification that has no recipient yet
///
/// The dispatcher adds the operator address and turns this into an
/// [`EmailMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundNotification {
    pub subject:   String,
    pub text_body: String,
    pub html_body: String,
    pub reply_to:  String,
}

/// Accepted submission, one variant per public form
#[derive(Debug, Clone)]
pub enum FormNotification {
    Contact(ContactSubmission),
    Quote {
        reference:  Reference,
        submission: QuoteSubmission,
    },
}

impl FormNotification {
    pub fn form_kind(&self) -> FormKind {
        match self {
            Self::Contact(_) => FormKind::Contact,
            Self::Quote { .. } => FormKind::Quote,
        }
    }

    /// Submitter's address, used as the reply-to of the operator email
    pub fn submitter_email(&self) -> &str {
        match self {
            Self::Contact(submission) => &submission.email,
            Self::Quote { submission, .. } => &submission.email,
        }
    }

    pub fn submitter_name(&self) -> &str {
        match self {
            Self::Contact(submission) => &submission.name,
            Self::Quote { submission, .. } => &submission.name,
        }
    }

    pub fn reference(&self) -> Option<&Reference> {
        match self {
            Self::Contact(_) => None,
            Self::Quote { reference, .. } => Some(reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn contact() -> FormNotification {
        FormNotification::Contact(ContactSubmission {
            name:    "Jane".to_string(),
            phone:   "0700000000".to_string(),
            email:   "jane@x.com".to_string(),
            service: None,
            message: "Hello".to_string(),
        })
    }

    fn quote() -> FormNotification {
        FormNotification::Quote {
            reference:  Reference::from_draw(42),
            submission: QuoteSubmission {
                name: "Otieno".to_string(),
                phone: "0711111111".to_string(),
                email: "otieno@y.co.ke".to_string(),
                location: "Kisumu".to_string(),
                budget: None,
                timeline: None,
                details: None,
                selected_services: vec![],
                selected_service_titles: vec![],
            },
        }
    }

    #[test]
    fn test_form_kind_per_variant() {
        assert_eq!(contact().form_kind(), FormKind::Contact);
        assert_eq!(quote().form_kind(), FormKind::Quote);
    }

    #[test]
    fn test_submitter_fields_per_variant() {
        assert_eq!(contact().submitter_email(), "jane@x.com");
        assert_eq!(contact().submitter_name(), "Jane");
        assert_eq!(quote().submitter_email(), "otieno@y.co.ke");
        assert_eq!(quote().submitter_name(), "Otieno");
    }

    #[test]
    fn test_reference_only_on_quote() {
        assert!(contact().reference().is_none());
        assert_eq!(quote().reference(), Some(&Reference::from_draw(42)));
    }

    #[test]
    fn test_notification_error_messages() {
        assert_eq!(
            NotificationError::NotConfigured("NOTIFICATION_EMAIL".to_string()).to_string(),
            "notification is not configured: NOTIFICATION_EMAIL"
        );
        assert_eq!(
            NotificationError::SendFailed("timeout".to_string()).to_string(),
            "email send failed: timeout"
        );
    }
}
