//! # Template renderer
//!
//! Renders the operator email for an accepted submission, as plain text and
//! HTML, with tera.
//!
//! - templates are embedded with `include_str!`
//! - `.html` templates are autoescaped, so submitted values cannot inject
//!   markup. Free-text fields are escaped first and then get `<br/>` line
//!   breaks, and the template inserts them with `| safe`
//! - subjects are built here, not in the templates

use rigour_domain::notification::{FormNotification, NotificationError, OutboundNotification};
use tera::{Context, Tera};

pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "contact.html",
                    include_str!("../../templates/notifications/contact.html"),
                ),
                (
                    "contact.txt",
                    include_str!("../../templates/notifications/contact.txt"),
                ),
                (
                    "quote.html",
                    include_str!("../../templates/notifications/quote.html"),
                ),
                (
                    "quote.txt",
                    include_str!("../../templates/notifications/quote.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// Renders the subject and both bodies
    ///
    /// The reply-to address is the submitter's email.
    pub fn render(
        &self,
        notification: &FormNotification,
    ) -> Result<OutboundNotification, NotificationError> {
        let (template_name, subject, context) = build_template_params(notification);

        let html_body = self
            .engine
            .render(&format!("{template_name}.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{template_name}.txt"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(OutboundNotification {
            subject,
            text_body,
            html_body,
            reply_to: notification.submitter_email().to_string(),
        })
    }
}

/// Escapes `text` and turns its newlines into `<br/>`
fn html_paragraph(text: &str) -> String {
    tera::escape_html(text).replace('\n', "<br/>")
}

/// Template name, subject and context for one notification
fn build_template_params(notification: &FormNotification) -> (&'static str, String, Context) {
    let mut context = Context::new();

    match notification {
        FormNotification::Contact(submission) => {
            context.insert("name", &submission.name);
            context.insert("phone", &submission.phone);
            context.insert("email", &submission.email);
            context.insert("service", submission.service_label());
            context.insert("message", &submission.message);
            context.insert("message_html", &html_paragraph(&submission.message));

            (
                "contact",
                format!("New Contact Form Message - {}", notification.submitter_name()),
                context,
            )
        }
        FormNotification::Quote {
            reference,
            submission,
        } => {
            context.insert("reference", reference.as_str());
            context.insert("name", &submission.name);
            context.insert("phone", &submission.phone);
            context.insert("email", &submission.email);
            context.insert("location", &submission.location);
            context.insert("budget", submission.budget_label());
            context.insert("timeline", submission.timeline_label());
            context.insert("services", &submission.services_summary());
            context.insert("details", submission.details_label());
            context.insert("details_html", &html_paragraph(submission.details_label()));

            (
                "quote",
                format!("New Quote Request {reference} - {}", notification.submitter_name()),
                context,
            )
        }
    }
}
