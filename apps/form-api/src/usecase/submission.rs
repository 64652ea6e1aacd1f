//! # Submission use case
//!
//! Render → dispatch → business event, for both public forms.
//!
//! Unlike a fire-and-forget notifier, the outcome is returned to the handler:
//! the submitter must learn whether the operator was reached.

use std::sync::Arc;

use rigour_domain::{
    Reference,
    notification::{FormNotification, NotificationError},
    submission::{ContactSubmission, FormKind, QuoteSubmission},
};
use rigour_shared::{event_log::event, log_business_event};
use tracing::Instrument;

use super::{NotificationDispatcher, TemplateRenderer};

pub struct SubmissionUseCase {
    renderer:   TemplateRenderer,
    dispatcher: Arc<NotificationDispatcher>,
}

impl SubmissionUseCase {
    pub fn new(renderer: TemplateRenderer, dispatcher: NotificationDispatcher) -> Self {
        Self {
            renderer,
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), NotificationError> {
        self.deliver(FormNotification::Contact(submission)).await
    }

    /// Issues a reference and forwards the quote request
    ///
    /// The reference is only returned when the operator email was accepted.
    pub async fn submit_quote(
        &self,
        submission: QuoteSubmission,
    ) -> Result<Reference, NotificationError> {
        let reference = Reference::generate();
        self.deliver(FormNotification::Quote {
            reference: reference.clone(),
            submission,
        })
        .await?;
        Ok(reference)
    }

    /// Renders the notification and sends it from a spawned task
    ///
    /// hyper drops the handler future when the client disconnects. The send
    /// runs on its own task so a dropped request cannot cut it off midway.
    async fn deliver(&self, notification: FormNotification) -> Result<(), NotificationError> {
        let entity_type = match notification.form_kind() {
            FormKind::Contact => event::entity_type::CONTACT_SUBMISSION,
            FormKind::Quote => event::entity_type::QUOTE_SUBMISSION,
        };
        let reference = notification
            .reference()
            .map(|r| r.as_str().to_string())
            .unwrap_or_default();

        let outbound = self.renderer.render(&notification)?;
        let dispatcher = Arc::clone(&self.dispatcher);

        let send = async move {
            let subject = outbound.subject.clone();
            let result = dispatcher.dispatch(outbound).await;
            match &result {
                Ok(()) => log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.entity_type = entity_type,
                    event.entity_id = %reference,
                    event.result = event::result::SUCCESS,
                    notification.subject = %subject,
                    "notification email sent"
                ),
                Err(e) => log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = entity_type,
                    event.entity_id = %reference,
                    event.result = event::result::FAILURE,
                    notification.subject = %subject,
                    error = %e,
                    "notification email failed"
                ),
            }
            result
        };

        tokio::spawn(send.instrument(tracing::Span::current()))
            .await
            .map_err(|e| NotificationError::SendFailed(format!("dispatch task did not finish: {e}")))?
    }
}
