//! # Form API errors
//!
//! Errors raised while handling a form submission, and their mapping to the
//! fixed public messages. Details stay in the logs and never reach the client.

use axum::{
    Extension,
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rigour_domain::{FormKind, ValidationError, notification::NotificationError};
use rigour_shared::{ErrorResponse, event_log::error};
use thiserror::Error;

use crate::middleware::FormOutcome;

/// Errors returned by the form handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required field missing or email malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body was not JSON, or a field had the wrong JSON type
    #[error("malformed {form} body: {source}")]
    MalformedBody {
        form:   FormKind,
        #[source]
        source: JsonRejection,
    },

    /// Rendering or sending the operator email failed
    #[error("{form} notification dispatch failed: {source}")]
    Dispatch {
        form:   FormKind,
        #[source]
        source: NotificationError,
    },
}

impl ApiError {
    pub fn form(&self) -> FormKind {
        match self {
            Self::Validation(e) => e.form,
            Self::MalformedBody { form, .. } | Self::Dispatch { form, .. } => *form,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::Dispatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the submitter
    pub fn public_message(&self) -> &'static str {
        let rejected = !matches!(self, Self::Dispatch { .. });
        match (rejected, self.form()) {
            (true, FormKind::Contact) => "Please provide valid name, phone, email, and message.",
            (true, FormKind::Quote) => "Please provide valid contact and project details.",
            (false, FormKind::Contact) => "Failed to send message. Please try again.",
            (false, FormKind::Quote) => "Failed to submit quote request. Please try again.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(e) => {
                tracing::debug!(
                    form = %e.form,
                    invalid_fields = ?e.invalid_fields,
                    "submission rejected"
                );
            }
            ApiError::MalformedBody { form, source } => {
                tracing::debug!(form = %form, error = %source, "submission body rejected");
            }
            ApiError::Dispatch { form, source } => {
                tracing::error!(
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::NOTIFICATION_DISPATCH,
                    form = %form,
                    error = %source,
                    "notification email send failed"
                );
            }
        }

        (
            self.status(),
            Extension(FormOutcome::new(self.form())),
            Json(ErrorResponse::new(self.public_message())),
        )
            .into_response()
    }
}
