//! # Contact form handler

use std::sync::Arc;

use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};
use rigour_domain::{FormKind, submission::ContactForm};
use rigour_shared::AckResponse;

use super::FormState;
use crate::{error::ApiError, middleware::FormOutcome};

/// `POST /api/contact`
///
/// 200 `{ok: true}` once the operator email was accepted by the provider.
#[tracing::instrument(skip_all)]
pub async fn submit_contact(
    State(state): State<Arc<FormState>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<(Extension<FormOutcome>, Json<AckResponse>), ApiError> {
    let Json(form) = payload.map_err(|source| ApiError::MalformedBody {
        form: FormKind::Contact,
        source,
    })?;
    let submission = form.validate()?;

    state
        .submissions
        .submit_contact(submission)
        .await
        .map_err(|source| ApiError::Dispatch {
            form: FormKind::Contact,
            source,
        })?;

    Ok((
        Extension(FormOutcome::new(FormKind::Contact)),
        Json(AckResponse::ok()),
    ))
}
