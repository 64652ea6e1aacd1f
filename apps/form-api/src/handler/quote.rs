//! # Quote request handler

use std::sync::Arc;

use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};
use rigour_domain::{FormKind, Reference, submission::QuoteForm};
use serde::Serialize;

use super::FormState;
use crate::{error::ApiError, middleware::FormOutcome};

/// Accepted quote request
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub ok:        bool,
    pub reference: Reference,
}

/// `POST /api/quote`
#[tracing::instrument(skip_all)]
pub async fn submit_quote(
    State(state): State<Arc<FormState>>,
    payload: Result<Json<QuoteForm>, JsonRejection>,
) -> Result<(Extension<FormOutcome>, Json<QuoteResponse>), ApiError> {
    let Json(form) = payload.map_err(|source| ApiError::MalformedBody {
        form: FormKind::Quote,
        source,
    })?;
    let submission = form.validate()?;

    let reference = state
        .submissions
        .submit_quote(submission)
        .await
        .map_err(|source| ApiError::Dispatch {
            form: FormKind::Quote,
            source,
        })?;

    tracing::info!(reference = %reference, "quote request accepted");

    Ok((
        Extension(FormOutcome::new(FormKind::Quote).with_reference(reference.clone())),
        Json(QuoteResponse {
            ok: true,
            reference,
        }),
    ))
}
