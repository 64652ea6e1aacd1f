//! # Request summary line
//!
//! One line per form request, written after the handler has answered.
//! Handlers and [`ApiError`](crate::error::ApiError) tag the response with a
//! [`FormOutcome`] extension, so the line names the form and, for an accepted
//! quote, the reference the submitter was given.
//!
//! The line is emitted inside the TraceLayer span and inherits its
//! `request_id`. `/api/health` is not summarised.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use rigour_domain::{FormKind, Reference};

/// Response extension describing which form a response belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub form:      FormKind,
    pub reference: Option<Reference>,
}

impl FormOutcome {
    pub fn new(form: FormKind) -> Self {
        Self {
            form,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }
}

pub async fn request_summary(request: Request, next: Next) -> Response {
    if request.uri().path() == "/api/health" {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = response.status().as_u16();
    let outcome = response.extensions().get::<FormOutcome>();
    let form = outcome.map(|o| <&'static str>::from(o.form));
    let reference = outcome.and_then(|o| o.reference.as_ref()).map(Reference::as_str);

    if response.status().is_server_error() {
        tracing::warn!(
            log.r#type = "summary",
            http.method = %method,
            http.path = %path,
            http.status_code = status,
            http.latency_ms = latency_ms,
            form.kind = form,
            "form request failed"
        );
    } else {
        tracing::info!(
            log.r#type = "summary",
            http.method = %method,
            http.path = %path,
            http.status_code = status,
            http.latency_ms = latency_ms,
            form.kind = form,
            form.reference = reference,
            "form request completed"
        );
    }

    response
}
