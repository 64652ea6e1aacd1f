//! # Router construction
//!
//! Wires the handlers and the middleware stack. `main.rs` only builds the
//! email backend and starts the server, so tests can drive the same router
//! through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    middleware::from_fn,
    routing::{get, post},
};
use rigour_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{FormState, health_check, submit_contact, submit_quote},
    middleware::{no_cache, request_summary},
};

/// Builds the router
///
/// `cors_origins` of `None` allows every origin. Entries that are not valid
/// header values are skipped with a warning.
pub fn build_app(state: Arc<FormState>, cors_origins: Option<&[String]>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(submit_contact))
        .route("/api/quote", post(submit_quote))
        .with_state(state)
        .layer(from_fn(no_cache))
        .layer(cors_layer(cors_origins))
        // Layer order: the last one added is the outermost.
        // SetRequestId runs first so the span and the summary line both
        // see the id, and PropagateRequestId copies it onto the response.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(request_summary))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let allow_origin = match origins {
        Some(origins) => AllowOrigin::list(origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!(origin = %origin, "ignoring invalid CORS origin"))
                .ok()
        })),
        None => AllowOrigin::mirror_request(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
