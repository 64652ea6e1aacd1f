//! # Health check
//!
//! Liveness only. It does not contact the email provider.

use axum::Json;
use rigour_shared::AckResponse;

pub async fn health_check() -> Json<AckResponse> {
    Json(AckResponse::ok())
}
