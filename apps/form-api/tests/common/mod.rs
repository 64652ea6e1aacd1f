//! Helpers shared by the router tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, Response, StatusCode};
use rigour_form_api::{
    app_builder::build_app,
    handler::FormState,
    usecase::{NotificationDispatcher, SubmissionUseCase, TemplateRenderer},
};
use rigour_infra::NotificationSender;
use serde_json::Value;
use tower::ServiceExt;

pub const OPERATOR: &str = "office@rigourrealty.co.ke";

/// Router wired to `sender`, allowing every origin
pub fn app_with(sender: Arc<dyn NotificationSender>) -> Router {
    app_with_operator(sender, Some(OPERATOR))
}

pub fn app_with_operator(sender: Arc<dyn NotificationSender>, operator: Option<&str>) -> Router {
    let submissions = SubmissionUseCase::new(
        TemplateRenderer::new().unwrap(),
        NotificationDispatcher::new(sender, operator.map(str::to_string)),
    );
    build_app(Arc::new(FormState { submissions }), None)
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn into_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
