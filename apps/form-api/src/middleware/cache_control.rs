//! # Cache control
//!
//! Sets `Cache-Control: no-store` on every response. Form acknowledgements
//! and quote references must never be served from a browser or proxy cache.

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

pub async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
