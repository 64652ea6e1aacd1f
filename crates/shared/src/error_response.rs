//! # Error response body
//!
//! All failures of the public API are reported as `{ "error": "<message>" }`.
//!
//! ## Design
//!
//! - `ErrorResponse` is plain data (`Serialize` / `Deserialize` only)
//! - The axum `IntoResponse` conversion is the app's responsibility, so this
//!   crate has no axum dependency
//! - Messages are fixed, caller-facing strings. Internal error detail must
//!   never be passed in here

use serde::{Deserialize, Serialize};

/// Caller-facing error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
