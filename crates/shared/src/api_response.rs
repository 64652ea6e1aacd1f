//! # Acknowledgement envelope
//!
//! The public API answers successful calls with `{ "ok": true }`, optionally
//! extended by endpoint-specific fields (the quote endpoint adds `reference`).

use serde::{Deserialize, Serialize};

/// Plain success acknowledgement
///
/// Returned by `POST /api/contact` and `GET /api/health`.
///
/// ## Example
///
/// ```
/// use rigour_shared::AckResponse;
///
/// let response = AckResponse::ok();
/// assert!(response.ok);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    /// `{ "ok": true }`
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
