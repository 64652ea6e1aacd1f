//! # HTTP handlers
//!
//! - `POST /api/contact`: contact message
//! - `POST /api/quote`: quote request, answers with a reference
//! - `GET /api/health`: liveness

mod contact;
mod health;
mod quote;

pub use contact::submit_contact;
pub use health::health_check;
pub use quote::{QuoteResponse, submit_quote};

use crate::usecase::SubmissionUseCase;

/// State shared by the form handlers
pub struct FormState {
    pub submissions: SubmissionUseCase,
}
