//! # Middleware

mod cache_control;
mod request_summary;

pub use cache_control::no_cache;
pub use request_summary::{FormOutcome, request_summary};
