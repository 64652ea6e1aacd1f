//! # Rigour shared utilities
//!
//! Common building blocks used by every crate in the Rigour form relay.
//!
//! ## Design
//!
//! - Depended on by `domain`, `infra` and the `form-api` app
//! - Holds pure utilities only, no business logic
//! - Keeps external dependencies to a minimum. Anything that pulls in the
//!   HTTP/tracing stack sits behind the `observability` feature

pub mod api_response;
pub mod error_response;
pub mod event_log;
pub mod observability;

pub use api_response::AckResponse;
pub use error_response::ErrorResponse;
