//! # Rigour domain layer
//!
//! Domain model of the form relay: what a submission is, when it is
//! acceptable, and what leaves the system as a notification.
//!
//! ## Dependency direction
//!
//! ```text
//! form-api → infra → domain
//!     ↘               ↑
//!      └──────────────┘
//! ```
//!
//! The domain layer knows nothing about HTTP or email providers.
//!
//! ## Modules
//!
//! - [`submission`] - contact / quote payloads and their validation
//! - [`reference`] - quote reference codes (`RR-XXXXXX`)
//! - [`notification`] - outbound email message and notification errors
//!
//! ## Example
//!
//! ```rust
//! use rigour_domain::submission::ContactForm;
//!
//! let form = ContactForm {
//!     name: Some("Jane".to_string()),
//!     phone: Some("0700000000".to_string()),
//!     email: Some("jane@x.com".to_string()),
//!     service: None,
//!     message: Some("Hello".to_string()),
//! };
//!
//! let submission = form.validate().unwrap();
//! assert_eq!(submission.service_label(), "Not selected");
//! ```

pub mod notification;
pub mod reference;
pub mod submission;

pub use reference::Reference;
pub use submission::{FormKind, ValidationError};
