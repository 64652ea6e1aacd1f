//! # Rigour infrastructure layer
//!
//! Talks to the outside world on behalf of the form relay. In practice that
//! means one thing: handing an [`EmailMessage`](rigour_domain::notification::EmailMessage)
//! to a transactional email provider.
//!
//! ## Modules
//!
//! - [`notification`] - `NotificationSender` trait and its SendGrid / SES /
//!   SMTP / Noop implementations
//! - `mock` - in-memory senders for tests (`test-utils` feature)
//!
//! ## Example
//!
//! ```rust,ignore
//! use rigour_infra::notification::{NotificationSender, SendGridNotificationSender};
//!
//! let sender = SendGridNotificationSender::new(
//!     "https://api.sendgrid.com",
//!     Some(api_key),
//!     Some("website@rigourrealty.co.ke".to_string()),
//! );
//! sender.send_email(&email).await?;
//! ```

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;

pub use notification::NotificationSender;
