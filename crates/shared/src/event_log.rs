//! # Business event log
//!
//! Naming conventions and a helper macro for structured business events, so
//! that outcomes can be filtered with `jq 'select(.["event.kind"] == "business_event")'`.
//!
//! Field names use dot notation (`event.category`, `error.kind`). tracing
//! accepts them through its `$($field:ident).+` pattern and the JSON output
//! flattens them into plain keys.

/// Emits a business event as a structured INFO log
///
/// Adds the `event.kind = "business_event"` marker automatically.
///
/// ## Conventional fields
///
/// - `event.category`: one of [`event::category`]
/// - `event.action`: one of [`event::action`]
/// - `event.result`: one of [`event::result`]
/// - `event.entity_type`: one of [`event::entity_type`]
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// Event field constants
pub mod event {
    pub mod category {
        pub const NOTIFICATION: &str = "notification";
    }

    pub mod action {
        pub const NOTIFICATION_SENT: &str = "notification.sent";
        pub const NOTIFICATION_FAILED: &str = "notification.failed";
    }

    pub mod entity_type {
        pub const CONTACT_SUBMISSION: &str = "contact_submission";
        pub const QUOTE_SUBMISSION: &str = "quote_submission";
    }

    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// Error context constants, attached to `tracing::error!` as `error.category`
/// and `error.kind`
pub mod error {
    pub mod category {
        pub const EXTERNAL_SERVICE: &str = "external_service";
    }

    pub mod kind {
        pub const NOTIFICATION_DISPATCH: &str = "notification_dispatch";
    }
}
