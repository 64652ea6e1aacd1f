//! # Use cases
//!
//! What happens to a submission after it passed validation:
//! render the operator email, dispatch it, record the outcome.

pub mod dispatcher;
pub mod submission;
pub mod template_renderer;

pub use dispatcher::NotificationDispatcher;
pub use submission::SubmissionUseCase;
pub use template_renderer::TemplateRenderer;
