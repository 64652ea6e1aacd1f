//! # Form submissions
//!
//! Raw form payloads ([`ContactForm`], [`QuoteForm`]) and their validated
//! counterparts ([`ContactSubmission`], [`QuoteSubmission`]).
//!
//! ## Validation rules
//!
//! | Form | Required | Email check |
//! |------|----------|-------------|
//! | contact | name, phone, email, message | `\S+@\S+\.\S+` |
//! | quote | name, phone, email, location | `\S+@\S+\.\S+` |
//!
//! "Present" means non-null and non-empty. A whitespace-only value counts as
//! present. The email pattern is a loose shape check and is intentionally not
//! RFC 5321 validation.
//!
//! Submissions are request-scoped: built, validated, rendered into one email
//! and dropped.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern is valid"));

/// Loose email shape check: `something@something.something`
pub fn is_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Which public form a submission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FormKind {
    Contact,
    Quote,
}

/// Validation failure
///
/// Carries the offending field names (JSON names) for server-side logs. The
/// caller only ever sees the fixed per-form message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {form} submission: {}", .invalid_fields.join(", "))]
pub struct ValidationError {
    pub form:           FormKind,
    pub invalid_fields: Vec<&'static str>,
}

/// Collects invalid fields while a form is being checked
struct FieldCheck {
    form:    FormKind,
    invalid: Vec<&'static str>,
}

impl FieldCheck {
    fn new(form: FormKind) -> Self {
        Self {
            form,
            invalid: Vec::new(),
        }
    }

    fn required(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => {
                self.invalid.push(field);
                String::new()
            }
        }
    }

    fn email(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.filter(|v| is_email(v)) {
            Some(v) => v,
            None => {
                self.invalid.push(field);
                String::new()
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.invalid.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                form:           self.form,
                invalid_fields: self.invalid,
            })
        }
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn list_or_empty(value: Option<Vec<String>>) -> Vec<String> {
    value.unwrap_or_default()
}

// ===== Contact =====

/// Raw `POST /api/contact` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name:    Option<String>,
    pub phone:   Option<String>,
    pub email:   Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// Validated contact message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name:    String,
    pub phone:   String,
    pub email:   String,
    pub service: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(self) -> Result<ContactSubmission, ValidationError> {
        let mut check = FieldCheck::new(FormKind::Contact);

        let name = check.required("name", self.name);
        let phone = check.required("phone", self.phone);
        let email = check.email("email", self.email);
        let message = check.required("message", self.message);

        check.finish(ContactSubmission {
            name,
            phone,
            email,
            service: optional(self.service),
            message,
        })
    }
}

impl ContactSubmission {
    /// Service of interest, `"Not selected"` when omitted
    pub fn service_label(&self) -> &str {
        self.service.as_deref().unwrap_or("Not selected")
    }
}

// ===== Quote =====

/// Raw `POST /api/quote` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    pub name:                    Option<String>,
    pub phone:                   Option<String>,
    pub email:                   Option<String>,
    pub location:                Option<String>,
    pub budget:                  Option<String>,
    pub timeline:                Option<String>,
    pub details:                 Option<String>,
    pub selected_services:       Option<Vec<String>>,
    pub selected_service_titles: Option<Vec<String>>,
}

/// Validated quote request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSubmission {
    pub name:                    String,
    pub phone:                   String,
    pub email:                   String,
    pub location:                String,
    pub budget:                  Option<String>,
    pub timeline:                Option<String>,
    pub details:                 Option<String>,
    pub selected_services:       Vec<String>,
    pub selected_service_titles: Vec<String>,
}

impl QuoteForm {
    pub fn validate(self) -> Result<QuoteSubmission, ValidationError> {
        let mut check = FieldCheck::new(FormKind::Quote);

        let name = check.required("name", self.name);
        let phone = check.required("phone", self.phone);
        let email = check.email("email", self.email);
        let location = check.required("location", self.location);

        check.finish(QuoteSubmission {
            name,
            phone,
            email,
            location,
            budget: optional(self.budget),
            timeline: optional(self.timeline),
            details: optional(self.details),
            selected_services: list_or_empty(self.selected_services),
            selected_service_titles: list_or_empty(self.selected_service_titles),
        })
    }
}

impl QuoteSubmission {
    /// Human-readable service list
    ///
    /// Titles win over ids. Falls back to `"None selected"` when both are empty.
    pub fn services_summary(&self) -> String {
        if !self.selected_service_titles.is_empty() {
            self.selected_service_titles.join(", ")
        } else if !self.selected_services.is_empty() {
            self.selected_services.join(", ")
        } else {
            "None selected".to_string()
        }
    }

    pub fn budget_label(&self) -> &str {
        self.budget.as_deref().unwrap_or("N/A")
    }

    pub fn timeline_label(&self) -> &str {
        self.timeline.as_deref().unwrap_or("N/A")
    }

    pub fn details_label(&self) -> &str {
        self.details.as_deref().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn jane_contact() -> ContactForm {
        ContactForm {
            name:    Some("Jane".to_string()),
            phone:   Some("0700000000".to_string()),
            email:   Some("jane@x.com".to_string()),
            service: None,
            message: Some("Hello".to_string()),
        }
    }

    fn jane_quote() -> QuoteForm {
        QuoteForm {
            name: Some("Jane".to_string()),
            phone: Some("0700000000".to_string()),
            email: Some("jane@x.com".to_string()),
            location: Some("Nairobi".to_string()),
            ..Default::default()
        }
    }

    // ===== is_email =====

    #[rstest]
    #[case("jane@x.com")]
    #[case("first.last@sub.example.co.ke")]
    #[case("a@b.c")]
    // loose on purpose: accepted although not a valid address
    #[case("a@b@c.d")]
    #[case("<jane>@x.com!")]
    fn test_is_email_accepts(#[case] value: &str) {
        assert!(is_email(value), "{value} should pass the shape check");
    }

    #[rstest]
    #[case("")]
    #[case("jane")]
    #[case("jane.x.com")]
    #[case("jane@xcom")]
    #[case("@x.com")]
    #[case("jane@.com")]
    #[case("jane@x.")]
    #[case("jane @x.com")]
    fn test_is_email_rejects(#[case] value: &str) {
        assert!(!is_email(value), "{value} should fail the shape check");
    }

    // ===== Contact =====

    #[test]
    fn test_contact_valid_form_passes() {
        let submission = jane_contact().validate().unwrap();

        assert_eq!(
            submission,
            ContactSubmission {
                name:    "Jane".to_string(),
                phone:   "0700000000".to_string(),
                email:   "jane@x.com".to_string(),
                service: None,
                message: "Hello".to_string(),
            }
        );
    }

    #[rstest]
    #[case::missing_name(ContactForm { name: None, ..jane_contact() }, vec!["name"])]
    #[case::empty_phone(ContactForm { phone: Some(String::new()), ..jane_contact() }, vec!["phone"])]
    #[case::missing_email(ContactForm { email: None, ..jane_contact() }, vec!["email"])]
    #[case::malformed_email(ContactForm { email: Some("jane@x".to_string()), ..jane_contact() }, vec!["email"])]
    #[case::missing_message(ContactForm { message: None, ..jane_contact() }, vec!["message"])]
    #[case::everything_missing(ContactForm::default(), vec!["name", "phone", "email", "message"])]
    fn test_contact_invalid_form_fails(
        #[case] form: ContactForm,
        #[case] expected: Vec<&'static str>,
    ) {
        let err = form.validate().unwrap_err();

        assert_eq!(err.form, FormKind::Contact);
        assert_eq!(err.invalid_fields, expected);
    }

    #[test]
    fn test_contact_whitespace_only_counts_as_present() {
        let form = ContactForm {
            message: Some("   ".to_string()),
            ..jane_contact()
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_contact_service_label_defaults() {
        let without = jane_contact().validate().unwrap();
        assert_eq!(without.service_label(), "Not selected");

        let empty = ContactForm {
            service: Some(String::new()),
            ..jane_contact()
        }
        .validate()
        .unwrap();
        assert_eq!(empty.service_label(), "Not selected");

        let with = ContactForm {
            service: Some("Cabro Paving".to_string()),
            ..jane_contact()
        }
        .validate()
        .unwrap();
        assert_eq!(with.service_label(), "Cabro Paving");
    }

    // ===== Quote =====

    #[rstest]
    #[case::missing_location(QuoteForm { location: None, ..jane_quote() }, vec!["location"])]
    #[case::empty_name(QuoteForm { name: Some(String::new()), ..jane_quote() }, vec!["name"])]
    #[case::email_without_at(QuoteForm { email: Some("jane.x.com".to_string()), ..jane_quote() }, vec!["email"])]
    #[case::everything_missing(QuoteForm::default(), vec!["name", "phone", "email", "location"])]
    fn test_quote_invalid_form_fails(
        #[case] form: QuoteForm,
        #[case] expected: Vec<&'static str>,
    ) {
        let err = form.validate().unwrap_err();

        assert_eq!(err.form, FormKind::Quote);
        assert_eq!(err.invalid_fields, expected);
    }

    #[test]
    fn test_quote_message_is_not_required() {
        assert!(jane_quote().validate().is_ok());
    }

    #[test]
    fn test_quote_labels_default_to_na() {
        let submission = jane_quote().validate().unwrap();

        assert_eq!(submission.budget_label(), "N/A");
        assert_eq!(submission.timeline_label(), "N/A");
        assert_eq!(submission.details_label(), "N/A");
    }

    #[test]
    fn test_services_summary_prefers_titles() {
        let submission = QuoteForm {
            selected_services: Some(vec!["cabro-paving".to_string()]),
            selected_service_titles: Some(vec![
                "Cabro Paving".to_string(),
                "Building with Bush Stones".to_string(),
            ]),
            ..jane_quote()
        }
        .validate()
        .unwrap();

        assert_eq!(
            submission.services_summary(),
            "Cabro Paving, Building with Bush Stones"
        );
    }

    #[test]
    fn test_services_summary_falls_back_to_ids() {
        let submission = QuoteForm {
            selected_services: Some(vec!["cabro-paving".to_string(), "bush-stones".to_string()]),
            selected_service_titles: Some(vec![]),
            ..jane_quote()
        }
        .validate()
        .unwrap();

        assert_eq!(submission.services_summary(), "cabro-paving, bush-stones");
    }

    #[test]
    fn test_services_summary_none_selected() {
        let submission = jane_quote().validate().unwrap();

        assert_eq!(submission.services_summary(), "None selected");
    }

    #[test]
    fn test_quote_form_reads_camel_case_fields() {
        let form: QuoteForm = serde_json::from_value(serde_json::json!({
            "name": "Jane",
            "selectedServices": ["a"],
            "selectedServiceTitles": ["A"],
        }))
        .unwrap();

        assert_eq!(form.selected_services, Some(vec!["a".to_string()]));
        assert_eq!(form.selected_service_titles, Some(vec!["A".to_string()]));
    }

    #[test]
    fn test_validation_error_display_lists_fields() {
        let err = ContactForm::default().validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid contact submission: name, phone, email, message"
        );
    }
}
