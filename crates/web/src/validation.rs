// =============================================================================
// Marketing Web - Contact Form Validation
// =============================================================================
// Table of Contents:
// 1. Error Types
// 2. Field Rules
// 3. Validity Checks
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use web_sys::HtmlFormElement;

use crate::state::ContactFields;

// -----------------------------------------------------------------------------
// 1. Error Types
// -----------------------------------------------------------------------------

/// Reasons the contact form cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Email address is required")]
    MissingEmail,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

// -----------------------------------------------------------------------------
// 2. Field Rules
// -----------------------------------------------------------------------------

/// The "valid e-mail address" production browsers apply to `type="email"`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Email inputs strip leading and trailing ASCII whitespace only.
fn strip_ascii_whitespace(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Validate an email address the way an email input does.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(strip_ascii_whitespace(email))
}

/// Check the three contact fields. Only the email is constrained.
pub fn validate_fields(fields: &ContactFields) -> Result<(), ValidationError> {
    let email = strip_ascii_whitespace(&fields.email_address);
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// 3. Validity Checks
// -----------------------------------------------------------------------------

/// Decides whether the contact form may be submitted.
pub trait ValidityCheck {
    fn is_valid(&self, fields: &ContactFields) -> bool;
}

/// Pure rule check, no DOM involved.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldRules;

impl ValidityCheck for FieldRules {
    fn is_valid(&self, fields: &ContactFields) -> bool {
        validate_fields(fields).is_ok()
    }
}

/// Field rules plus the browser's constraint validation on the rendered form.
///
/// Without a form (server render, tests, form not mounted yet) the check
/// always fails.
#[derive(Clone, Debug, Default)]
pub struct NativeFormCheck {
    form: Option<HtmlFormElement>,
}

impl NativeFormCheck {
    pub fn new(form: Option<HtmlFormElement>) -> Self {
        Self { form }
    }

    /// A check with no form behind it.
    pub fn detached() -> Self {
        Self { form: None }
    }
}

impl ValidityCheck for NativeFormCheck {
    fn is_valid(&self, fields: &ContactFields) -> bool {
        match &self.form {
            Some(form) => FieldRules.is_valid(fields) && form.check_validity(),
            None => false,
        }
    }
}
