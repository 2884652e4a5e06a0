// =============================================================================
// Marketing Web - Contact Form State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Fields
// 3. Contact State
// 4. Actions & Effects
// 5. Reducer
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidityCheck;

// -----------------------------------------------------------------------------
// 2. Fields
// -----------------------------------------------------------------------------

/// Names of the contact form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    EmailAddress,
    FullName,
    Question,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [
        FieldName::EmailAddress,
        FieldName::FullName,
        FieldName::Question,
    ];

    /// Value of the input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::EmailAddress => "emailAddress",
            FieldName::FullName => "fullName",
            FieldName::Question => "question",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input `name` attribute that does not belong to the contact form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown contact field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Values entered into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub email_address: String,
    pub full_name: String,
    pub question: String,
}

impl ContactFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::EmailAddress => &self.email_address,
            FieldName::FullName => &self.full_name,
            FieldName::Question => &self.question,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::EmailAddress => &mut self.email_address,
            FieldName::FullName => &mut self.full_name,
            FieldName::Question => &mut self.question,
        };
        *slot = value.into();
    }
}

// -----------------------------------------------------------------------------
// 3. Contact State
// -----------------------------------------------------------------------------

/// Local state of a mounted contact section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub fields: ContactFields,

    /// Result of the validity check at the last change.
    pub is_form_valid: bool,
}

impl ContactState {
    /// Empty fields, form invalid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field value without touching validity.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Re-run the validity check against the current fields.
    pub fn revalidate(&mut self, check: &dyn ValidityCheck) {
        self.is_form_valid = check.is_valid(&self.fields);
    }

    /// The submit button is disabled exactly when the form is invalid.
    pub fn is_submit_disabled(&self) -> bool {
        !self.is_form_valid
    }
}

// -----------------------------------------------------------------------------
// 4. Actions & Effects
// -----------------------------------------------------------------------------

/// Events the contact view dispatches.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactAction {
    Change { field: FieldName, value: String },
    Submit,
    Reset,
}

/// Side effects the view performs after a reduction.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactEffect {
    /// Suppress the browser's default form navigation.
    PreventDefault,
    /// Emit a diagnostic record of the submitted values.
    LogSubmission(ContactFields),
}

// -----------------------------------------------------------------------------
// 5. Reducer
// -----------------------------------------------------------------------------

pub struct ContactReducer;

impl ContactReducer {
    pub fn reduce(
        state: &mut ContactState,
        action: ContactAction,
        check: &dyn ValidityCheck,
    ) -> Vec<ContactEffect> {
        match action {
            ContactAction::Change { field, value } => {
                state.update_field(field, value);
                state.revalidate(check);
                vec![]
            }
            // Submission is a stub: nothing is sent anywhere.
            ContactAction::Submit => vec![
                ContactEffect::PreventDefault,
                ContactEffect::LogSubmission(state.fields.clone()),
            ],
            ContactAction::Reset => {
                *state = ContactState::new();
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldRules, NativeFormCheck};

    fn change(field: FieldName, value: &str) -> ContactAction {
        ContactAction::Change {
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ContactState::new();

        assert_eq!(state.fields.email_address, "");
        assert_eq!(state.fields.full_name, "");
        assert_eq!(state.fields.question, "");
        assert!(!state.is_form_valid);
        assert!(state.is_submit_disabled());
    }

    #[test]
    fn test_field_name_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert_eq!(
            "phone".parse::<FieldName>(),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_change_updates_named_field() {
        let mut state = ContactState::new();

        ContactReducer::reduce(&mut state, change(FieldName::FullName, "Ada"), &FieldRules);
        ContactReducer::reduce(&mut state, change(FieldName::Question, "Pricing?"), &FieldRules);

        assert_eq!(state.fields.full_name, "Ada");
        assert_eq!(state.fields.question, "Pricing?");
        assert_eq!(state.fields.email_address, "");
    }

    #[test]
    fn test_invalid_emails_keep_form_invalid() {
        let mut state = ContactState::new();

        for value in ["a", "a@", "@b.com", "a b@c.com", "a@b..com", "a@-b.com"] {
            ContactReducer::reduce(&mut state, change(FieldName::EmailAddress, value), &FieldRules);
            assert!(!state.is_form_valid, "{value} should be invalid");
        }
    }

    #[test]
    fn test_valid_email_makes_form_valid() {
        let mut state = ContactState::new();

        ContactReducer::reduce(&mut state, change(FieldName::EmailAddress, "a@b.com"), &FieldRules);
        assert!(state.is_form_valid);

        ContactReducer::reduce(&mut state, change(FieldName::EmailAddress, "a@"), &FieldRules);
        assert!(!state.is_form_valid);
    }

    #[test]
    fn test_detached_form_stays_invalid() {
        let mut state = ContactState::new();
        let check = NativeFormCheck::detached();

        ContactReducer::reduce(&mut state, change(FieldName::EmailAddress, "a@b.com"), &check);
        ContactReducer::reduce(&mut state, change(FieldName::FullName, "Ada"), &check);

        assert!(!state.is_form_valid);
    }

    #[test]
    fn test_submit_always_prevents_default() {
        let mut state = ContactState::new();
        let effects = ContactReducer::reduce(&mut state, ContactAction::Submit, &FieldRules);
        assert_eq!(effects[0], ContactEffect::PreventDefault);

        ContactReducer::reduce(&mut state, change(FieldName::EmailAddress, "a@b.com"), &FieldRules);
        let effects = ContactReducer::reduce(&mut state, ContactAction::Submit, &FieldRules);

        assert_eq!(effects[0], ContactEffect::PreventDefault);
        assert_eq!(
            effects[1],
            ContactEffect::LogSubmission(ContactFields {
                email_address: "a@b.com".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_submit_disabled_follows_changes() {
        let mut state = ContactState::new();
        let steps = [
            (change(FieldName::EmailAddress, "x"), true),
            (change(FieldName::EmailAddress, "x@y.org"), false),
            (change(FieldName::Question, "hi"), false),
            (ContactAction::Submit, false),
            (change(FieldName::EmailAddress, "x@"), true),
            (change(FieldName::EmailAddress, "x@y.org"), false),
            (ContactAction::Reset, true),
        ];

        for (action, disabled) in steps {
            let label = format!("{action:?}");
            ContactReducer::reduce(&mut state, action, &FieldRules);
            assert_eq!(state.is_submit_disabled(), disabled, "after {label}");
        }
    }

    /// Check with a fixed answer, standing in for a mounted form.
    struct FixedCheck(bool);

    impl ValidityCheck for FixedCheck {
        fn is_valid(&self, _fields: &ContactFields) -> bool {
            self.0
        }
    }

    #[test]
    fn test_validity_comes_from_injected_check() {
        let mut state = ContactState::new();

        // An empty email is invalid by the field rules, yet the check decides.
        ContactReducer::reduce(&mut state, change(FieldName::FullName, "Ada"), &FixedCheck(true));
        assert!(state.is_form_valid);
        assert!(!state.is_submit_disabled());

        ContactReducer::reduce(&mut state, change(FieldName::EmailAddress, "a@b.com"), &FixedCheck(false));
        assert!(!state.is_form_valid);
        assert!(state.is_submit_disabled());
    }

    #[test]
    fn test_submit_does_not_revalidate() {
        let mut state = ContactState::new();
        ContactReducer::reduce(&mut state, change(FieldName::EmailAddress, "a@b.com"), &FieldRules);

        ContactReducer::reduce(&mut state, ContactAction::Submit, &FixedCheck(false));

        assert!(state.is_form_valid);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = ContactState::new();
        ContactReducer::reduce(&mut state, change(FieldName::EmailAddress, "a@b.com"), &FieldRules);

        ContactReducer::reduce(&mut state, ContactAction::Reset, &FieldRules);

        assert_eq!(state, ContactState::new());
    }

    #[test]
    fn test_submission_serializes_with_dom_names() {
        let fields = ContactFields {
            email_address: "a@b.com".to_string(),
            full_name: "Ada".to_string(),
            question: String::new(),
        };
        let json = serde_json::to_value(&fields).unwrap();

        assert_eq!(json["emailAddress"], "a@b.com");
        assert_eq!(json["fullName"], "Ada");
        assert_eq!(json["question"], "");
    }
}
