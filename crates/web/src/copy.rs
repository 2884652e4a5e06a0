// =============================================================================
// Marketing Web - Localized Copy
// =============================================================================
// Table of Contents:
// 1. Error Types
// 2. Contact Copy
// =============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

// -----------------------------------------------------------------------------
// 1. Error Types
// -----------------------------------------------------------------------------

/// Copy loading errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CopyError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing text for {0}")]
    Empty(&'static str),
}

// -----------------------------------------------------------------------------
// 2. Contact Copy
// -----------------------------------------------------------------------------

const ENGLISH_BODY: &str = "\
# Get in touch

Have a question about the product, pricing, or a partnership? \
Leave your email and we will get back to you.";

/// Text shown in the contact section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactCopy {
    pub body_markdown: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub name_label: String,
    pub name_placeholder: String,
    pub question_label: String,
    pub question_placeholder: String,
    pub submit_button_text: String,
}

impl ContactCopy {
    /// Built-in English copy.
    pub fn english() -> Self {
        Self {
            body_markdown: ENGLISH_BODY.to_string(),
            email_label: "Email".to_string(),
            email_placeholder: "you@example.com".to_string(),
            name_label: "Name".to_string(),
            name_placeholder: "Jane Doe".to_string(),
            question_label: "Question".to_string(),
            question_placeholder: "What would you like to know?".to_string(),
            submit_button_text: "Send".to_string(),
        }
    }

    /// Load copy from a JSON resource. Every key is required.
    pub fn from_json(json: &str) -> Result<Self, CopyError> {
        let copy: ContactCopy =
            serde_json::from_str(json).map_err(|e| CopyError::Parse(e.to_string()))?;
        copy.check()?;
        Ok(copy)
    }

    /// Copy from an optional JSON resource, falling back to English.
    pub fn resolve(resource: Option<&str>) -> Self {
        match resource.map(Self::from_json) {
            Some(Ok(copy)) => copy,
            Some(Err(e)) => {
                log::warn!("Ignoring contact copy resource: {}", e);
                Self::english()
            }
            None => Self::english(),
        }
    }

    /// Every label and the button text must be non-blank; placeholders and
    /// the body may be empty.
    fn check(&self) -> Result<(), CopyError> {
        let required = [
            ("email_label", &self.email_label),
            ("name_label", &self.name_label),
            ("question_label", &self.question_label),
            ("submit_button_text", &self.submit_button_text),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(CopyError::Empty(key));
            }
        }
        Ok(())
    }
}

impl Default for ContactCopy {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_copy() {
        let copy = ContactCopy::english();

        assert!(copy.body_markdown.starts_with("# "));
        assert_eq!(copy.email_label, "Email");
        assert!(!copy.submit_button_text.is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::to_string(&ContactCopy {
            submit_button_text: "Envoyer".to_string(),
            ..ContactCopy::english()
        })
        .unwrap();

        let copy = ContactCopy::from_json(&json).unwrap();
        assert_eq!(copy.submit_button_text, "Envoyer");
    }

    #[test]
    fn test_missing_key_fails() {
        let result = ContactCopy::from_json(r#"{"email_label": "Email"}"#);
        assert!(matches!(result, Err(CopyError::Parse(_))));
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        assert_eq!(ContactCopy::resolve(None), ContactCopy::english());
        assert_eq!(ContactCopy::resolve(Some("not json")), ContactCopy::english());

        let json = serde_json::to_string(&ContactCopy {
            name_label: "Nom".to_string(),
            ..ContactCopy::english()
        })
        .unwrap();
        assert_eq!(ContactCopy::resolve(Some(&json)).name_label, "Nom");
    }

    #[test]
    fn test_blank_required_text_fails() {
        let json = serde_json::to_string(&ContactCopy {
            email_label: "  ".to_string(),
            ..ContactCopy::english()
        })
        .unwrap();

        assert_eq!(
            ContactCopy::from_json(&json),
            Err(CopyError::Empty("email_label"))
        );
    }

    #[test]
    fn test_every_label_is_required() {
        let blank_name = ContactCopy {
            name_label: String::new(),
            ..ContactCopy::english()
        };
        let blank_question = ContactCopy {
            question_label: " ".to_string(),
            ..ContactCopy::english()
        };
        let blank_placeholder = ContactCopy {
            name_placeholder: String::new(),
            ..ContactCopy::english()
        };

        let parse = |copy: &ContactCopy| ContactCopy::from_json(&serde_json::to_string(copy).unwrap());
        assert_eq!(parse(&blank_name), Err(CopyError::Empty("name_label")));
        assert_eq!(parse(&blank_question), Err(CopyError::Empty("question_label")));
        assert!(parse(&blank_placeholder).is_ok());
    }
}
