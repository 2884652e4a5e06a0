// =============================================================================
// Marketing Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Form Locator
// =============================================================================

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use crate::config::FORM_ACTION;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the page document, if there is one.
///
/// Non-wasm targets (server rendering, native tests) never have a document.
pub fn document() -> Option<Document> {
    if cfg!(not(target_arch = "wasm32")) {
        return None;
    }
    web_sys::window()?.document()
}

/// Text content of the element with the given id.
pub fn element_text(id: &str) -> Option<String> {
    document()?.get_element_by_id(id)?.text_content()
}

/// CSS selector matching the contact form by its action path.
pub fn contact_form_selector() -> String {
    format!(r#"form[action="{}"]"#, FORM_ACTION)
}

/// Look the contact form up in the document body.
pub fn query_contact_form() -> Option<HtmlFormElement> {
    let body = document()?.body()?;
    body.query_selector(&contact_form_selector())
        .ok()
        .flatten()?
        .dyn_into::<HtmlFormElement>()
        .ok()
}

// -----------------------------------------------------------------------------
// 2. Form Locator
// -----------------------------------------------------------------------------

/// Component-scoped cache of the contact form element.
///
/// The first successful lookup is kept for the lifetime of the owning
/// component; a miss is retried on the next call.
#[derive(Clone, Copy)]
pub struct FormLocator {
    cached: StoredValue<Option<HtmlFormElement>, LocalStorage>,
}

impl FormLocator {
    pub fn new() -> Self {
        Self {
            cached: StoredValue::new_local(None),
        }
    }

    /// Cache a form obtained some other way (e.g. from a `NodeRef`).
    pub fn remember(&self, form: HtmlFormElement) {
        self.cached.set_value(Some(form));
    }

    /// Return the cached form or query the document once for it.
    pub fn locate(&self) -> Option<HtmlFormElement> {
        if let Some(form) = self.cached.get_value() {
            return Some(form);
        }
        let form = query_contact_form()?;
        log::debug!("Located contact form via {}", contact_form_selector());
        self.remember(form.clone());
        Some(form)
    }
}

impl Default for FormLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_selector() {
        assert_eq!(contact_form_selector(), r#"form[action="/contact"]"#);
    }

    #[test]
    fn test_no_document_off_wasm() {
        assert!(document().is_none());
        assert!(query_contact_form().is_none());
        assert!(element_text("contact-copy").is_none());
    }
}
