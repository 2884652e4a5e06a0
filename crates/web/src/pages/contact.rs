// =============================================================================
// Marketing Web - Contact Section
// =============================================================================
// Table of Contents:
// 1. Contact Page
// 2. Contact Section
// 3. Submission Logging
// =============================================================================

use leptos::html;
use leptos::prelude::*;
use web_sys::Event;

use crate::components::{Actions, InputControl, Markdown, PillButton, Section};
use crate::config::AppConfig;
use crate::copy::ContactCopy;
use crate::state::{ContactAction, ContactEffect, ContactFields, ContactReducer, ContactState, FieldName};
use crate::utils::FormLocator;
use crate::validation::NativeFormCheck;

// -----------------------------------------------------------------------------
// 1. Contact Page
// -----------------------------------------------------------------------------

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <main class="page page-contact">
            <ContactSection />
        </main>
    }
}

// -----------------------------------------------------------------------------
// 2. Contact Section
// -----------------------------------------------------------------------------

/// Markdown intro plus the contact form.
///
/// Copy comes from the `copy` prop, then from context, then the built-in
/// English strings.
#[component]
pub fn ContactSection(#[prop(optional, into)] copy: Option<ContactCopy>) -> impl IntoView {
    let copy = copy
        .or_else(use_context::<ContactCopy>)
        .unwrap_or_default();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let state = RwSignal::new(ContactState::new());
    let form_ref = NodeRef::<html::Form>::new();
    let locator = FormLocator::new();

    // Prefer the form this component rendered; fall back to the page's form.
    let native_check = move || {
        NativeFormCheck::new(form_ref.get_untracked().or_else(|| locator.locate()))
    };

    let dispatch = move |action: ContactAction| -> Vec<ContactEffect> {
        let check = native_check();
        let mut effects = Vec::new();
        state.update(|s| effects = ContactReducer::reduce(s, action, &check));
        effects
    };

    let on_change = Callback::new(move |(field, value): (FieldName, String)| {
        log::debug!("Contact field changed: {}", field);
        dispatch(ContactAction::Change { field, value });
    });

    let submit = move |e: &Event| {
        for effect in dispatch(ContactAction::Submit) {
            match effect {
                ContactEffect::PreventDefault => e.prevent_default(),
                ContactEffect::LogSubmission(fields) => log_submission(&fields),
            }
        }
    };

    let field_value = move |field: FieldName| {
        Signal::derive(move || state.with(|s| s.fields.get(field).to_string()))
    };
    let submit_disabled = Signal::derive(move || state.with(ContactState::is_submit_disabled));

    view! {
        <Section id="contact" class="section-contact">
            <Markdown source=copy.body_markdown />
            <form
                node_ref=form_ref
                class="form contact-form"
                action=config.form_action
                method=config.form_method
                accept-charset=config.form_charset
                on:submit=move |e| submit(&e)
            >
                <InputControl
                    label=copy.email_label
                    name=FieldName::EmailAddress
                    input_type="email"
                    placeholder=copy.email_placeholder
                    required=true
                    value=field_value(FieldName::EmailAddress)
                    on_change=on_change
                />
                <InputControl
                    label=copy.name_label
                    name=FieldName::FullName
                    placeholder=copy.name_placeholder
                    value=field_value(FieldName::FullName)
                    on_change=on_change
                />
                <InputControl
                    label=copy.question_label
                    name=FieldName::Question
                    placeholder=copy.question_placeholder
                    value=field_value(FieldName::Question)
                    on_change=on_change
                />
                <Actions>
                    <PillButton
                        label=copy.submit_button_text
                        disabled=submit_disabled
                        on_click=Callback::new(move |e: web_sys::MouseEvent| submit(&e))
                    />
                </Actions>
            </form>
        </Section>
    }
}

// -----------------------------------------------------------------------------
// 3. Submission Logging
// -----------------------------------------------------------------------------

/// Diagnostic record of a submit. Nothing is sent over the network.
fn log_submission(fields: &ContactFields) {
    match serde_json::to_string(fields) {
        Ok(record) => log::info!("Contact form submitted: {}", record),
        Err(e) => log::warn!("Contact form submitted, record unavailable: {}", e),
    }
}
