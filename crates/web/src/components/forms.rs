// =============================================================================
// Marketing Web - Form Components
// =============================================================================

use leptos::prelude::*;

use crate::state::FieldName;

// -----------------------------------------------------------------------------
// InputControl
// -----------------------------------------------------------------------------

/// Labeled input bound to one contact field.
///
/// Both `input` and `change` events report the current value through
/// `on_change` together with the field's name.
#[component]
pub fn InputControl(
    #[prop(into)] label: String,
    name: FieldName,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<(FieldName, String)>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let input_id = format!("contact-{}", name.as_str());

    view! {
        <div class="form-field input-control">
            <label class="form-label" for=input_id.clone()>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=input_id
                type=input_type
                class="form-input"
                name=name.as_str()
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_change.run((name, event_target_value(&e)))
                on:change=move |e| on_change.run((name, event_target_value(&e)))
            />
        </div>
    }
}
