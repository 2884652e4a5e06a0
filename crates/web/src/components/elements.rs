// =============================================================================
// Marketing Web - Presentational Elements
// =============================================================================
// Table of Contents:
// 1. Section
// 2. Text Elements
// 3. Actions & Pill Button
// =============================================================================

use leptos::prelude::*;
use web_sys::MouseEvent;

// -----------------------------------------------------------------------------
// 1. Section
// -----------------------------------------------------------------------------

/// Full-width page section.
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section {}", class)>
            <div class="section-inner">
                {children()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 2. Text Elements
// -----------------------------------------------------------------------------

/// Root container for rendered markdown.
#[component]
pub fn Article(children: Children) -> impl IntoView {
    view! {
        <article class="article">
            {children()}
        </article>
    }
}

#[component]
pub fn Title(children: Children) -> impl IntoView {
    view! {
        <h2 class="title">{children()}</h2>
    }
}

#[component]
pub fn Subtitle(children: Children) -> impl IntoView {
    view! {
        <h3 class="subtitle">{children()}</h3>
    }
}

#[component]
pub fn Paragraph(children: Children) -> impl IntoView {
    view! {
        <p class="paragraph">{children()}</p>
    }
}

// -----------------------------------------------------------------------------
// 3. Actions & Pill Button
// -----------------------------------------------------------------------------

/// Right-aligned row of form actions.
#[component]
pub fn Actions(children: Children) -> impl IntoView {
    view! {
        <div class="actions">
            {children()}
        </div>
    }
}

/// Rounded submit button.
#[component]
pub fn PillButton(
    #[prop(into)] label: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="pill pill-button"
            disabled=move || disabled.get()
            on:click=move |e| on_click.run(e)
        >
            {label}
        </button>
    }
}
