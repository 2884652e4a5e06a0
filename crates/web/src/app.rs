// =============================================================================
// Marketing Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title as PageTitle};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::copy::ContactCopy;
use crate::pages::{ContactPage, NotFoundPage};
use crate::utils::element_text;

/// Id of the `<script type="application/json">` block holding localized copy.
pub const COPY_ELEMENT_ID: &str = "contact-copy";

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    log::debug!("App config: {:?}", config);

    // Localized copy is supplied by the page shell when present
    let copy = ContactCopy::resolve(element_text(COPY_ELEMENT_ID).as_deref());

    provide_context(config);
    provide_context(copy);

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <PageTitle text="Contact" />
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=ContactPage />
                <Route path=path!("/contact") view=ContactPage />
            </Routes>
        </Router>
    }
}
