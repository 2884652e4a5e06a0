// =============================================================================
// Marketing Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use marketing_web::{App, AppConfig};

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logger (ignore if already initialized by wasm_bindgen start)
    let _ = console_log::init_with_level(AppConfig::from_env().log_level());

    log::info!("Starting Marketing Web...");

    // Mount the Leptos app to the body
    leptos::mount::mount_to_body(App);
}
