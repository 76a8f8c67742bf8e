//! Document Q&A Client - Main Entry Point
//!
//! Pure web client: the assistant/storage service is an external backend
//! reached over HTTP, configured in `config::AppConfig`.

use doc_qa_client::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Document Q&A Client - WASM initialized!".into());
    dioxus::launch(App);
}

// Native fallback: the client only renders in the browser
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let _ = App;
    eprintln!("doc-qa-client targets the browser; run it with `dx serve --platform web`.");
}
