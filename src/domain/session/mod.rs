// Session state machines for the two client-side managers.
// Pure Rust so they stay unit-testable outside the browser; the hooks in
// shared::hooks wrap them in Signals and drive the network calls.

pub mod chat;
pub mod files;

pub use chat::{ChatSession, FALLBACK_ASSISTANT_REPLY, OutboundChat};
pub use files::{FileSession, UPLOAD_PROGRESS_STEP, UPLOAD_TICK_MS};
