// Custom Dioxus hooks
pub mod use_chat_session;
pub mod use_file_session;
pub mod use_theme;

pub use use_chat_session::{ChatSessionState, use_chat_session};
pub use use_file_session::{FileSessionState, use_file_session};
pub use use_theme::{ThemeMode, ThemeState, use_theme};
