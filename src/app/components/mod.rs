pub mod chat_panel;
pub mod file_manager;
pub mod navbar;
pub mod theme_toggle;

pub use chat_panel::ChatPanel;
pub use file_manager::FileManagerPanel;
pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
