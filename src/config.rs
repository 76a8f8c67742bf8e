//! Startup configuration for the client.
//!
//! Configuration is explicit and passed into the presentation layer at mount
//! rather than read ambiently: the theme preference in particular is loaded
//! once here and updated only through the theme hook's setter.

/// Default address of the assistant/storage service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Fixed localStorage key for the dark-mode preference
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Initial theme; updated via the theme hook, persisted under
    /// [`DARK_MODE_STORAGE_KEY`]
    pub start_in_dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            start_in_dark_mode: false,
        }
    }
}

impl AppConfig {
    /// Build the startup configuration, restoring the persisted dark-mode
    /// preference when running in a browser.
    pub fn load() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            start_in_dark_mode: stored_dark_mode().unwrap_or(false),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_dark_mode() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(DARK_MODE_STORAGE_KEY).ok()??;
    Some(value == "true")
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_dark_mode() -> Option<bool> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.start_in_dark_mode);
    }
}
