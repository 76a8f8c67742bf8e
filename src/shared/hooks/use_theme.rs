use dioxus::prelude::*;

use crate::config::DARK_MODE_STORAGE_KEY;

/// Light/dark preference, passed in explicitly at startup and changed only
/// through [`ThemeState::set_mode`]. No ambient global reads after mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn from_dark_flag(dark: bool) -> ThemeMode {
        if dark { ThemeMode::Dark } else { ThemeMode::Light }
    }
}

/// Theme state with change notification via its Signal
#[derive(Clone, PartialEq)]
pub struct ThemeState {
    mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Explicit setter: updates subscribers, re-applies the document class,
    /// and persists the preference under the fixed key.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
        spawn(async move {
            apply_theme_css(mode).await;
            save_theme(mode).await;
        });
    }

    pub fn toggle(&mut self) {
        self.set_mode(self.mode().toggled());
    }
}

/// Hook to manage the theme, seeded from [`crate::config::AppConfig`]
pub fn use_theme(initial: ThemeMode) -> ThemeState {
    let mode = use_signal(move || initial);

    // Apply the configured theme class once on mount
    use_effect(move || {
        let current = *mode.read();
        spawn(async move {
            apply_theme_css(current).await;
        });
    });

    ThemeState { mode }
}

/// Apply the theme class to the document element
#[cfg(target_arch = "wasm32")]
async fn apply_theme_css(mode: ThemeMode) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('dark', 'light');
            root.classList.add('{}');
        }})()
    "#,
        mode.as_str()
    );

    let _ = dioxus::document::eval(&script).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn apply_theme_css(_mode: ThemeMode) {
    // No-op on server
}

/// Persist the dark-mode boolean to localStorage
#[cfg(target_arch = "wasm32")]
async fn save_theme(mode: ThemeMode) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let value = if mode.is_dark() { "true" } else { "false" };
            let _ = storage.set_item(DARK_MODE_STORAGE_KEY, value);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn save_theme(_mode: ThemeMode) {
    // No-op on server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_from_dark_flag() {
        assert_eq!(ThemeMode::from_dark_flag(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_dark_flag(false), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Light.as_str(), "light");
    }
}
