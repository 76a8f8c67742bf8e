pub mod components;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::shared::hooks::{ThemeMode, use_chat_session, use_file_session, use_theme};
use crate::shared::services::ApiService;
use components::{ChatPanel, FileManagerPanel, Navbar};

/// Which panel the navbar currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePanel {
    Chat,
    Files,
}

/// Application root: explicit startup configuration, one ApiService in
/// context, and the two independent session managers. Both managers live
/// here so their state survives panel switches.
#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::load);
    use_context_provider(|| ApiService::with_base_url(config.api_base_url.clone()));

    let theme = use_theme(ThemeMode::from_dark_flag(config.start_in_dark_mode));
    let active = use_signal(|| ActivePanel::Chat);
    let chat = use_chat_session();
    let files = use_file_session();

    let panel = *active.read();

    rsx! {
        document::Link { rel: "stylesheet", href: "/assets/dist/bundle.css" }
        div { class: "app-shell",
            Navbar { active, theme }
            main { class: "app-main",
                if panel == ActivePanel::Chat {
                    ChatPanel { chat }
                } else {
                    FileManagerPanel { files }
                }
            }
        }
    }
}
