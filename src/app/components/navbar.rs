use dioxus::prelude::*;

use crate::app::ActivePanel;
use crate::shared::hooks::ThemeState;

use super::ThemeToggle;

#[component]
pub fn Navbar(active: Signal<ActivePanel>, theme: ThemeState) -> Element {
    let mut active_chat = active;
    let mut active_files = active;

    let tab_class = |panel: ActivePanel| {
        if *active.read() == panel {
            "navbar__tab navbar__tab--active"
        } else {
            "navbar__tab"
        }
    };

    rsx! {
        nav { class: "navbar",
            span { class: "navbar__brand", "Document Q&A" }
            div { class: "navbar__tabs",
                button {
                    class: tab_class(ActivePanel::Chat),
                    onclick: move |_| active_chat.set(ActivePanel::Chat),
                    "Chat"
                }
                button {
                    class: tab_class(ActivePanel::Files),
                    onclick: move |_| active_files.set(ActivePanel::Files),
                    "Files"
                }
            }
            ThemeToggle { theme }
        }
    }
}
