use dioxus::prelude::*;

use crate::shared::hooks::ThemeState;

/// Theme toggle for switching between light and dark mode.
/// Animated sun/moon ball with stars and clouds.
#[component]
pub fn ThemeToggle(theme: ThemeState) -> Element {
    let is_light = !theme.is_dark();
    let mut theme_click = theme.clone();

    let tooltip = if is_light { "Switch to dark mode" } else { "Switch to light mode" };
    let toggle_class = if is_light {
        "c-theme-toggle c-theme-toggle--light"
    } else {
        "c-theme-toggle"
    };

    rsx! {
        div {
            class: "{toggle_class}",
            "data-tooltip": "{tooltip}",
            role: "button",
            tabindex: "0",
            aria_label: "Toggle light/dark mode",
            onclick: move |_| theme_click.toggle(),

            // Ball (sun/moon)
            div { class: "c-theme-toggle__ball" }

            // Stars (visible in dark mode)
            div { class: "c-theme-toggle__stars",
                span { class: "c-theme-toggle__star" }
                span { class: "c-theme-toggle__star" }
                span { class: "c-theme-toggle__star" }
            }

            // Clouds (visible in light mode)
            div { class: "c-theme-toggle__clouds",
                span { class: "c-theme-toggle__cloud" }
                span { class: "c-theme-toggle__cloud" }
            }
        }
    }
}
