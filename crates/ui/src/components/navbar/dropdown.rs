//! Pieces shared by the navigation menus.

use dioxus::prelude::*;

/// Menu button; `theme` selects the accent colors (`continents`, `countries`, `regions`).
#[component]
pub(super) fn Toggle(
    open: bool,
    emoji: &'static str,
    label: &'static str,
    theme: &'static str,
    ontoggle: EventHandler<MouseEvent>,
) -> Element {
    let state = if open { "open" } else { "closed" };

    rsx! {
        button {
            class: "menu-toggle {theme} {state}",
            onclick: move |evt| ontoggle.call(evt),
            span { class: "menu-emoji", "{emoji}" }
            span { class: "menu-label", "{label}" }
            span { class: "caret", "▾" }
        }
    }
}

/// Transparent layer under an open menu; any click on it closes the menu.
#[component]
pub(super) fn Backdrop(onclose: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "menu-backdrop", onclick: move |evt| onclose.call(evt) }
    }
}

#[component]
pub(super) fn MenuHeader(title: &'static str, subtitle: &'static str, theme: &'static str) -> Element {
    rsx! {
        div { class: "menu-header {theme}",
            h3 { "{title}" }
            p { "{subtitle}" }
        }
    }
}

#[component]
pub(super) fn SearchBox(placeholder: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "menu-search",
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub(super) fn EmptyResult(message: &'static str) -> Element {
    rsx! {
        div { class: "menu-empty",
            span { class: "menu-empty-icon", "🔍" }
            p { "{message}" }
        }
    }
}
