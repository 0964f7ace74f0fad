use crate::Route;
use dioxus::prelude::*;

/// Full-page card shown for unknown slugs and failed country lookups.
#[component]
pub fn NotFoundCard(#[props(into)] title: String, #[props(into)] message: String) -> Element {
    rsx! {
        div { class: "page page-error",
            div { class: "card not-found",
                div { class: "hero-emoji bounce", "🚫" }
                h1 { class: "gradient-text danger", "{title}" }
                p { class: "muted", "{message}" }
                Link { class: "button button-primary", to: Route::Home {},
                    "🗺️ Return to Map "
                    span { class: "nudge", "→" }
                }
            }
        }
    }
}

/// "Back to World Map" button in the page's accent colors.
#[component]
pub fn BackLink(#[props(into)] style: String) -> Element {
    rsx! {
        div { class: "back",
            Link { class: "button button-accent", style: "{style}", to: Route::Home {},
                "🗺️ Back to World Map "
                span { class: "nudge", "✨" }
            }
        }
    }
}
