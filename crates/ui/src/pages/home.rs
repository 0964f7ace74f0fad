use crate::components::{MapSelector, Stat, WorldMap};
use crate::storage::{load_map_choice, save_map_choice};
use atlas_domain::catalog::{Continent, MapStyle};
use atlas_domain::config::AtlasConfig;
use dioxus::prelude::*;

/// Landing page. Waits for the stored map preference before showing the map.
#[component]
pub fn Home() -> Element {
    let fallback = MapStyle::resolve(&use_context::<AtlasConfig>().ui.default_map);
    let mut selected = use_signal(|| None::<&'static MapStyle>);

    use_future(move || async move {
        selected.set(Some(load_map_choice(fallback).await));
    });

    let Some(style) = selected() else {
        return rsx! {
            div { class: "page page-loading",
                div { class: "loading-globe bounce", "🌍" }
                h2 { class: "gradient-text", "World Explorer" }
                p { class: "muted pulse", "Preparing your journey..." }
            }
        };
    };

    rsx! {
        div { class: "page page-home",
            header { class: "hero",
                div { class: "hero-badge",
                    span { "🌍" }
                    span { class: "eyebrow", "Interactive World Explorer" }
                }
                h1 { class: "hero-title gradient-text dark",
                    "Discover Our"
                    br {}
                    span { class: "gradient-text", "Beautiful Planet" }
                }
                p { class: "hero-lead",
                    "Embark on an interactive journey across continents. Choose your map style and explore the diverse cultures, landscapes, and wonders that make our world extraordinary."
                }
                div { class: "stats",
                    Stat { value: Continent::all().len().to_string(), label: "Continents" }
                    Stat { value: MapStyle::all().len().to_string(), label: "Map Styles" }
                    Stat { value: "∞", label: "Discoveries" }
                }
            }
            div { class: "card glass",
                MapSelector {
                    selected: "{style.src}",
                    on_select: move |src: &'static str| {
                        selected.set(Some(MapStyle::resolve(src)));
                        save_map_choice(src);
                    },
                }
                WorldMap { src: "{style.src}" }
            }
        }
    }
}
