use atlas_domain::catalog::MapStyle;
use dioxus::prelude::*;

/// Picker for the base map image. `selected` is the current map `src`.
#[component]
pub fn MapSelector(selected: String, on_select: EventHandler<&'static str>) -> Element {
    let mut open = use_signal(|| false);
    let current = MapStyle::resolve(&selected);

    rsx! {
        section { class: "map-selector",
            div { class: "section-header",
                h2 { class: "gradient-text dark", "Choose Your Map Style" }
                p { class: "muted",
                    "Select the perfect map visualization to enhance your exploration experience"
                }
            }
            div { class: "card current-map",
                img { class: "thumb", src: "{current.src}", alt: "{current.name}" }
                div {
                    p { class: "eyebrow", "Current Selection" }
                    h3 { "{current.name}" }
                    p { class: "muted", "{current.description}" }
                }
            }
            div { class: "center",
                button {
                    class: "button button-primary",
                    onclick: move |_| open.set(!open()),
                    if open() { "🗂️ Hide Map Options" } else { "🗺️ Browse Map Styles" }
                }
            }
            if open() {
                div { class: "map-grid",
                    for style in MapStyle::all().iter() {
                        div {
                            key: "{style.id}",
                            class: if style.src == current.src { "map-option selected" } else { "map-option" },
                            onclick: move |_| {
                                on_select.call(style.src);
                                open.set(false);
                            },
                            if style.src == current.src {
                                span { class: "badge-selected", "✓" }
                            }
                            img { class: "preview", src: "{style.src}", alt: "{style.name}" }
                            h3 { "{style.name}" }
                            p { class: "muted", "{style.description}" }
                            span { class: "pill",
                                if style.src == current.src { "✓ Selected" } else { "Select Map ›" }
                            }
                        }
                    }
                }
            }
        }
    }
}
