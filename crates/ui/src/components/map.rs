use crate::Route;
use atlas_domain::catalog::Continent;
use dioxus::prelude::*;

fn caption(hovered: Option<&Continent>) -> String {
    hovered.map_or_else(
        || "🎯 Hover over any continent to begin your journey".to_owned(),
        |c| format!("✨ Click to explore {}", c.name),
    )
}

fn hotspot_style(continent: &Continent, hovered: bool) -> String {
    let base = continent.hotspot.css();
    if hovered {
        format!(
            "{base} background-color: {}; border-color: {}; transform: scale(1.02);",
            continent.palette.fill, continent.palette.accent
        )
    } else {
        base
    }
}

/// The base map with one clickable hotspot per continent.
#[component]
pub fn WorldMap(src: String) -> Element {
    let mut hovered = use_signal(|| None::<&'static Continent>);
    let nav = navigator();

    rsx! {
        div { class: "world-map",
            div { class: "map-frame",
                img { class: "map-image", src: "{src}", alt: "Interactive World Map" }
                for continent in Continent::all().iter() {
                    div {
                        key: "{continent.slug}",
                        class: "hotspot",
                        style: hotspot_style(continent, hovered() == Some(continent)),
                        onmouseenter: move |_| hovered.set(Some(continent)),
                        onmouseleave: move |_| hovered.set(None),
                        onclick: move |_| {
                            nav.push(Route::ContinentPage { slug: continent.slug.to_owned() });
                        },
                        if hovered() == Some(continent) {
                            div { class: "hotspot-card",
                                div { class: "hero-emoji small bounce", "{continent.emoji}" }
                                div { class: "gradient-text hotspot-title", style: continent.gradient_css(),
                                    "{continent.name}"
                                }
                                div { class: "muted", "Explore Now →" }
                            }
                        }
                    }
                }
            }
            div { class: if hovered().is_some() { "map-caption active" } else { "map-caption" },
                p { class: "map-caption-title", {caption(hovered())} }
                p { class: "muted",
                    "Discover fascinating cultures, breathtaking landscapes, and incredible adventures across our planet"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_follows_hover() {
        assert_eq!(caption(None), "🎯 Hover over any continent to begin your journey");
        let europe = Continent::from_slug("europe");
        assert_eq!(caption(europe), "✨ Click to explore Europe");
    }

    #[test]
    fn test_hotspot_style_highlights_on_hover() {
        let asia = Continent::from_slug("asia").expect("asia");
        assert_eq!(hotspot_style(asia, false), "left: 58%; top: 3%; width: 40%; height: 60%;");
        assert!(hotspot_style(asia, true).contains("border-color: #ef4444"));
    }
}
