use dioxus::prelude::*;

/// External map links; both open in a new tab.
#[component]
pub fn MapButtons(google_maps: String, open_street_map: String) -> Element {
    rsx! {
        div { class: "map-buttons",
            a {
                class: "button button-primary wide",
                href: "{google_maps}",
                target: "_blank",
                rel: "noopener noreferrer",
                "🗺️ View on Google Maps"
            }
            a {
                class: "button button-green wide",
                href: "{open_street_map}",
                target: "_blank",
                rel: "noopener noreferrer",
                "🌐 View on OpenStreetMap"
            }
        }
    }
}
