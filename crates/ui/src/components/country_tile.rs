use crate::Route;
use dioxus::prelude::*;

/// Grid entry linking to the country's detail page.
#[component]
pub fn CountryTile(name: String, flag: String, capital: String) -> Element {
    rsx! {
        Link { class: "tile", to: Route::CountryPage { name: name.clone() },
            span { class: "tile-flag", "{flag}" }
            div { class: "tile-body",
                h3 { class: "tile-title", "{name}" }
                p { class: "tile-subtitle", "{capital}" }
            }
            span { class: "chevron", "›" }
        }
    }
}
