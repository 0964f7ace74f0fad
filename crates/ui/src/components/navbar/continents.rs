use super::dropdown::{Backdrop, MenuHeader, Toggle};
use crate::Route;
use atlas_domain::catalog::Continent;
use dioxus::prelude::*;

#[component]
pub(super) fn ContinentsDropdown() -> Element {
    let mut open = use_signal(|| false);
    let nav = navigator();

    rsx! {
        div { class: "menu",
            Toggle {
                open: open(),
                emoji: "🌍",
                label: "Continents",
                theme: "continents",
                ontoggle: move |_| open.set(!open()),
            }
            if open() {
                Backdrop { onclose: move |_| open.set(false) }
                div { class: "menu-panel",
                    MenuHeader {
                        title: "🌍 Explore Continents",
                        subtitle: "Discover the 6 continents of our world",
                        theme: "continents",
                    }
                    div { class: "menu-list",
                        for continent in Continent::all().iter() {
                            button {
                                key: "{continent.slug}",
                                class: "menu-item",
                                onclick: move |_| {
                                    open.set(false);
                                    nav.push(Route::ContinentPage { slug: continent.slug.to_owned() });
                                },
                                span { class: "menu-item-emoji", "{continent.emoji}" }
                                div { class: "menu-item-body",
                                    h4 { "{continent.menu_name}" }
                                    p { "{continent.description}" }
                                }
                                span { class: "chevron", "›" }
                            }
                        }
                    }
                    div { class: "menu-footer",
                        p { "🎯 Click any continent to explore its countries" }
                        div { class: "menu-footer-emojis",
                            for continent in Continent::all().iter() {
                                span { key: "{continent.slug}", "{continent.emoji}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
