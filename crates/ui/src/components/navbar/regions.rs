use super::dropdown::{Backdrop, EmptyResult, MenuHeader, SearchBox, Toggle};
use crate::Route;
use atlas_domain::catalog::Region;
use atlas_domain::search::filter_by;
use dioxus::prelude::*;

#[component]
pub(super) fn RegionsDropdown() -> Element {
    let mut open = use_signal(|| false);
    let mut search = use_signal(String::new);
    let nav = navigator();

    let regions = filter_by(Region::all(), &search.read(), |r| r.name);

    rsx! {
        div { class: "menu",
            Toggle {
                open: open(),
                emoji: "🗺️",
                label: "Regions",
                theme: "regions",
                ontoggle: move |_| open.set(!open()),
            }
            if open() {
                Backdrop { onclose: move |_| open.set(false) }
                div { class: "menu-panel wide",
                    MenuHeader {
                        title: "🗺️ Sub-Regions",
                        subtitle: "Explore specific regions around the world",
                        theme: "regions",
                    }
                    SearchBox {
                        placeholder: "Search regions...",
                        value: search(),
                        oninput: move |term| search.set(term),
                    }
                    div { class: "menu-list scroll",
                        if regions.is_empty() {
                            EmptyResult { message: "No regions found" }
                        }
                        for region in regions {
                            button {
                                key: "{region.slug}",
                                class: "menu-item",
                                onclick: move |_| {
                                    open.set(false);
                                    search.set(String::new());
                                    nav.push(Route::RegionPage { slug: region.slug.to_owned() });
                                },
                                span { class: "menu-item-emoji", "{region.emoji}" }
                                div { class: "menu-item-body",
                                    h4 { "{region.name}" }
                                    p { "{region.description}" }
                                }
                                span { class: "chevron", "›" }
                            }
                        }
                    }
                }
            }
        }
    }
}
