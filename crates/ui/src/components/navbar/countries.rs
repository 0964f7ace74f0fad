use super::dropdown::{Backdrop, EmptyResult, MenuHeader, SearchBox, Toggle};
use crate::Route;
use crate::components::Spinner;
use atlas_countries::CountryClient;
use atlas_domain::config::AtlasConfig;
use atlas_domain::country::Country;
use atlas_domain::search::{filter_by, paginate};
use dioxus::prelude::*;
use tracing::{info, warn};

/// Searchable list of every country. The list is fetched the first time the menu opens.
#[component]
pub(super) fn CountriesDropdown() -> Element {
    let client = use_context::<CountryClient>();
    let limit = use_context::<AtlasConfig>().ui.country_list_limit;
    let nav = navigator();

    let mut open = use_signal(|| false);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut countries = use_signal(|| None::<Vec<Country>>);

    let ontoggle = move |_: MouseEvent| {
        let opening = !open();
        open.set(opening);
        if !opening || loading() || countries.read().is_some() {
            return;
        }

        loading.set(true);
        let client = client.clone();
        spawn(async move {
            match client.all().await {
                Ok(list) => {
                    info!(count = list.len(), "Country list loaded");
                    countries.set(Some(list));
                }
                Err(err) => warn!(%err, "Failed to load the country list"),
            }
            loading.set(false);
        });
    };

    let list = countries.read();
    let page = paginate(
        filter_by(list.as_deref().unwrap_or_default(), &search.read(), |c| c.name.common.as_str()),
        limit,
    );

    rsx! {
        div { class: "menu",
            Toggle {
                open: open(),
                emoji: "🌎",
                label: "Countries",
                theme: "countries",
                ontoggle,
            }
            if open() {
                Backdrop { onclose: move |_| open.set(false) }
                div { class: "menu-panel wide",
                    MenuHeader {
                        title: "🌎 All Countries",
                        subtitle: "Search and explore countries worldwide",
                        theme: "countries",
                    }
                    SearchBox {
                        placeholder: "Search countries...",
                        value: search(),
                        oninput: move |term| search.set(term),
                    }
                    div { class: "menu-list scroll",
                        if loading() {
                            Spinner { label: "Loading countries..." }
                        } else {
                            if page.items.is_empty() {
                                EmptyResult { message: "No countries found" }
                            }
                            for country in page.items.iter() {
                                CountryOption {
                                    key: "{country.cca3}{country.name.common}",
                                    name: country.name.common.clone(),
                                    flag: country.flag.clone(),
                                    capital: country.primary_capital().unwrap_or("No capital").to_owned(),
                                    region: country.region.clone(),
                                    onpick: move |name: String| {
                                        open.set(false);
                                        search.set(String::new());
                                        nav.push(Route::CountryPage { name });
                                    },
                                }
                            }
                            if let Some(summary) = page.summary() {
                                div { class: "menu-summary", "{summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CountryOption(
    name: String,
    flag: String,
    capital: String,
    region: String,
    onpick: EventHandler<String>,
) -> Element {
    rsx! {
        button {
            class: "menu-item",
            onclick: move |_| onpick.call(name.clone()),
            span { class: "menu-item-emoji", "{flag}" }
            div { class: "menu-item-body",
                h4 { class: "truncate", "{name}" }
                p { class: "truncate", "{capital} • {region}" }
            }
            span { class: "chevron", "›" }
        }
    }
}
