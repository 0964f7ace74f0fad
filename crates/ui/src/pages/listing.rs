//! Layout shared by the continent and region pages.

use crate::components::{BackLink, CountryTile, LoadError, Spinner, Stat};
use atlas_countries::CountryError;
use atlas_domain::country::Country;
use atlas_domain::format::{abbreviate, total_population};
use dioxus::prelude::*;

pub(super) struct Heading {
    pub emoji: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Inline CSS painting headings and buttons in the area's colors.
    pub accent: String,
    /// Extra class on the page root, selects the background tint.
    pub theme: &'static str,
}

/// `state` is `None` while the request is in flight.
pub(super) fn listing(heading: Heading, state: Option<&Result<Vec<Country>, CountryError>>) -> Element {
    let Heading { emoji, name, tagline, accent, theme } = heading;
    let countries = match state {
        Some(Ok(list)) => list.as_slice(),
        _ => &[],
    };
    let (count, population) = if state.is_some() {
        (countries.len().to_string(), abbreviate(total_population(countries)))
    } else {
        ("…".to_owned(), "…".to_owned())
    };

    rsx! {
        div { class: "page page-listing {theme}",
            div { class: "card glass header-card",
                div { class: "hero-emoji bounce", "{emoji}" }
                h1 { class: "gradient-text", style: "{accent}", "Welcome to {name}!" }
                p { class: "hero-lead", "{tagline}" }
                div { class: "stats",
                    Stat { value: count, label: "Countries & Territories", style: accent.clone() }
                    Stat { value: population, label: "Total Population", style: accent.clone() }
                }
            }
            {match state {
                None => rsx! { Spinner { label: "Loading countries..." } },
                Some(Err(_)) => rsx! { LoadError { message: "Failed to load countries data" } },
                Some(Ok(_)) if countries.is_empty() => rsx! {},
                Some(Ok(_)) => rsx! {
                    div { class: "card glass",
                        h2 { class: "section-title", "🏛️ Countries & Territories" }
                        div { class: "tile-grid",
                            for country in countries {
                                CountryTile {
                                    key: "{country.cca3}{country.name.common}",
                                    name: country.name.common.clone(),
                                    flag: country.flag.clone(),
                                    capital: country.primary_capital().unwrap_or("No capital").to_owned(),
                                }
                            }
                        }
                        div { class: "summary",
                            p {
                                strong { {countries.len().to_string()} }
                                " countries and territories make up {name}, each with its own unique culture, history, and beauty waiting to be explored."
                            }
                        }
                    }
                },
            }}
            BackLink { style: accent.clone() }
        }
    }
}
