use crate::components::{BackLink, MapButtons, NotFoundCard, Spinner};
use atlas_countries::{CountryClient, CountryError};
use atlas_domain::country::{Country, NOT_AVAILABLE};
use atlas_domain::format::{describe_population, format_area};
use dioxus::prelude::*;
use tracing::warn;

const COUNTRY_ACCENT: &str = "background-image: linear-gradient(90deg, #2563eb, #4f46e5);";

const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn failure_message(err: &CountryError) -> &'static str {
    if err.is_not_found() {
        "The country you're looking for doesn't exist."
    } else {
        "Failed to load country data"
    }
}

#[component]
pub fn CountryPage(name: String) -> Element {
    let client = use_context::<CountryClient>();

    let country = use_resource(use_reactive((&name,), move |(name,)| {
        let client = client.clone();
        async move {
            let result = client.country(&name).await;
            if let Err(err) = &result {
                warn!(%err, country = %name, "Failed to load country");
            }
            result
        }
    }));

    match &*country.read() {
        None => rsx! {
            div { class: "page page-listing", Spinner { label: "Loading country..." } }
        },
        Some(Err(err)) => rsx! {
            NotFoundCard { title: "Country Not Found", message: failure_message(err) }
        },
        Some(Ok(country)) => details(country),
    }
}

fn details(country: &Country) -> Element {
    let coordinates = country.coordinates().unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    rsx! {
        div { class: "page page-country",
            div { class: "card glass header-card",
                div { class: "hero-emoji bounce", "{country.flag}" }
                h1 { class: "gradient-text", style: COUNTRY_ACCENT, "{country.name.common}" }
                if country.has_distinct_official_name() {
                    p { class: "hero-lead", "Official: {country.name.official}" }
                }
                div { class: "badges",
                    span { class: "badge blue", "{country.region}" }
                    span { class: "badge indigo", "{country.subregion}" }
                }
                div { class: "quick-stats",
                    QuickStat { value: describe_population(country.population), label: "Population", tone: "blue" }
                    QuickStat { value: format_area(country.area), label: "Area", tone: "green" }
                    QuickStat {
                        value: country.primary_capital().unwrap_or(NOT_AVAILABLE).to_owned(),
                        label: "Capital",
                        tone: "purple",
                    }
                    QuickStat { value: country.cca2.clone(), label: "Country Code", tone: "orange" }
                }
            }
            div { class: "fact-columns",
                div { class: "card glass",
                    h2 { class: "section-title", "📋 Basic Information" }
                    Fact { label: "Languages:", value: country.language_summary() }
                    Fact { label: "Currency:", value: country.currency_summary() }
                    Fact { label: "Calling Code:", value: country.calling_code() }
                    Fact { label: "Internet TLD:", value: country.primary_tld().to_owned() }
                    Fact { label: "Landlocked:", value: yes_no(country.landlocked) }
                }
                div { class: "card glass",
                    h2 { class: "section-title", "🌍 Geography & More" }
                    Fact { label: "Coordinates:", value: coordinates, stacked: true }
                    Fact { label: "Timezones:", value: country.timezone_summary(), stacked: true }
                    if !country.borders.is_empty() {
                        Fact { label: "Borders:", value: country.borders.join(", "), stacked: true }
                    }
                    Fact { label: "UN Member:", value: yes_no(country.un_member), stacked: true }
                    Fact { label: "Independent:", value: yes_no(country.is_independent()), stacked: true }
                }
            }
            div { class: "card glass",
                h2 { class: "section-title center", "🏁 Flag & Maps" }
                div { class: "flag-maps",
                    div { class: "center",
                        img { class: "flag-image", src: "{country.flags.svg}", alt: country.flag_alt() }
                        if let Some(alt) = &country.flags.alt {
                            p { class: "muted small", "{alt}" }
                        }
                    }
                    MapButtons {
                        google_maps: country.maps.google_maps.clone(),
                        open_street_map: country.maps.open_street_maps.clone(),
                    }
                }
            }
            BackLink { style: COUNTRY_ACCENT }
        }
    }
}

#[component]
fn QuickStat(value: String, label: &'static str, tone: &'static str) -> Element {
    rsx! {
        div { class: "quick-stat {tone}",
            div { class: "quick-stat-value", "{value}" }
            div { class: "quick-stat-label", "{label}" }
        }
    }
}

/// One labelled fact; `stacked` puts the value under its label.
#[component]
fn Fact(label: &'static str, #[props(into)] value: String, #[props(default)] stacked: bool) -> Element {
    rsx! {
        div { class: if stacked { "fact stacked" } else { "fact" },
            span { class: "fact-label", "{label}" }
            span { class: "fact-value", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_distinguishes_missing_countries() {
        let missing = CountryError::NotFound { query: "atlantis".to_owned() };
        assert_eq!(failure_message(&missing), "The country you're looking for doesn't exist.");

        let unknown_name = CountryError::Status {
            status: atlas_countries::StatusCode::NOT_FOUND,
            url: "https://restcountries.com/v3.1/name/atlantis".to_owned(),
            context: None,
        };
        assert_eq!(failure_message(&unknown_name), "Failed to load country data");

        let broken = CountryError::InvalidConfiguration { message: "bad".into(), context: None };
        assert_eq!(failure_message(&broken), "Failed to load country data");
    }
}
