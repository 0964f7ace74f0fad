use super::listing::{Heading, listing};
use crate::components::NotFoundCard;
use atlas_countries::CountryClient;
use atlas_domain::catalog::Continent;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn ContinentPage(slug: String) -> Element {
    let client = use_context::<CountryClient>();

    let countries = use_resource(use_reactive((&slug,), move |(slug,)| {
        let client = client.clone();
        async move {
            let Some(continent) = Continent::from_slug(&slug) else {
                return None;
            };
            let result = client.continent(continent).await;
            if let Err(err) = &result {
                warn!(%err, continent = continent.name, "Failed to load continent");
            }
            Some(result)
        }
    }));

    let Some(continent) = Continent::from_slug(&slug) else {
        return rsx! {
            NotFoundCard {
                title: "Oops! Not Found",
                message: "This continent doesn't exist in our magical world map.",
            }
        };
    };

    let state = countries.read();
    listing(
        Heading {
            emoji: continent.emoji,
            name: continent.name,
            tagline: "Discover the countries and territories of this amazing continent",
            accent: continent.gradient_css(),
            theme: continent.slug,
        },
        state.as_ref().and_then(Option::as_ref),
    )
}
