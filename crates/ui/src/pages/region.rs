use super::listing::{Heading, listing};
use crate::components::NotFoundCard;
use atlas_countries::CountryClient;
use atlas_domain::catalog::Region;
use dioxus::prelude::*;
use tracing::warn;

const REGION_ACCENT: &str = "background-image: linear-gradient(90deg, #a855f7, #db2777);";

#[component]
pub fn RegionPage(slug: String) -> Element {
    let client = use_context::<CountryClient>();

    let countries = use_resource(use_reactive((&slug,), move |(slug,)| {
        let client = client.clone();
        async move {
            let Some(region) = Region::from_slug(&slug) else {
                return None;
            };
            let result = client.subregion(region.name).await;
            if let Err(err) = &result {
                warn!(%err, region = region.name, "Failed to load region");
            }
            Some(result)
        }
    }));

    let Some(region) = Region::from_slug(&slug) else {
        return rsx! {
            NotFoundCard {
                title: "Region Not Found",
                message: "This region doesn't exist in our database.",
            }
        };
    };

    let state = countries.read();
    listing(
        Heading {
            emoji: "🗺️",
            name: region.name,
            tagline: "Discover the countries and territories of this region",
            accent: REGION_ACCENT.to_owned(),
            theme: "region",
        },
        state.as_ref().and_then(Option::as_ref),
    )
}
