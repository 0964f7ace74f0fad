use crate::components::NotFoundCard;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    debug!(path = %segments.join("/"), "No route matched");

    rsx! {
        NotFoundCard {
            title: "Page Not Found",
            message: "This place isn't on our map yet.",
        }
    }
}
