use crate::Route;
use dioxus::prelude::*;

#[component]
pub(super) fn HomeIcon() -> Element {
    let is_home = matches!(use_route::<Route>(), Route::Home {});

    rsx! {
        Link {
            class: if is_home { "home-icon active" } else { "home-icon" },
            to: Route::Home {},
            title: "Home",
            span { "🏠" }
        }
    }
}
