use crate::MAIN_CSS;
use crate::components::{Footer, Navbar};
use crate::pages::{ContinentPage, CountryPage, Home, NotFound, RegionPage};
use dioxus::prelude::*;

/// Client-side routes. Every page is rendered inside [`Shell`].
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/continent/:slug")]
        ContinentPage { slug: String },
        #[route("/region/:slug")]
        RegionPage { slug: String },
        #[route("/country/:name")]
        CountryPage { name: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root component.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {MAIN_CSS} }
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "shell",
            Navbar {}
            main { class: "shell-content", Outlet::<Route> {} }
            Footer {}
        }
    }
}
