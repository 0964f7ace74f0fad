mod continents;
mod countries;
mod dropdown;
mod home_icon;
mod regions;

use continents::ContinentsDropdown;
use countries::CountriesDropdown;
use dioxus::prelude::*;
use home_icon::HomeIcon;
use regions::RegionsDropdown;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                HomeIcon {}
                h1 { class: "navbar-brand gradient-text", "🌍 World Explorer" }
                div { class: "navbar-menus",
                    ContinentsDropdown {}
                    CountriesDropdown {}
                    RegionsDropdown {}
                }
            }
        }
    }
}
