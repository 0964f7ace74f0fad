use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "Explore the world, discover new places, and learn about our beautiful planet." }
            p { class: "footer-note", "© 2025 World Explorer. All rights reserved." }
        }
    }
}
