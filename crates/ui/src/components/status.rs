use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(into)] label: String) -> Element {
    rsx! {
        div { class: "spinner-box",
            div { class: "spinner" }
            p { class: "muted", "{label}" }
        }
    }
}

/// Headline number with a caption underneath.
#[component]
pub fn Stat(
    #[props(into)] value: String,
    #[props(into)] label: String,
    #[props(into, default)] style: String,
) -> Element {
    rsx! {
        div { class: "stat",
            div { class: "stat-value gradient-text", style: "{style}", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

/// Inline banner for a listing that could not be fetched.
#[component]
pub fn LoadError(#[props(into)] message: String) -> Element {
    rsx! {
        div { class: "load-error",
            span { class: "load-error-icon", "⚠️" }
            div {
                h3 { "Unable to Load Countries" }
                p { "{message}" }
            }
        }
    }
}
