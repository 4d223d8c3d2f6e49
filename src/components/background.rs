use dioxus::prelude::*;

/// Fixed full-window gradient behind every section.
///
/// The colors live in the stylesheet (`.gradient-bg`); this component only
/// places the layers.
#[component]
pub fn GradientBackground() -> Element {
    rsx! {
        div { class: "gradient-bg", "aria-hidden": "true",
            div { class: "gradient-orb orb-primary" }
            div { class: "gradient-orb orb-secondary" }
        }
    }
}
