//! Section Heading
//!
//! Eyebrow label, title and optional lead paragraph at the top of each
//! page section.

use dioxus::prelude::*;

#[component]
pub fn SectionHeading(
    /// Small label above the title ("My Work")
    eyebrow: String,
    title: String,
    #[props(default)] lead: Option<String>,
    /// Center the block (default) or align left
    #[props(default = true)]
    centered: bool,
) -> Element {
    let class = if centered {
        "section-heading centered"
    } else {
        "section-heading"
    };

    rsx! {
        div { class: "{class}",
            p { class: "section-eyebrow", "{eyebrow}" }
            h2 { class: "section-title", "{title}" }
            if let Some(lead) = &lead {
                p { class: "section-lead", "{lead}" }
            }
        }
    }
}
