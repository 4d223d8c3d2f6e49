//! Badge Component
//!
//! Small pill used for technology tags.

use dioxus::prelude::*;

#[component]
pub fn Badge(
    /// Badge text
    label: String,
    #[props(default)] class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        span { class: "badge {extra}", "{label}" }
    }
}

/// Technology badges with an overflow counter
///
/// Renders each tag, then a `+N` badge when `hidden` is set.
#[component]
pub fn BadgeList(tags: Vec<String>, #[props(default)] hidden: Option<usize>) -> Element {
    rsx! {
        div { class: "badge-list",
            for tag in tags.iter() {
                Badge { key: "{tag}", label: tag.clone() }
            }
            if let Some(count) = hidden {
                Badge { label: format!("+{}", count), class: "badge-more".to_string() }
            }
        }
    }
}
