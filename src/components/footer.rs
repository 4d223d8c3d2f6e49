use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::icons::{Icon, LucideIcon};
use crate::context::use_site;

/// Copyright line for `year`.
pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("\u{00A9} {year} {owner}. All rights reserved.")
}

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let year = chrono::Local::now().year();
    let content = site.content.clone();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                a { class: "navbar-brand", href: "#home", "{content.brand}" }
                nav { class: "footer-links",
                    for link in content.nav_links.iter() {
                        a { key: "{link.anchor}", class: "nav-link", href: "{link.href()}", "{link.name}" }
                    }
                }
                div { class: "footer-socials",
                    for social in content.socials.iter() {
                        a {
                            key: "{social.url}",
                            class: "social-link",
                            href: "{social.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{social.label}",
                            LucideIcon { icon: Icon::from(social.icon), size: 18 }
                        }
                    }
                }
            }
            p { class: "footer-copyright", {copyright_line(year, &content.owner_name)} }
        }
    }
}
