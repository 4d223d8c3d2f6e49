//! Navigation Bar Component
//!
//! Wide windows: brand, inline anchor links and the Resume button.
//! Compact windows: brand plus a toggle that opens the same links as a
//! dropdown panel.

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonSize, ButtonVariant};

use crate::components::icons::{Icon, LucideIcon};
use crate::context::{use_site, use_viewport_width};

#[component]
pub fn Navbar() -> Element {
    let site = use_site();
    let viewport = use_viewport_width();
    let mut menu_open = use_signal(|| false);

    let breakpoints = site.config.breakpoints;
    let compact = breakpoints.is_compact(viewport().0);

    // Growing the window past the breakpoint closes the dropdown
    use_effect(move || {
        let wide = !breakpoints.is_compact(viewport().0);
        if wide && *menu_open.peek() {
            menu_open.set(false);
        }
    });

    let links = site.content.nav_links.clone();
    let brand = site.content.brand.clone();

    rsx! {
        header { class: "navbar",
            div { class: "navbar-inner",
                a { class: "navbar-brand", href: "#home", "{brand}" }

                if compact {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        class: "navbar-toggle".to_string(),
                        aria_label: "Toggle menu".to_string(),
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            LucideIcon { icon: Icon::X, size: 24 }
                        } else {
                            LucideIcon { icon: Icon::Menu, size: 24 }
                        }
                    }
                } else {
                    nav { class: "navbar-links",
                        for link in links.iter() {
                            a {
                                key: "{link.anchor}",
                                class: "nav-link",
                                href: "{link.href()}",
                                "{link.name}"
                            }
                        }
                        Button { size: ButtonSize::Small, "Resume" }
                    }
                }
            }

            if compact && menu_open() {
                nav { class: "navbar-dropdown",
                    for link in links.iter() {
                        a {
                            key: "{link.anchor}",
                            class: "nav-link",
                            href: "{link.href()}",
                            onclick: move |_| menu_open.set(false),
                            "{link.name}"
                        }
                    }
                    Button { class: "navbar-dropdown-action".to_string(), "Resume" }
                }
            }
        }
    }
}
