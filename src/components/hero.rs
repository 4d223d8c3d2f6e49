//! Hero Section
//!
//! Greeting, typewriter role line, call-to-action anchors and social links.

use dioxus::prelude::*;
use portfolio_core::Typewriter;
use portfolio_ui::{ButtonSize, ButtonVariant, LinkButton};

use crate::components::icons::{Icon, LucideIcon};
use crate::context::use_site;

#[component]
pub fn HeroSection() -> Element {
    let site = use_site();
    let mut typed = use_signal(String::new);

    // Typewriter loop; the task is dropped with the component
    let roles = site.content.hero_roles.clone();
    let timings = site.config.typewriter.clone();
    use_future(move || {
        let roles = roles.clone();
        let timings = timings.clone();
        async move {
            let mut typewriter = Typewriter::new(roles, timings);
            let mut delay = typewriter.initial_delay();
            loop {
                tokio::time::sleep(delay).await;
                delay = typewriter.tick();
                typed.set(typewriter.text());
            }
        }
    });

    let content = site.content.clone();

    rsx! {
        section { id: "home", class: "hero-section",
            div { class: "hero-inner",
                p { class: "hero-greeting", "Hello, I'm" }
                h1 { class: "hero-name", "{content.owner_name}" }
                h2 { class: "hero-role",
                    span { class: "hero-role-text", "{typed}" }
                    span { class: "hero-caret", "|" }
                }
                p { class: "hero-blurb", "{content.hero_blurb}" }

                div { class: "hero-actions",
                    LinkButton { href: "#projects".to_string(), size: ButtonSize::Large,
                        "View My Work"
                        LucideIcon { icon: Icon::ArrowRight, size: 18 }
                    }
                    LinkButton {
                        href: "#contact".to_string(),
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        "Contact Me"
                    }
                }

                div { class: "hero-socials",
                    for social in content.socials.iter() {
                        a {
                            key: "{social.url}",
                            class: "social-link",
                            href: "{social.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{social.label}",
                            LucideIcon { icon: Icon::from(social.icon), size: 22 }
                        }
                    }
                }
            }

            a { class: "hero-scroll", href: "#about", "aria-label": "Scroll to about",
                LucideIcon { icon: Icon::ChevronDown, size: 28 }
            }
        }
    }
}
