//! Projects Section
//!
//! Project cards with a technology preview; "View Details" opens a dialog
//! with the full markdown write-up.

use dioxus::prelude::*;
use portfolio_core::Project;
use portfolio_ui::{BadgeList, Button, ButtonSize, ButtonVariant, Dialog, LinkButton, SectionHeading};

use crate::components::icons::{Icon, LucideIcon};
use crate::components::markdown::Markdown;
use crate::context::use_site;

/// Technologies shown on a card before the "+N" badge
const CARD_BADGES: usize = 3;

#[component]
pub fn ProjectsSection() -> Element {
    let site = use_site();
    let mut selected: Signal<Option<Project>> = use_signal(|| None);

    let projects = site.content.projects.clone();

    rsx! {
        section { id: "projects", class: "page-section projects-section",
            SectionHeading {
                eyebrow: "My Work".to_string(),
                title: "Featured Projects".to_string(),
                lead: "A selection of recent work across web, mobile and backend development."
                    .to_string(),
            }

            div { class: "projects-grid",
                for project in projects.iter() {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        on_details: move |p| selected.set(Some(p)),
                    }
                }
            }

            if let Some(project) = selected() {
                ProjectModal { project, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_details: EventHandler<Project>) -> Element {
    let (shown, hidden) = project.badge_preview(CARD_BADGES);
    let shown = shown.to_vec();
    let details = project.clone();

    rsx! {
        article { class: "project-card glass-panel",
            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                BadgeList { tags: shown, hidden }
            }
            div { class: "project-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: move |_| on_details.call(details.clone()),
                    "View Details"
                }
                ProjectLinks { project: project.clone() }
            }
        }
    }
}

#[component]
fn ProjectLinks(project: Project) -> Element {
    rsx! {
        div { class: "project-links",
            LinkButton {
                href: project.demo_url.clone(),
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                external: true,
                LucideIcon { icon: Icon::ExternalLink, size: 16 }
                "Demo"
            }
            LinkButton {
                href: project.github_url.clone(),
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                external: true,
                LucideIcon { icon: Icon::Github, size: 16 }
                "Code"
            }
        }
    }
}

/// Full project write-up in a dialog
#[component]
fn ProjectModal(project: Project, on_close: EventHandler<()>) -> Element {
    rsx! {
        Dialog {
            open: true,
            title: project.title.clone(),
            description: project.description.clone(),
            on_close: move |_| on_close.call(()),
            class: "project-dialog".to_string(),

            div { class: "project-dialog-image",
                img { src: "{project.image}", alt: "{project.title}" }
            }
            BadgeList { tags: project.technologies.clone() }
            Markdown { source: project.long_description.clone() }
            ProjectLinks { project: project.clone() }
        }
    }
}
