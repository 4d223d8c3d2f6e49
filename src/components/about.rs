use dioxus::prelude::*;
use portfolio_ui::SectionHeading;

use crate::components::icons::{Icon, LucideIcon};
use crate::context::use_site;

/// About section: bio paragraphs next to the skills grid.
#[component]
pub fn AboutSection() -> Element {
    let site = use_site();
    let content = site.content.clone();

    rsx! {
        section { id: "about", class: "page-section about-section",
            SectionHeading {
                eyebrow: "About Me".to_string(),
                title: content.about_title.clone(),
            }

            div { class: "about-grid",
                div { class: "about-copy",
                    for (i, paragraph) in content.about_paragraphs.iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }

                div { class: "skills-grid",
                    for skill in content.skills.iter() {
                        div { key: "{skill.name}", class: "skill-card glass-panel",
                            div { class: "skill-icon",
                                LucideIcon { icon: Icon::from(skill.icon), size: 28 }
                            }
                            h3 { class: "skill-name", "{skill.name}" }
                            p { class: "skill-description", "{skill.description}" }
                        }
                    }
                }
            }
        }
    }
}
