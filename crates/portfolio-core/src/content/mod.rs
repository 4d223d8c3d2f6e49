//! Site content.
//!
//! Everything the page shows is plain data in [`SiteContent`]. The built-in
//! profile ships with the binary; a JSON file with the same shape can
//! replace it (see `SiteConfig::content_path`).

mod builtin;
mod model;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

pub use model::{
    ContactChannel, ContactKind, NavLink, Project, Skill, SkillIcon, SocialIcon, SocialLink,
    Testimonial,
};

/// All static content for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner_name: String,
    /// Navbar brand text
    pub brand: String,
    /// Headlines cycled by the hero typewriter
    pub hero_roles: Vec<String>,
    pub hero_blurb: String,
    pub about_title: String,
    pub about_paragraphs: Vec<String>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    /// Testimonial pool; read-only for the page's lifetime
    pub testimonials: Vec<Testimonial>,
    pub contact_channels: Vec<ContactChannel>,
    pub socials: Vec<SocialLink>,
    pub nav_links: Vec<NavLink>,
}

impl SiteContent {
    /// The content compiled into the binary.
    pub fn builtin() -> Self {
        builtin::content()
    }

    /// Load content from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let content: SiteContent = serde_json::from_str(&raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Reject content the page cannot render sensibly.
    ///
    /// An empty testimonial pool is fine (the section shows nothing);
    /// duplicate testimonial ids are not.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.owner_name.trim().is_empty() {
            return Err(PortfolioError::EmptyContent("owner_name".to_string()));
        }

        let mut seen = HashSet::new();
        for testimonial in &self.testimonials {
            if !seen.insert(testimonial.id) {
                return Err(PortfolioError::DuplicateTestimonial(testimonial.id));
            }
        }

        Ok(())
    }

    pub fn testimonial(&self, pool_index: usize) -> Option<&Testimonial> {
        self.testimonials.get(pool_index)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let content = SiteContent::builtin();
        content.validate().unwrap();
        assert_eq!(content.testimonials.len(), 5);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.hero_roles.len(), 2);
    }

    #[test]
    fn duplicate_testimonial_ids_rejected() {
        let mut content = SiteContent::builtin();
        let dup = content.testimonials[0].clone();
        content.testimonials.push(dup);
        assert!(matches!(
            content.validate(),
            Err(PortfolioError::DuplicateTestimonial(1))
        ));
    }

    #[test]
    fn empty_pool_is_allowed() {
        let mut content = SiteContent::builtin();
        content.testimonials.clear();
        assert!(content.validate().is_ok());
        assert!(content.testimonial(0).is_none());
    }

    #[test]
    fn nav_links_point_at_sections() {
        let content = SiteContent::builtin();
        let anchors: Vec<_> = content.nav_links.iter().map(|l| l.href()).collect();
        assert_eq!(
            anchors,
            vec!["#home", "#about", "#projects", "#testimonials", "#contact"]
        );
    }
}
