//! Content records rendered by the site sections.

use serde::{Deserialize, Serialize};

/// A client quote shown in the testimonials carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    /// Avatar image URL
    #[serde(default)]
    pub image: Option<String>,
    pub text: String,
}

impl Testimonial {
    /// "Role, Company" byline.
    pub fn byline(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }

    /// Up to two initials, used when there is no avatar image.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

/// A showcased project with a card summary and a detail dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    /// One-line card summary
    pub description: String,
    /// Markdown body for the detail dialog
    pub long_description: String,
    pub image: String,
    pub demo_url: String,
    pub github_url: String,
    pub technologies: Vec<String>,
}

impl Project {
    /// First `max` technologies plus how many were left out.
    ///
    /// Cards show three badges and a `+N` badge for the rest.
    pub fn badge_preview(&self, max: usize) -> (&[String], Option<usize>) {
        let shown = self.technologies.len().min(max);
        let hidden = self.technologies.len() - shown;
        (&self.technologies[..shown], (hidden > 0).then_some(hidden))
    }
}

/// Icon choice for a skill tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    Code,
    Laptop,
    Palette,
    Sparkles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub icon: SkillIcon,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Upwork,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
        }
    }
}

/// A way to reach the site owner, listed beside the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub value: String,
}

/// In-page navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    /// Section element id, without the leading `#`
    pub anchor: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(techs: &[&str]) -> Project {
        Project {
            id: 1,
            title: "t".to_string(),
            description: "d".to_string(),
            long_description: "l".to_string(),
            image: String::new(),
            demo_url: "#".to_string(),
            github_url: "#".to_string(),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn badge_preview_with_overflow() {
        let p = project(&["React", "Node.js", "MongoDB", "Stripe"]);
        let (shown, more) = p.badge_preview(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[2], "MongoDB");
        assert_eq!(more, Some(1));
    }

    #[test]
    fn badge_preview_without_overflow() {
        let p = project(&["Rust", "Dioxus"]);
        let (shown, more) = p.badge_preview(3);
        assert_eq!(shown.len(), 2);
        assert_eq!(more, None);
    }

    #[test]
    fn testimonial_byline_and_initials() {
        let t = Testimonial {
            id: 1,
            name: "Sarah Johnson".to_string(),
            role: "Product Manager".to_string(),
            company: "TechCorp".to_string(),
            image: None,
            text: String::new(),
        };
        assert_eq!(t.byline(), "Product Manager, TechCorp");
        assert_eq!(t.initials(), "SJ");
    }

    #[test]
    fn icons_use_snake_case_json() {
        let icon: SocialIcon = serde_json::from_str("\"linkedin\"").unwrap();
        assert_eq!(icon, SocialIcon::Linkedin);
    }
}
