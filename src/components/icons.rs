//! Lucide icons as inline SVG.

use dioxus::prelude::*;
use portfolio_core::{ContactKind, SkillIcon, SocialIcon};

/// Icons used across the page
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Icon {
    ArrowRight,
    ChevronDown,
    Code,
    ExternalLink,
    Github,
    Instagram,
    Laptop,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Palette,
    Phone,
    Quote,
    RefreshCw,
    Send,
    Sparkles,
    Twitter,
    Upwork,
    X,
}

impl From<SkillIcon> for Icon {
    fn from(icon: SkillIcon) -> Self {
        match icon {
            SkillIcon::Code => Icon::Code,
            SkillIcon::Laptop => Icon::Laptop,
            SkillIcon::Palette => Icon::Palette,
            SkillIcon::Sparkles => Icon::Sparkles,
        }
    }
}

impl From<SocialIcon> for Icon {
    fn from(icon: SocialIcon) -> Self {
        match icon {
            SocialIcon::Github => Icon::Github,
            SocialIcon::Linkedin => Icon::Linkedin,
            SocialIcon::Twitter => Icon::Twitter,
            SocialIcon::Instagram => Icon::Instagram,
            SocialIcon::Upwork => Icon::Upwork,
        }
    }
}

impl From<ContactKind> for Icon {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Email => Icon::Mail,
            ContactKind::Phone => Icon::Phone,
            ContactKind::Location => Icon::MapPin,
        }
    }
}

/// Render an icon at `size` pixels, stroked in the current text color.
#[component]
pub fn LucideIcon(icon: Icon, #[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_body(icon)}
        }
    }
}

fn icon_body(icon: Icon) -> Element {
    match icon {
        Icon::ArrowRight => rsx! {
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        },
        Icon::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
        Icon::Code => rsx! {
            polyline { points: "16 18 22 12 16 6" }
            polyline { points: "8 6 2 12 8 18" }
        },
        Icon::ExternalLink => rsx! {
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        },
        Icon::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        Icon::Instagram => rsx! {
            rect { width: "20", height: "20", x: "2", y: "2", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", x2: "17.51", y1: "6.5", y2: "6.5" }
        },
        Icon::Laptop => rsx! {
            path { d: "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16" }
        },
        Icon::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { width: "4", height: "12", x: "2", y: "9" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        Icon::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        Icon::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        Icon::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        Icon::Palette => rsx! {
            circle { cx: "13.5", cy: "6.5", r: ".5" }
            circle { cx: "17.5", cy: "10.5", r: ".5" }
            circle { cx: "8.5", cy: "7.5", r: ".5" }
            circle { cx: "6.5", cy: "12.5", r: ".5" }
            path { d: "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" }
        },
        Icon::Phone => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        Icon::Quote => rsx! {
            path { d: "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z" }
            path { d: "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z" }
        },
        Icon::RefreshCw => rsx! {
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        },
        Icon::Send => rsx! {
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        },
        Icon::Sparkles => rsx! {
            path { d: "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" }
        },
        Icon::Twitter => rsx! {
            path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" }
        },
        // Not in Lucide; a simple "U" mark in the same stroke style
        Icon::Upwork => rsx! {
            path { d: "M6 5v7a6 6 0 0 0 12 0V5" }
        },
        Icon::X => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}
