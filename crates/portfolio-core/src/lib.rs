//! Portfolio Core Library
//!
//! Content model and the small amount of stateful logic behind the
//! single-page portfolio site.
//!
//! ## Overview
//!
//! The site is mostly static markup. The pieces that hold state live here so
//! they can be tested without a window:
//!
//! - **Testimonial rotator**: a rotating subset of testimonials, one slot
//!   replaced per tick with a two-phase exit/enter transition
//! - **Typewriter**: the hero banner's typing/deleting role headline
//! - **Contact form**: required-field and email validation
//! - **Viewport**: breakpoint table mapping window width to layout choices
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{RotatorHandle, SiteConfig, SiteContent};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SiteConfig::default();
//!     let content = SiteContent::builtin();
//!
//!     let rotator = RotatorHandle::spawn(content.testimonials.len(), 1200.0, &config);
//!     let mut snapshots = rotator.subscribe();
//!
//!     while snapshots.changed().await.is_ok() {
//!         for slot in snapshots.borrow().slots.iter() {
//!             println!("{} ({:?})", content.testimonials[slot.pool_index].name, slot.phase);
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod logging;
pub mod rotator;
pub mod typewriter;
pub mod viewport;

// Re-exports
pub use config::{RotatorConfig, SiteConfig, TypewriterConfig, WindowConfig};
pub use contact::{ContactError, ContactForm, ContactMessage};
pub use content::{
    ContactChannel, ContactKind, NavLink, Project, SiteContent, Skill, SkillIcon, SocialIcon,
    SocialLink, Testimonial,
};
pub use error::{PortfolioError, PortfolioResult};
pub use rotator::{
    Advance, PhaseTicket, RotationStart, RotatorHandle, RotatorSnapshot, SlotPhase, SlotView,
    TestimonialRotator,
};
pub use typewriter::Typewriter;
pub use viewport::Breakpoints;
