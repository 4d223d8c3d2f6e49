//! Context providers for the portfolio page.
//!
//! Provides the startup config/content and the live viewport width to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| SiteContext::new(config, content));
//! use_context_provider(|| Signal::new(ViewportWidth::default()));
//!
//! // In child components
//! let site = use_site();
//! let width = use_viewport_width();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{SiteConfig, SiteContent};

/// Immutable site data shared by every section.
///
/// Both halves are fixed for the page's lifetime, so they are shared by
/// reference count rather than wrapped in signals.
#[derive(Clone)]
pub struct SiteContext {
    pub config: Rc<SiteConfig>,
    pub content: Rc<SiteContent>,
}

impl SiteContext {
    pub fn new(config: SiteConfig, content: SiteContent) -> Self {
        Self {
            config: Rc::new(config),
            content: Rc::new(content),
        }
    }
}

/// Width of the page in logical pixels, updated on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportWidth(pub f64);

impl Default for ViewportWidth {
    /// Assume a desktop-sized window until the first resize event arrives.
    fn default() -> Self {
        Self(1280.0)
    }
}

/// Hook to access the site config and content.
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}

/// Hook to read (or, at the page root, write) the viewport width.
pub fn use_viewport_width() -> Signal<ViewportWidth> {
    use_context::<Signal<ViewportWidth>>()
}
