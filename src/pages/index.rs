//! Index page - the whole portfolio, top to bottom.
//!
//! The page root reports its own size, which stands in for the viewport
//! width: it spans the window horizontally.

use dioxus::prelude::*;

use crate::components::{
    AboutSection, ContactSection, Footer, GradientBackground, HeroSection, Navbar,
    ProjectsSection, TestimonialsSection,
};
use crate::context::{use_viewport_width, ViewportWidth};

/// Portfolio page component.
#[component]
pub fn Index() -> Element {
    let mut viewport = use_viewport_width();

    let on_resize = move |e: Event<ResizeData>| {
        if let Ok(size) = e.get_border_box_size() {
            let width = ViewportWidth(size.width);
            if *viewport.peek() != width {
                tracing::trace!(width = size.width, "Viewport resized");
                viewport.set(width);
            }
        }
    };

    rsx! {
        div { class: "page", onresize: on_resize,
            GradientBackground {}
            Navbar {}
            main { class: "page-main",
                HeroSection {}
                AboutSection {}
                ProjectsSection {}
                TestimonialsSection {}
                ContactSection {}
            }
            Footer {}
        }
    }
}
