//! Page sections for the portfolio.
//!
//! Each section reads the shared site context; generic widgets come from
//! `portfolio-ui`.

mod about;
mod background;
mod contact;
mod footer;
mod hero;
pub mod icons;
pub mod markdown;
mod navbar;
mod projects;
mod testimonials;

pub use about::AboutSection;
pub use background::GradientBackground;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navbar::Navbar;
pub use projects::ProjectsSection;
pub use testimonials::TestimonialsSection;
