//! Portfolio UI Components
//!
//! Dioxus primitives shared by the portfolio sections: buttons, form
//! fields, badges, the dialog shell, section headings and toasts.
//!
//! ## Look
//!
//! Dark glass panels over a purple gradient:
//! - **Primary (#bd93f9)**: actions, highlights, badges
//! - **Foreground (#f8fafc)**: body text
//! - **Muted (rgba(248, 250, 252, 0.65))**: secondary copy
//!
//! Class names match the stylesheet shipped with the desktop app.

pub mod components;

pub use components::*;
