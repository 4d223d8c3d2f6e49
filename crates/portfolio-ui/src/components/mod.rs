//! Reusable UI components
//!
//! Every component renders plain elements with stylesheet classes; none of
//! them hold application state beyond local open/closed flags.

mod badge;
mod button;
mod dialog;
mod input;
mod section_heading;
mod toast;

pub use badge::*;
pub use button::*;
pub use dialog::*;
pub use input::*;
pub use section_heading::*;
pub use toast::*;
