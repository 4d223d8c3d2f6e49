//! Testimonial rotation.
//!
//! - [`state`]: the time-free state machine (selection, phases, tickets)
//! - [`autoplay`]: the tokio task that ticks it and runs the phase timers

pub mod autoplay;
pub mod state;

pub use autoplay::{RotatorHandle, RotatorSnapshot};
pub use state::{Advance, PhaseTicket, RotationStart, SlotPhase, SlotView, TestimonialRotator};
