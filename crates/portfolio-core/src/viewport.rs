//! Viewport breakpoints.
//!
//! Maps the window width (logical pixels) to layout decisions. The
//! testimonial rotator uses [`Breakpoints::items_per_view`] to size its
//! active selection; the navbar uses [`Breakpoints::is_compact`] to switch
//! to the toggle menu.

use serde::{Deserialize, Serialize};

/// Width thresholds in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Below this width one testimonial is shown
    pub small: f64,
    /// At or above this width three testimonials are shown
    pub large: f64,
    /// Below this width the navbar collapses into a toggle menu
    pub compact_nav: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 640.0,
            large: 1024.0,
            compact_nav: 768.0,
        }
    }
}

impl Breakpoints {
    /// Number of testimonials displayed side by side at `width`.
    ///
    /// | width              | items |
    /// |--------------------|-------|
    /// | `< small`          | 1     |
    /// | `small..large`     | 2     |
    /// | `>= large`         | 3     |
    pub fn items_per_view(&self, width: f64) -> usize {
        if width < self.small {
            1
        } else if width < self.large {
            2
        } else {
            3
        }
    }

    /// Whether the navbar should use the collapsible mobile menu.
    pub fn is_compact(&self, width: f64) -> bool {
        width < self.compact_nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_per_view_table() {
        let bp = Breakpoints::default();
        assert_eq!(bp.items_per_view(0.0), 1);
        assert_eq!(bp.items_per_view(500.0), 1);
        assert_eq!(bp.items_per_view(639.9), 1);
        assert_eq!(bp.items_per_view(640.0), 2);
        assert_eq!(bp.items_per_view(1023.0), 2);
        assert_eq!(bp.items_per_view(1024.0), 3);
        assert_eq!(bp.items_per_view(2560.0), 3);
    }

    #[test]
    fn compact_nav_threshold() {
        let bp = Breakpoints::default();
        assert!(bp.is_compact(767.0));
        assert!(!bp.is_compact(768.0));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let bp: Breakpoints = serde_json::from_str(r#"{ "small": 600 }"#).unwrap();
        assert_eq!(bp.small, 600.0);
        assert_eq!(bp.large, 1024.0);
    }
}
