//! Hero headline typewriter.
//!
//! Types a role one character at a time, holds it, deletes it, then moves on
//! to the next role. Each [`Typewriter::tick`] performs one step and says how
//! long to wait before the next one.

use std::time::Duration;

use crate::config::TypewriterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    role_index: usize,
    /// Characters of the current role on screen
    visible: usize,
    mode: Mode,
    timings: TypewriterConfig,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, timings: TypewriterConfig) -> Self {
        Self {
            roles,
            role_index: 0,
            visible: 0,
            mode: Mode::Typing,
            timings,
        }
    }

    /// Text currently on screen.
    pub fn text(&self) -> String {
        self.current_role()
            .map(|role| role.chars().take(self.visible).collect())
            .unwrap_or_default()
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    fn current_role(&self) -> Option<&str> {
        self.roles.get(self.role_index).map(String::as_str)
    }

    fn role_len(&self) -> usize {
        self.current_role().map(|role| role.chars().count()).unwrap_or(0)
    }

    /// Delay before the first tick.
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.timings.typing_ms)
    }

    /// Advance one step; returns the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        if self.roles.is_empty() {
            return Duration::from_millis(self.timings.hold_ms);
        }

        match self.mode {
            Mode::Typing => {
                let len = self.role_len();
                if self.visible < len {
                    self.visible += 1;
                }
                if self.visible >= len {
                    self.mode = Mode::Holding;
                    Duration::from_millis(self.timings.hold_ms)
                } else {
                    Duration::from_millis(self.timings.typing_ms)
                }
            }
            Mode::Holding => {
                self.mode = Mode::Deleting;
                Duration::from_millis(self.timings.deleting_ms)
            }
            Mode::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.role_index = (self.role_index + 1) % self.roles.len();
                    self.mode = Mode::Typing;
                    Duration::from_millis(self.timings.typing_ms)
                } else {
                    Duration::from_millis(self.timings.deleting_ms)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(roles: &[&str]) -> Typewriter {
        Typewriter::new(
            roles.iter().map(|r| r.to_string()).collect(),
            TypewriterConfig::default(),
        )
    }

    #[test]
    fn types_then_holds() {
        let mut tw = writer(&["abc"]);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.tick(), Duration::from_millis(1500));
        assert_eq!(tw.text(), "abc");
    }

    #[test]
    fn deletes_and_moves_to_next_role() {
        let mut tw = writer(&["ab", "xy"]);
        tw.tick(); // a
        tw.tick(); // ab, hold
        assert_eq!(tw.tick(), Duration::from_millis(50)); // start deleting
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.tick(), Duration::from_millis(50));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.role_index(), 1);
        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn wraps_to_first_role() {
        let mut tw = writer(&["a", "b"]);
        for _ in 0..6 {
            tw.tick();
        }
        assert_eq!(tw.role_index(), 0);
    }

    #[test]
    fn multibyte_roles_are_cut_on_char_boundaries() {
        let mut tw = writer(&["héllo"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn no_roles_stays_empty() {
        let mut tw = writer(&[]);
        assert_eq!(tw.tick(), Duration::from_millis(1500));
        assert_eq!(tw.text(), "");
    }
}
