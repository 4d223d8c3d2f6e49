//! Site configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock site. A config file only needs the keys it overrides:
//!
//! ```json
//! {
//!   "window": { "width": 1440 },
//!   "rotator": { "tick_interval_ms": 7000 },
//!   "content_path": "/home/me/portfolio.json"
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::viewport::Breakpoints;

/// File name looked up under the platform config directory.
const CONFIG_FILE_NAME: &str = "site.json";

/// Top-level configuration for the portfolio app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub window: WindowConfig,
    pub rotator: RotatorConfig,
    pub breakpoints: Breakpoints,
    pub typewriter: TypewriterConfig,
    /// Optional JSON file replacing the built-in site content
    pub content_path: Option<PathBuf>,
}

/// Desktop window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            width: 1280.0,
            height: 900.0,
        }
    }
}

/// Testimonial rotation timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorConfig {
    /// Delay between autoplay rotations
    pub tick_interval_ms: u64,
    /// Length of the fade-out phase
    pub exit_duration_ms: u64,
    /// Length of the fade-in phase
    pub enter_duration_ms: u64,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 5000,
            exit_duration_ms: 800,
            enter_duration_ms: 800,
        }
    }
}

impl RotatorConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    pub fn enter_duration(&self) -> Duration {
        Duration::from_millis(self.enter_duration_ms)
    }
}

/// Hero headline typing speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Delay before each typed character
    pub typing_ms: u64,
    /// Delay before each deleted character
    pub deleting_ms: u64,
    /// How long the complete role stays on screen
    pub hold_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            deleting_ms: 50,
            hold_ms: 1500,
        }
    }
}

impl SiteConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        if let Err(e) = config.validate() {
            tracing::warn!(path = %path.display(), error = %e, "Rejected site config");
            return Err(e);
        }
        tracing::info!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Resolve the config to use at startup.
    ///
    /// An explicit path must load. Without one, the platform config
    /// directory is checked for `portfolio/site.json`; a missing file there
    /// means defaults.
    pub fn discover(explicit: Option<&Path>) -> PortfolioResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                tracing::debug!("No site config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/portfolio/site.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio").join(CONFIG_FILE_NAME))
    }

    /// Reject values that would stall timers or produce an unusable window.
    pub fn validate(&self) -> PortfolioResult<()> {
        let timings = [
            ("rotator.tick_interval_ms", self.rotator.tick_interval_ms),
            ("rotator.exit_duration_ms", self.rotator.exit_duration_ms),
            ("rotator.enter_duration_ms", self.rotator.enter_duration_ms),
            ("typewriter.typing_ms", self.typewriter.typing_ms),
            ("typewriter.deleting_ms", self.typewriter.deleting_ms),
            ("typewriter.hold_ms", self.typewriter.hold_ms),
        ];
        for (name, value) in timings {
            if value == 0 {
                return Err(PortfolioError::Config(format!("{} must be greater than zero", name)));
            }
        }

        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(PortfolioError::Config("window size must be positive".to_string()));
        }

        if self.breakpoints.small > self.breakpoints.large {
            return Err(PortfolioError::Config(
                "breakpoints.small must not exceed breakpoints.large".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.rotator.tick_interval(), Duration::from_millis(5000));
        assert_eq!(config.rotator.exit_duration(), Duration::from_millis(800));
        assert_eq!(config.rotator.enter_duration(), Duration::from_millis(800));
        assert_eq!(config.typewriter.typing_ms, 100);
        assert_eq!(config.typewriter.deleting_ms, 50);
        assert_eq!(config.typewriter.hold_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_is_default() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn zero_interval_rejected() {
        let mut config = SiteConfig::default();
        config.rotator.tick_interval_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tick_interval_ms"));
    }

    #[test]
    fn inverted_breakpoints_rejected() {
        let mut config = SiteConfig::default();
        config.breakpoints.small = 2000.0;
        assert!(matches!(config.validate(), Err(PortfolioError::Config(_))));
    }
}
