//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the filter passed in, so a user can
//! always turn on rotation tracing without touching the config:
//!
//! ```bash
//! RUST_LOG=portfolio_core::rotator=trace portfolio-desktop
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor a CLI filter is given.
pub const DEFAULT_FILTER: &str = "info";

/// Build the env filter: `RUST_LOG`, else `fallback`, else [`DEFAULT_FILTER`].
pub fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed (for example when called twice
/// in tests); callers can ignore that.
pub fn init_logging(fallback: Option<&str>) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
}
