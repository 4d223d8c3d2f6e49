#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{SiteConfig, SiteContent};

/// Config and content resolved at startup, read by the root component
static SITE: OnceLock<(SiteConfig, SiteContent)> = OnceLock::new();

/// Get the startup config and content (defaults if startup was skipped)
pub fn get_site() -> (SiteConfig, SiteContent) {
    SITE.get()
        .cloned()
        .unwrap_or_else(|| (SiteConfig::default(), SiteContent::builtin()))
}

/// Portfolio - personal profile, projects and contact
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page portfolio: profile, projects, testimonials and contact")]
struct Args {
    /// Site config file (JSON); defaults to <config dir>/portfolio/site.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    log_filter: Option<String>,

    /// Initial window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Initial window height in logical pixels
    #[arg(long)]
    height: Option<f64>,
}

/// Install the global tracing subscriber
fn init_tracing(filter: Option<&str>) -> anyhow::Result<()> {
    portfolio_core::logging::init_logging(filter).context("failed to install tracing subscriber")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.log_filter.as_deref())?;

    let mut config = SiteConfig::discover(args.config.as_deref())
        .context("failed to load site config")?;
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    config.validate().context("invalid window size")?;

    let content = match &config.content_path {
        Some(path) => SiteContent::from_json_file(path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => SiteContent::builtin(),
    };

    tracing::info!(
        owner = %content.owner_name,
        testimonials = content.testimonials.len(),
        projects = content.projects.len(),
        "Starting portfolio"
    );

    let window = config.window.clone();
    let _ = SITE.set((config, content));

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&window.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window.width, window.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
