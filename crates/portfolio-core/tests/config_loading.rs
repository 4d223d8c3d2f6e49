//! Config and content file loading

use std::fs;

use portfolio_core::{PortfolioError, SiteConfig, SiteContent};
use tempfile::TempDir;

#[test]
fn partial_config_overrides_only_given_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(
        &path,
        r#"{ "window": { "width": 1440 }, "rotator": { "tick_interval_ms": 7000 } }"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    assert_eq!(config.window.width, 1440.0);
    assert_eq!(config.window.height, 900.0);
    assert_eq!(config.rotator.tick_interval_ms, 7000);
    assert_eq!(config.rotator.exit_duration_ms, 800);
    assert!(config.content_path.is_none());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let err = SiteConfig::discover(Some(&missing)).unwrap_err();
    assert!(matches!(err, PortfolioError::Io(_)));
}

#[test]
fn malformed_config_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, "{ window: }").unwrap();
    assert!(matches!(SiteConfig::load(&path), Err(PortfolioError::Json(_))));
}

#[test]
fn zero_phase_duration_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, r#"{ "rotator": { "exit_duration_ms": 0 } }"#).unwrap();
    assert!(matches!(SiteConfig::load(&path), Err(PortfolioError::Config(_))));
}

#[test]
fn content_file_replaces_builtin() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");

    let mut content = SiteContent::builtin();
    content.owner_name = "Ada Lovelace".to_string();
    content.testimonials.truncate(3);
    fs::write(&path, serde_json::to_string_pretty(&content).unwrap()).unwrap();

    let loaded = SiteContent::from_json_file(&path).unwrap();
    assert_eq!(loaded.owner_name, "Ada Lovelace");
    assert_eq!(loaded.testimonials.len(), 3);
}

#[test]
fn content_file_with_duplicate_ids_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");

    let mut content = SiteContent::builtin();
    content.testimonials[1].id = content.testimonials[0].id;
    fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

    assert!(matches!(
        SiteContent::from_json_file(&path),
        Err(PortfolioError::DuplicateTestimonial(_))
    ));
}
