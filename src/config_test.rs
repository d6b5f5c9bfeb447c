#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let config = UiConfig::default();
    assert_eq!(config.theme_storage_key, "portfolioTheme");
    assert_eq!(config.theme_attribute, "data-bs-theme");
    assert_eq!(config.navbar_threshold_px, 50.0);
    assert_eq!(config.back_to_top_threshold_px, 300.0);
    assert_eq!(config.header_offset_px, 70.0);
    assert_eq!(config.back_to_top_visible_class, "show");
}

#[test]
fn blank_blob_yields_defaults() {
    assert_eq!(UiConfig::from_json("").ok(), Some(UiConfig::default()));
    assert_eq!(UiConfig::from_json("  \n").ok(), Some(UiConfig::default()));
}

#[test]
fn partial_blob_overrides_only_named_fields() {
    let config = UiConfig::from_json(r#"{"headerOffsetPx": 96, "navPanelId": "mainNav"}"#).ok();
    let Some(config) = config else {
        panic!("partial config should parse");
    };
    assert_eq!(config.header_offset_px, 96.0);
    assert_eq!(config.nav_panel_id, "mainNav");
    assert_eq!(config.theme_toggle_id, "themeToggle");
    assert_eq!(config.stagger_step_ms, 100.0);
}

#[test]
fn malformed_blob_is_an_error() {
    assert!(matches!(UiConfig::from_json("{not json"), Err(UiError::Config(_))));
}

#[test]
fn malformed_blob_falls_back_to_defaults() {
    assert_eq!(UiConfig::from_json_or_default("[1, 2"), UiConfig::default());
}

#[test]
fn blank_class_names_fall_back_to_defaults() {
    let config = UiConfig::from_json(r#"{"navbarScrolledClass": "", "backToTopVisibleClass": "two words"}"#).ok();
    let Some(config) = config else {
        panic!("config should parse");
    };
    assert_eq!(config.navbar_scrolled_class, "scrolled");
    assert_eq!(config.back_to_top_visible_class, "show");
}

#[test]
fn blank_selectors_fall_back_to_defaults() {
    let config = UiConfig::from_json(r#"{"sectionSelector": "  ", "navPanelId": "mainNav"}"#).ok();
    let Some(config) = config else {
        panic!("config should parse");
    };
    assert_eq!(config.section_selector, "section");
    assert_eq!(config.nav_panel_id, "mainNav");
}

#[test]
fn negative_stagger_step_is_clamped_to_zero() {
    let config = UiConfig::from_json(r#"{"staggerStepMs": -50}"#).ok();
    assert_eq!(config.map(|c| c.stagger_step_ms), Some(0.0));
}

#[test]
fn sanitized_keeps_valid_values() {
    let config = UiConfig { stagger_step_ms: 40.0, header_offset_px: 0.0, ..UiConfig::default() };
    assert_eq!(config.clone().sanitized(), config);
}

#[test]
fn non_finite_numbers_fall_back_to_defaults() {
    let config = UiConfig { header_offset_px: f64::INFINITY, stagger_step_ms: f64::NAN, ..UiConfig::default() };
    let config = config.sanitized();
    assert_eq!(config.header_offset_px, 70.0);
    assert_eq!(config.stagger_step_ms, 100.0);
}
