//! Page-level configuration for DOM hooks and thresholds.
//!
//! Every field defaults to the matching value in [`crate::consts`]. A page can
//! override any subset by embedding a JSON object in
//! `<script type="application/json" id="portfolio-ui-config">`; missing fields
//! keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::UiError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub theme_storage_key: String,
    pub theme_attribute: String,
    pub theme_toggle_id: String,
    pub navbar_selector: String,
    pub navbar_scrolled_class: String,
    pub navbar_threshold_px: f64,
    pub back_to_top_id: String,
    pub back_to_top_visible_class: String,
    pub back_to_top_threshold_px: f64,
    pub scroll_link_selector: String,
    pub header_offset_px: f64,
    pub nav_panel_id: String,
    pub section_selector: String,
    pub animate_in_selector: String,
    pub stagger_step_ms: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            theme_attribute: THEME_ATTRIBUTE.to_owned(),
            theme_toggle_id: THEME_TOGGLE_ID.to_owned(),
            navbar_selector: NAVBAR_SELECTOR.to_owned(),
            navbar_scrolled_class: NAVBAR_SCROLLED_CLASS.to_owned(),
            navbar_threshold_px: NAVBAR_SCROLLED_THRESHOLD_PX,
            back_to_top_id: BACK_TO_TOP_ID.to_owned(),
            back_to_top_visible_class: BACK_TO_TOP_VISIBLE_CLASS.to_owned(),
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            scroll_link_selector: SCROLL_LINK_SELECTOR.to_owned(),
            header_offset_px: HEADER_OFFSET_PX,
            nav_panel_id: NAV_PANEL_ID.to_owned(),
            section_selector: SECTION_SELECTOR.to_owned(),
            animate_in_selector: ANIMATE_IN_SELECTOR.to_owned(),
            stagger_step_ms: STAGGER_STEP_MS,
        }
    }
}

impl UiConfig {
    /// Parse an override blob. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when the blob is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    /// Replace values the DOM would reject or that break ordering guarantees:
    /// blank ids/classes/selectors and non-finite or negative numbers fall
    /// back to their defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        for (name, value, default) in [
            ("themeStorageKey", &mut self.theme_storage_key, defaults.theme_storage_key),
            ("themeAttribute", &mut self.theme_attribute, defaults.theme_attribute),
            ("themeToggleId", &mut self.theme_toggle_id, defaults.theme_toggle_id),
            ("navbarSelector", &mut self.navbar_selector, defaults.navbar_selector),
            ("navbarScrolledClass", &mut self.navbar_scrolled_class, defaults.navbar_scrolled_class),
            ("backToTopId", &mut self.back_to_top_id, defaults.back_to_top_id),
            ("backToTopVisibleClass", &mut self.back_to_top_visible_class, defaults.back_to_top_visible_class),
            ("scrollLinkSelector", &mut self.scroll_link_selector, defaults.scroll_link_selector),
            ("navPanelId", &mut self.nav_panel_id, defaults.nav_panel_id),
            ("sectionSelector", &mut self.section_selector, defaults.section_selector),
            ("animateInSelector", &mut self.animate_in_selector, defaults.animate_in_selector),
        ] {
            if value.trim().is_empty() || (name.ends_with("Class") && value.contains(char::is_whitespace)) {
                log::warn!("ui config {name} {value:?} is not usable; using {default:?}");
                *value = default;
            }
        }
        for (name, value, default) in [
            ("navbarThresholdPx", &mut self.navbar_threshold_px, defaults.navbar_threshold_px),
            ("backToTopThresholdPx", &mut self.back_to_top_threshold_px, defaults.back_to_top_threshold_px),
            ("headerOffsetPx", &mut self.header_offset_px, defaults.header_offset_px),
            ("staggerStepMs", &mut self.stagger_step_ms, defaults.stagger_step_ms),
        ] {
            if !value.is_finite() {
                log::warn!("ui config {name} is not finite; using {default}");
                *value = default;
            }
        }
        if self.stagger_step_ms < 0.0 {
            log::warn!("ui config staggerStepMs {} is negative; using 0", self.stagger_step_ms);
            self.stagger_step_ms = 0.0;
        }
        self
    }

    /// Parse an override blob, logging and falling back to defaults on error.
    #[must_use]
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring ui config override: {e}");
                Self::default()
            }
        }
    }
}
