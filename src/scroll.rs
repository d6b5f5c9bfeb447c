//! Scroll-derived chrome state for the navbar and back-to-top control.
//!
//! Nothing here is stored: every scroll event recomputes both flags from the
//! current vertical offset and re-applies them.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{BACK_TO_TOP_THRESHOLD_PX, NAVBAR_SCROLLED_THRESHOLD_PX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub navbar_px: f64,
    pub back_to_top_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self { navbar_px: NAVBAR_SCROLLED_THRESHOLD_PX, back_to_top_px: BACK_TO_TOP_THRESHOLD_PX }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Navbar carries its "scrolled" class.
    pub navbar_scrolled: bool,
    /// Back-to-top control carries its "show" class.
    pub back_to_top_visible: bool,
}

impl ScrollState {
    /// Derive both flags from a vertical scroll offset in CSS pixels.
    #[must_use]
    pub fn from_offset(offset_y: f64, thresholds: ScrollThresholds) -> Self {
        Self {
            navbar_scrolled: offset_y >= thresholds.navbar_px,
            back_to_top_visible: offset_y >= thresholds.back_to_top_px,
        }
    }
}
