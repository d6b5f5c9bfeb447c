//! Shared constants for the portfolio UI crate.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme (`"light"` or `"dark"`).
pub const THEME_STORAGE_KEY: &str = "portfolioTheme";

/// Attribute on the document root that carries the active theme.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Media query reporting the system color-scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub const THEME_TOGGLE_ID: &str = "themeToggle";

// ── Scroll chrome ───────────────────────────────────────────────

pub const NAVBAR_SELECTOR: &str = ".navbar-custom";
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";

/// Scroll offset in CSS pixels at which the navbar becomes "scrolled".
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;

pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "show";

/// Scroll offset in CSS pixels at which the back-to-top control appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// ── Anchors ─────────────────────────────────────────────────────

pub const SCROLL_LINK_SELECTOR: &str = "a.scroll-link";

/// Height of the fixed header subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 70.0;

pub const NAV_PANEL_ID: &str = "navbarNav";

/// Class Bootstrap puts on an expanded collapse panel.
pub const NAV_PANEL_EXPANDED_CLASS: &str = "show";

// ── Reveal animations ───────────────────────────────────────────

pub const SECTION_SELECTOR: &str = "section";
pub const ANIMATE_IN_SELECTOR: &str = ".animate-in";

/// Sections play once their top edge reaches 85% of the viewport height.
pub const SECTION_START_FRACTION: f64 = 0.85;
pub const SECTION_DURATION_MS: f64 = 800.0;
pub const SECTION_FROM_Y_PX: f64 = 50.0;

/// Marked elements play once their section's top reaches 75% of the viewport.
pub const ELEMENT_START_FRACTION: f64 = 0.75;
pub const ELEMENT_DURATION_MS: f64 = 600.0;
pub const ELEMENT_FROM_SCALE: f64 = 0.8;
pub const ELEMENT_BACK_OVERSHOOT: f64 = 1.2;

/// Upward extension of the reveal observers' root box, in percent of the
/// viewport height.
pub const REVEAL_LOOKBACK_PCT: u32 = 100_000;

/// Delay added per marked element, in document order.
pub const STAGGER_STEP_MS: f64 = 100.0;

// ── Configuration ───────────────────────────────────────────────

/// Id of an optional `<script type="application/json">` config override.
pub const CONFIG_SCRIPT_ID: &str = "portfolio-ui-config";
