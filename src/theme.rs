//! Light/dark theme preference: resolution, application, and toggling.
//!
//! The preference lives in two places: a durable key-value store (browser
//! `localStorage`) and a theme attribute on the document root. The
//! [`ThemeController`] keeps them in step and updates the toggle control's
//! icon. Both are reached through small traits so the controller runs the same
//! way in the browser and in native tests.
//!
//! ICON RULE
//! =========
//! The icon mirrors the *current* theme: sun while dark, moon while light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Map a raw stored/attribute value to a theme, if recognized.
    #[must_use]
    pub fn recognize(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn icon(self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Moon,
            Self::Dark => ThemeIcon::Sun,
        }
    }

    /// The theme a toggle switches to, given the raw document attribute.
    ///
    /// Only an exact `"light"` flips to dark; anything else (including a
    /// missing attribute) flips to light.
    #[must_use]
    pub fn toggled_from_attribute(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::recognize(s).ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

/// Glyph shown inside the toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    /// Inner markup for the toggle control (Font Awesome glyph).
    #[must_use]
    pub fn markup(self) -> &'static str {
        match self {
            Self::Sun => r#"<i class="fas fa-sun"></i>"#,
            Self::Moon => r#"<i class="fas fa-moon"></i>"#,
        }
    }
}

/// Durable store for the persisted preference.
pub trait ThemeStore {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;

    /// Persist `value`. Errors carry a human-readable reason.
    ///
    /// # Errors
    ///
    /// Returns the store's reason when the write is rejected (quota, denied).
    fn save(&mut self, value: &str) -> Result<(), String>;
}

/// Document-side surface: the root theme attribute and the toggle icon.
pub trait ThemeSurface {
    fn theme_attribute(&self) -> Option<String>;
    fn set_theme_attribute(&mut self, value: &str);
    fn set_icon(&mut self, icon: ThemeIcon);
}

/// Pick the starting theme: a recognized stored value wins, then the system
/// preference, then light.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(raw) = stored {
        match raw.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(e) => log::warn!("ignoring stored theme preference: {e}"),
        }
    }
    if prefers_dark == Some(true) { Theme::Dark } else { Theme::Light }
}

/// Owns the theme store and document surface for one page.
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
}

impl<S: ThemeStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(store: S, surface: D) -> Self {
        Self { store, surface }
    }

    /// Resolve the starting theme and apply it. Returns the applied theme.
    pub fn initialize(&mut self, prefers_dark: Option<bool>) -> Theme {
        let theme = resolve_initial(self.store.load().as_deref(), prefers_dark);
        self.apply(theme);
        log::debug!("theme initialized: {theme}");
        theme
    }

    /// Set the document attribute, persist, and update the icon.
    pub fn apply(&mut self, theme: Theme) {
        self.surface.set_theme_attribute(theme.as_str());
        if let Err(reason) = self.store.save(theme.as_str()) {
            log::warn!("failed to persist theme {theme}: {reason}");
        }
        self.surface.set_icon(theme.icon());
    }

    /// Flip the theme currently on the document. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = Theme::toggled_from_attribute(self.surface.theme_attribute().as_deref());
        self.apply(next);
        next
    }

    /// The theme currently on the document, if it is a recognized value.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.surface.theme_attribute().as_deref().and_then(Theme::recognize)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }
}
