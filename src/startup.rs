//! Independent installation of the page's behaviors.
//!
//! Each [`Subsystem`] wires one responsibility to the page. A failure in one
//! is logged and recorded in the [`StartupReport`]; the rest still install.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use std::fmt;

use crate::error::UiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subsystem {
    /// Theme preference and the toggle control.
    Theme,
    /// Navbar "scrolled" and back-to-top "show" classes.
    ScrollChrome,
    /// Section and marked-element entrance animations.
    Reveals,
    /// Smooth same-page anchor navigation.
    AnchorLinks,
}

impl Subsystem {
    /// Install order.
    pub const ALL: [Self; 4] = [Self::Theme, Self::ScrollChrome, Self::Reveals, Self::AnchorLinks];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::ScrollChrome => "scroll chrome",
            Self::Reveals => "reveals",
            Self::AnchorLinks => "anchor links",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Default)]
pub struct StartupReport {
    pub installed: Vec<Subsystem>,
    pub failed: Vec<(Subsystem, UiError)>,
}

impl StartupReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run `install` for every subsystem in [`Subsystem::ALL`] order, logging and
/// collecting failures without stopping.
pub fn install_each<F>(mut install: F) -> StartupReport
where
    F: FnMut(Subsystem) -> Result<(), UiError>,
{
    let mut report = StartupReport::default();
    for subsystem in Subsystem::ALL {
        match install(subsystem) {
            Ok(()) => {
                log::debug!("{subsystem} installed");
                report.installed.push(subsystem);
            }
            Err(e) => {
                log::error!("{subsystem} not installed: {e}");
                report.failed.push((subsystem, e));
            }
        }
    }
    report
}
