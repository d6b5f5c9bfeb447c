//! # portfolio-ui
//!
//! Client-side behavior for a server-rendered portfolio site, compiled to
//! WebAssembly. Two independent subsystems are initialized once the page is
//! interactive; a part that fails to install is logged without blocking the
//! rest:
//!
//! - **Theme controller**: light/dark preference persisted in `localStorage`,
//!   applied as a `data-bs-theme` attribute on the document root, with a
//!   toggle control whose icon follows the current theme.
//! - **Viewport reactor**: navbar/back-to-top classes derived from the scroll
//!   offset, one-shot entrance animations for sections and marked elements,
//!   and smooth same-page anchor navigation that collapses the mobile nav.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme values, storage/document seams, [`theme::ThemeController`] |
//! | [`scroll`] | Scroll-offset flags for the navbar and back-to-top control |
//! | [`reveal`] | Entrance animation parameters and one-shot triggers |
//! | [`anchor`] | Anchor click planning with the fixed-header offset |
//! | [`config`] | DOM hooks and thresholds, overridable from the page |
//! | [`consts`] | Default ids, classes, thresholds, and timings |
//! | [`startup`] | Independent per-subsystem installation and its report |
//! | [`error`] | Startup error type |
//! | `dom` | `web-sys` bindings (`hydrate` feature only) |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod error;
pub mod reveal;
pub mod scroll;
pub mod startup;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging, then boot once the DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("portfolio ui: no document");
        return;
    };
    if document.ready_state() == "loading" {
        if let Err(e) = dom::listen(&document, "DOMContentLoaded", |_| run_boot()) {
            log::error!("portfolio ui: {e}");
        }
    } else {
        run_boot();
    }
}

#[cfg(feature = "hydrate")]
fn run_boot() {
    if let Err(e) = dom::boot() {
        log::error!("portfolio ui failed to start: {e}");
    }
}
