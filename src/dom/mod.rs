//! Browser bindings: wires the core controllers to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything under `dom` requires a browser and is compiled only with the
//! `hydrate` feature. Core decisions (theme resolution, scroll flags, reveal
//! triggers, anchor plans) live in browser-free modules; this layer only reads
//! layout, mutates classes/attributes, and registers listeners. Listeners live
//! for the page lifetime, so their closures are leaked with `forget`.

pub mod animate;
pub mod collapse;
pub mod theme;
pub mod viewport;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::config::UiConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::error::UiError;
use crate::startup::{StartupReport, Subsystem, install_each};

pub(crate) fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoBrowser("window"))
}

pub(crate) fn document(window: &Window) -> Result<Document, UiError> {
    window.document().ok_or(UiError::NoBrowser("document"))
}

pub(crate) fn required_by_id(document: &Document, id: &str) -> Result<Element, UiError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(format!("#{id}")))
}

pub(crate) fn required_selector(document: &Document, selector: &str) -> Result<Element, UiError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| UiError::MissingElement(selector.to_owned()))
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(el);
        }
    }
    Ok(out)
}

/// Register a page-lifetime event listener.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Read the embedded config override, if the page carries one.
#[must_use]
pub fn load_config(document: &Document) -> UiConfig {
    match document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) {
        Some(raw) => UiConfig::from_json_or_default(&raw),
        None => UiConfig::default(),
    }
}

/// Install every subsystem against the current document. A subsystem that
/// fails is logged and skipped; the others still install.
///
/// # Errors
///
/// Fails only when there is no window or document to install into.
pub fn boot() -> Result<StartupReport, UiError> {
    let window = window()?;
    let document = document(&window)?;
    let config = Rc::new(load_config(&document));

    let report = install_each(|subsystem| match subsystem {
        Subsystem::Theme => theme::install(&window, &document, &config),
        Subsystem::ScrollChrome => viewport::install_chrome(&window, &document, &config),
        Subsystem::Reveals => viewport::install_reveals(&window, &document, &config),
        Subsystem::AnchorLinks => viewport::install_anchor_links(&window, &document, &config),
    });
    log::info!(
        "portfolio ui ready: {} of {} subsystems installed",
        report.installed.len(),
        Subsystem::ALL.len()
    );
    Ok(report)
}
