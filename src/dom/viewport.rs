//! Scroll-driven behavior: navbar/back-to-top classes, one-shot reveals, and
//! smooth same-page anchor navigation.
//!
//! Each `install_*` function wires one responsibility and can fail on its
//! own; `dom::boot` runs them independently.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::anchor::{AnchorPlan, document_top, plan_anchor_click};
use crate::config::UiConfig;
use crate::consts::NAV_PANEL_EXPANDED_CLASS;
use crate::error::UiError;
use crate::reveal::{RevealKind, RevealSet, SourceSighting};
use crate::scroll::{ScrollState, ScrollThresholds};

use super::{animate, collapse, listen, query_all, required_by_id, required_selector};

type Reveals = Rc<RefCell<RevealSet<Element>>>;

fn scroll_offset(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(e) => {
            log::warn!("scrollY unavailable: {e:?}");
            0.0
        }
    }
}

fn viewport_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(h) => h.as_f64().unwrap_or(0.0),
        Err(e) => {
            log::warn!("innerHeight unavailable: {e:?}");
            0.0
        }
    }
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// =============================================================
// Scroll chrome
// =============================================================

struct ScrollChrome {
    navbar: Element,
    back_to_top: Element,
    config: Rc<UiConfig>,
}

impl ScrollChrome {
    fn apply(&self, offset_y: f64) -> Result<(), UiError> {
        let thresholds = ScrollThresholds {
            navbar_px: self.config.navbar_threshold_px,
            back_to_top_px: self.config.back_to_top_threshold_px,
        };
        let state = ScrollState::from_offset(offset_y, thresholds);
        self.navbar
            .class_list()
            .toggle_with_force(&self.config.navbar_scrolled_class, state.navbar_scrolled)?;
        self.back_to_top
            .class_list()
            .toggle_with_force(&self.config.back_to_top_visible_class, state.back_to_top_visible)?;
        Ok(())
    }
}

/// Keep the navbar and back-to-top classes in step with the scroll offset.
///
/// # Errors
///
/// Fails when the navbar or back-to-top control is missing, or the scroll
/// listener cannot be registered.
pub fn install_chrome(window: &Window, document: &Document, config: &Rc<UiConfig>) -> Result<(), UiError> {
    let navbar = required_selector(document, &config.navbar_selector)?;
    let back_to_top = required_by_id(document, &config.back_to_top_id)?;
    let chrome = Rc::new(ScrollChrome { navbar, back_to_top, config: Rc::clone(config) });

    {
        let window_cb = window.clone();
        let chrome = Rc::clone(&chrome);
        listen(window, "scroll", move |_| {
            if let Err(e) = chrome.apply(scroll_offset(&window_cb)) {
                log::warn!("scroll chrome update failed: {e}");
            }
        })?;
    }
    chrome.apply(scroll_offset(window))
}

// =============================================================
// Reveals
// =============================================================

fn collect_reveals(document: &Document, config: &UiConfig) -> Result<RevealSet<Element>, UiError> {
    let mut set = RevealSet::new();
    for section in query_all(document, &config.section_selector)? {
        set.add_section(section);
    }

    let marked = query_all(document, &config.animate_in_selector)?;
    set.add_marked(marked, config.stagger_step_ms, |el| match el.closest(&config.section_selector) {
        Ok(section) => section,
        Err(e) => {
            log::warn!("closest({}) failed: {e:?}", config.section_selector);
            None
        }
    });
    Ok(set)
}

fn on_sighting(
    window: &Window,
    reveals: &Reveals,
    kind: RevealKind,
    observer: &IntersectionObserver,
    entry: &IntersectionObserverEntry,
) {
    let source = entry.target();
    let sighting = SourceSighting {
        top_px: entry.bounding_client_rect().top(),
        viewport_height_px: viewport_height(window),
        intersecting: entry.is_intersecting(),
    };
    let (fired, done) = {
        let mut set = reveals.borrow_mut();
        let fired = set.fire(&source, kind, sighting);
        (fired, !set.has_pending(&source, kind))
    };
    for reveal in fired {
        if let Err(e) = animate::play(&reveal.target, &reveal.animation) {
            log::warn!("entrance animation failed: {e}");
        }
    }
    if done {
        observer.unobserve(&source);
    }
}

fn observe_kind(window: &Window, reveals: &Reveals, kind: RevealKind) -> Result<(), UiError> {
    let sources: Vec<Element> = reveals.borrow().sources(kind).into_iter().cloned().collect();
    if sources.is_empty() {
        return Ok(());
    }

    let window_cb = window.clone();
    let reveals_cb = Rc::clone(reveals);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for value in entries.iter() {
                if let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() {
                    on_sighting(&window_cb, &reveals_cb, kind, &observer, &entry);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&kind.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    for source in &sources {
        observer.observe(source);
    }
    log::debug!("observing {} {kind:?} reveal sources", sources.len());
    Ok(())
}

/// Hide sections and marked elements at their start frame and play each
/// entrance once its source reaches the start line.
///
/// Targets are hidden only after every observer is attached.
///
/// # Errors
///
/// Fails when a selector is invalid or an observer cannot be created.
pub fn install_reveals(window: &Window, document: &Document, config: &Rc<UiConfig>) -> Result<(), UiError> {
    let reveals: Reveals = Rc::new(RefCell::new(collect_reveals(document, config)?));
    for kind in RevealKind::ALL {
        observe_kind(window, &reveals, kind)?;
    }

    // Observer callbacks are queued tasks; nothing can play before this runs.
    let set = reveals.borrow();
    for entry in set.pending() {
        if let Err(e) = animate::hide(&entry.target, &entry.animation) {
            log::warn!("could not hide reveal target: {e}");
        }
    }
    log::debug!("registered {} reveal animations", set.pending().len());
    Ok(())
}

// =============================================================
// Anchor links
// =============================================================

fn on_anchor_click(window: &Window, document: &Document, config: &UiConfig, href: &str) -> AnchorPlan {
    let plan = plan_anchor_click(href, config.header_offset_px, |id| {
        let target = document.get_element_by_id(id)?;
        Some(document_top(target.get_bounding_client_rect().top(), scroll_offset(window)))
    });
    match plan {
        AnchorPlan::Scroll { top } => {
            smooth_scroll_to(window, top);
            if let Some(panel) = document.get_element_by_id(&config.nav_panel_id) {
                if let Err(e) = collapse::hide_if_expanded(window, &panel, NAV_PANEL_EXPANDED_CLASS) {
                    log::warn!("failed to collapse nav panel: {e}");
                }
            }
        }
        AnchorPlan::Ignore => log::debug!("anchor {href} has no target"),
        AnchorPlan::Passthrough => {}
    }
    plan
}

/// Smooth-scroll same-page links to their target, clearing the fixed header.
///
/// # Errors
///
/// Fails when the link selector is invalid or a listener cannot be registered.
pub fn install_anchor_links(window: &Window, document: &Document, config: &Rc<UiConfig>) -> Result<(), UiError> {
    let links = query_all(document, &config.scroll_link_selector)?;
    for link in links {
        let window = window.clone();
        let document = document.clone();
        let config = Rc::clone(config);
        let target = link.clone();
        listen(&link, "click", move |event| {
            let href = target.get_attribute("href").unwrap_or_default();
            if on_anchor_click(&window, &document, &config, &href).prevents_default() {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}
