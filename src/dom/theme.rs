//! `localStorage` and document adapters for the theme controller.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Storage, Window};

use crate::config::UiConfig;
use crate::consts::PREFERS_DARK_QUERY;
use crate::error::UiError;
use crate::theme::{ThemeController, ThemeIcon, ThemeStore, ThemeSurface};

use super::{listen, required_by_id};

pub struct LocalStorageStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageStore {
    /// Bind to the window's `localStorage`. Access can be denied (privacy
    /// modes); the store then reads nothing and rejects writes.
    #[must_use]
    pub fn new(window: &Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {e:?}");
                None
            }
        };
        Self { storage, key: key.to_owned() }
    }
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(&self.key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to read {}: {e:?}", self.key);
                None
            }
        }
    }

    fn save(&mut self, value: &str) -> Result<(), String> {
        let Some(storage) = self.storage.as_ref() else {
            return Err("localStorage unavailable".to_owned());
        };
        storage.set_item(&self.key, value).map_err(|e| format!("{e:?}"))
    }
}

pub struct DocumentSurface {
    root: Element,
    toggle: Element,
    attribute: String,
}

impl ThemeSurface for DocumentSurface {
    fn theme_attribute(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_theme_attribute(&mut self, value: &str) {
        if let Err(e) = self.root.set_attribute(&self.attribute, value) {
            log::warn!("failed to set {}: {e:?}", self.attribute);
        }
    }

    fn set_icon(&mut self, icon: ThemeIcon) {
        self.toggle.set_inner_html(icon.markup());
    }
}

/// System color-scheme preference; `None` when the query is unsupported.
#[must_use]
pub fn prefers_dark(window: &Window) -> Option<bool> {
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(Some(query)) => Some(query.matches()),
        Ok(None) => None,
        Err(e) => {
            log::warn!("matchMedia failed: {e:?}");
            None
        }
    }
}

/// Apply the starting theme and hook the toggle control.
///
/// # Errors
///
/// Fails when the toggle control or document root is missing.
pub fn install(window: &Window, document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let toggle = required_by_id(document, &config.theme_toggle_id)?;
    let root = document
        .document_element()
        .ok_or_else(|| UiError::MissingElement("document root".to_owned()))?;

    let store = LocalStorageStore::new(window, &config.theme_storage_key);
    let surface = DocumentSurface { root, toggle: toggle.clone(), attribute: config.theme_attribute.clone() };
    let controller = Rc::new(RefCell::new(ThemeController::new(store, surface)));

    let theme = controller.borrow_mut().initialize(prefers_dark(window));
    log::info!("theme: {theme}");

    listen(&toggle, "click", move |_| {
        let next = controller.borrow_mut().toggle();
        log::debug!("theme toggled to {next}");
    })
}
