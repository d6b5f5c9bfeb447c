//! Bridge to the page's Bootstrap `Collapse` component for the mobile nav.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

use crate::error::UiError;

fn get(target: &JsValue, key: &str) -> Result<JsValue, UiError> {
    Ok(Reflect::get(target, &JsValue::from_str(key))?)
}

/// Hide `panel` through `bootstrap.Collapse.getInstance(panel)`.
///
/// No-op when the panel is not expanded, Bootstrap is not loaded, or the
/// panel has no collapse instance yet.
///
/// # Errors
///
/// Propagates a throwing Bootstrap call.
pub fn hide_if_expanded(window: &Window, panel: &Element, expanded_class: &str) -> Result<(), UiError> {
    if !panel.class_list().contains(expanded_class) {
        return Ok(());
    }
    let bootstrap = get(window, "bootstrap")?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        log::debug!("bootstrap not loaded; nav panel left as is");
        return Ok(());
    }
    let collapse = get(&bootstrap, "Collapse")?;
    let get_instance = get(&collapse, "getInstance")?.dyn_into::<Function>()?;
    let instance = get_instance.call1(&collapse, panel)?;
    if instance.is_undefined() || instance.is_null() {
        return Ok(());
    }
    let hide = get(&instance, "hide")?.dyn_into::<Function>()?;
    hide.call0(&instance)?;
    Ok(())
}
