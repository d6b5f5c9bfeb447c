//! Entrance tweens through the Web Animations API (`Element.animate`).
//!
//! Start styles are written inline at registration so elements stay hidden
//! until their trigger fires. Playing a tween uses `fill: "both"`, which holds
//! the start frame through any stagger delay and the natural style afterwards,
//! so the inline start styles can be cleared immediately.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::error::UiError;
use crate::reveal::EntranceAnimation;

fn set(obj: &Object, key: &str, value: &JsValue) -> Result<(), UiError> {
    Reflect::set(obj, &JsValue::from_str(key), value)?;
    Ok(())
}

/// Write the tween's start frame as inline style.
///
/// # Errors
///
/// Propagates a throwing style write.
pub fn hide(element: &Element, animation: &EntranceAnimation) -> Result<(), UiError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    style.set_property("opacity", &animation.from_opacity.to_string())?;
    style.set_property("transform", &animation.from_transform())?;
    Ok(())
}

/// Play the tween from its start frame to the element's natural style.
///
/// # Errors
///
/// Propagates failures building the keyframes or calling `animate`.
pub fn play(element: &Element, animation: &EntranceAnimation) -> Result<(), UiError> {
    let from = Object::new();
    set(&from, "opacity", &JsValue::from_f64(animation.from_opacity))?;
    set(&from, "transform", &JsValue::from_str(&animation.from_transform()))?;
    let to = Object::new();
    set(&to, "opacity", &JsValue::from_f64(1.0))?;
    set(&to, "transform", &JsValue::from_str("none"))?;
    let keyframes = Array::of2(&from, &to);

    let options = Object::new();
    set(&options, "duration", &JsValue::from_f64(animation.duration_ms))?;
    set(&options, "delay", &JsValue::from_f64(animation.delay_ms))?;
    set(&options, "easing", &JsValue::from_str(&animation.easing.css()))?;
    set(&options, "fill", &JsValue::from_str("both"))?;

    let animate = Reflect::get(element, &JsValue::from_str("animate"))?.dyn_into::<Function>()?;
    animate.call2(element, &keyframes, &options)?;

    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let style = html.style();
        style.remove_property("opacity")?;
        style.remove_property("transform")?;
    }
    Ok(())
}
