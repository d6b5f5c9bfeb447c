//! Startup error type for the browser layer.

/// Failures that stop a subsystem from wiring itself to the page.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A required element was not present in the document.
    #[error("missing required element: {0}")]
    MissingElement(String),
    /// The browser `window` or `document` globals were unavailable.
    #[error("browser environment unavailable: {0}")]
    NoBrowser(&'static str),
    /// A DOM or JavaScript call threw.
    #[error("javascript error: {0}")]
    Js(String),
    /// The embedded configuration blob could not be parsed.
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
