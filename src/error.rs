// src/error.rs
//
// Error type shared by the renderer, the copy-link actions and the theme
// controller. Nothing in the crate panics on these; callers log and move on.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, DictionaryError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DictionaryError {
    #[error("HTTP error! Status: {0}")]
    HttpStatus(u16),

    #[error("request failed: {0}")]
    Network(String),

    /// The body is not JSON at all.
    #[error("invalid JSON: {0}")]
    Syntax(String),

    /// The body is JSON but not a dictionary document.
    #[error("unexpected document shape: {0}")]
    Shape(String),

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("clipboard write rejected: {0}")]
    Clipboard(String),

    #[error("No data-url attribute found.")]
    MissingUrl,

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("already booted")]
    AlreadyBooted,

    #[error("boot() has not been called")]
    NotBooted,

    /// Theme setup failed at boot, so there is nothing to toggle.
    #[error("theme controller unavailable")]
    ThemeUnavailable,
}

impl DictionaryError {
    /// Wraps a thrown JS value, keeping whatever message it carries.
    pub fn dom(err: JsValue) -> Self {
        DictionaryError::Dom(describe_js(&err))
    }

    pub fn network(err: JsValue) -> Self {
        DictionaryError::Network(describe_js(&err))
    }
}

impl From<DictionaryError> for JsValue {
    fn from(err: DictionaryError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value (`Error.message`, a string, or the
/// debug rendering).
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
