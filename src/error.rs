//! Error type shared by the browser bridge.
//!
//! ERROR HANDLING
//! ==============
//! None of these escape an event handler. Handlers log the error and return,
//! so a missing widget or a malformed config never breaks the page.

/// Failure while mounting the page or resolving one of its elements.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no global window")]
    MissingWindow,
    #[error("no document on window")]
    MissingDocument,
    #[error("element not found: #{0}")]
    MissingElement(String),
    #[error("die already built: {0}")]
    AlreadyBuilt(String),
    #[error("unknown die: {0}")]
    UnknownDie(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[cfg(feature = "hydrate")]
impl From<PageError> for wasm_bindgen::JsValue {
    fn from(err: PageError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
