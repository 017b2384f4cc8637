//! Browser adapters over `web-sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here needs a real DOM and is compiled only with the `hydrate`
//! feature. Each adapter implements one of the crate's seams (`DieSurface`,
//! `StatusIndicator`, `ParameterMap`) so the logic behind them stays testable
//! natively.

pub mod die;
pub mod event;
pub mod page;
pub mod roller;

use wasm_bindgen::JsCast;

use crate::error::PageError;
use crate::state::connection::StatusIndicator;

/// The current document.
pub fn document() -> Result<web_sys::Document, PageError> {
    web_sys::window()
        .ok_or(PageError::MissingWindow)?
        .document()
        .ok_or(PageError::MissingDocument)
}

/// Look up `id` as an `HtmlElement`.
pub fn html_element_by_id(document: &web_sys::Document, id: &str) -> Result<web_sys::HtmlElement, PageError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| PageError::MissingElement(id.to_owned()))
}

impl StatusIndicator for web_sys::Element {
    fn set_class_name(&mut self, class_name: &str) {
        web_sys::Element::set_class_name(self, class_name);
    }
}
