//! Reading the `detail` of htmx send events.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use crate::net::enrich::ParameterMap;

/// The parts of a `htmx:wsConfigSend` detail the enricher needs.
pub struct SendDetail {
    /// `detail.parameters`, mutated in place.
    pub parameters: js_sys::Object,
    /// Attributes of `detail.elt`, in document order.
    pub attributes: Vec<(String, String)>,
}

impl SendDetail {
    /// `None` unless the event is a `CustomEvent` with both fields present.
    #[must_use]
    pub fn from_event(evt: &web_sys::Event) -> Option<Self> {
        let detail = evt.dyn_ref::<web_sys::CustomEvent>()?.detail();
        let parameters = js_sys::Reflect::get(&detail, &JsValue::from_str("parameters"))
            .ok()?
            .dyn_into::<js_sys::Object>()
            .ok()?;
        let element = js_sys::Reflect::get(&detail, &JsValue::from_str("elt"))
            .ok()?
            .dyn_into::<web_sys::Element>()
            .ok()?;
        Some(Self { parameters, attributes: attributes_of(&element) })
    }
}

/// Name/value pairs of every attribute on `element`.
#[must_use]
pub fn attributes_of(element: &web_sys::Element) -> Vec<(String, String)> {
    if !element.has_attributes() {
        return Vec::new();
    }
    element
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let value = element.get_attribute(&name)?;
            Some((name, value))
        })
        .collect()
}

/// `ParameterMap` over the transport's JS parameters object.
pub struct JsParameters(js_sys::Object);

impl JsParameters {
    #[must_use]
    pub fn new(object: js_sys::Object) -> Self {
        Self(object)
    }
}

impl ParameterMap for JsParameters {
    fn insert_param(&mut self, key: &str, value: &str) {
        if let Err(e) = js_sys::Reflect::set(&self.0, &JsValue::from_str(key), &JsValue::from_str(value)) {
            log::warn!("[ws-send] failed to set parameter {key}: {e:?}");
        }
    }
}
