//! Event wiring: which handler answers which transport event.
//!
//! SYSTEM CONTEXT
//! ==============
//! The binding table is plain data so it can be checked natively; `install`
//! walks it once at mount time and registers one `htmx.on` listener per row.
//! Handlers only delegate to `PageState`.
//!
//! ERROR HANDLING
//! ==============
//! A missing `htmx` global or a missing status element is logged. Handlers
//! never return errors to the transport.

#[cfg(test)]
#[path = "wiring_test.rs"]
mod wiring_test;

use crate::net::lifecycle::LifecycleEvent;
use crate::state::connection::ConnectionState;

/// What a transport event is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// Update the connection indicator.
    Status(ConnectionState),
    /// Enrich the outgoing message, then trace it.
    Enrich,
    /// Debug-log the event.
    Trace,
}

/// Handler for `event`.
#[must_use]
pub fn binding_for(event: LifecycleEvent) -> Binding {
    match event.connection_state() {
        Some(state) => Binding::Status(state),
        None if event == LifecycleEvent::WsConfigSend => Binding::Enrich,
        None => Binding::Trace,
    }
}

/// Every event to register, each exactly once.
///
/// With `trace_events` off, events bound only to tracing are left out.
#[must_use]
pub fn bindings(trace_events: bool) -> Vec<(LifecycleEvent, Binding)> {
    LifecycleEvent::ALL
        .into_iter()
        .map(|event| (event, binding_for(event)))
        .filter(|(_, binding)| trace_events || *binding != Binding::Trace)
        .collect()
}

#[cfg(feature = "hydrate")]
pub(crate) use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::{Binding, bindings};
    use crate::dom::event::{JsParameters, SendDetail};
    use crate::dom::page::Shared;
    use crate::error::PageError;
    use crate::net::lifecycle::LifecycleEvent;

    thread_local! {
        static WIRED: Cell<bool> = const { Cell::new(false) };
    }

    /// Register every binding with `htmx.on`. Returns the number registered.
    ///
    /// Runs at most once per document; later calls log and register nothing.
    pub(crate) fn install(shared: &Rc<Shared>) -> Result<usize, PageError> {
        if WIRED.with(Cell::get) {
            log::warn!("[wiring] handlers already installed; skipping");
            return Ok(0);
        }

        let on = htmx_on()?;
        let trace_events = shared.state.borrow().config().trace_events;
        let mut count = 0;
        for (event, binding) in bindings(trace_events) {
            let handler = handler_for(shared, event, binding, trace_events);
            on.call2(&JsValue::NULL, &JsValue::from_str(event.name()), handler.as_ref())?;
            handler.forget();
            count += 1;
        }
        WIRED.with(|wired| wired.set(true));
        log::debug!("[wiring] {count} htmx handlers installed");
        Ok(count)
    }

    /// Resolve `window.htmx.on` without assuming the script loaded.
    fn htmx_on() -> Result<js_sys::Function, PageError> {
        let window = web_sys::window().ok_or(PageError::MissingWindow)?;
        let htmx = js_sys::Reflect::get(&window, &JsValue::from_str("htmx"))?;
        if htmx.is_undefined() || htmx.is_null() {
            return Err(PageError::Js("htmx is not loaded".to_owned()));
        }
        let on = js_sys::Reflect::get(&htmx, &JsValue::from_str("on"))?;
        let on: js_sys::Function = on
            .dyn_into()
            .map_err(|_| PageError::Js("htmx.on is not a function".to_owned()))?;
        Ok(on.bind(&htmx))
    }

    fn handler_for(
        shared: &Rc<Shared>,
        event: LifecycleEvent,
        binding: Binding,
        trace_events: bool,
    ) -> Closure<dyn FnMut(web_sys::Event)> {
        let shared = Rc::clone(shared);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |evt: web_sys::Event| {
            if trace_events {
                log::debug!("[{}] {:?}", event.trace_label(), evt.type_());
            }
            match binding {
                Binding::Status(_) => {
                    let mut indicator = shared.status_element();
                    shared.state.borrow_mut().on_lifecycle(event, indicator.as_mut());
                }
                Binding::Enrich => on_config_send(&shared, &evt),
                Binding::Trace => {}
            }
        })
    }

    fn on_config_send(shared: &Shared, evt: &web_sys::Event) {
        let Some(detail) = SendDetail::from_event(evt) else {
            log::warn!("[ws-send] event without parameters or element; not enriched");
            return;
        };
        let mut params = JsParameters::new(detail.parameters);
        shared.state.borrow().on_config_send(&mut params, detail.attributes);
    }
}
