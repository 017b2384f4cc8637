//! The page object exported to JavaScript.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markup and scripts are served by the game server. A page script calls
//! `TabletopPage.mount()` once, then uses the returned handle to fill and
//! roll dice. Connection status and outbound enrichment are wired at mount
//! time and need no further calls.
//!
//! ERROR HANDLING
//! ==============
//! Methods that address a single element return `Result` so the page script
//! can react; click and timer callbacks log and carry on.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use dice::Face;
use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use super::die::HtmlDie;
use super::{document, html_element_by_id, roller};
use crate::config::PageConfig;
use crate::error::PageError;
use crate::page::PageState;
use crate::wiring;

/// Id prefix given to selector-matched dice that have none.
const AUTO_ID_PREFIX: &str = "tabletop-die-";

/// State reachable from every callback on the page.
pub(crate) struct Shared {
    pub(crate) state: RefCell<PageState<HtmlDie>>,
    pub(crate) timers: RefCell<HashMap<String, Timeout>>,
    document: web_sys::Document,
    next_auto_id: Cell<usize>,
}

impl Shared {
    /// The status indicator, if the page has one.
    pub(crate) fn status_element(&self) -> Option<web_sys::Element> {
        let state = self.state.borrow();
        let id = &state.config().status_element_id;
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            log::debug!("[ws-status] no #{id} on this page");
        }
        element
    }

    fn die(&self, element: web_sys::HtmlElement) -> HtmlDie {
        HtmlDie::new(element, self.document.clone())
    }

    fn ensure_id(&self, element: &web_sys::HtmlElement) -> String {
        let id = element.id();
        if !id.is_empty() {
            return id;
        }
        let n = self.next_auto_id.get();
        self.next_auto_id.set(n + 1);
        let id = format!("{AUTO_ID_PREFIX}{n}");
        element.set_id(&id);
        id
    }

    fn roll(self: &Rc<Self>, id: &str, raw_face: f64, mode: Option<&str>) -> Result<bool, PageError> {
        let Some(face) = Face::from_f64(raw_face) else {
            log::debug!("[dice] #{id}: face {raw_face} ignored");
            return Ok(false);
        };
        let step = {
            let mut state = self.state.borrow_mut();
            let mode = state.config().mode_or_default(mode);
            if !state.dice().contains(id) {
                let element = html_element_by_id(&self.document, id)?;
                state.dice_mut().adopt(id, self.die(element));
            }
            state.dice_mut().roll(id, face.value(), mode)?
        };
        let Some(step) = step else {
            return Ok(false);
        };
        roller::schedule_settle(self, id, step);
        Ok(true)
    }
}

thread_local! {
    static LOGGER_READY: Cell<bool> = const { Cell::new(false) };
}

fn init_logging() {
    if LOGGER_READY.with(Cell::get) {
        return;
    }
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console_log: {e}")));
    }
    LOGGER_READY.with(|ready| ready.set(true));
}

/// Handle to the dice and connection glue on the current page.
#[wasm_bindgen]
pub struct TabletopPage {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl TabletopPage {
    /// Read the page config and wire the transport events.
    ///
    /// A page without htmx still gets working dice.
    pub fn mount() -> Result<TabletopPage, JsValue> {
        init_logging();
        let document = document()?;
        let config = PageConfig::load(&document);
        let rng = SmallRng::seed_from_u64(js_sys::Math::random().to_bits());
        let shared = Rc::new(Shared {
            state: RefCell::new(PageState::new(config, rng)),
            timers: RefCell::new(HashMap::new()),
            document,
            next_auto_id: Cell::new(0),
        });
        if let Err(e) = wiring::install(&shared) {
            log::warn!("[wiring] transport events not wired: {e}");
        }
        Ok(Self { shared })
    }

    /// Build pips on every die matching the configured selector.
    ///
    /// Dice that already have pips are skipped. Returns the number built.
    #[wasm_bindgen(js_name = fillDice)]
    pub fn fill_dice(&self) -> Result<u32, JsValue> {
        let selector = self.shared.state.borrow().config().dice_selector.clone();
        let nodes = self.shared.document.query_selector_all(&selector)?;
        let mut built = 0;
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
                continue;
            };
            let id = self.shared.ensure_id(&element);
            let die = self.shared.die(element);
            match self.shared.state.borrow_mut().dice_mut().register(id, die) {
                Ok(()) => built += 1,
                Err(e) => log::debug!("[fill] {e}"),
            }
        }
        log::debug!("[fill] {built} dice built for {selector}");
        Ok(built)
    }

    /// Build pips on the die with this id.
    #[wasm_bindgen(js_name = fillDie)]
    pub fn fill_die(&self, id: &str) -> Result<(), JsValue> {
        let element = html_element_by_id(&self.shared.document, id).inspect_err(|_| {
            log::warn!("[fill] missing dice #{id}");
        })?;
        let die = self.shared.die(element);
        self.shared.state.borrow_mut().dice_mut().register(id, die)?;
        Ok(())
    }

    /// Roll die `id` to `face` (1 to 6). Any other number, including
    /// fractions, is ignored.
    ///
    /// `mode` is `"big-spin"` or `"overshoot"`; omitted or unknown names use
    /// the configured default. Returns whether a roll started.
    #[wasm_bindgen(js_name = rollDie)]
    pub fn roll_die(&self, id: &str, face: f64, mode: Option<String>) -> Result<bool, JsValue> {
        Ok(self.shared.roll(id, face, mode.as_deref())?)
    }

    /// Roll die `die_id` to `face` whenever `trigger_id` is clicked.
    ///
    /// Returns `false`, after logging, when either element is missing.
    #[wasm_bindgen(js_name = rollOnClick)]
    pub fn roll_on_click(&self, trigger_id: &str, die_id: &str, face: f64, mode: Option<String>) -> Result<bool, JsValue> {
        let trigger = self.shared.document.get_element_by_id(trigger_id);
        let die = self.shared.document.get_element_by_id(die_id);
        let Some(trigger) = trigger.filter(|_| die.is_some()) else {
            log::warn!("[roll] missing #{trigger_id} or #{die_id}");
            return Ok(false);
        };

        let shared = Rc::clone(&self.shared);
        let die_id = die_id.to_owned();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
            log::debug!("[roll] #{die_id} to face {face}");
            if let Err(e) = shared.roll(&die_id, face, mode.as_deref()) {
                log::warn!("[roll] {e}");
            }
        });
        trigger.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
        log::debug!("[roll] click set on #{trigger_id}");
        Ok(true)
    }

    /// A uniformly random face, 1 to 6.
    #[wasm_bindgen(js_name = randomFace)]
    pub fn random_face(&self) -> u8 {
        self.shared.state.borrow_mut().dice_mut().random_face().value()
    }

    /// Last connection state token (`connecting`, `on`, `off`, `error`), if any.
    #[wasm_bindgen(getter, js_name = connectionState)]
    pub fn connection_state(&self) -> Option<String> {
        self.shared.state.borrow().connection_state().map(|s| s.token().to_owned())
    }
}
