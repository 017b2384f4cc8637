//! Per-page state shared by every event handler.
//!
//! DESIGN
//! ======
//! One `PageState` is created when the page mounts and owns everything the
//! handlers touch: the config, the connection bridge, and the dice table.
//! Nothing lives in globals, so two pages in the same tab (or two tests in the
//! same process) never see each other's dice or status.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use dice::DieSurface;
use rand::rngs::SmallRng;

use crate::config::PageConfig;
use crate::net::enrich::{ParameterMap, enrich};
use crate::net::lifecycle::LifecycleEvent;
use crate::state::connection::{ConnectionBridge, ConnectionState, StatusIndicator};
use crate::state::dice_table::DiceTable;

pub struct PageState<S> {
    config: PageConfig,
    connection: ConnectionBridge,
    dice: DiceTable<S>,
}

impl<S: DieSurface> PageState<S> {
    #[must_use]
    pub fn new(config: PageConfig, rng: SmallRng) -> Self {
        let connection = ConnectionBridge::new(config.status_class_prefix.clone());
        Self { config, connection, dice: DiceTable::new(rng) }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn connection_state(&self) -> Option<ConnectionState> {
        self.connection.state()
    }

    #[must_use]
    pub fn dice(&self) -> &DiceTable<S> {
        &self.dice
    }

    pub fn dice_mut(&mut self) -> &mut DiceTable<S> {
        &mut self.dice
    }

    /// Mirror a lifecycle event onto the indicator.
    ///
    /// Returns `false` (and does nothing) for events that carry no state.
    pub fn on_lifecycle<I: StatusIndicator + ?Sized>(&mut self, event: LifecycleEvent, indicator: Option<&mut I>) -> bool {
        let Some(state) = event.connection_state() else {
            return false;
        };
        self.connection.apply(state, indicator);
        true
    }

    /// Copy the trigger element's prefixed attributes into an outgoing message.
    pub fn on_config_send<P, A, K, V>(&self, params: &mut P, attrs: A) -> usize
    where
        P: ParameterMap + ?Sized,
        A: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        enrich(params, attrs, &self.config.attribute_prefix)
    }
}
