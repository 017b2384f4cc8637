//! Page configuration for the tabletop bridge.
//!
//! The server-rendered page may embed a JSON object in
//! `<script type="application/json" id="tabletop-config">`. Every field is
//! optional; anything missing falls back to the defaults below, which match
//! the markup the game pages ship with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use dice::RollMode;
use serde::{Deserialize, Serialize};

use crate::error::PageError;

pub const CONFIG_ELEMENT_ID: &str = "tabletop-config";
pub const DEFAULT_STATUS_ELEMENT_ID: &str = "ws-status";
pub const DEFAULT_STATUS_CLASS_PREFIX: &str = "cloud-";
pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "data-";
pub const DEFAULT_DICE_SELECTOR: &str = ".dice.d6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Id of the connection status indicator.
    pub status_element_id: String,
    /// Prepended to the state token to form the indicator's class.
    pub status_class_prefix: String,
    /// Attributes with this prefix are copied into outbound parameters.
    pub attribute_prefix: String,
    /// Selector for dice that receive a pip layout on `fillDice`.
    pub dice_selector: String,
    /// Mode used when a roll call does not name one.
    pub roll_mode: RollMode,
    /// Log every transport event at debug level.
    pub trace_events: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            status_element_id: DEFAULT_STATUS_ELEMENT_ID.to_owned(),
            status_class_prefix: DEFAULT_STATUS_CLASS_PREFIX.to_owned(),
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_owned(),
            dice_selector: DEFAULT_DICE_SELECTOR.to_owned(),
            roll_mode: RollMode::default(),
            trace_events: true,
        }
    }
}

impl PageConfig {
    /// Parse a config object. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the embedded config from the current document.
    ///
    /// Falls back to defaults (with a warning) when the element is missing or
    /// its JSON is invalid.
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[config] using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Resolve an optional per-call mode name against the configured default.
    ///
    /// Unknown names are logged and fall back to the default.
    #[must_use]
    pub fn mode_or_default(&self, raw: Option<&str>) -> RollMode {
        match raw.map(str::parse::<RollMode>) {
            None => self.roll_mode,
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                log::warn!("[config] {e}; using {}", self.roll_mode);
                self.roll_mode
            }
        }
    }
}
