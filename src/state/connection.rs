//! Connection status bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transport fires `connecting`, `open`, `close` and `error` events. The
//! bridge keeps only the most recent one and mirrors it onto the indicator as
//! a single class token (`cloud-connecting`, `cloud-on`, `cloud-off`,
//! `cloud-error`). There is no buffering and no timer: last write wins.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use std::fmt;

/// Transport connection lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    /// Handshake in progress.
    Connecting,
    /// Socket open.
    Open,
    /// Socket closed.
    Closed,
    /// Transport reported an error.
    Error,
}

impl ConnectionState {
    pub const ALL: [Self; 4] = [Self::Connecting, Self::Open, Self::Closed, Self::Error];

    /// Token written to the indicator.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Open => "on",
            Self::Closed => "off",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A visible element that displays the connection state.
pub trait StatusIndicator {
    /// Replace the element's class list with `class_name`.
    fn set_class_name(&mut self, class_name: &str);
}

/// Mirrors the latest lifecycle signal onto a [`StatusIndicator`].
#[derive(Clone, Debug)]
pub struct ConnectionBridge {
    class_prefix: String,
    state: Option<ConnectionState>,
}

impl ConnectionBridge {
    #[must_use]
    pub fn new(class_prefix: impl Into<String>) -> Self {
        Self { class_prefix: class_prefix.into(), state: None }
    }

    /// Most recent state, or `None` before the first event.
    #[must_use]
    pub fn state(&self) -> Option<ConnectionState> {
        self.state
    }

    /// Class written to the indicator for `state`.
    #[must_use]
    pub fn class_for(&self, state: ConnectionState) -> String {
        format!("{}{}", self.class_prefix, state.token())
    }

    /// Record `state` and show it on `indicator`.
    ///
    /// A missing indicator is logged and otherwise ignored; the state is still
    /// recorded so a later lookup reflects it.
    pub fn apply<I: StatusIndicator + ?Sized>(&mut self, state: ConnectionState, indicator: Option<&mut I>) {
        self.state = Some(state);
        match indicator {
            Some(indicator) => indicator.set_class_name(&self.class_for(state)),
            None => log::warn!("[ws-status] indicator not found; state is {state}"),
        }
    }
}

impl Default for ConnectionBridge {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STATUS_CLASS_PREFIX)
    }
}
