//! Named events dispatched by the htmx websocket extension.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::fmt;

use crate::state::connection::ConnectionState;

/// One transport event this crate listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    WsConnecting,
    WsOpen,
    WsClose,
    WsError,
    /// Outgoing message is being assembled; parameters are still mutable.
    WsConfigSend,
    WsBeforeSend,
    WsAfterSend,
    WsBeforeMessage,
    WsAfterMessage,
    /// Plain (non-websocket) htmx request is being configured.
    ConfigRequest,
}

impl LifecycleEvent {
    pub const ALL: [Self; 10] = [
        Self::WsConnecting,
        Self::WsOpen,
        Self::WsClose,
        Self::WsError,
        Self::WsConfigSend,
        Self::WsBeforeSend,
        Self::WsAfterSend,
        Self::WsBeforeMessage,
        Self::WsAfterMessage,
        Self::ConfigRequest,
    ];

    /// DOM event name as dispatched by htmx.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::WsConnecting => "htmx:wsConnecting",
            Self::WsOpen => "htmx:wsOpen",
            Self::WsClose => "htmx:wsClose",
            Self::WsError => "htmx:wsError",
            Self::WsConfigSend => "htmx:wsConfigSend",
            Self::WsBeforeSend => "htmx:wsBeforeSend",
            Self::WsAfterSend => "htmx:wsAfterSend",
            Self::WsBeforeMessage => "htmx:wsBeforeMessage",
            Self::WsAfterMessage => "htmx:wsAfterMessage",
            Self::ConfigRequest => "htmx:configRequest",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }

    /// The connection state this event signals, for the four lifecycle events.
    #[must_use]
    pub fn connection_state(self) -> Option<ConnectionState> {
        match self {
            Self::WsConnecting => Some(ConnectionState::Connecting),
            Self::WsOpen => Some(ConnectionState::Open),
            Self::WsClose => Some(ConnectionState::Closed),
            Self::WsError => Some(ConnectionState::Error),
            _ => None,
        }
    }

    /// Short label used in trace logs, e.g. `htmx-ws-open`.
    #[must_use]
    pub fn trace_label(self) -> String {
        let bare = self.name().trim_start_matches("htmx:");
        let mut label = String::from("htmx-");
        for ch in bare.chars() {
            if ch.is_ascii_uppercase() {
                label.push('-');
                label.push(ch.to_ascii_lowercase());
            } else {
                label.push(ch);
            }
        }
        label
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
