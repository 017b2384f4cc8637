//! Transport-facing modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The live connection itself belongs to the page's htmx websocket extension.
//! `lifecycle` names the events it dispatches and `enrich` shapes the
//! parameters of each outgoing message.

pub mod enrich;
pub mod lifecycle;
