//! Browser glue for the tabletop game pages.
//!
//! Rolls 3D dice to server-chosen faces and keeps the page in step with the
//! live connection: a status indicator that tracks the socket lifecycle, and
//! outbound messages enriched with the trigger element's `data-` attributes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Page config embedded as JSON by the server |
//! | [`error`] | `PageError` |
//! | [`state`] | Connection bridge and the table of dice |
//! | [`net`] | Transport lifecycle events and payload enrichment |
//! | [`page`] | Per-page state shared by every handler |
//! | [`wiring`] | Which handler answers which transport event |
//! | `dom` | `web-sys` adapters and the exported `TabletopPage` (`hydrate` only) |
//!
//! Everything outside `dom` builds and tests natively; the dice engine itself
//! lives in the `dice` crate.

pub mod config;
pub mod error;
pub mod net;
pub mod page;
pub mod state;
pub mod wiring;

#[cfg(feature = "hydrate")]
pub mod dom;

pub use error::PageError;

#[cfg(feature = "hydrate")]
pub use dom::page::TabletopPage;
