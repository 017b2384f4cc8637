//! Page-owned state.
//!
//! DESIGN
//! ======
//! Each concern gets its own small model: `connection` mirrors the transport
//! lifecycle onto the status indicator, `dice_table` owns every die on the page and
//! its roll state machine. Both are instantiated per page, never shared.

pub mod connection;
pub mod dice_table;
