//! Dice orientation engine for the tabletop client.
//!
//! This crate is pure Rust with no browser dependencies. It owns the mapping
//! from a logical face to a 3D rotation target, the static pip layout of a d6,
//! and the two-phase roll state machine that spins a die out and settles it on
//! the commanded face. The host (the `tabletop` crate in the browser) supplies
//! a [`surface::DieSurface`] for the real element and drives the timers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`face`] | The `Face` newtype (1–6) and random draws |
//! | [`rotation`] | Rotation targets, roll modes, and the per-mode face tables |
//! | [`surface`] | The visual element contract and an in-memory implementation |
//! | [`layout`] | Pip layout construction for all six faces |
//! | [`animator`] | The spin-out / settle state machine |
//! | [`consts`] | Timing and angle constants |

pub mod animator;
pub mod consts;
pub mod face;
pub mod layout;
pub mod rotation;
pub mod surface;

pub use animator::{RestStep, RollAnimator, RollPhase, RollTicket, SettleStep};
pub use face::{Face, FaceError};
pub use rotation::{ModeError, RollMode, RotationTarget};
pub use surface::{DieSurface, MemoryDie, Transition};
