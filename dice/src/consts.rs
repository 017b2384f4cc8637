//! Shared timing and angle constants for the dice crate.

// ── Timing ──────────────────────────────────────────────────────

/// Delay between the spin-out jump and the settle transition, in milliseconds.
///
/// The browser must commit the phase-1 styles before a transition is enabled,
/// otherwise it interpolates from the previous resting orientation.
pub const COMMIT_DELAY_MS: u64 = 50;

/// Settle transition length for the big-spin mode, in milliseconds.
pub const BIG_SPIN_SETTLE_MS: u32 = 2000;

/// Settle transition length for the overshoot mode, in milliseconds.
pub const OVERSHOOT_SETTLE_MS: u32 = 2050;

// ── Angles ──────────────────────────────────────────────────────

/// Spin-out angle applied to both axes in big-spin mode.
pub const BIG_SPIN_OUT_DEG: i32 = -720;

/// Inclusive lower bound of the random overshoot spin magnitude.
pub const OVERSHOOT_MIN_DEG: i32 = 300;

/// Exclusive upper bound of the random overshoot spin magnitude.
pub const OVERSHOOT_MAX_DEG: i32 = 500;

/// One quarter turn.
pub const QUARTER_TURN_DEG: i32 = 90;
