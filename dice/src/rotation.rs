//! Face-to-rotation tables for the two roll styles.
//!
//! Both modes end on the same visible face for a given `Face`, but they
//! compose rotations differently, so each has its own table:
//!
//! - **big spin** jumps to a fixed `(-720, -720)` and settles on targets offset
//!   from 720°/810°/900°, so the settle always reads as a forward spin.
//! - **overshoot** jumps to a random `[300, 500)` pair and settles on the
//!   canonical rest angles (0°, ±90°, 180°).
//!
//! The settle target is a pure function of `(face, mode)`. Randomness only
//! ever feeds the spin-out jump.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{
    BIG_SPIN_OUT_DEG, BIG_SPIN_SETTLE_MS, COMMIT_DELAY_MS, OVERSHOOT_MAX_DEG, OVERSHOOT_MIN_DEG,
    OVERSHOOT_SETTLE_MS,
};
use crate::face::Face;

/// A die orientation: rotation about X, then about Y, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationTarget {
    pub x_deg: i32,
    pub y_deg: i32,
}

impl RotationTarget {
    #[must_use]
    pub const fn new(x_deg: i32, y_deg: i32) -> Self {
        Self { x_deg, y_deg }
    }

    /// CSS `transform` value for this orientation.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.x_deg, self.y_deg)
    }
}

impl fmt::Display for RotationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x_deg, self.y_deg)
    }
}

/// Error returned when parsing an unknown roll mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    #[error("unknown roll mode '{0}' (expected 'big-spin' or 'overshoot')")]
    Unknown(String),
}

/// Visual style of a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RollMode {
    /// Fixed multi-revolution spin-out, 2 s settle.
    #[default]
    BigSpin,
    /// Random spin-out magnitudes, 2.05 s settle, animation pinned off.
    Overshoot,
}

impl RollMode {
    pub const ALL: [Self; 2] = [Self::BigSpin, Self::Overshoot];

    /// How long the host waits between spin-out and settle, in every mode.
    pub const COMMIT_DELAY: Duration = Duration::from_millis(COMMIT_DELAY_MS);

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BigSpin => "big-spin",
            Self::Overshoot => "overshoot",
        }
    }

    /// Length of the settle transition.
    #[must_use]
    pub fn settle_duration(self) -> Duration {
        let ms = match self {
            Self::BigSpin => BIG_SPIN_SETTLE_MS,
            Self::Overshoot => OVERSHOOT_SETTLE_MS,
        };
        Duration::from_millis(u64::from(ms))
    }

    /// Whether the continuous animation is switched off again at settle time.
    #[must_use]
    pub fn pins_animation_on_settle(self) -> bool {
        matches!(self, Self::Overshoot)
    }
}

impl fmt::Display for RollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big-spin" => Ok(Self::BigSpin),
            "overshoot" => Ok(Self::Overshoot),
            other => Err(ModeError::Unknown(other.to_owned())),
        }
    }
}

/// Resting orientation that shows `face` on top in the given mode.
#[must_use]
pub fn settle_target(face: Face, mode: RollMode) -> RotationTarget {
    match mode {
        RollMode::BigSpin => big_spin_target(face),
        RollMode::Overshoot => overshoot_target(face),
    }
}

/// Orientation the die jumps to, without interpolation, when a roll starts.
pub fn spin_out_target<R: Rng + ?Sized>(mode: RollMode, rng: &mut R) -> RotationTarget {
    match mode {
        RollMode::BigSpin => RotationTarget::new(BIG_SPIN_OUT_DEG, BIG_SPIN_OUT_DEG),
        RollMode::Overshoot => RotationTarget::new(
            rng.random_range(OVERSHOOT_MIN_DEG..OVERSHOOT_MAX_DEG),
            rng.random_range(OVERSHOOT_MIN_DEG..OVERSHOOT_MAX_DEG),
        ),
    }
}

fn big_spin_target(face: Face) -> RotationTarget {
    match face.value() {
        2 => RotationTarget::new(630, 720),
        3 => RotationTarget::new(720, 810),
        4 => RotationTarget::new(720, 630),
        5 => RotationTarget::new(810, 720),
        6 => RotationTarget::new(900, 720),
        _ => RotationTarget::new(720, 720),
    }
}

fn overshoot_target(face: Face) -> RotationTarget {
    match face.value() {
        2 => RotationTarget::new(-90, 0),
        3 => RotationTarget::new(0, 90),
        4 => RotationTarget::new(0, -90),
        5 => RotationTarget::new(90, 0),
        6 => RotationTarget::new(180, 0),
        _ => RotationTarget::new(0, 0),
    }
}
