//! The logical face value of a six-sided die.

#[cfg(test)]
#[path = "face_test.rs"]
mod face_test;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Error returned when a raw integer is not a valid face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FaceError {
    #[error("face out of range: {0} (expected 1..=6)")]
    OutOfRange(u8),
}

/// Which side of a d6 should end up on top. Always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const SIX: Self = Self(6);

    /// Every face in ascending order.
    pub const ALL: [Self; 6] = [Self::ONE, Self::TWO, Self::THREE, Self::FOUR, Self::FIVE, Self::SIX];

    /// Returns `None` for values outside `1..=6`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=6).contains(&value).then_some(Self(value))
    }

    /// Accept a JavaScript number only if it is exactly one of `1..=6`.
    ///
    /// Fractions, out-of-range values, infinities and `NaN` are `None`; no
    /// rounding or wrapping is applied.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|face| (f64::from(face.value()) - value).abs() < f64::EPSILON)
    }

    /// Draw a uniformly distributed face.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(1..=6))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Number of pips drawn on this face.
    #[must_use]
    pub fn pip_count(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for Face {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(FaceError::OutOfRange(value))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.0
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
