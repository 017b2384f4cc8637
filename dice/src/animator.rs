//! Two-phase roll state machine.
//!
//! A roll is a spin-out jump followed, after a short commit delay, by a timed
//! settle onto the face's rest orientation:
//!
//! ```text
//! Resting --spin_out--> Spinning --settle--> Settling --finish--> Resting
//!    ^                     |                    |
//!    +------ spin_out -----+------ spin_out ----+   (replaces the roll)
//! ```
//!
//! The animator never sleeps. `spin_out` and `settle` return the delay the
//! host must wait before calling the next step, together with a ticket naming
//! the roll. Starting a new roll while one is in flight bumps the generation,
//! so the old roll's ticket goes stale and its pending steps become no-ops:
//! the last roll requested is the one the die lands on.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use std::time::Duration;

use rand::Rng;

use crate::face::Face;
use crate::rotation::{RollMode, settle_target, spin_out_target};
use crate::surface::{DieSurface, Transition};

/// Where a die is in its roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollPhase {
    /// No roll in flight.
    #[default]
    Resting,
    /// Spin-out applied; waiting for the commit delay before settling.
    Spinning,
    /// Settle transition running.
    Settling,
}

/// Identifies one roll so late timer callbacks can be matched or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollTicket {
    generation: u64,
    pub face: Face,
    pub mode: RollMode,
}

/// Returned by [`RollAnimator::spin_out`]: call `settle(ticket)` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleStep {
    pub ticket: RollTicket,
    pub delay: Duration,
}

/// Returned by [`RollAnimator::settle`]: call `finish(ticket)` after `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestStep {
    pub ticket: RollTicket,
    pub after: Duration,
}

/// Drives the orientation of one die through spin-out and settle.
#[derive(Debug)]
pub struct RollAnimator<S> {
    surface: S,
    phase: RollPhase,
    generation: u64,
    current: Option<RollTicket>,
}

impl<S: DieSurface> RollAnimator<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self { surface, phase: RollPhase::Resting, generation: 0, current: None }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn phase(&self) -> RollPhase {
        self.phase
    }

    /// The roll currently in flight, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<RollTicket> {
        self.current
    }

    /// Phase 1: jump to a mid-spin orientation with transition and animation off.
    ///
    /// Any roll already in flight is superseded.
    pub fn spin_out<R: Rng + ?Sized>(&mut self, face: Face, mode: RollMode, rng: &mut R) -> SettleStep {
        if let Some(previous) = self.current {
            log::debug!("roll to face {} superseded by roll to face {face}", previous.face);
        }
        self.generation = self.generation.wrapping_add(1);
        let ticket = RollTicket { generation: self.generation, face, mode };

        self.surface.set_transition(Transition::None);
        self.surface.disable_animation();
        self.surface.set_orientation(spin_out_target(mode, rng));

        self.phase = RollPhase::Spinning;
        self.current = Some(ticket);
        SettleStep { ticket, delay: RollMode::COMMIT_DELAY }
    }

    /// Phase 1 from a raw face value. Values outside `1..=6` change nothing.
    pub fn animate_raw<R: Rng + ?Sized>(&mut self, value: u8, mode: RollMode, rng: &mut R) -> Option<SettleStep> {
        let face = Face::new(value)?;
        Some(self.spin_out(face, mode, rng))
    }

    /// Phase 2: enable the timed transition and move to the face's rest target.
    ///
    /// Returns `None` without touching the surface when `ticket` is stale.
    pub fn settle(&mut self, ticket: RollTicket) -> Option<RestStep> {
        if self.current != Some(ticket) || self.phase != RollPhase::Spinning {
            log::debug!("ignoring stale settle for face {}", ticket.face);
            return None;
        }

        let duration = ticket.mode.settle_duration();
        self.surface.set_transition(Transition::Ease(duration));
        self.surface.set_orientation(settle_target(ticket.face, ticket.mode));
        if ticket.mode.pins_animation_on_settle() {
            self.surface.disable_animation();
        }

        self.phase = RollPhase::Settling;
        Some(RestStep { ticket, after: duration })
    }

    /// Mark the settle transition as complete. Returns `false` for stale tickets.
    pub fn finish(&mut self, ticket: RollTicket) -> bool {
        if self.current != Some(ticket) || self.phase != RollPhase::Settling {
            return false;
        }
        self.phase = RollPhase::Resting;
        self.current = None;
        true
    }
}
