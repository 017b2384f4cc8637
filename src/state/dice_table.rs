//! Every die on the page and its roll state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dice are tracked by element id. A die enters the table either by
//! registration, which builds the pip layout, or by adoption when it is rolled
//! before anyone filled it. Each entry remembers whether its layout was built:
//! building twice is refused so a die never gets a duplicate set of faces,
//! while an adopted die can still be built later. Rolls and their delayed steps
//! are routed by id; the browser layer owns the timers.

#[cfg(test)]
#[path = "dice_table_test.rs"]
mod dice_table_test;

use std::collections::HashMap;

use dice::{DieSurface, Face, RestStep, RollAnimator, RollMode, RollTicket, SettleStep};
use rand::rngs::SmallRng;

use crate::error::PageError;

struct TrackedDie<S> {
    animator: RollAnimator<S>,
    built: bool,
}

/// Registered dice keyed by element id.
pub struct DiceTable<S> {
    dice: HashMap<String, TrackedDie<S>>,
    rng: SmallRng,
}

impl<S: DieSurface> DiceTable<S> {
    #[must_use]
    pub fn new(rng: SmallRng) -> Self {
        Self { dice: HashMap::new(), rng }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.dice.contains_key(id)
    }

    /// Whether the pip layout of `id` was built by this table.
    #[must_use]
    pub fn is_built(&self, id: &str) -> bool {
        self.dice.get(id).is_some_and(|die| die.built)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RollAnimator<S>> {
        self.dice.get(id).map(|die| &die.animator)
    }

    /// Build the pip layout on `surface` and start tracking it under `id`.
    ///
    /// A die that was adopted earlier keeps its roll state and gets its layout
    /// built on the surface it was adopted with; `surface` is dropped.
    pub fn register(&mut self, id: impl Into<String>, mut surface: S) -> Result<(), PageError> {
        let id = id.into();
        match self.dice.get_mut(&id) {
            Some(die) if die.built => return Err(PageError::AlreadyBuilt(id)),
            Some(die) => {
                dice::layout::build(die.animator.surface_mut());
                die.built = true;
            }
            None => {
                dice::layout::build(&mut surface);
                self.dice.insert(id.clone(), TrackedDie { animator: RollAnimator::new(surface), built: true });
            }
        }
        log::debug!("[fill] built die #{id}");
        Ok(())
    }

    /// Track a die whose pips are already in the markup. Builds nothing.
    ///
    /// Returns `false` if `id` is already tracked.
    pub fn adopt(&mut self, id: impl Into<String>, surface: S) -> bool {
        let id = id.into();
        if self.dice.contains_key(&id) {
            return false;
        }
        self.dice.insert(id, TrackedDie { animator: RollAnimator::new(surface), built: false });
        true
    }

    /// Start a roll of die `id` to the raw face `value`.
    ///
    /// Returns `Ok(None)` for face values outside `1..=6`; those change nothing.
    pub fn roll(&mut self, id: &str, value: u8, mode: RollMode) -> Result<Option<SettleStep>, PageError> {
        let die = self.dice.get_mut(id).ok_or_else(|| PageError::UnknownDie(id.to_owned()))?;
        Ok(die.animator.animate_raw(value, mode, &mut self.rng))
    }

    /// Second phase of a roll. `None` if the die is gone or the ticket is stale.
    pub fn settle(&mut self, id: &str, ticket: RollTicket) -> Option<RestStep> {
        self.dice.get_mut(id)?.animator.settle(ticket)
    }

    /// Mark a roll as finished. `false` if the die is gone or the ticket is stale.
    pub fn finish(&mut self, id: &str, ticket: RollTicket) -> bool {
        self.dice.get_mut(id).is_some_and(|die| die.animator.finish(ticket))
    }

    /// Draw a face from the table's generator.
    pub fn random_face(&mut self) -> Face {
        Face::random(&mut self.rng)
    }
}
