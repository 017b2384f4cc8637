//! The visual element contract a die must satisfy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The animator and layout builder only ever talk to a die through
//! [`DieSurface`]. In the browser the `tabletop` crate implements it over an
//! `HtmlElement`'s inline style and children; [`MemoryDie`] implements it in
//! memory so the roll state machine can be tested without a DOM.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::time::Duration;

use crate::layout::FaceGroup;
use crate::rotation::RotationTarget;

/// Timed transition effect applied to orientation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Orientation changes apply instantly.
    #[default]
    None,
    /// Orientation changes ease over the given duration.
    Ease(Duration),
}

impl Transition {
    /// CSS `transition` value.
    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::None => "none".to_owned(),
            Self::Ease(duration) => format!("{}s ease", duration.as_secs_f64()),
        }
    }
}

/// Style and structure operations a die element supports.
pub trait DieSurface {
    /// Set the discrete orientation.
    fn set_orientation(&mut self, target: RotationTarget);

    /// Enable or disable the timed transition.
    fn set_transition(&mut self, transition: Transition);

    /// Switch off the continuous animation (e.g. an idle wobble from the
    /// stylesheet). It stays off for the life of the element.
    fn disable_animation(&mut self);

    /// Append one face container with its pips as a child.
    fn append_face(&mut self, group: &FaceGroup);
}

/// One recorded style mutation on a [`MemoryDie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleWrite {
    Orientation(RotationTarget),
    Transition(Transition),
    AnimationOff,
}

/// In-memory die that keeps its current style and a log of every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryDie {
    pub orientation: Option<RotationTarget>,
    pub transition: Transition,
    pub animation_disabled: bool,
    pub faces: Vec<FaceGroup>,
    pub writes: Vec<StyleWrite>,
}

impl MemoryDie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total pip count across every appended face.
    #[must_use]
    pub fn pip_total(&self) -> usize {
        self.faces.iter().map(FaceGroup::pip_count).sum()
    }
}

impl DieSurface for MemoryDie {
    fn set_orientation(&mut self, target: RotationTarget) {
        self.orientation = Some(target);
        self.writes.push(StyleWrite::Orientation(target));
    }

    fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
        self.writes.push(StyleWrite::Transition(transition));
    }

    fn disable_animation(&mut self) {
        self.animation_disabled = true;
        self.writes.push(StyleWrite::AnimationOff);
    }

    fn append_face(&mut self, group: &FaceGroup) {
        self.faces.push(group.clone());
    }
}

impl<S: DieSurface + ?Sized> DieSurface for &mut S {
    fn set_orientation(&mut self, target: RotationTarget) {
        (**self).set_orientation(target);
    }

    fn set_transition(&mut self, transition: Transition) {
        (**self).set_transition(transition);
    }

    fn disable_animation(&mut self) {
        (**self).disable_animation();
    }

    fn append_face(&mut self, group: &FaceGroup) {
        (**self).append_face(group);
    }
}
