//! Static pip layout for a d6.
//!
//! Each face becomes a `face-<k>` container holding `dot-1` … `dot-k`; the
//! stylesheet positions the dots. The layout is built once per die element.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::face::Face;
use crate::surface::DieSurface;

/// One face container and its pip markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceGroup {
    pub face: Face,
}

impl FaceGroup {
    #[must_use]
    pub fn new(face: Face) -> Self {
        Self { face }
    }

    /// Class name of the face container.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("face-{}", self.face)
    }

    #[must_use]
    pub fn pip_count(&self) -> usize {
        self.face.pip_count()
    }

    /// Class names of the pips, in order.
    #[must_use]
    pub fn pip_class_names(&self) -> Vec<String> {
        (1..=self.pip_count()).map(|dot| format!("dot-{dot}")).collect()
    }
}

/// The six face groups in face order.
#[must_use]
pub fn face_groups() -> Vec<FaceGroup> {
    Face::ALL.into_iter().map(FaceGroup::new).collect()
}

/// Append the full pip layout to `die`.
///
/// No existing-children check is made: calling this twice on the same element
/// duplicates every face. Callers build each die exactly once.
pub fn build<S: DieSurface + ?Sized>(die: &mut S) {
    for group in face_groups() {
        die.append_face(&group);
    }
}
