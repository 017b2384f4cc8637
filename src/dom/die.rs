//! `DieSurface` over a DOM element's inline style and children.

use dice::layout::FaceGroup;
use dice::{DieSurface, RotationTarget, Transition};

/// A die element on the page.
pub struct HtmlDie {
    element: web_sys::HtmlElement,
    document: web_sys::Document,
}

impl HtmlDie {
    #[must_use]
    pub fn new(element: web_sys::HtmlElement, document: web_sys::Document) -> Self {
        Self { element, document }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(property, value) {
            log::warn!("[dice] failed to set {property} on #{}: {e:?}", self.element.id());
        }
    }

    fn div(&self, class_name: &str) -> Option<web_sys::Element> {
        match self.document.create_element("div") {
            Ok(el) => {
                el.set_class_name(class_name);
                Some(el)
            }
            Err(e) => {
                log::warn!("[fill] failed to create {class_name}: {e:?}");
                None
            }
        }
    }
}

impl DieSurface for HtmlDie {
    fn set_orientation(&mut self, target: RotationTarget) {
        self.set_style("transform", &target.to_css());
    }

    fn set_transition(&mut self, transition: Transition) {
        self.set_style("transition", &transition.to_css());
    }

    fn disable_animation(&mut self) {
        self.set_style("animation", "none");
    }

    fn append_face(&mut self, group: &FaceGroup) {
        let Some(face) = self.div(&group.class_name()) else {
            return;
        };
        for pip in group.pip_class_names() {
            if let Some(dot) = self.div(&pip) {
                if let Err(e) = face.append_child(&dot) {
                    log::warn!("[fill] failed to append {pip}: {e:?}");
                }
            }
        }
        if let Err(e) = self.element.append_child(&face) {
            log::warn!("[fill] failed to append {}: {e:?}", group.class_name());
        }
    }
}
