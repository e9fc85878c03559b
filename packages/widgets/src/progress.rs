use blossom_dom::{Document, ElementId, Selection};

use crate::plugin::{install, Plugin};

/// The progress bar wrapper.
///
/// Holds nothing beyond the element it is attached to. Attaching is the
/// whole lifecycle: there is no update, teardown, or rendering step,
/// and the instance lives as long as its element's cache slot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progressbar {
    element: ElementId,
}

impl Progressbar {
    /// Attach a progress bar to every element of the selection that
    /// does not already have one.
    pub fn attach(doc: &mut Document, selection: Selection) -> Selection {
        install::<Self>(doc, selection)
    }

    /// The element this instance wraps.
    pub fn element(&self) -> ElementId {
        self.element
    }
}

impl Plugin for Progressbar {
    const KEY: &'static str = "blossom.progressbar";

    fn mount(id: ElementId) -> Self {
        Self { element: id }
    }
}
