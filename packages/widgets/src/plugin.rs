use std::rc::Rc;

use blossom_dom::{Document, ElementId, Selection};

/// A widget that attaches one instance of itself to each element.
///
/// Instances live in the element's [`DataCache`] under [`KEY`], so two
/// plugins sharing an element never step on each other as long as keys
/// stay namespaced ("blossom.progressbar" style).
///
/// [`DataCache`]: blossom_dom::DataCache
/// [`KEY`]: Plugin::KEY
pub trait Plugin: 'static {
    /// The namespaced cache key this plugin stores itself under.
    const KEY: &'static str;

    /// Construct the instance for a single element. Runs at most once
    /// per element over the element's lifetime.
    fn mount(id: ElementId) -> Self;
}

/// Attach `P` to every element of the selection that lacks one.
///
/// Elements already carrying an instance under [`Plugin::KEY`] are left
/// untouched; their cached instance keeps its identity. Stale handles
/// in the selection are skipped. The selection is handed back so
/// installs chain.
pub fn install<P: Plugin>(doc: &mut Document, selection: Selection) -> Selection {
    for id in &selection {
        let Some(data) = doc.data_mut(id) else {
            log::debug!("skipping stale element {id:?} while installing {:?}", P::KEY);
            continue;
        };
        data.get_or_insert_with(P::KEY, || {
            log::debug!("mounting {:?} on {id:?}", P::KEY);
            P::mount(id)
        });
    }
    selection
}

/// The cached instance of `P` on `id`, if one was installed.
pub fn installed<P: Plugin>(doc: &Document, id: ElementId) -> Option<Rc<P>> {
    doc.data(id)?.get(P::KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Marker {
        element: ElementId,
    }

    impl Plugin for Marker {
        const KEY: &'static str = "test.marker";

        fn mount(id: ElementId) -> Self {
            Self { element: id }
        }
    }

    #[test]
    fn install_skips_stale_handles() {
        let mut doc = Document::new();
        let live = doc.create_element("div");
        let dead = doc.create_element("div");
        let selection = doc.select("div");
        doc.remove(dead);

        let selection = install::<Marker>(&mut doc, selection);

        assert_eq!(selection.ids(), &[live, dead]);
        assert_eq!(installed::<Marker>(&doc, live).unwrap().element, live);
        assert!(installed::<Marker>(&doc, dead).is_none());
    }

    #[test]
    fn install_chains() {
        struct Other;
        impl Plugin for Other {
            const KEY: &'static str = "test.other";

            fn mount(_: ElementId) -> Self {
                Self
            }
        }

        let mut doc = Document::new();
        doc.create_element("div");
        let selection = doc.select("div");

        let selection = install::<Marker>(&mut doc, selection);
        let selection = install::<Other>(&mut doc, selection);
        let id = selection.ids()[0];

        assert!(installed::<Marker>(&doc, id).is_some());
        assert!(installed::<Other>(&doc, id).is_some());
    }
}
