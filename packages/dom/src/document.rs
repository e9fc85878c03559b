use slab::Slab;

use crate::{cache::DataCache, error::DomError, selection::Selection};

/// A handle to an element in a [`Document`].
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct ElementId(pub usize);

#[derive(Debug)]
struct ElementNode {
    tag: Box<str>,
    serial: u64,
    data: DataCache,
}

/// A flat arena of elements.
///
/// Each element carries a tag name and its own [`DataCache`]. The
/// document owns the cache: removing an element drops everything stored
/// on it, though callers holding a shared handle to a cached value keep
/// that value alive on their own.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Slab<ElementNode>,
    next_serial: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let serial = self.next_serial;
        self.next_serial += 1;
        let id = ElementId(self.nodes.insert(ElementNode {
            tag: tag.into(),
            serial,
            data: DataCache::new(),
        }));
        log::trace!("created element {id:?} <{tag}>");
        id
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains(id.0)
    }

    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.nodes.get(id.0).map(|node| &*node.tag)
    }

    /// Remove an element, dropping its data cache with it.
    ///
    /// Returns false if the handle was already dead.
    pub fn remove(&mut self, id: ElementId) -> bool {
        match self.nodes.try_remove(id.0) {
            Some(_) => {
                log::trace!("removed element {id:?}");
                true
            }
            None => false,
        }
    }

    pub fn data(&self, id: ElementId) -> Option<&DataCache> {
        self.nodes.get(id.0).map(|node| &node.data)
    }

    pub fn data_mut(&mut self, id: ElementId) -> Option<&mut DataCache> {
        self.nodes.get_mut(id.0).map(|node| &mut node.data)
    }

    /// Like [`data_mut`](Self::data_mut), for callers that treat a dead
    /// handle as a bug rather than something to skip.
    pub fn try_data_mut(&mut self, id: ElementId) -> Result<&mut DataCache, DomError> {
        self.nodes
            .get_mut(id.0)
            .map(|node| &mut node.data)
            .ok_or(DomError::StaleElement(id))
    }

    /// Every live element with this tag, in creation order. Slab slots
    /// get reused after removals, so ordering goes by each node's
    /// creation serial rather than its slot index.
    pub fn select(&self, tag: &str) -> Selection {
        let mut matches: Vec<_> = self
            .nodes
            .iter()
            .filter(|(_, node)| &*node.tag == tag)
            .map(|(id, node)| (node.serial, ElementId(id)))
            .collect();
        matches.sort_unstable_by_key(|(serial, _)| *serial);
        matches.into_iter().map(|(_, id)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[test]
fn create_and_select() {
    let mut doc = Document::new();
    let a = doc.create_element("div");
    let b = doc.create_element("span");
    let c = doc.create_element("div");

    assert_eq!(doc.len(), 3);
    assert_eq!(doc.tag(a), Some("div"));
    assert_eq!(doc.tag(b), Some("span"));
    assert_eq!(doc.select("div").ids(), &[a, c]);
    assert_eq!(doc.select("table").ids(), &[]);
}

#[test]
fn select_keeps_creation_order_across_slot_reuse() {
    let mut doc = Document::new();
    let a = doc.create_element("div");
    let b = doc.create_element("div");
    doc.remove(a);
    // lands in a's vacated slot, but was created after b
    let c = doc.create_element("div");

    assert_eq!(doc.select("div").ids(), &[b, c]);
}

#[test]
fn remove_drops_data() {
    let mut doc = Document::new();
    let a = doc.create_element("div");
    doc.data_mut(a).unwrap().insert("k", 1u32);

    assert!(doc.remove(a));
    assert!(!doc.remove(a));
    assert!(!doc.contains(a));
    assert!(doc.data(a).is_none());
    assert_eq!(doc.try_data_mut(a).unwrap_err(), DomError::StaleElement(a));
}
