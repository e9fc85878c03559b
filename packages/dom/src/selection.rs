use crate::ElementId;

/// An ordered collection of element handles.
///
/// Produced by [`Document::select`](crate::Document::select) and passed
/// around by value; cloning copies only ids, never element state. An
/// empty selection is an ordinary value and every operation over one is
/// a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(id: ElementId) -> Self {
        Self { ids: vec![id] }
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    pub fn push(&mut self, id: ElementId) {
        self.ids.push(id);
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<ElementId>> for Selection {
    fn from(ids: Vec<ElementId>) -> Self {
        Self { ids }
    }
}

impl FromIterator<ElementId> for Selection {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Selection {
    type Item = ElementId;
    type IntoIter = std::vec::IntoIter<ElementId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = ElementId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ElementId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().copied()
    }
}

#[test]
fn collects_in_order() {
    let sel: Selection = [ElementId(3), ElementId(1), ElementId(2)]
        .into_iter()
        .collect();

    assert_eq!(sel.len(), 3);
    assert_eq!(sel.ids(), &[ElementId(3), ElementId(1), ElementId(2)]);
    assert_eq!(sel.iter().collect::<Vec<_>>(), sel.ids());
}

#[test]
fn empty_is_ordinary() {
    let sel = Selection::new();
    assert!(sel.is_empty());
    assert_eq!(sel.into_iter().count(), 0);
}
