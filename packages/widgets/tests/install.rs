use std::rc::Rc;

use blossom_dom::{Document, Selection};
use blossom_widgets::{installed, Progressbar};
use pretty_assertions::assert_eq;

#[test]
fn first_attach_stores_one_instance() {
    let mut doc = Document::new();
    let e = doc.create_element("div");

    Progressbar::attach(&mut doc, Selection::single(e));

    let data = doc.data(e).unwrap();
    assert_eq!(data.len(), 1);
    assert!(data.contains("blossom.progressbar"));
    assert_eq!(installed::<Progressbar>(&doc, e).unwrap().element(), e);
}

#[test]
fn attach_is_idempotent() {
    let mut doc = Document::new();
    let e = doc.create_element("div");

    Progressbar::attach(&mut doc, Selection::single(e));
    let first = installed::<Progressbar>(&doc, e).unwrap();

    for _ in 0..5 {
        Progressbar::attach(&mut doc, Selection::single(e));
    }

    let after = installed::<Progressbar>(&doc, e).unwrap();
    assert!(Rc::ptr_eq(&first, &after));
    assert_eq!(doc.data(e).unwrap().len(), 1);
}

#[test]
fn each_element_gets_its_own_instance() {
    let mut doc = Document::new();
    let e1 = doc.create_element("div");
    let e2 = doc.create_element("div");
    let e3 = doc.create_element("div");

    let selection = doc.select("div");
    Progressbar::attach(&mut doc, selection);

    let w1 = installed::<Progressbar>(&doc, e1).unwrap();
    let w2 = installed::<Progressbar>(&doc, e2).unwrap();
    let w3 = installed::<Progressbar>(&doc, e3).unwrap();

    assert_eq!(w1.element(), e1);
    assert_eq!(w2.element(), e2);
    assert_eq!(w3.element(), e3);
    assert!(!Rc::ptr_eq(&w1, &w2));
    assert!(!Rc::ptr_eq(&w2, &w3));
}

#[test]
fn empty_selection_is_a_noop() {
    let mut doc = Document::new();
    let e = doc.create_element("div");

    let returned = Progressbar::attach(&mut doc, Selection::new());

    assert!(returned.is_empty());
    assert!(installed::<Progressbar>(&doc, e).is_none());
    assert!(doc.data(e).unwrap().is_empty());
}

#[test]
fn attach_does_not_disturb_other_cached_data() {
    let mut doc = Document::new();
    let e = doc.create_element("div");
    let note = doc.data_mut(e).unwrap().insert("app.note", String::from("keep me"));

    Progressbar::attach(&mut doc, Selection::single(e));

    let data = doc.data(e).unwrap();
    assert_eq!(data.len(), 2);
    assert!(Rc::ptr_eq(&note, &data.get::<String>("app.note").unwrap()));
}

#[test]
fn attach_returns_the_selection_for_chaining() {
    let mut doc = Document::new();
    doc.create_element("div");
    doc.create_element("div");

    let selection = doc.select("div");
    let returned = Progressbar::attach(&mut doc, selection.clone());
    assert_eq!(returned, selection);

    // chained call over the returned selection changes nothing
    let again = Progressbar::attach(&mut doc, returned);
    for id in &again {
        assert_eq!(installed::<Progressbar>(&doc, id).unwrap().element(), id);
    }
}
