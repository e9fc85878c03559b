use std::{any::Any, fmt, rc::Rc};

use rustc_hash::FxHashMap;

/// Arbitrary typed storage scoped to one element.
///
/// Slots are keyed by namespaced strings ("crate.widget" by
/// convention) so unrelated widgets sharing an element never collide.
/// Values are shared: the cache holds an `Rc`, and every read hands out
/// a clone of that same handle, so a caller can observe identity with
/// [`Rc::ptr_eq`].
#[derive(Default)]
pub struct DataCache {
    slots: FxHashMap<Box<str>, Rc<dyn Any>>,
}

impl DataCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing whatever was there, and
    /// return a handle to the stored instance.
    pub fn insert<T: 'static>(&mut self, key: &str, value: T) -> Rc<T> {
        let value = Rc::new(value);
        self.slots.insert(key.into(), value.clone() as Rc<dyn Any>);
        value
    }

    /// Read the slot for `key` as a `T`.
    ///
    /// Returns `None` when the slot is empty, and also when it holds a
    /// value of some other type.
    pub fn get<T: 'static>(&self, key: &str) -> Option<Rc<T>> {
        self.slots
            .get(key)
            .and_then(|slot| slot.clone().downcast::<T>().ok())
    }

    /// The value under `key`, constructing it on first access.
    ///
    /// `init` runs at most once per key: every later call returns a
    /// handle to the instance the first call stored. A slot occupied by
    /// a differently-typed value counts as absent and is replaced.
    pub fn get_or_insert_with<T: 'static>(
        &mut self,
        key: &str,
        init: impl FnOnce() -> T,
    ) -> Rc<T> {
        if let Some(existing) = self.get::<T>(key) {
            return existing;
        }
        if self.slots.contains_key(key) {
            log::warn!("cache slot {key:?} held a different type, replacing it");
        }
        self.insert(key, init())
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.slots.remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for DataCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.slots.keys()).finish()
    }
}

#[test]
fn get_or_insert_constructs_once() {
    let mut cache = DataCache::new();
    let mut built = 0;

    let first = cache.get_or_insert_with("ns.widget", || {
        built += 1;
        String::from("state")
    });
    let second = cache.get_or_insert_with("ns.widget", || {
        built += 1;
        String::from("other state")
    });

    assert_eq!(built, 1);
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(*second, "state");
}

#[test]
fn wrong_type_reads_as_absent() {
    let mut cache = DataCache::new();
    cache.insert("ns.widget", 7u32);

    assert!(cache.get::<String>("ns.widget").is_none());
    assert_eq!(*cache.get::<u32>("ns.widget").unwrap(), 7);

    let replaced = cache.get_or_insert_with("ns.widget", || String::from("new"));
    assert_eq!(*replaced, "new");
    assert!(cache.get::<u32>("ns.widget").is_none());
}

#[test]
fn keys_are_independent() {
    let mut cache = DataCache::new();
    cache.insert("a.widget", 1u32);
    cache.insert("b.widget", 2u32);

    assert_eq!(cache.len(), 2);
    assert!(cache.remove("a.widget"));
    assert!(!cache.remove("a.widget"));
    assert!(cache.contains("b.widget"));
}
