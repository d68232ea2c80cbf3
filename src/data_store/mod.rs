//! Type erasure over a trait with an associated type.
//!
//! Two [DataStore]s with the same `Stored` type are still different types, so
//! they can't share a collection. [AnyDataStore] binds the two operations of
//! one store into closures at construction. After that its type only mentions
//! the stored type `T`.

use std::{cell::RefCell, rc::Rc};

pub mod discarding;
pub mod memory;

pub trait DataStore {
    type Stored;

    /// Put `object` under `key`, replacing whatever was there.
    fn store(&mut self, object: Self::Stored, key: &str);

    /// Get the object stored under `key`, if present
    fn fetch(&self, key: &str) -> Option<Self::Stored>;
}

pub struct AnyDataStore<T> {
    store_object: Box<dyn FnMut(T, &str)>,
    fetch_object: Box<dyn Fn(&str) -> Option<T>>,
}

impl<T> AnyDataStore<T> {
    pub fn new<S>(store: S) -> Self
    where
        S: DataStore<Stored = T> + 'static,
        T: 'static,
    {
        // both closures need the same store, one of them mutably
        let shared = Rc::new(RefCell::new(store));
        let writer = Rc::clone(&shared);
        Self {
            store_object: Box::new(move |object: T, key: &str| {
                writer.borrow_mut().store(object, key)
            }),
            fetch_object: Box::new(move |key: &str| shared.borrow().fetch(key)),
        }
    }
}

impl<T> DataStore for AnyDataStore<T> {
    type Stored = T;

    fn store(&mut self, object: T, key: &str) {
        crate::forward_log!("AnyDataStore", "store", key);
        (self.store_object)(object, key)
    }

    fn fetch(&self, key: &str) -> Option<T> {
        crate::forward_log!("AnyDataStore", "fetch", key);
        (self.fetch_object)(key)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use url::Url;

    use super::discarding::DiscardingStore;
    use super::memory::InMemoryStore;
    use super::{AnyDataStore, DataStore};

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn fetch_returns_what_was_stored() {
        let mut store = AnyDataStore::new(InMemoryStore::new());
        store.store(url("https://www.rust-lang.org/"), "home");
        assert_eq!(store.fetch("home"), Some(url("https://www.rust-lang.org/")));
    }

    #[test]
    fn second_store_overwrites_first() {
        let mut store = AnyDataStore::new(InMemoryStore::new());
        store.store(url("https://a.example/"), "k");
        store.store(url("https://b.example/"), "k");
        assert_eq!(store.fetch("k"), Some(url("https://b.example/")));
    }

    #[test]
    fn unknown_key_is_absent() {
        let store: AnyDataStore<Url> = AnyDataStore::new(InMemoryStore::new());
        assert_eq!(store.fetch("never stored"), None);
    }

    #[test]
    fn discarding_store_never_returns_anything() {
        let mut store = AnyDataStore::new(DiscardingStore::new());
        store.store(url("https://docs.rs/"), "docs");
        assert_eq!(store.fetch("docs"), None);
    }

    #[test]
    fn mixed_stores_are_used_uniformly() {
        let mut stores: Vec<AnyDataStore<Url>> = vec![
            AnyDataStore::new(InMemoryStore::new()),
            AnyDataStore::new(DiscardingStore::new()),
        ];
        for store in stores.iter_mut() {
            store.store(url("https://crates.io/"), "crates");
        }
        let fetched: Vec<_> = stores.iter().map(|store| store.fetch("crates")).collect();
        assert_eq!(fetched, vec![Some(url("https://crates.io/")), None]);
    }

    #[test]
    fn wrappers_do_not_share_state() {
        let mut first = AnyDataStore::new(InMemoryStore::new());
        let second: AnyDataStore<u32> = AnyDataStore::new(InMemoryStore::new());
        first.store(1, "one");
        assert_eq!(first.fetch("one"), Some(1));
        assert_eq!(second.fetch("one"), None);
    }

    proptest! {
        #[test]
        fn round_trip(key in ".*", value in any::<i64>()) {
            let mut store = AnyDataStore::new(InMemoryStore::new());
            store.store(value, &key);
            prop_assert_eq!(store.fetch(&key), Some(value));
        }

        #[test]
        fn last_write_wins(key in "[a-z]{1,8}", first in any::<i64>(), second in any::<i64>()) {
            let mut store = AnyDataStore::new(InMemoryStore::new());
            store.store(first, &key);
            store.store(second, &key);
            prop_assert_eq!(store.fetch(&key), Some(second));
        }

        #[test]
        fn discarded_values_stay_absent(key in ".*", value in any::<i64>()) {
            let mut store = AnyDataStore::new(DiscardingStore::new());
            store.store(value, &key);
            prop_assert_eq!(store.fetch(&key), None);
        }
    }
}
