use std::collections::HashMap;

use tracing::debug;

use super::DataStore;

pub struct InMemoryStore<T> {
    inner: HashMap<String, T>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        InMemoryStore {
            inner: HashMap::new(),
        }
    }
}

impl<T> DataStore for InMemoryStore<T>
where
    T: Clone,
{
    type Stored = T;

    fn store(&mut self, object: T, key: &str) {
        if self.inner.insert(key.to_owned(), object).is_some() {
            debug!(key, "replaced stored object");
        }
    }

    fn fetch(&self, key: &str) -> Option<T> {
        self.inner.get(key).cloned()
    }
}
