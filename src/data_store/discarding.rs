use std::marker::PhantomData;

use tracing::trace;

use super::DataStore;

/// Accepts everything and keeps nothing. Every fetch misses.
pub struct DiscardingStore<T> {
    _stored: PhantomData<fn() -> T>,
}

impl<T> DiscardingStore<T> {
    pub fn new() -> Self {
        Self {
            _stored: PhantomData,
        }
    }
}

impl<T> DataStore for DiscardingStore<T> {
    type Stored = T;

    fn store(&mut self, _object: T, key: &str) {
        trace!(key, "dropping object");
    }

    fn fetch(&self, _key: &str) -> Option<T> {
        None
    }
}
