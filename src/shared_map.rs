use parking_lot::RwLock;
use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    sync::Arc,
};

use crate::ordered_map::OrderedMap;

/// Wrapper for an OrderedMap which is shareable across thread boundaries.
///
/// Lookups take the read lock, so any number of readers can run at once;
/// insertion, removal and clearing take the write lock. Values are cloned on
/// the way out to keep lock hold times short.
pub struct SharedOrderedMap<K, V, S = RandomState>(
    Arc<RwLock<OrderedMap<K, V, S>>>,
);

impl<K, V> SharedOrderedMap<K, V, RandomState>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::with_map(OrderedMap::new())
    }
}

impl<K, V, S> SharedOrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Wraps a map into a shared accessor, making it safe to move across
    /// thread boundaries. Enforces an additional constraint of Clone on
    /// values.
    pub fn with_map(map: OrderedMap<K, V, S>) -> Self {
        Self(Arc::from(RwLock::from(map)))
    }

    /// Sets a key, returning the value it replaced.
    pub fn insert(&self, k: K, v: V) -> Option<V> {
        self.0.write().insert(k, v)
    }

    /// Get a clone of the value at a key.
    pub fn get<Q>(&self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.read().get(k).cloned()
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.read().contains_key(k)
    }

    /// Remove a key, returning the removed value if it existed.
    pub fn remove<Q>(&self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.write().remove(k)
    }

    /// A snapshot of the keys in insertion order.
    pub fn keys(&self) -> Vec<K> {
        self.0.read().key_list()
    }

    /// A snapshot of every entry in insertion order.
    pub fn entries(&self) -> Vec<(K, V)> {
        self.0
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn clear(&self) {
        self.0.write().clear()
    }

    /// The number of keys in the map at present.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

impl<K, V, S> Clone for SharedOrderedMap<K, V, S> {
    fn clone(&self) -> Self {
        SharedOrderedMap(self.0.clone())
    }
}

impl<K, V, S> Default for SharedOrderedMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        SharedOrderedMap(Arc::new(RwLock::new(OrderedMap::default())))
    }
}
