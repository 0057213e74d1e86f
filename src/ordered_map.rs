use crate::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::linked_list::{LinkedList, NodeHandle};
use std::{
    borrow::Borrow,
    collections::{hash_map::RandomState, HashMap},
    fmt,
    hash::{BuildHasher, Hash},
    mem,
    ops::Index,
};

/// A hash map which remembers the order keys were first inserted in.
///
/// Lookups go through a [`HashMap`] from key to the handle of the node that
/// holds it; the nodes themselves are threaded into a doubly linked list,
/// oldest at the head and youngest at the tail. Insertion, lookup and removal
/// are O(1) on average, iteration is O(n).
///
/// Updating a key that is already present overwrites the value in place and
/// leaves its position alone:
///
/// ```
/// use ordered_dict::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("one", 1);
/// map.insert("two", 2);
/// map.insert("three", 3);
///
/// assert_eq!(Some(2), map.insert("two", 20));
/// assert_eq!(vec!["one", "two", "three"], map.key_list());
/// assert_eq!(Some(&20), map.get("two"));
/// assert_eq!(None, map.get("four"));
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, S = RandomState> {
    index: HashMap<K, NodeHandle, S>,
    chain: LinkedList<K, V>,
}

impl<K, V> OrderedMap<K, V, RandomState> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Makes a new map with room for `capacity` keys before either the index
    /// or the chain has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Makes a new map with a specified capacity and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        OrderedMap {
            index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            chain: LinkedList::with_capacity(capacity),
        }
    }

    /// The number of keys in the map.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The oldest entry, i.e. the head of the chain.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.chain
            .head()
            .and_then(|h| self.chain.get(h))
            .map(|n| (&n.key, &n.value))
    }

    /// The youngest entry, i.e. the tail of the chain.
    pub fn back(&self) -> Option<(&K, &V)> {
        self.chain
            .tail()
            .and_then(|h| self.chain.get(h))
            .map(|n| (&n.key, &n.value))
    }

    /// Keys in the order they were first inserted.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Values in the order their keys were first inserted.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Entries in the order their keys were first inserted.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.chain)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.chain)
    }

    /// An owned snapshot of the keys, oldest first. Later changes to the map
    /// don't show up in it.
    pub fn key_list(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Empties the map, keeping its allocations.
    pub fn clear(&mut self) {
        self.index.clear();
        self.chain.clear();
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Sets `k` to `v`. A new key is linked in at the tail and `None` comes
    /// back; an existing key keeps its position, has its value overwritten,
    /// and the value it held is returned.
    pub fn insert(&mut self, k: K, v: V) -> Option<V>
    where
        K: Clone,
    {
        if let Some(&handle) = self.index.get(&k) {
            // update in place, no relinking
            return Some(mem::replace(&mut self.chain[handle].value, v));
        }

        let handle = self.chain.push_back(k.clone(), v);
        self.index.insert(k, handle);

        #[cfg(test)]
        self.continuity_test();

        None
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(k)
    }

    /// Looks up the value at `k`. `None` means the key isn't there, which is
    /// never confused with a stored value.
    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key_value(k).map(|(_, v)| v)
    }

    pub fn get_key_value<Q>(&self, k: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = &self.chain[*self.index.get(k)?];
        Some((&node.key, &node.value))
    }

    /// Like [`get`](Self::get), but the value may be changed in place. The
    /// key's position is unaffected either way.
    pub fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(k)?;
        Some(&mut self.chain[handle].value)
    }

    /// Removes `k`, returning the value it held if it was there.
    pub fn remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(k).map(|(_, v)| v)
    }

    /// Removes `k`, returning the stored key and value if it was there. The
    /// neighbours either side are linked to each other, and head or tail move
    /// along if the entry sat at an end.
    pub fn remove_entry<Q>(&mut self, k: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.remove(k)?;
        let removed = self.chain.remove_node(handle);

        #[cfg(test)]
        {
            assert!(removed.is_some(), "index pointed at a vacant slot");
            self.continuity_test();
        }

        removed.map(|n| (n.key, n.value))
    }

    /// Walks the chain both ways and checks it against the index.
    #[cfg(test)]
    fn continuity_test(&self) {
        assert_eq!(self.index.len(), self.chain.len());
        assert_eq!(self.is_empty(), self.chain.head().is_none());
        assert_eq!(self.is_empty(), self.chain.tail().is_none());

        let mut count = 0;
        let mut prev = None;
        let mut cursor = self.chain.head();

        while let Some(handle) = cursor {
            let node = &self.chain[handle];
            assert_eq!(prev, node.prev);
            assert_eq!(Some(&handle), self.index.get(&node.key));

            count += 1;
            assert!(count <= self.len());

            prev = Some(handle);
            cursor = node.next;
        }

        assert_eq!(prev, self.chain.tail());
        assert_eq!(self.len(), count);
        count = 0;

        // iterate through the list in reverse and make sure it matches
        // the number of elements in the map
        for _item in self.iter().rev() {
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(self.len(), count);
    }
}

impl<K, V, S> Default for OrderedMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Eq,
    V: Eq,
{
}

impl<K, Q, V, S> Index<&Q> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Panics if the key isn't present.
    fn index(&self, k: &Q) -> &V {
        match self.get(k) {
            Some(v) => v,
            None => panic!("key not present in OrderedMap"),
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
