//! Iterators over an [`OrderedMap`](crate::OrderedMap). All of them walk the
//! chain from head to tail (or tail to head when reversed), so they yield
//! entries in first-insertion order.

use std::iter::FusedIterator;

use crate::linked_list::{LinkedList, Node, NodeHandle};

/// Borrowing iterator over `(&K, &V)` pairs.
pub struct Iter<'a, K, V> {
    chain: &'a LinkedList<K, V>,
    front: Option<NodeHandle>,
    back: Option<NodeHandle>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(chain: &'a LinkedList<K, V>) -> Self {
        Iter {
            chain,
            front: chain.head(),
            back: chain.tail(),
            remaining: chain.len(),
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            chain: self.chain,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let chain: &'a LinkedList<K, V> = self.chain;
        let node = &chain[self.front?];
        self.front = node.next;
        self.remaining -= 1;

        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let chain: &'a LinkedList<K, V> = self.chain;
        let node = &chain[self.back?];
        self.back = node.prev;
        self.remaining -= 1;

        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// Borrowing iterator over `(&K, &mut V)` pairs.
///
/// The chain is threaded through a Vec, so every live slot is borrowed up
/// front (each one disjointly) and the walk then takes them out one by one.
pub struct IterMut<'a, K, V> {
    slots: Vec<Option<&'a mut Node<K, V>>>,
    front: Option<NodeHandle>,
    back: Option<NodeHandle>,
    remaining: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(chain: &'a mut LinkedList<K, V>) -> Self {
        let front = chain.head();
        let back = chain.tail();
        let remaining = chain.len();

        IterMut {
            slots: chain.slots_mut().map(Option::as_mut).collect(),
            front,
            back,
            remaining,
        }
    }

    fn take(&mut self, handle: NodeHandle) -> Option<&'a mut Node<K, V>> {
        self.slots.get_mut(handle.0)?.take()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.front?;
        let Node {
            key, value, next, ..
        } = self.take(handle)?;
        self.front = *next;
        self.remaining -= 1;

        let key: &'a K = key;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.back?;
        let Node {
            key, value, prev, ..
        } = self.take(handle)?;
        self.back = *prev;
        self.remaining -= 1;

        let key: &'a K = key;
        Some((key, value))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// Owning iterator over `(K, V)` pairs. Drains the chain from the front.
pub struct IntoIter<K, V> {
    chain: LinkedList<K, V>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(chain: LinkedList<K, V>) -> Self {
        IntoIter { chain }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front().map(|n| (n.key, n.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chain.pop_back().map(|n| (n.key, n.value))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

macro_rules! projection {
    ($(#[$meta:meta])* $name:ident<$a:lifetime>, $inner:ident, $item:ty, |$k:ident, $v:ident| $proj:expr) => {
        $(#[$meta])*
        pub struct $name<$a, K, V>(pub(crate) $inner<$a, K, V>);

        impl<$a, K, V> Iterator for $name<$a, K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.0.next().map(|($k, $v)| $proj)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
        }

        impl<$a, K, V> DoubleEndedIterator for $name<$a, K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.0.next_back().map(|($k, $v)| $proj)
            }
        }

        impl<$a, K, V> ExactSizeIterator for $name<$a, K, V> {}

        impl<$a, K, V> FusedIterator for $name<$a, K, V> {}
    };
}

projection!(
    /// Iterator over the keys of a map, oldest first.
    Keys<'a>, Iter, &'a K, |k, _v| k
);

projection!(
    /// Iterator over the values of a map, in the order their keys were
    /// first inserted.
    Values<'a>, Iter, &'a V, |_k, v| v
);

projection!(
    /// Mutable iterator over the values of a map.
    ValuesMut<'a>, IterMut, &'a mut V, |_k, v| v
);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Keys(self.0.clone())
    }
}

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self {
        Values(self.0.clone())
    }
}
