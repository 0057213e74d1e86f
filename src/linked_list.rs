//! A doubly linked list that flattens all its nodes onto a Vec for storage,
//! gaining data locality and O(1) random access by handle. This is the chain
//! that threads an [`OrderedMap`](crate::OrderedMap) in insertion order.

use log::trace;
use std::ops::{Index, IndexMut};

/// The index of a node in the linked list's storage vec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeHandle(pub(crate) usize);

/// A node that lives in a linked list. A node carries the same key for its
/// whole life; only the value may change.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,

    pub(crate) value: V,

    /// The node inserted just before this one, if any.
    pub(crate) prev: Option<NodeHandle>,

    /// The node inserted just after this one, if any.
    pub(crate) next: Option<NodeHandle>,
}

/// A single contiguous Vec of nodes, which are addressed by their position in
/// the Vec. Slots vacated by removal go on a freelist and are reused by the
/// next push, so churn doesn't grow the storage. There is no compaction.
///
/// Handles are stable for as long as the node they point at is in the list,
/// which is what lets the map's index point straight at a node.
#[derive(Clone, Debug)]
pub(crate) struct LinkedList<K, V> {
    /// The nodes in the list. `None` marks a slot sitting on the freelist.
    store: Vec<Option<Node<K, V>>>,

    /// Slots in the list which aren't in use anymore. These will be reused.
    free: Vec<NodeHandle>,

    /// The oldest node in the list.
    head: Option<NodeHandle>,

    /// The youngest node in the list.
    tail: Option<NodeHandle>,
}

impl<K, V> LinkedList<K, V> {
    /// Creates a new linked list with a specific capacity.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// The length of this linked list.
    pub(crate) fn len(&self) -> usize {
        self.store.len() - self.free.len()
    }

    /// Slots allocated so far, live or freelisted.
    #[cfg(test)]
    pub(crate) fn store_len(&self) -> usize {
        self.store.len()
    }

    pub(crate) fn head(&self) -> Option<NodeHandle> {
        self.head
    }

    pub(crate) fn tail(&self) -> Option<NodeHandle> {
        self.tail
    }

    /// Gets a node from the list, if the handle points at a live one.
    pub(crate) fn get(&self, node: NodeHandle) -> Option<&Node<K, V>> {
        self.store.get(node.0).and_then(Option::as_ref)
    }

    /// Every storage slot in order of position, vacant ones included. Used to
    /// hand out disjoint mutable borrows of the nodes.
    pub(crate) fn slots_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut Option<Node<K, V>>> {
        self.store.iter_mut()
    }

    /// Links a new node onto the back of the list and returns its handle.
    pub(crate) fn push_back(&mut self, key: K, value: V) -> NodeHandle {
        // use the first available location in the storage vec, or infer what
        // the next location will be on push.
        let idx = self
            .free
            .pop()
            .unwrap_or_else(|| NodeHandle(self.store.len()));

        let n = Node {
            key,
            value,
            prev: self.tail,
            next: None,
        };

        match self.tail {
            Some(tail) => self[tail].next = Some(idx),
            None => self.head = Some(idx),
        }

        self.tail = Some(idx);

        if self.store.len() <= idx.0 {
            self.store.push(Some(n));
        } else {
            self.store[idx.0] = Some(n);
        }

        trace!("linked node {} at tail, {} live", idx.0, self.len());

        idx
    }

    /// Unlinks an arbitrary node from the list and hands it back. Returns
    /// `None` if the handle points at a vacant slot.
    pub(crate) fn remove_node(
        &mut self,
        node: NodeHandle,
    ) -> Option<Node<K, V>> {
        let removed = self.store.get_mut(node.0)?.take()?;

        // link prev to next and next to prev so the node doesn't exist in the
        // chain anymore, moving head and tail if it sat at either end
        match removed.prev {
            Some(prev) => self[prev].next = removed.next,
            None => self.head = removed.next,
        }

        match removed.next {
            Some(next) => self[next].prev = removed.prev,
            None => self.tail = removed.prev,
        }

        self.free.push(node);

        trace!("unlinked node {}, {} live", node.0, self.len());

        Some(removed)
    }

    /// Pops the oldest node off the list if it exists.
    pub(crate) fn pop_front(&mut self) -> Option<Node<K, V>> {
        let head = self.head?;
        self.remove_node(head)
    }

    /// Pops the youngest node off the list if it exists.
    pub(crate) fn pop_back(&mut self) -> Option<Node<K, V>> {
        let tail = self.tail?;
        self.remove_node(tail)
    }

    /// Clears this linked list. Does not free the underlying buffers.
    pub(crate) fn clear(&mut self) {
        self.store.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;

        trace!("cleared linked list");
    }
}

impl<K, V> Index<NodeHandle> for LinkedList<K, V> {
    type Output = Node<K, V>;

    fn index(&self, node: NodeHandle) -> &Self::Output {
        match &self.store[node.0] {
            Some(n) => n,
            None => panic!("node handle {} points at a vacant slot", node.0),
        }
    }
}

impl<K, V> IndexMut<NodeHandle> for LinkedList<K, V> {
    fn index_mut(&mut self, node: NodeHandle) -> &mut Self::Output {
        match &mut self.store[node.0] {
            Some(n) => n,
            None => panic!("node handle {} points at a vacant slot", node.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkedList, NodeHandle};

    fn forward(list: &LinkedList<&'static str, u32>) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut cursor = list.head();
        while let Some(h) = cursor {
            out.push(list[h].key);
            cursor = list[h].next;
        }
        out
    }

    fn backward(list: &LinkedList<&'static str, u32>) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut cursor = list.tail();
        while let Some(h) = cursor {
            out.push(list[h].key);
            cursor = list[h].prev;
        }
        out
    }

    #[test]
    fn push_links_at_tail() {
        let mut list = LinkedList::with_capacity(3);
        assert_eq!(None, list.head());
        assert_eq!(None, list.tail());

        let a = list.push_back("a", 1);
        assert_eq!(Some(a), list.head());
        assert_eq!(Some(a), list.tail());

        list.push_back("b", 2);
        let c = list.push_back("c", 3);

        assert_eq!(3, list.len());
        assert_eq!(Some(c), list.tail());
        assert_eq!(vec!["a", "b", "c"], forward(&list));
        assert_eq!(vec!["c", "b", "a"], backward(&list));
        assert_eq!(None, list[a].prev);
        assert_eq!(None, list[c].next);
    }

    #[test]
    fn remove_middle_head_and_tail() {
        let mut list = LinkedList::with_capacity(3);
        let a = list.push_back("a", 1);
        let b = list.push_back("b", 2);
        let c = list.push_back("c", 3);

        assert_eq!(Some(2), list.remove_node(b).map(|n| n.value));
        assert_eq!(vec!["a", "c"], forward(&list));
        assert_eq!(vec!["c", "a"], backward(&list));

        assert_eq!(Some("a"), list.remove_node(a).map(|n| n.key));
        assert_eq!(Some(c), list.head());
        assert_eq!(Some(c), list.tail());

        assert!(list.remove_node(c).is_some());
        assert_eq!(0, list.len());
        assert_eq!(None, list.head());
        assert_eq!(None, list.tail());
    }

    #[test]
    fn removing_a_vacant_slot_is_a_no_op() {
        let mut list = LinkedList::with_capacity(1);
        let a = list.push_back("a", 1);

        assert!(list.remove_node(a).is_some());
        assert!(list.remove_node(a).is_none());
        assert!(list.remove_node(NodeHandle(42)).is_none());
        assert_eq!(0, list.len());
    }

    #[test]
    fn freelisted_slots_are_reused() {
        let mut list = LinkedList::with_capacity(2);
        list.push_back("a", 1);
        let b = list.push_back("b", 2);

        list.remove_node(b);
        let d = list.push_back("d", 4);

        // "d" took over the slot "b" left behind
        assert_eq!(b, d);
        assert_eq!(2, list.store.len());
        assert_eq!(vec!["a", "d"], forward(&list));
    }

    #[test]
    fn pop_from_both_ends() {
        let mut list = LinkedList::with_capacity(3);
        list.push_back("a", 1);
        list.push_back("b", 2);
        list.push_back("c", 3);

        assert_eq!(Some("a"), list.pop_front().map(|n| n.key));
        assert_eq!(Some("c"), list.pop_back().map(|n| n.key));
        assert_eq!(Some("b"), list.pop_back().map(|n| n.key));
        assert!(list.pop_front().is_none());
        assert!(list.pop_back().is_none());
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut list = LinkedList::with_capacity(2);
        list.push_back("a", 1);
        let b = list.push_back("b", 2);
        list.remove_node(b);

        list.clear();

        assert_eq!(0, list.len());
        assert_eq!(None, list.head());
        assert_eq!(None, list.tail());
        assert!(list.get(b).is_none());
    }

    #[test]
    #[should_panic(expected = "vacant slot")]
    fn indexing_a_vacant_slot_panics() {
        let mut list = LinkedList::with_capacity(1);
        let a = list.push_back("a", 1);
        list.remove_node(a);
        let _ = &list[a];
    }
}
