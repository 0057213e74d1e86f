//! An insertion-ordered dictionary: a hash map whose keys remember the order
//! they were first inserted in.
//!
//! [`OrderedMap`] pairs a `HashMap` index with a doubly linked list of nodes
//! laid out in a single Vec. Lookups, inserts and removals are O(1) on
//! average and iteration walks the list, oldest key first. Re-inserting a key
//! overwrites its value without moving it.
//!
//! With the `shared_map` feature (on by default) [`SharedOrderedMap`] wraps a
//! map in a reader-writer lock so it can be handed between threads.
//!
//! ```
//! use ordered_dict::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("one", 1);
//! map.insert("two", 2);
//! map.insert("three", 3);
//!
//! for (key, value) in &map {
//!     println!("{}: {}", key, value);
//! }
//! ```

pub mod flatten;
pub mod iter;
mod linked_list;
mod ordered_map;
#[cfg(feature = "shared_map")]
mod shared_map;

pub use ordered_map::OrderedMap;
#[cfg(feature = "shared_map")]
pub use shared_map::SharedOrderedMap;

#[cfg(test)]
mod tests {
    use super::OrderedMap;

    #[test]
    fn readme_snippet() {
        let mut map = OrderedMap::new();

        map.insert("one".to_owned(), 1);
        map.insert("two".to_owned(), 2);
        map.insert("three".to_owned(), 3);

        assert_eq!(vec!["one", "two", "three"], map.key_list());
        assert_eq!(Some(&2), map.get("two"));

        assert_eq!(Some(2), map.insert("two".to_owned(), 20));
        assert_eq!(vec!["one", "two", "three"], map.key_list());
        assert_eq!(Some(&20), map.get("two"));
    }

    #[test]
    fn interleaved_gets_do_not_reorder() {
        let mut map = OrderedMap::new();

        for (i, key) in ["k1", "k2", "k3", "k4"].iter().enumerate() {
            map.insert(*key, i);
            assert_eq!(Some(&0), map.get("k1"));
            assert_eq!(None, map.get("k5"));
        }

        assert_eq!(vec!["k1", "k2", "k3", "k4"], map.key_list());
    }
}
