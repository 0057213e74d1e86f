//! Scenario tests for OrderedMap.

use ordered_dict::OrderedMap;
use rstest::rstest;

fn abc() -> OrderedMap<&'static str, i32> {
    vec![("a", 1), ("b", 2), ("c", 3)].into_iter().collect()
}

// =============================================================================
// Delete
// =============================================================================

#[rstest]
#[case::middle("b", &["a", "c"])]
#[case::head("a", &["b", "c"])]
#[case::tail("c", &["a", "b"])]
#[case::absent("z", &["a", "b", "c"])]
fn test_delete_relinks_neighbours(#[case] key: &str, #[case] expected: &[&str]) {
    let mut map = abc();
    let before = map.len();

    let removed = map.remove(key);

    assert_eq!(removed.is_some(), map.len() < before);
    assert_eq!(expected, map.key_list().as_slice());

    let backward: Vec<_> = map.keys().rev().copied().collect();
    let mut expected_backward = expected.to_vec();
    expected_backward.reverse();
    assert_eq!(expected_backward, backward);
}

#[rstest]
fn test_delete_middle_then_both_ends() {
    let mut map = abc();

    assert_eq!(Some(2), map.remove("b"));
    assert_eq!(vec!["a", "c"], map.key_list());

    assert_eq!(Some(1), map.remove("a"));
    assert_eq!(vec!["c"], map.key_list());
    assert_eq!(Some((&"c", &3)), map.front());
    assert_eq!(Some((&"c", &3)), map.back());

    assert_eq!(Some(3), map.remove("c"));
    assert!(map.key_list().is_empty());
    assert_eq!(None, map.front());
    assert_eq!(None, map.back());
}

#[rstest]
fn test_reinsertion_after_delete_goes_to_tail() {
    let mut map = abc();

    map.remove("a");
    map.insert("a", 100);

    assert_eq!(vec!["b", "c", "a"], map.key_list());
    assert_eq!(Some(&100), map.get("a"));
}

// =============================================================================
// Update in place
// =============================================================================

#[rstest]
#[case::head("a")]
#[case::middle("b")]
#[case::tail("c")]
fn test_update_keeps_position(#[case] key: &'static str) {
    let mut map = abc();
    let order = map.key_list();
    let old = *map.get(key).unwrap();

    assert_eq!(Some(old), map.insert(key, -1));

    assert_eq!(order, map.key_list());
    assert_eq!(Some(&-1), map.get(key));
}

#[rstest]
fn test_update_matches_single_insert() {
    let mut twice = OrderedMap::new();
    twice.insert("x", 0);
    twice.insert("k", 1);
    twice.insert("y", 0);
    twice.insert("k", 2);

    let mut once = OrderedMap::new();
    once.insert("x", 0);
    once.insert("k", 2);
    once.insert("y", 0);

    assert_eq!(once, twice);
}

// =============================================================================
// Absence
// =============================================================================

#[rstest]
#[case::zero(0)]
#[case::negative(-7)]
fn test_absent_is_distinguishable_from_stored(#[case] stored: i32) {
    let mut map = OrderedMap::new();
    map.insert("present".to_owned(), stored);

    assert_eq!(Some(&stored), map.get("present"));
    assert_eq!(None, map.get("missing"));
}

#[rstest]
fn test_empty_string_and_empty_value() {
    let mut map: OrderedMap<String, String> = OrderedMap::new();
    map.insert(String::new(), String::new());

    assert_eq!(Some(&String::new()), map.get(""));
    assert_eq!(None, map.get(" "));
}

// =============================================================================
// Values, items and owned iteration
// =============================================================================

#[rstest]
fn test_values_and_items_follow_key_order() {
    let mut map = abc();
    map.insert("b", 20);

    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(vec![1, 20, 3], values);

    for v in map.values_mut() {
        *v += 1;
    }

    let items: Vec<_> = map.into_iter().collect();
    assert_eq!(vec![("a", 2), ("b", 21), ("c", 4)], items);
}

#[rstest]
fn test_with_hasher() {
    use std::collections::hash_map::RandomState;

    let mut map = OrderedMap::with_capacity_and_hasher(2, RandomState::new());
    map.insert(2u8, "two");
    map.insert(1u8, "one");

    assert_eq!(vec![2, 1], map.key_list());
    assert_eq!("one", map[&1u8]);
}
