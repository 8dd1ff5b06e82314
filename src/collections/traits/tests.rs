#![cfg(test)]

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use super::*;
use crate::collections::Set;

#[test]
fn test_sequence_entries() {
    let values = vec!["a", "b", "a"];

    assert_eq!(values.count(), 3, "Duplicates should be counted.");
    assert_eq!(
        values.entries().collect::<Vec<_>>(),
        [(0, &"a"), (1, &"b"), (2, &"a")]
    );
    assert!(values.contains_value("b"));
    assert!(!values.contains_value("c"));
    assert!(["x"].contains_value(&"x"), "Arrays should be searchable too.");
}

#[test]
fn test_sequence_membership_uses_keys() {
    let numbers = [1, 2, 3];
    assert!(numbers.contains_value(&2.0), "Membership should compare keys, not types.");
    assert!(!numbers.contains_value("2"));

    let maybe = [Some("x"), None];
    assert!(maybe.contains_value(&None::<&str>));
    assert!(!maybe.contains_value(&Some("null")));
}

#[test]
fn test_map_values_only() {
    let map = BTreeMap::from([("k1", 1), ("k2", 4)]);

    assert_eq!(map.count(), 2);
    assert!(map.contains_value(&4));
    assert!(!map.contains_value("k1"), "Map keys shouldn't take part in membership.");
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 4]);

    let map = HashMap::from([("a", 1)]);
    assert_eq!(map.entries().collect::<Vec<_>>(), [(&"a", &1)]);

    let map = IndexMap::from([("z", 26), ("a", 1)]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [26, 1]);
}

#[test]
fn test_filter_entries() {
    let values = [1, 2, 3, 4];
    assert_eq!(values.filter_entries(|v, _| v % 2 == 0), [2, 4]);
    assert_eq!(
        values.filter_entries(|_, i| i < 2),
        [1, 2],
        "Sequences should pass indices to the predicate."
    );

    let map = IndexMap::from([("a", 1), ("b", 2), ("c", 3)]);
    let filtered = map.filter_entries(|v, k| *v > 1 && *k != "c");
    assert_eq!(filtered, IndexMap::from([("b", 2)]));

    let set = Set::<i32>::try_from([3, 1, 2]).unwrap();
    let filtered = set.filter_entries(|v, ()| *v != 1);
    assert_eq!(filtered.get_values(), [3, 2], "Filtering a Set should keep its order.");
}

#[test]
fn test_set_collection() {
    let set = Set::<&str>::try_from(["a", "b"]).unwrap();

    assert_eq!(set.count(), 2);
    assert_eq!(set.entries().collect::<Vec<_>>(), [((), &"a"), ((), &"b")]);
    assert!(Collection::contains_value(&set, "a"));
}
