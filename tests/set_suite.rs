//! Behavioural tests for `Set` with dynamically typed elements.
//!
//! Most checks run three times: with numbers, with strings and with objects wrapping strings, since
//! primitives are compared by value and objects by identity.

#![cfg(all(feature = "structs", feature = "value"))]

use std::collections::HashMap;

use keyed_collections::collections::value::Value;
use keyed_collections::structs;
use keyed_collections::{InvalidElement, Set};

fn set_of(values: &[Value]) -> Set<Value> {
    Set::from_collection(values).expect("test values are never undefined")
}

fn strings() -> [Value; 4] {
    ["a", "b", "c", "d"].map(Value::from)
}

fn numbers() -> [Value; 4] {
    [1_i32, 2, 3, 4].map(Value::from)
}

fn objects() -> [Value; 4] {
    ["a", "b", "c", "d"].map(Value::object)
}

#[test]
fn count_tracks_adds_and_removes() {
    for [a, b, c, d] in [objects(), strings()] {
        let mut set = Set::new();
        set.add(a).unwrap();
        set.add(b).unwrap();
        set.add(c).unwrap();
        assert_eq!(set.len(), 3);
        set.add(d.clone()).unwrap();
        assert_eq!(set.len(), 4);
        set.remove(&d);
        assert_eq!(set.len(), 3);
    }
}

#[test]
fn values_keep_insertion_order() {
    for values in [objects(), strings()] {
        let set = set_of(&values);
        assert_eq!(structs::join(&set.get_values(), ""), "abcd");
    }
}

#[test]
fn contains_distinguishes_objects() {
    let [a, b, c, d] = objects();
    let set = set_of(&[a.clone(), b, c, d]);
    assert!(set.contains(&a));
    assert!(
        !set.contains(&Value::object("a")),
        "An equal but distinct object shouldn't be contained."
    );
    assert!(!set.contains(&Value::from("a")));

    let set = set_of(&strings());
    assert!(set.contains(&Value::from("a")));
    assert!(!set.contains(&Value::from("e")));
}

#[test]
fn contains_all_accepts_any_collection() {
    let set = set_of(&[1_i32, 2, 3].map(Value::from));

    assert!(set.contains_all(&Vec::<Value>::new()));
    assert!(set.contains_all(&[Value::from(1)]));
    assert!(set.contains_all(&[Value::from(1), Value::from(1)]));
    assert!(set.contains_all(&[3_i32, 2, 1].map(Value::from)));
    assert!(!set.contains_all(&[Value::from(4)]));
    assert!(!set.contains_all(&[Value::from(1), Value::from(4)]));

    assert!(set.contains_all(&HashMap::from([("a", Value::from(1))])));
    assert!(!set.contains_all(&HashMap::from([("a", Value::from(4))])));

    assert!(set.contains_all(&set_of(&[Value::from(1)])));
    assert!(!set.contains_all(&set_of(&[Value::from(4)])));
}

#[test]
fn null_is_distinct_from_the_string_null() {
    let mut set = Set::new();
    set.add(Value::from("a")).unwrap();
    set.add(Value::Null).unwrap();

    assert!(set.contains(&Value::Null));
    assert!(!set.contains(&Value::from("null")));
}

#[test]
fn undefined_is_rejected_everywhere() {
    let mut set = set_of(&strings());

    assert_eq!(set.add(Value::Undefined), Err(InvalidElement));
    assert_eq!(
        set.add_all(&[Value::from("e"), Value::Undefined]),
        Err(InvalidElement)
    );
    assert_eq!(
        Set::<Value>::from_collection(&[Value::Undefined]),
        Err(InvalidElement)
    );
    assert_eq!(set.len(), 4, "Failed additions shouldn't change the set.");
    assert!(!set.contains(&Value::from("e")));
}

#[test]
fn clear_empties_the_set() {
    for values in [objects(), strings()] {
        let mut set = set_of(&values);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&values[0]));
    }
}

#[test]
fn add_all_and_construction_from_sets() {
    for values in [objects(), strings()] {
        let mut set = Set::new();
        set.add_all(&values).unwrap();
        assert!(set.contains(&values[2]));

        let mut copy = Set::new();
        copy.add_all(&set).unwrap();
        assert!(copy.contains(&values[2]));

        let constructed = Set::<Value>::from_collection(&set).unwrap();
        assert_eq!(constructed, set);

        let cloned = set.clone();
        assert!(cloned.contains(&values[2]));
    }
}

#[test]
fn construction_from_maps_uses_values() {
    let set = Set::<Value>::from_collection(&HashMap::from([
        ("x", Value::from(1)),
        ("y", Value::from(2)),
    ]))
    .unwrap();

    assert!(set.equals(&[Value::from(2), Value::from(1)]));
    assert!(!set.contains(&Value::from("x")));
}

#[test]
fn equals() {
    for [a, b, c, d] in [numbers(), strings(), objects()] {
        let set = set_of(&[a.clone(), b.clone(), c.clone()]);

        assert!(set.equals(&set), "set == itself");
        assert!(set.equals(&set_of(&[a.clone(), b.clone(), c.clone()])), "set == same set");
        assert!(set.equals(&set.clone()), "set == its clone");
        assert!(set.equals(&[a.clone(), b.clone(), c.clone()]), "set == array of same elements");
        assert!(set.equals(&[c.clone(), b.clone(), a.clone()]), "set == reordered array");

        assert!(!set.equals(&Set::<Value>::new()), "set != empty set");
        assert!(!set.equals(&set_of(&[a.clone(), c.clone()])), "set != its subset");
        assert!(
            !set.equals(&set_of(&[a.clone(), b.clone(), c.clone(), d.clone()])),
            "set != its superset"
        );
        assert!(!set.equals(&set_of(&[b.clone(), c.clone(), d.clone()])), "set != different set");
        assert!(!set.equals(&[a.clone(), c.clone()]), "set != its subset as array");
        assert!(
            !set.equals(&[a.clone(), b.clone(), c.clone(), d.clone()]),
            "set != its superset as array"
        );
        assert!(!set.equals(&[b.clone(), c.clone(), d.clone()]), "set != different array");
        assert!(!set.equals(&[a.clone(), b.clone(), c.clone(), c.clone()]), "set != [a, b, c, c]");
        assert!(!set.equals(&[a.clone(), b.clone(), b.clone()]), "set != [a, b, b]");
        assert!(!set.equals(&[a.clone(), a.clone()]), "set != [a, a]");
    }
}

#[test]
fn is_subset_of() {
    for [a, b, c, d] in [numbers(), strings(), objects()] {
        let set = set_of(&[a.clone(), b.clone(), c.clone()]);

        assert!(set.is_subset_of(&set), "set <= itself");
        assert!(set.is_subset_of(&set_of(&[a.clone(), b.clone(), c.clone()])), "set <= same set");
        assert!(set.is_subset_of(&set.clone()), "set <= its clone");
        assert!(set.is_subset_of(&[a.clone(), b.clone(), c.clone()]), "set <= same array");
        assert!(set.is_subset_of(&[c.clone(), b.clone(), a.clone()]), "set <= reordered array");

        assert!(
            set.is_subset_of(&set_of(&[a.clone(), b.clone(), c.clone(), d.clone()])),
            "set <= Set([a, b, c, d])"
        );
        assert!(set.is_subset_of(&[a.clone(), b.clone(), c.clone(), d.clone()]), "set <= [a, b, c, d]");
        assert!(set.is_subset_of(&[a.clone(), b.clone(), c.clone(), c.clone()]), "set <= [a, b, c, c]");

        assert!(!set.is_subset_of(&set_of(&[a.clone(), b.clone()])), "set !<= Set([a, b])");
        assert!(!set.is_subset_of(&[a.clone(), b.clone()]), "set !<= [a, b]");
        assert!(!set.is_subset_of(&set_of(&[c.clone(), d.clone()])), "set !<= Set([c, d])");
        assert!(!set.is_subset_of(&[c.clone(), d.clone()]), "set !<= [c, d]");
        assert!(
            !set.is_subset_of(&set_of(&[a.clone(), c.clone(), d.clone()])),
            "set !<= Set([a, c, d])"
        );
        assert!(!set.is_subset_of(&[a.clone(), c.clone(), d.clone()]), "set !<= [a, c, d]");
        assert!(!set.is_subset_of(&[a.clone(), a.clone(), b.clone()]), "set !<= [a, a, b]");
        assert!(
            !set.is_subset_of(&[a.clone(), a.clone(), b.clone(), b.clone()]),
            "set !<= [a, a, b, b]"
        );
    }
}

fn assert_intersection(msg: &str, set1: &Set<Value>, set2: &Set<Value>, expected: &[Value]) {
    assert!(set1.intersection(set2).equals(expected), "{msg}: set1->set2");
    assert!(set2.intersection(set1).equals(expected), "{msg}: set2->set1");
}

#[test]
fn intersection() {
    let empty = Set::<Value>::new();
    assert!(empty.intersection(&Vec::<Value>::new()).is_empty());
    assert_intersection("two empty sets", &empty, &Set::new(), &[]);

    let abcd = set_of(&strings());
    assert!(abcd.intersection(&Vec::<Value>::new()).is_empty());
    assert_intersection("populated and empty", &abcd, &Set::new(), &[]);

    let bc = ["b", "c"].map(Value::from);
    assert_intersection("[a,b,c,d] and [b,c]", &abcd, &set_of(&bc), &bc);
    assert_intersection(
        "[a,b,c,d] and [b,c,e]",
        &abcd,
        &set_of(&["b", "c", "e"].map(Value::from)),
        &bc,
    );
}

#[test]
fn difference() {
    let empty = Set::<Value>::new();
    assert!(empty.difference(&Vec::<Value>::new()).is_empty());
    assert!(empty.difference(&Set::<Value>::new()).is_empty());

    let abcd = set_of(&strings());
    assert!(abcd.difference(&Vec::<Value>::new()).equals(&abcd));
    assert!(abcd.difference(&Set::<Value>::new()).equals(&abcd));
    assert!(abcd.difference(&abcd).equals(&Set::<Value>::new()));

    let bc = set_of(&["b", "c"].map(Value::from));
    assert!(abcd.difference(&bc).equals(&["a", "d"].map(Value::from)));
    assert!(bc.difference(&abcd).is_empty());

    let xyz = set_of(&["x", "y", "z"].map(Value::from));
    assert!(abcd.difference(&xyz).equals(&abcd));
}

fn assert_remove_all(msg: &str, elements1: &[&str], elements2: &[&str], expected: &[&str]) {
    let values = |items: &[&str]| items.iter().map(|&s| Value::from(s)).collect::<Vec<_>>();
    let mut set1 = set_of(&values(elements1));
    let set2 = set_of(&values(elements2));

    set1.remove_all(&set2);

    assert!(elements1.len() >= set1.len(), "{msg}: set1 count increased");
    assert_eq!(elements2.len(), set2.len(), "{msg}: set2 count changed");
    assert!(set1.equals(&values(expected)), "{msg}: wrong set1");
    assert_intersection(&format!("{msg}: non-empty intersection"), &set1, &set2, &[]);
}

#[test]
fn remove_all() {
    assert_remove_all("empty from empty", &[], &[], &[]);
    assert_remove_all("empty from populated", &["a", "b", "c", "d"], &[], &["a", "b", "c", "d"]);
    assert_remove_all("[a,d] from [a,b,c,d]", &["a", "b", "c", "d"], &["a", "d"], &["b", "c"]);
    assert_remove_all("[b,c] from [a,b,c,d]", &["a", "b", "c", "d"], &["b", "c"], &["a", "d"]);
    assert_remove_all("[b,c,e] from [a,b,c,d]", &["a", "b", "c", "d"], &["b", "c", "e"], &["a", "d"]);
    assert_remove_all("[a,b,c,d] from [a,d]", &["a", "d"], &["a", "b", "c", "d"], &[]);
    assert_remove_all("[a,b,c,d] from [b,c]", &["b", "c"], &["a", "b", "c", "d"], &[]);
    assert_remove_all("[a,b,c,d] from [b,c,e]", &["b", "c", "e"], &["a", "b", "c", "d"], &["e"]);
}

#[test]
fn traversal_passes_no_key_and_the_set() {
    for values in [objects(), strings()] {
        let set = set_of(&values);
        let mut out = String::new();
        structs::for_each(&set, |value, (), collection| {
            assert!(std::ptr::eq(collection, &set));
            out.push_str(&value.to_string());
        });
        assert_eq!(out, "abcd");
    }
}

#[test]
fn filter_some_every() {
    let boxed = [0_i32, 1, 2, 3].map(Value::object);
    let plain = [0_i32, 1, 2, 3].map(Value::from);

    for values in [boxed, plain] {
        let set = set_of(&values);
        let above_one = |value: &Value| value.as_number().is_some_and(|n| n > 1.0);

        let filtered = structs::filter(&set, |value, (), _| above_one(value));
        assert_eq!(structs::join(&filtered, ""), "23");

        assert!(structs::some(&set, |value, (), _| above_one(value)));
        assert!(!structs::some(&set, |value, (), _| {
            value.as_number().is_some_and(|n| n > 100.0)
        }));
        assert!(structs::every(&set, |value, (), _| {
            value.as_number().is_some_and(|n| n >= 0.0)
        }));
        assert!(!structs::every(&set, |value, (), _| above_one(value)));
    }
}

#[test]
fn iteration_reflects_removals() {
    let mut set = set_of(&[0_i32, 1, 2, 3, 4].map(Value::from));
    assert_eq!(structs::join(&set, ""), "01234");

    set.remove(&Value::from(1));
    set.remove(&Value::from(3));
    assert_eq!(structs::join(&set, ""), "024");

    let mut cursor = set.cursor();
    let mut out = String::new();
    while let Some(value) = cursor.next(&set) {
        out.push_str(&value.to_string());
        if value.as_number() == Some(0.0) {
            set.remove(&Value::from(2));
        }
    }
    assert_eq!(out, "04", "Elements removed mid-iteration shouldn't be yielded.");
}
