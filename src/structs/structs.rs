use std::fmt::Display;

use crate::collections::key::Keyed;
use crate::collections::traits::{Collection, FilterCollection};

/// Returns the number of entries in `collection`.
pub fn get_count<C: Collection + ?Sized>(collection: &C) -> usize {
    collection.count()
}

/// Returns true if `collection` has no entries.
pub fn is_empty<C: Collection + ?Sized>(collection: &C) -> bool {
    collection.count() == 0
}

/// Returns the values of `collection` in order, as a new Vec.
pub fn get_values<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
{
    collection.values().cloned().collect()
}

/// Returns true if `collection` contains a value with the same key as `value`.
pub fn contains<C, Q>(collection: &C, value: &Q) -> bool
where
    C: Collection + ?Sized,
    C::Item: Keyed,
    Q: Keyed + ?Sized,
{
    collection.contains_value(value)
}

/// Calls `f` with every value of `collection`, along with its key and the collection itself.
pub fn for_each<'s, C, F>(collection: &'s C, mut f: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'s C::Item, C::Key<'s>, &'s C),
{
    for (key, value) in collection.entries() {
        f(value, key, collection);
    }
}

/// Creates a copy of `collection` with only the entries for which `f` returns true.
///
/// The copy has the same type as `collection` where possible, so filtering a
/// [`Set`](crate::Set) produces another Set, while filtering a slice produces a [`Vec`].
pub fn filter<'s, C, F>(collection: &'s C, mut f: F) -> C::Output
where
    C: FilterCollection + ?Sized,
    F: FnMut(&'s C::Item, C::Key<'s>, &'s C) -> bool,
{
    collection.filter_entries(|value, key| f(value, key, collection))
}

/// Calls `f` with every entry of `collection` and collects the results, in order.
pub fn map<'s, C, U, F>(collection: &'s C, mut f: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'s C::Item, C::Key<'s>, &'s C) -> U,
{
    collection
        .entries()
        .map(|(key, value)| f(value, key, collection))
        .collect()
}

/// Returns true if `f` returns true for any entry. Stops at the first one that does.
pub fn some<'s, C, F>(collection: &'s C, mut f: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&'s C::Item, C::Key<'s>, &'s C) -> bool,
{
    collection
        .entries()
        .any(|(key, value)| f(value, key, collection))
}

/// Returns true if `f` returns true for every entry. Stops at the first one that doesn't.
pub fn every<'s, C, F>(collection: &'s C, mut f: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&'s C::Item, C::Key<'s>, &'s C) -> bool,
{
    collection
        .entries()
        .all(|(key, value)| f(value, key, collection))
}

/// Formats every value of `collection` and joins them with `separator`.
pub fn join<C>(collection: &C, separator: &str) -> String
where
    C: Collection + ?Sized,
    C::Item: Display,
{
    collection
        .values()
        .map(|value| format!("{value}"))
        .collect::<Vec<String>>()
        .join(separator)
}
