use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use super::{Collection, FilterCollection};

impl<T> Collection for [T] {
    type Item = T;

    type Key<'a>
        = usize
    where
        Self: 'a;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter().enumerate()
    }
}

impl<T: Clone> FilterCollection for [T] {
    type Output = Vec<T>;

    fn filter_entries<'s, F>(&'s self, mut predicate: F) -> Self::Output
    where
        F: FnMut(&'s Self::Item, Self::Key<'s>) -> bool,
    {
        let mut result = Vec::new();
        for (index, value) in self.iter().enumerate() {
            if predicate(value, index) {
                result.push(value.clone());
            }
        }
        result
    }
}

// Vec and arrays don't coerce to slices when passed as a generic `&C`, so they forward explicitly.
macro_rules! impl_collection_for_sequence {
    ($([$($generics:tt)*] $t:ty),*) => {
        $(
            impl<$($generics)*> Collection for $t {
                type Item = T;

                type Key<'a>
                    = usize
                where
                    Self: 'a;

                fn count(&self) -> usize {
                    self.len()
                }

                fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
                    self.as_slice().entries()
                }
            }

            impl<$($generics)*> FilterCollection for $t
            where
                T: Clone,
            {
                type Output = Vec<T>;

                fn filter_entries<'s, F>(&'s self, predicate: F) -> Self::Output
                where
                    F: FnMut(&'s Self::Item, Self::Key<'s>) -> bool,
                {
                    self.as_slice().filter_entries(predicate)
                }
            }
        )*
    };
}

impl_collection_for_sequence!([T] Vec<T>, [T, const N: usize] [T; N]);

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Item = V;

    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter()
    }
}

impl<K, V, S> FilterCollection for HashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Output = HashMap<K, V, S>;

    fn filter_entries<'s, F>(&'s self, mut predicate: F) -> Self::Output
    where
        F: FnMut(&'s Self::Item, Self::Key<'s>) -> bool,
    {
        let mut result = HashMap::with_hasher(self.hasher().clone());
        for (key, value) in self {
            if predicate(value, key) {
                result.insert(key.clone(), value.clone());
            }
        }
        result
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;

    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter()
    }
}

impl<K: Clone + Ord, V: Clone> FilterCollection for BTreeMap<K, V> {
    type Output = BTreeMap<K, V>;

    fn filter_entries<'s, F>(&'s self, mut predicate: F) -> Self::Output
    where
        F: FnMut(&'s Self::Item, Self::Key<'s>) -> bool,
    {
        let mut result = BTreeMap::new();
        for (key, value) in self {
            if predicate(value, key) {
                result.insert(key.clone(), value.clone());
            }
        }
        result
    }
}

impl<K, V, S> Collection for IndexMap<K, V, S> {
    type Item = V;

    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter()
    }
}

impl<K, V, S> FilterCollection for IndexMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Output = IndexMap<K, V, S>;

    fn filter_entries<'s, F>(&'s self, mut predicate: F) -> Self::Output
    where
        F: FnMut(&'s Self::Item, Self::Key<'s>) -> bool,
    {
        let mut result = IndexMap::with_hasher(self.hasher().clone());
        for (key, value) in self {
            if predicate(value, key) {
                result.insert(key.clone(), value.clone());
            }
        }
        result
    }
}
