use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::Set;
use crate::collections::key::Keyed;
use crate::collections::traits::{Collection, FilterCollection};

/// Sets have no extrinsic keys, so every entry is keyed by `()`.
impl<T: Keyed, S: BuildHasher> Collection for Set<T, S> {
    type Item = T;

    type Key<'a>
        = ()
    where
        Self: 'a;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)> {
        self.iter().map(|value| ((), value))
    }

    fn values(&self) -> impl Iterator<Item = &Self::Item> {
        self.iter()
    }

    fn contains_value<Q: Keyed + ?Sized>(&self, value: &Q) -> bool
    where
        Self::Item: Keyed,
    {
        self.contains(value)
    }
}

impl<T: Keyed + Clone, S: BuildHasher + Clone> FilterCollection for Set<T, S> {
    type Output = Set<T, S>;

    fn filter_entries<'s, F>(&'s self, mut predicate: F) -> Self::Output
    where
        F: FnMut(&'s Self::Item, Self::Key<'s>) -> bool,
    {
        let mut inner = IndexMap::with_hasher(self.hasher().clone());
        for (key, value) in &self.inner {
            if predicate(value, ()) {
                inner.insert(key.clone(), value.clone());
            }
        }
        Set { inner }
    }
}
