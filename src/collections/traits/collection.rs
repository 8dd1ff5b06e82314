use crate::collections::key::Keyed;

/// A finite collection of values which can be traversed lazily and searched by [`Key`].
///
/// Each value may come with an extrinsic key, which is what [`Collection::entries`] pairs it with:
/// an index for sequences, a map key for maps and nothing at all (`()`) for a
/// [`Set`](crate::collections::Set). Only values take part in membership.
///
/// [`Key`]: crate::collections::key::Key
pub trait Collection {
    type Item;

    type Key<'a>
    where
        Self: 'a;

    /// Returns the number of entries, including any duplicate values.
    fn count(&self) -> usize;

    /// Returns a lazy iterator over every entry, in the collection's natural order.
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)>;

    /// Returns a lazy iterator over every value, in the collection's natural order.
    fn values(&self) -> impl Iterator<Item = &Self::Item> {
        self.entries().map(|(_, value)| value)
    }

    /// Returns true if any value has the same key as `value`. Undefined values are never contained.
    ///
    /// The default implementation is a linear search.
    fn contains_value<Q: Keyed + ?Sized>(&self, value: &Q) -> bool
    where
        Self::Item: Keyed,
    {
        match value.key() {
            Some(key) => self.values().any(|item| item.key().as_ref() == Some(&key)),
            None => false,
        }
    }
}

/// A [`Collection`] that can produce a filtered copy of itself.
pub trait FilterCollection: Collection {
    /// The type of the filtered copy. This is the collection's own type where possible and a
    /// [`Vec`] for borrowed sequences.
    type Output;

    /// Creates a copy containing only the entries for which `predicate` returns true, preserving
    /// their order.
    fn filter_entries<'s, F>(&'s self, predicate: F) -> Self::Output
    where
        F: FnMut(&'s Self::Item, Self::Key<'s>) -> bool;
}
