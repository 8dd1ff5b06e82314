use std::hash::BuildHasher;
use std::iter::FusedIterator;

use indexmap::map::{self, IntoValues, Values};

use super::Set;
use crate::collections::key::{Key, Keyed};
use crate::collections::traits::Collection;

impl<T: Keyed, S: BuildHasher> IntoIterator for Set<T, S> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_values())
    }
}

/// A type for owned iteration over a [`Set`]. Produces values of type `T` in insertion order.
///
/// See [`Set::into_iter`].
pub struct IntoIter<T>(pub(crate) IntoValues<Key, T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Keyed, S: BuildHasher> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.values())
    }
}

/// A type for borrowed iteration over a [`Set`]. Produces values of type `&T` in insertion order.
///
/// The Set can't be modified while an Iter exists, see [`Cursor`](super::Cursor) for iteration
/// that allows removal between steps.
///
/// See [`Set::iter`].
pub struct Iter<'a, T>(pub(crate) Values<'a, Key, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// Entries of a Set which are not in `other`. Yields keys alongside values so that the result can
/// be collected without deriving them again.
pub(crate) struct Difference<'a, T, C: ?Sized> {
    pub(crate) inner: map::Iter<'a, Key, T>,
    pub(crate) other: &'a C,
}

impl<'a, T, C> Iterator for Difference<'a, T, C>
where
    T: Keyed,
    C: Collection + ?Sized,
    C::Item: Keyed,
{
    type Item = (&'a Key, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some((_, item)) = next
            && self.other.contains_value(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T, C> FusedIterator for Difference<'a, T, C>
where
    T: Keyed,
    C: Collection + ?Sized,
    C::Item: Keyed,
{
}

/// Entries of a Set which are also in `other`.
pub(crate) struct Intersection<'a, T, C: ?Sized> {
    pub(crate) inner: map::Iter<'a, Key, T>,
    pub(crate) other: &'a C,
}

impl<'a, T, C> Iterator for Intersection<'a, T, C>
where
    T: Keyed,
    C: Collection + ?Sized,
    C::Item: Keyed,
{
    type Item = (&'a Key, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some((_, item)) = next
            && !self.other.contains_value(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T, C> FusedIterator for Intersection<'a, T, C>
where
    T: Keyed,
    C: Collection + ?Sized,
    C::Item: Keyed,
{
}
