use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Sub, SubAssign};

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::{Cursor, Difference, Intersection, InvalidElement, Iter};
use crate::collections::key::{Key, Keyed};
use crate::collections::traits::Collection;
use crate::util::fmt::{DebugRaw, braced};

/// A duplicate-free collection of elements which relies on the elements implementing [`Keyed`].
///
/// Elements are stored in insertion order, removing an element doesn't reorder the others and
/// re-adding a removed element places it at the end. Two elements are considered the same element
/// if they produce the same [`Key`], so `1` and `"1"` are distinct, and two
/// [`Ref`](crate::collections::key::Ref)s are only the same element if they are the same
/// reference.
///
/// Methods that accept another collection are generic over [`Collection`], so they work with
/// sets, slices, vectors and maps (of which only the values are considered) alike.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Set.
/// - `m`: The number of items in the other collection.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(n)` |
/// | `intersection` | `O(n)`**, `O(n * m)` |
/// | `equals` | `O(n)`**, `O(n * m)` |
///
/// \* Plus the cost of deriving the element's key, which is linear in the length of its
/// stringified form for primitives.
///
/// \** When the other collection is a Set. Sequences and maps are searched linearly.
pub struct Set<T: Keyed, S: BuildHasher = RandomState> {
    pub(crate) inner: IndexMap<Key, T, S>,
}

impl<T: Keyed> Set<T> {
    /// Creates a new, empty Set with the default hasher.
    pub fn new() -> Set<T> {
        Set {
            inner: IndexMap::new(),
        }
    }

    /// Creates a new Set with space for at least `cap` elements before reallocating.
    pub fn with_capacity(cap: usize) -> Set<T> {
        Set {
            inner: IndexMap::with_capacity(cap),
        }
    }
}

impl<T: Keyed, S: BuildHasher + Default> Set<T, S> {
    /// Creates a Set from the values of another collection, in that collection's order. For maps,
    /// only the values are added.
    ///
    /// # Errors
    /// Returns [`InvalidElement`] if any of the values is undefined.
    pub fn from_collection<C>(source: &C) -> Result<Set<T, S>, InvalidElement>
    where
        C: Collection<Item = T> + ?Sized,
        T: Clone,
    {
        let mut set = Set::with_capacity_and_hasher(source.count(), S::default());
        set.add_all(source)?;
        trace!(len = set.len(), "constructed set from collection");
        Ok(set)
    }

    /// Creates a Set from an iterator of owned values.
    ///
    /// # Errors
    /// Returns [`InvalidElement`] if any of the values is undefined.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Set<T, S>, InvalidElement> {
        let iter = iter.into_iter();
        let mut set = Set::with_capacity_and_hasher(iter.size_hint().0, S::default());

        for value in iter {
            set.add(value)?;
        }

        Ok(set)
    }
}

impl<T: Keyed, S: BuildHasher> Set<T, S> {
    pub const fn with_hasher(hasher: S) -> Set<T, S> {
        Set {
            inner: IndexMap::with_hasher(hasher),
        }
    }

    pub fn with_capacity_and_hasher(cap: usize, hasher: S) -> Set<T, S> {
        Set {
            inner: IndexMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the Set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Adds `value` to the Set. If an element with the same key is already present, it is replaced
    /// in place, without changing its position.
    ///
    /// # Errors
    /// Returns [`InvalidElement`] if `value` is undefined, in which case the Set is unchanged.
    pub fn add(&mut self, value: T) -> Result<(), InvalidElement> {
        let key = value.key().ok_or_else(|| {
            debug!("rejected an undefined element");
            InvalidElement
        })?;
        self.inner.insert(key, value);
        Ok(())
    }

    /// Removes the element with the same key as `value`, returning true if there was one.
    pub fn remove<Q: Keyed + ?Sized>(&mut self, value: &Q) -> bool {
        match value.key() {
            Some(key) => self.inner.shift_remove(&key).is_some(),
            None => false,
        }
    }

    /// Removes all elements from the Set.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns true if the Set contains an element with the same key as `value`. Undefined values
    /// are never contained.
    pub fn contains<Q: Keyed + ?Sized>(&self, value: &Q) -> bool {
        value.key().is_some_and(|key| self.inner.contains_key(&key))
    }

    /// Returns true if every value of `other` is contained in the Set. This is trivially true for
    /// an empty collection.
    pub fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Collection + ?Sized,
        C::Item: Keyed,
    {
        other.values().all(|value| self.contains(value))
    }

    /// Returns all elements in insertion order, as a new Vec which is independent of the Set.
    pub fn get_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns true if `other` contains exactly the elements of this Set, in any order.
    ///
    /// The size of `other` is taken as it reports it, so a sequence which repeats one of the
    /// elements is never equal to the Set, even though it contains the same elements.
    pub fn equals<C>(&self, other: &C) -> bool
    where
        C: Collection + ?Sized,
        C::Item: Keyed,
    {
        other.count() == self.len() && self.is_subset_of(other)
    }

    /// Returns true if every element of this Set is contained in `other`. (`self ⊆ other`)
    pub fn is_subset_of<C>(&self, other: &C) -> bool
    where
        C: Collection + ?Sized,
        C::Item: Keyed,
    {
        other.count() >= self.len() && self.iter().all(|value| other.contains_value(value))
    }

    /// Returns true if every value of `other` is contained in this Set. (`self ⊇ other`)
    pub fn is_superset_of<C>(&self, other: &C) -> bool
    where
        C: Collection + ?Sized,
        C::Item: Keyed,
    {
        self.contains_all(other)
    }

    /// Creates a new Set of all elements that are in both `self` and `other`. (`self ∩ other`)
    ///
    /// Membership in `other` is decided by `other` itself, so this is a hashed lookup for a Set
    /// and a linear search for a sequence.
    pub fn intersection<C>(&self, other: &C) -> Set<T, S>
    where
        C: Collection + ?Sized,
        C::Item: Keyed,
        T: Clone,
        S: Clone,
    {
        let result = self.collect_entries(Intersection {
            inner: self.inner.iter(),
            other,
        });
        trace!(len = self.len(), kept = result.len(), "intersection");
        result
    }

    /// Creates a new Set of all elements that are in `self` but not `other`. (`self \ other`)
    pub fn difference<C>(&self, other: &C) -> Set<T, S>
    where
        C: Collection + ?Sized,
        C::Item: Keyed,
        T: Clone,
        S: Clone,
    {
        let result = self.collect_entries(Difference {
            inner: self.inner.iter(),
            other,
        });
        trace!(len = self.len(), kept = result.len(), "difference");
        result
    }

    /// Creates a new Set of all elements that are in either `self` or `other` but not both.
    /// (`self △ other`)
    pub fn symmetric_difference<S2: BuildHasher>(&self, other: &Set<T, S2>) -> Set<T, S>
    where
        T: Clone,
        S: Clone,
    {
        self.collect_entries(
            Difference {
                inner: self.inner.iter(),
                other,
            }
            .chain(Difference {
                inner: other.inner.iter(),
                other: self,
            }),
        )
    }

    /// Creates a new Set containing the elements of `self` followed by the values of `other`.
    /// (`self ∪ other`)
    ///
    /// # Errors
    /// Returns [`InvalidElement`] if any value of `other` is undefined.
    pub fn union<C>(&self, other: &C) -> Result<Set<T, S>, InvalidElement>
    where
        C: Collection<Item = T> + ?Sized,
        T: Clone,
        S: Clone,
    {
        let mut result = self.clone();
        result.add_all(other)?;
        Ok(result)
    }

    /// Adds every value of `other` to the Set, in order. For maps, only the values are added.
    ///
    /// # Errors
    /// Returns [`InvalidElement`] if any value of `other` is undefined. All values are checked
    /// before any are added, so the Set is unchanged on failure.
    pub fn add_all<C>(&mut self, other: &C) -> Result<(), InvalidElement>
    where
        C: Collection<Item = T> + ?Sized,
        T: Clone,
    {
        let entries = other
            .values()
            .map(|value| value.key().map(|key| (key, value.clone())))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                debug!("add_all rejected an undefined element");
                InvalidElement
            })?;

        let before = self.len();
        self.inner.extend(entries);
        trace!(offered = other.count(), added = self.len() - before, "add_all");
        Ok(())
    }

    /// Removes every value of `other` from the Set. Values that aren't present are ignored and
    /// `other` is left untouched.
    pub fn remove_all<C>(&mut self, other: &C)
    where
        C: Collection + ?Sized,
        C::Item: Keyed,
    {
        let before = self.len();
        for value in other.values() {
            self.remove(value);
        }
        trace!(removed = before - self.len(), "remove_all");
    }

    /// Retains only the elements for which `f` returns true, preserving their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.inner.retain(|_, value| f(value))
    }

    /// Returns an iterator over all elements in the Set, as references, in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a [`Cursor`] positioned before the first element. Unlike [`Set::iter`], the cursor
    /// doesn't borrow the Set, so elements can be removed between steps.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    fn collect_entries<'a, I>(&self, entries: I) -> Set<T, S>
    where
        I: Iterator<Item = (&'a Key, &'a T)>,
        T: Clone + 'a,
        S: Clone,
    {
        let mut inner = IndexMap::with_hasher(self.inner.hasher().clone());
        inner.extend(entries.map(|(key, value)| (key.clone(), value.clone())));
        Set { inner }
    }
}

impl<T: Keyed, S: BuildHasher + Default> Default for Set<T, S> {
    fn default() -> Self {
        Set::with_hasher(S::default())
    }
}

impl<T: Keyed + Clone, S: BuildHasher + Clone> Clone for Set<T, S> {
    fn clone(&self) -> Self {
        Set {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Keyed, S: BuildHasher + Default> TryFrom<Vec<T>> for Set<T, S> {
    type Error = InvalidElement;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        Set::try_from_iter(value)
    }
}

impl<T: Keyed, S: BuildHasher + Default, const N: usize> TryFrom<[T; N]> for Set<T, S> {
    type Error = InvalidElement;

    fn try_from(value: [T; N]) -> Result<Self, Self::Error> {
        Set::try_from_iter(value)
    }
}

impl<T: Keyed, S: BuildHasher, S2: BuildHasher> PartialEq<Set<T, S2>> for Set<T, S> {
    fn eq(&self, other: &Set<T, S2>) -> bool {
        self.equals(other)
    }
}

impl<T: Keyed, S: BuildHasher> Eq for Set<T, S> {}

impl<T: Keyed + Clone, S: BuildHasher + Clone> BitOr for &Set<T, S> {
    type Output = Set<T, S>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.collect_entries(self.inner.iter().chain(Difference {
            inner: rhs.inner.iter(),
            other: self,
        }))
    }
}

impl<T: Keyed, S: BuildHasher> BitOrAssign for Set<T, S> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.inner.reserve(rhs.len());
        for (key, value) in rhs.inner {
            self.inner.entry(key).or_insert(value);
        }
    }
}

impl<T: Keyed + Clone, S: BuildHasher + Clone> BitAnd for &Set<T, S> {
    type Output = Set<T, S>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Keyed, S: BuildHasher> BitAndAssign for Set<T, S> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|value| rhs.contains(value));
    }
}

impl<T: Keyed + Clone, S: BuildHasher + Clone> BitXor for &Set<T, S> {
    type Output = Set<T, S>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Keyed + Clone, S: BuildHasher + Clone> Sub for &Set<T, S> {
    type Output = Set<T, S>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Keyed, S: BuildHasher> SubAssign for Set<T, S> {
    fn sub_assign(&mut self, rhs: Self) {
        self.remove_all(&rhs);
    }
}

impl<T: Keyed + Debug, S: BuildHasher> Debug for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field(
                "contents",
                &DebugRaw(braced(self.iter().map(|i| format!("{i:?}")))),
            )
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Keyed + Display, S: BuildHasher> Display for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", braced(self.iter().map(|i| format!("{i}"))))
    }
}
