use std::hash::BuildHasher;

use super::Set;
use crate::collections::key::{Key, Keyed};

/// A detached position within a [`Set`], for iteration that tolerates removal between steps.
///
/// A Cursor records the keys of the Set at the time it was created and walks over them, looking
/// each one up again when it is reached. Elements removed in the meantime are skipped, whether they
/// were already yielded or not. Elements added after the Cursor was created aren't part of its
/// snapshot and won't be visited, use [`Cursor::restart`] to pick them up.
///
/// Because the Cursor doesn't borrow the Set, the Set has to be passed to each call. It is a logic
/// error to use a Cursor with a Set other than the one it was created from.
///
/// # Example
/// ```
/// # use keyed_collections::Set;
/// let mut set = Set::<i32>::try_from([0, 1, 2, 3, 4]).unwrap();
/// let mut cursor = set.cursor();
/// let mut seen = vec![];
///
/// while let Some(&value) = cursor.next(&set) {
///     seen.push(value);
///     if value == 0 {
///         set.remove(&1);
///         set.remove(&3);
///     }
/// }
///
/// assert_eq!(seen, [0, 2, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    keys: Vec<Key>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new<T: Keyed, S: BuildHasher>(set: &Set<T, S>) -> Cursor {
        Cursor {
            keys: set.inner.keys().cloned().collect(),
            pos: 0,
        }
    }

    /// Advances the Cursor, returning the next element which is still present in `set`.
    pub fn next<'a, T: Keyed, S: BuildHasher>(&mut self, set: &'a Set<T, S>) -> Option<&'a T> {
        while let Some(key) = self.keys.get(self.pos) {
            self.pos += 1;
            if let Some(value) = set.inner.get(key) {
                return Some(value);
            }
        }
        None
    }

    /// Moves the Cursor back to the start, taking a fresh snapshot of `set`.
    pub fn restart<T: Keyed, S: BuildHasher>(&mut self, set: &Set<T, S>) {
        *self = Cursor::new(set);
    }

    /// Returns the number of recorded keys that haven't been visited yet. Some of them may have
    /// been removed from the Set since, so this is an upper bound on the remaining elements.
    pub const fn remaining(&self) -> usize {
        self.keys.len() - self.pos
    }
}
