use std::cell::OnceCell;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;

use super::{Key, Keyed};

static NEXT_UID: AtomicU64 = AtomicU64::new(1);

/// An opaque identity token. Every [`Ref`] gets a distinct one the first time it is keyed and keeps
/// it for as long as it lives.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uid(u64);

impl Uid {
    fn mint() -> Uid {
        Uid(NEXT_UID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A shared reference with identity semantics.
///
/// Cloning a Ref produces the same reference, whereas [`Ref::new`] always produces a new one, even
/// for an equal value. When used as a set element, a Ref is keyed by its [`Uid`] rather than its
/// contents, so two Refs are only ever the same element if they point to the same allocation.
///
/// The Uid is minted lazily and stored alongside the value, so references that are never placed in
/// a set don't consume one.
pub struct Ref<T>(Rc<Shared<T>>);

struct Shared<T> {
    uid: OnceCell<Uid>,
    value: T,
}

impl<T> Ref<T> {
    pub fn new(value: T) -> Ref<T> {
        Ref(Rc::new(Shared {
            uid: OnceCell::new(),
            value,
        }))
    }

    /// Returns the identity token of this reference, minting it on first use.
    pub fn uid(&self) -> Uid {
        *self.0.uid.get_or_init(Uid::mint)
    }

    /// Returns true if both Refs point to the same allocation.
    pub fn ptr_eq(this: &Ref<T>, other: &Ref<T>) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T> Keyed for Ref<T> {
    fn key(&self) -> Option<Key> {
        Some(Key::reference(self.uid()))
    }
}

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Ref(Rc::clone(&self.0))
    }
}

impl<T> Deref for Ref<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0.value
    }
}

impl<T> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        Ref::ptr_eq(self, other)
    }
}

impl<T> Eq for Ref<T> {}

impl<T: Debug> Debug for Ref<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&self.0.value).finish()
    }
}

impl<T: Display> Display for Ref<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0.value, f)
    }
}
