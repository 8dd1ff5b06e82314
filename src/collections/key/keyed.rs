use std::rc::Rc;

use super::{Key, Tag};

/// A type which can be stored in a [`Set`](crate::collections::Set).
///
/// Rather than relying on [`Eq`] and [`Hash`], set elements derive a [`Key`] and two elements are
/// the same element exactly when their keys are equal. Returning `None` marks the value as
/// undefined: it can't be added to a set and is never contained in one.
///
/// Integers are keyed as the `f64` they convert to, so `1_i64 << 60` and `(1_i64 << 60) as f64`
/// are the same element. Above 2^53 this also means that distinct integers which round to the same
/// `f64` are the same element.
pub trait Keyed {
    fn key(&self) -> Option<Key>;
}

macro_rules! impl_keyed_for_int {
    ($($t:ty),*) => {
        $(
            impl Keyed for $t {
                fn key(&self) -> Option<Key> {
                    Some(Key::number(*self as f64))
                }
            }
        )*
    };
}

impl_keyed_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Keyed for f64 {
    fn key(&self) -> Option<Key> {
        Some(Key::number(*self))
    }
}

impl Keyed for f32 {
    fn key(&self) -> Option<Key> {
        Some(Key::number(f64::from(*self)))
    }
}

impl Keyed for bool {
    fn key(&self) -> Option<Key> {
        Some(Key::boolean(*self))
    }
}

impl Keyed for char {
    fn key(&self) -> Option<Key> {
        Some(Key::Primitive(Tag::String, self.to_string()))
    }
}

impl Keyed for str {
    fn key(&self) -> Option<Key> {
        Some(Key::string(self))
    }
}

impl Keyed for String {
    fn key(&self) -> Option<Key> {
        Some(Key::string(self))
    }
}

impl Keyed for Rc<str> {
    fn key(&self) -> Option<Key> {
        Some(Key::string(self))
    }
}

/// `None` is null, which is a valid element in its own right.
impl<T: Keyed> Keyed for Option<T> {
    fn key(&self) -> Option<Key> {
        match self {
            Some(value) => value.key(),
            None => Some(Key::null()),
        }
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn key(&self) -> Option<Key> {
        (**self).key()
    }
}
