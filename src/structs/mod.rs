//! Free functions for traversing any [`Collection`](crate::collections::traits::Collection).
//!
//! These work the same way whether they are handed a [`Set`](crate::Set), a slice, a [`Vec`] or a
//! map. Callbacks receive each value, the key it is stored under (an index, a map key, or `()` for
//! a set) and the collection itself.

mod structs;

pub use structs::*;
