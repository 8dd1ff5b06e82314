//! Traits describing what a collection can do, independent of how it stores its elements.
//!
//! [`Collection`] is implemented for [`Set`](super::Set), slices, arrays, [`Vec`] and the common map
//! types, so functions written against it (such as those in [`structs`](crate::structs)) don't need
//! to care which one they were handed.

mod collection;
mod impls;
mod tests;

pub use collection::*;
