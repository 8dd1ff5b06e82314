//! A module containing [`Value`], a dynamically typed element.
//!
//! A `Set<Value>` can hold numbers, strings, booleans, null and object references side by side,
//! with each kind keyed the same way it would be on its own.

mod value;

pub use value::*;
