//! A module containing [`Set`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's elements, while
//! [`Cursor`] provides detached iteration that tolerates removals between steps.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the elements
//! in place could change their keys, which would cause a logic error.
//!
//! [`Set`] is also re-exported under the parent module.

mod collection;
mod cursor;
mod error;
mod iter;
mod set;

pub use cursor::*;
pub use error::*;
pub use iter::*;
pub use set::*;
