//! Keyed collection types.
//!
//! # Purpose
//! Everything in here revolves around [`Set`], which decides element identity through derived
//! [`Key`](key::Key)s instead of [`Eq`]. The supporting modules provide key derivation, a dynamic
//! [`Value`](value::Value) type for mixing element kinds and the [`Collection`](traits::Collection)
//! protocol that lets sets, sequences and maps be treated alike.

pub mod key;
pub mod set;
pub mod traits;
#[cfg(feature = "value")]
pub mod value;

#[doc(inline)]
pub use set::Set;
