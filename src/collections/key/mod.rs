//! A module containing [`Key`], the [`Keyed`] trait and the [`Ref`] identity handle.
//!
//! Keys are what a [`Set`](super::Set) actually compares. Primitives produce a tagged,
//! stringified key, so values of different types never collide, while references produce a key
//! from their [`Uid`], which is minted once per reference and cached on it.

mod key;
mod keyed;
mod uid;

pub use key::*;
pub use keyed::*;
pub use uid::*;
