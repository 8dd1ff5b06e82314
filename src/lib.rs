//! This crate provides a [`Set`](collections::Set) with host-style element semantics, along with
//! the small collection protocol and traversal helpers built around it.
//!
//! # Purpose
//! Most Rust sets compare elements with [`Eq`] and [`Hash`]. This one doesn't. Instead, each
//! element derives a [`Key`](collections::key::Key): primitives are keyed by a type tag and their
//! stringified value, while references are keyed by an identity token minted the first time they
//! are seen. That means `1` and `"1"` are different elements, `None` (null) is a valid element, and
//! two [`Ref`](collections::key::Ref)s that wrap equal values are still two elements.
//!
//! # Method
//! The set stores its elements in an insertion-ordered map from key to value, so iteration order is
//! reproducible. Removal never reorders the remaining elements and re-adding a removed element puts
//! it at the end.
//!
//! Generic traversal (`for_each`, `filter`, `some`, `every`, ...) is written once against the
//! [`Collection`](collections::traits::Collection) trait, which is implemented for sets, slices,
//! arrays, vectors and the common map types. Maps only contribute their values.
//!
//! # Error Handling
//! The only failure is trying to add an undefined element, which is reported as
//! [`InvalidElement`](collections::set::InvalidElement). Everything else is total: queries return
//! `false` rather than failing and removing something that isn't there is a no-op. Bulk additions
//! check every element before inserting any of them, so a failed call leaves the set untouched.
//!
//! # Dependencies
//! - `indexmap` backs the set, providing insertion order without giving up hashed lookup.
//! - `derive_more` handles the repetitive `Display`/`Error`/`From` impls.
//! - `tracing` is used for (very quiet) diagnostics on bulk operations. No subscriber is installed
//!   here, that's up to the binary.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "structs")]
pub mod structs;

pub(crate) mod util;

#[doc(inline)]
pub use collections::Set;
#[doc(inline)]
pub use collections::set::InvalidElement;
