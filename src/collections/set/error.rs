use derive_more::{Display, Error};

/// Returned when an undefined value (one whose [`key`](crate::collections::key::Keyed::key) is
/// `None`) is added to a [`Set`](super::Set).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cannot add an undefined value to a Set!")]
pub struct InvalidElement;
