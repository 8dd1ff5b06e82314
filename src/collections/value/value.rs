use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use derive_more::{From, IsVariant, TryInto};

use crate::collections::key::{Key, Keyed, Ref, number_repr};

/// A dynamically typed value.
///
/// Primitive variants are keyed by their contents, so `Value::from(1)` and `Value::from(1.0)` are
/// the same element while `Value::from("1")` is a different one. [`Value::Object`] wraps another
/// value behind a [`Ref`], making it an element with identity: two objects wrapping the same
/// string are still two elements. [`Value::Undefined`] has no key at all and can't be added to a
/// set.
#[derive(Debug, Clone, Default, From, IsVariant, TryInto)]
pub enum Value {
    #[default]
    #[from(skip)]
    #[try_into(ignore)]
    Undefined,
    #[from(skip)]
    #[try_into(ignore)]
    Null,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Object(Ref<Value>),
}

impl Value {
    /// Wraps `value` in a new object. Every call creates a distinct reference.
    pub fn object(value: impl Into<Value>) -> Value {
        Value::Object(Ref::new(value.into()))
    }

    /// Returns the number held by this value, looking through objects.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Object(inner) => inner.as_number(),
            _ => None,
        }
    }

    /// Returns the string held by this value, looking through objects.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(&**s),
            Value::Object(inner) => inner.as_str(),
            _ => None,
        }
    }
}

impl Keyed for Value {
    fn key(&self) -> Option<Key> {
        match self {
            Value::Undefined => None,
            Value::Null => Some(Key::null()),
            Value::Bool(b) => Some(Key::boolean(*b)),
            Value::Number(n) => Some(Key::number(*n)),
            Value::Str(s) => Some(Key::string(s)),
            Value::Object(inner) => inner.key(),
        }
    }
}

/// Values are equal when they would be the same set element. Note that this makes `NaN` equal to
/// itself and objects equal only to the same reference.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Value {}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", number_repr(*n)),
            Value::Str(s) => write!(f, "{s}"),
            Value::Object(inner) => write!(f, "{inner}"),
        }
    }
}
