use derive_more::Display;

use super::Uid;

/// The type portion of a primitive [`Key`].
///
/// Displays as the single character that prefixes the stringified value, which is enough to keep
/// `1`, `"1"` and `true` apart.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    #[display("o")]
    Null,
    #[display("b")]
    Boolean,
    #[display("n")]
    Number,
    #[display("s")]
    String,
}

/// The comparison key of a set element.
///
/// Two elements are the same element exactly when their keys are equal. Primitive keys pair a
/// [`Tag`] with the stringified value, reference keys hold the [`Uid`] of the reference.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    #[display("{_0}{_1}")]
    Primitive(Tag, String),
    #[display("o{_0}")]
    Reference(Uid),
}

impl Key {
    pub fn null() -> Key {
        Key::Primitive(Tag::Null, String::from("null"))
    }

    pub fn boolean(value: bool) -> Key {
        Key::Primitive(Tag::Boolean, value.to_string())
    }

    pub fn number(value: f64) -> Key {
        Key::Primitive(Tag::Number, number_repr(value))
    }

    pub fn string(value: &str) -> Key {
        Key::Primitive(Tag::String, String::from(value))
    }

    pub const fn reference(uid: Uid) -> Key {
        Key::Reference(uid)
    }

    /// Returns the [`Tag`] of a primitive key, or `None` for a reference.
    pub const fn tag(&self) -> Option<Tag> {
        match self {
            Key::Primitive(tag, _) => Some(*tag),
            Key::Reference(_) => None,
        }
    }

    pub const fn is_reference(&self) -> bool {
        matches!(self, Key::Reference(_))
    }
}

/// Stringifies a number the way a host would print it: the shortest digits that round-trip, no
/// trailing `.0` on integral values, a single zero and the spelled out non-finite values. Decimal
/// exponents of 21 and above, or below -6, switch to exponent form (`1e+21`, `1.5e-7`).
pub(crate) fn number_repr(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    } else if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    } else if value == 0.0 {
        // Folds -0 into 0.
        return String::from("0");
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // LowerExp without a precision gives the shortest round-trip digits, e.g. `1.5e-7`.
    let sci = format!("{:e}", value.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{value}");
    };

    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let n = exp + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if (1..=21).contains(&n) {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if (-5..=0).contains(&n) {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if n > 0 { "+" } else { "-" };
        let exp_abs = (n - 1).abs();
        if rest.is_empty() {
            format!("{first}e{exp_sign}{exp_abs}")
        } else {
            format!("{first}.{rest}e{exp_sign}{exp_abs}")
        }
    };

    format!("{sign}{body}")
}
