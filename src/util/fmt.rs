use std::fmt::{self, Debug, Formatter};

/// Debug formats as the contained string, without quotes or escaping.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Joins already formatted items into set notation, e.g. `{a, b, c}`.
pub fn braced<I: Iterator<Item = String>>(items: I) -> String {
    format!("{{{}}}", items.collect::<Vec<String>>().join(", "))
}
