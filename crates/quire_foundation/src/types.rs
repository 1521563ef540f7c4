//! Runtime type tags for overload matching.

use std::fmt;

/// The type tag carried by every [`crate::Value`].
///
/// Overload patterns match against these tags; the names used in `Display`
/// are the ones that appear in overload diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A 64-bit floating point number.
    Number,
    /// A text string.
    String,
    /// A quoted, unevaluated block of code.
    Block,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "num"),
            Self::String => write!(f, "str"),
            Self::Block => write!(f, "block"),
        }
    }
}
