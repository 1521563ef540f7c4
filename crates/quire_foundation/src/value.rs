//! The runtime datum living on the value stack.

use std::fmt;

use crate::token::{Token, flatten};
use crate::types::ValueType;

/// A value on the executor's stack.
///
/// `Block` is the reserved quoted-code variant: no lexer output or standard
/// overload produces one today, but it carries a type tag and participates
/// in `any` matching so host extensions can push quoted bodies.
#[derive(Clone, Debug)]
pub enum Value {
    /// A 64-bit floating point number.
    Number(f64),
    /// A text string.
    String(String),
    /// A quoted, unevaluated block body.
    Block(Vec<Token>),
}

impl Value {
    /// Returns the type tag used for overload matching.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Block(_) => ValueType::Block,
        }
    }

    /// Attempts to extract the numeric value.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract the quoted block body.
    #[must_use]
    pub fn as_block(&self) -> Option<&[Token]> {
        match self {
            Self::Block(body) => Some(body),
            _ => None,
        }
    }
}

// Floats compare by bits so NaN stays reflexive.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Block(a), Self::Block(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => {
                // Whole numbers keep an explicit fractional part, so string
                // concatenation of 3.0 yields "3.0" rather than "3".
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{n}.0")
                } else {
                    write!(f, "{n}")
                }
            }
            Self::String(s) => write!(f, "{s}"),
            Self::Block(body) => {
                for token in flatten(body) {
                    match token {
                        Token::Number(n) => write!(f, "{}", Self::Number(n))?,
                        Token::String(s) => write!(f, "\"{s}\"")?,
                        Token::Symbol(c) => write!(f, "{c}")?,
                        // flatten never emits block tokens
                        Token::Block(..) => {}
                    }
                }
                Ok(())
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
