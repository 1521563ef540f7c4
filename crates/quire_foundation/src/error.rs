//! Error types for the Quire pipeline.
//!
//! Every condition is fatal: a failing stage aborts the whole run and the
//! caller receives exactly one of these.

use std::fmt;

use thiserror::Error;

use crate::types::ValueType;

/// Result alias used throughout the Quire crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The terminating conditions of lexing, parsing, and execution.
///
/// Variants derive `PartialEq` so tests can assert the exact condition.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Block markers and closing braces did not pair up.
    #[error("unbalanced blocks - {0}")]
    UnbalancedBlocks(Imbalance),

    /// The number lexer accumulated a buffer that is not a valid numeral.
    #[error("malformed number literal '{literal}'")]
    MalformedNumberLiteral {
        /// The offending digit buffer, verbatim.
        literal: String,
    },

    /// A command label with no entry in the registry.
    #[error("no such command '{label}'")]
    UnknownCommand {
        /// The label that was dispatched.
        label: char,
    },

    /// The label exists but no overload's type pattern matches the operands.
    #[error("no matching overload for '{label}' with operand types ({})", .operands.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", "))]
    NoMatchingOverload {
        /// The label that was dispatched.
        label: char,
        /// The observed operand type tags, deepest-consumed first.
        operands: Vec<ValueType>,
    },

    /// A block token whose kind has no registered handler.
    #[error("unknown block type '{kind}'")]
    UnknownBlockType {
        /// The block's marker character.
        kind: char,
    },

    /// The value stack is shallower than the command's arity.
    #[error("stack underflow: '{label}' needs {needed} operands, found {found}")]
    StackUnderflow {
        /// The label that was dispatched.
        label: char,
        /// The command's fixed arity.
        needed: usize,
        /// The stack depth at dispatch time.
        found: usize,
    },
}

/// Which way the block nesting failed to balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Imbalance {
    /// End of input reached with open nesting.
    TooFewClosing,
    /// A `}` seen at nesting level zero.
    TooManyClosing,
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewClosing => write!(f, "too few closing braces"),
            Self::TooManyClosing => write!(f, "too many closing braces"),
        }
    }
}
