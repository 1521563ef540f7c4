//! Core data types for the Quire language core.
//!
//! This crate provides:
//! - [`Token`] - The nested token tree produced by the lexing pipeline
//! - [`BlockKind`] - The structural block markers (`W`, `R`, `M`, `?`, `[`)
//! - [`Value`] - The runtime datum living on the value stack
//! - [`ValueType`] - Runtime type tags used for overload matching
//! - [`Error`] - The fatal error conditions of the pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod token;
mod types;
mod value;

pub use error::{Error, Imbalance, Result};
pub use token::{BlockKind, Token, flatten, max_depth};
pub use types::ValueType;
pub use value::Value;
