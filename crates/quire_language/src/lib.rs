//! Lexing pipeline, block parser, command dispatch, and stack machine for
//! the Quire esoteric language.
//!
//! This crate provides:
//! - [`lex_strings`] / [`lex_numbers`] / [`lex`] - The staged lexing pipeline
//! - [`parse_blocks`] / [`parse`] - Block structuring into a nested token tree
//! - [`CommandSet`] - Typed-overload command registry and dispatch
//! - [`Machine`] / [`eval`] - The stack-machine executor

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod command;
mod lexer;
mod machine;
mod parser;

pub use command::{CommandFn, CommandSet, Overload, Pattern};
pub use lexer::{lex, lex_numbers, lex_strings};
pub use machine::{BlockHandler, Machine, eval};
pub use parser::{parse, parse_blocks};
