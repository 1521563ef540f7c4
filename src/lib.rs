//! Quire - front end and execution core of a minimal stack-based esoteric
//! language.
//!
//! This crate re-exports both layers of the Quire system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: quire_language   — Lexing pipeline, block parser, command
//!                             dispatch, stack machine
//! Layer 0: quire_foundation — Core types (Token, Value, ValueType, Error)
//! ```

pub use quire_foundation as foundation;
pub use quire_language as language;
