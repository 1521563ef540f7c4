//! The two-stage lexing pipeline.
//!
//! Stage one extracts quoted string literals and passes every other
//! character through as a single-character symbol. Stage two coalesces
//! digit runs into numeric literal tokens. Everything downstream consumes
//! the combined output via [`lex`].

use std::mem;

use quire_foundation::{Error, Result, Token};

/// Extracts quoted string literals from raw source.
///
/// A `"` outside a string opens it, a `"` inside closes it and emits the
/// accumulated text. A backslash is consumed, never emitted; it makes the
/// following character literal content, which is how an escaped `"` ends
/// up inside a string instead of closing it. Every other character outside
/// a string passes through as a [`Token::Symbol`].
///
/// A string left open at end of input is silently discarded.
#[must_use]
pub fn lex_strings(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in source.chars() {
        if escaped {
            escaped = false;
            if in_string {
                buffer.push(c);
            } else {
                tokens.push(Token::Symbol(c));
            }
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            if in_string {
                tokens.push(Token::String(mem::take(&mut buffer)));
            }
            in_string = !in_string;
        } else if in_string {
            buffer.push(c);
        } else {
            tokens.push(Token::Symbol(c));
        }
    }

    tokens
}

/// Coalesces digit runs in the string lexer's output into number tokens.
///
/// A digit starts accumulation; the set of characters allowed to continue
/// depends on the previous buffered character (after `e`/`E` a sign or
/// digit, otherwise a digit, `.`, or exponent marker). The first unit that
/// cannot continue the literal finalizes it and is emitted on its own.
///
/// Deviation from the reference behavior, which dropped an in-progress
/// buffer at end of input: the trailing buffer is finalized, so `2.5e-3`
/// lexes to a single number and a trailing `1e` reports
/// [`Error::MalformedNumberLiteral`] instead of vanishing.
///
/// # Errors
/// Returns [`Error::MalformedNumberLiteral`] if an accumulated buffer is
/// not a valid numeral (the continuation rules admit shapes like `1e5e3`).
pub fn lex_numbers(units: Vec<Token>) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();

    for unit in units {
        match unit {
            Token::Symbol(c) if continues_number(&buffer, c) => buffer.push(c),
            other => {
                if !buffer.is_empty() {
                    tokens.push(finish_number(mem::take(&mut buffer))?);
                }
                tokens.push(other);
            }
        }
    }
    if !buffer.is_empty() {
        tokens.push(finish_number(buffer)?);
    }

    Ok(tokens)
}

/// Runs the full lexing pipeline: strings, then numbers.
///
/// # Errors
/// Returns [`Error::MalformedNumberLiteral`] if a digit buffer is not a
/// valid numeral.
pub fn lex(source: &str) -> Result<Vec<Token>> {
    lex_numbers(lex_strings(source))
}

/// Returns true if `c` may extend the numeric literal accumulated so far.
///
/// An empty buffer means we are outside a number, where only a digit may
/// start one.
fn continues_number(buffer: &str, c: char) -> bool {
    match buffer.chars().next_back() {
        None => c.is_ascii_digit(),
        Some('e' | 'E') => c.is_ascii_digit() || c == '+' || c == '-',
        Some(_) => c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E',
    }
}

fn finish_number(buffer: String) -> Result<Token> {
    match buffer.parse::<f64>() {
        Ok(n) => Ok(Token::Number(n)),
        Err(_) => Err(Error::MalformedNumberLiteral { literal: buffer }),
    }
}
