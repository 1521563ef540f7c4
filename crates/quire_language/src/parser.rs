//! The block-structuring parser.
//!
//! Groups block-opening markers and their matching `}` closers into nested
//! [`Token::Block`] nodes. Implemented with an explicit stack of open
//! frames on the heap, so nesting depth is bounded by memory rather than
//! by the host call stack.

use quire_foundation::{BlockKind, Error, Imbalance, Result, Token};

use crate::lexer::lex;

/// Builds the nested token tree from the number lexer's output.
///
/// Each marker in `W R M ? [` opens a block; `}` closes the innermost open
/// block. Every other token is appended to the current level unchanged.
///
/// # Errors
/// Returns [`Error::UnbalancedBlocks`] with [`Imbalance::TooManyClosing`]
/// for a `}` at nesting level zero, or [`Imbalance::TooFewClosing`] when
/// end of input is reached with open blocks.
pub fn parse_blocks(units: Vec<Token>) -> Result<Vec<Token>> {
    let mut frames: Vec<(BlockKind, Vec<Token>)> = Vec::new();
    let mut top = Vec::new();

    for unit in units {
        match unit {
            Token::Symbol('}') => {
                let Some((kind, body)) = frames.pop() else {
                    return Err(Error::UnbalancedBlocks(Imbalance::TooManyClosing));
                };
                current_level(&mut frames, &mut top).push(Token::Block(kind, body));
            }
            Token::Symbol(c) => match BlockKind::from_marker(c) {
                Some(kind) => frames.push((kind, Vec::new())),
                None => current_level(&mut frames, &mut top).push(Token::Symbol(c)),
            },
            other => current_level(&mut frames, &mut top).push(other),
        }
    }

    if frames.is_empty() {
        Ok(top)
    } else {
        Err(Error::UnbalancedBlocks(Imbalance::TooFewClosing))
    }
}

/// Runs the full front end: lexing pipeline, then block structuring.
///
/// # Errors
/// Returns any lexing or block-structure condition.
pub fn parse(source: &str) -> Result<Vec<Token>> {
    parse_blocks(lex(source)?)
}

/// The sequence tokens are currently appended to: the innermost open
/// frame's body, or the top level when no frame is open.
fn current_level<'a>(
    frames: &'a mut Vec<(BlockKind, Vec<Token>)>,
    top: &'a mut Vec<Token>,
) -> &'a mut Vec<Token> {
    match frames.last_mut() {
        Some((_, body)) => body,
        None => top,
    }
}
