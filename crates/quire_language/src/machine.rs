//! The stack-machine executor.
//!
//! Walks the token tree produced by the block parser: literals push values,
//! symbols dispatch through the command registry, and block tokens go to a
//! handler table keyed by block kind.

use std::collections::HashMap;

use quire_foundation::{BlockKind, Error, Result, Token, Value};

use crate::command::CommandSet;
use crate::parser::parse;

/// Operation invoked for a block token.
///
/// Receives the machine so real block semantics can evaluate the body
/// re-entrantly via [`Machine::run_on`], the block's body, and the current
/// stack.
pub type BlockHandler = fn(&Machine, &[Token], &mut Vec<Value>) -> Result<()>;

/// The executor: a command registry plus a block-handler table.
///
/// Each call to [`Machine::run`] owns a fresh value stack for the duration
/// of that run; the machine itself carries no per-run state.
#[derive(Clone, Debug)]
pub struct Machine {
    commands: CommandSet,
    block_handlers: HashMap<BlockKind, BlockHandler>,
}

impl Machine {
    /// Creates a machine with the standard commands and the placeholder
    /// block handlers.
    ///
    /// The four control-flow kinds (`W`, `R`, `M`, `?`) are registered as
    /// identity operations: the body is ignored and the stack is left
    /// unchanged. Their real semantics are an extension point, added via
    /// [`Machine::register_block_handler`] without touching dispatch.
    /// `[` (literal blocks) has no default handler, so executing one
    /// reports [`Error::UnknownBlockType`] until quoted-code semantics
    /// land.
    #[must_use]
    pub fn new() -> Self {
        Self::with_commands(CommandSet::standard())
    }

    /// Creates a machine with a custom command registry and the same
    /// placeholder block handlers as [`Machine::new`].
    #[must_use]
    pub fn with_commands(commands: CommandSet) -> Self {
        let mut machine = Self {
            commands,
            block_handlers: HashMap::new(),
        };
        machine.register_block_handler(BlockKind::While, ignore_block);
        machine.register_block_handler(BlockKind::Repeat, ignore_block);
        machine.register_block_handler(BlockKind::Map, ignore_block);
        machine.register_block_handler(BlockKind::Decision, ignore_block);
        machine
    }

    /// Registers (or replaces) the handler for a block kind.
    pub fn register_block_handler(&mut self, kind: BlockKind, handler: BlockHandler) {
        self.block_handlers.insert(kind, handler);
    }

    /// Returns the machine's command registry.
    #[must_use]
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Executes a token sequence against a fresh stack and returns the
    /// final stack contents.
    ///
    /// # Errors
    /// Any dispatch or block-handler condition aborts the run; no partial
    /// stack escapes.
    pub fn run(&self, tokens: &[Token]) -> Result<Vec<Value>> {
        let mut stack = Vec::new();
        self.run_on(tokens, &mut stack)?;
        Ok(stack)
    }

    /// Executes a token sequence against a caller-owned stack.
    ///
    /// Block handlers may call this re-entrantly on block bodies.
    ///
    /// # Errors
    /// Any dispatch or block-handler condition aborts the run.
    pub fn run_on(&self, tokens: &[Token], stack: &mut Vec<Value>) -> Result<()> {
        for token in tokens {
            match token {
                Token::Number(n) => stack.push(Value::Number(*n)),
                Token::String(s) => stack.push(Value::String(s.clone())),
                Token::Symbol(label) => self.commands.dispatch(*label, stack)?,
                Token::Block(kind, body) => {
                    let handler =
                        self.block_handlers
                            .get(kind)
                            .ok_or(Error::UnknownBlockType {
                                kind: kind.marker(),
                            })?;
                    handler(self, body, stack)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the full pipeline on a default machine: lex, structure blocks,
/// execute, and return the final stack.
///
/// # Errors
/// Returns the first lexing, parsing, or execution condition.
pub fn eval(source: &str) -> Result<Vec<Value>> {
    let tokens = parse(source)?;
    Machine::new().run(&tokens)
}

/// The placeholder handler: body ignored, stack unchanged.
fn ignore_block(_machine: &Machine, _body: &[Token], _stack: &mut Vec<Value>) -> Result<()> {
    Ok(())
}
