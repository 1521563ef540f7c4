//! The command registry and typed-overload dispatch.
//!
//! Each command label owns a fixed arity and an ordered list of overloads;
//! the first overload whose type pattern matches the top of the stack wins.

use std::collections::HashMap;

use quire_foundation::{Error, Result, Value, ValueType};

/// One element of an overload's positional type pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches only [`ValueType::Number`].
    Num,
    /// Matches only [`ValueType::String`].
    Str,
    /// Wildcard, matches every type tag.
    Any,
}

impl Pattern {
    /// Returns true if this pattern element accepts the given type tag.
    #[must_use]
    pub const fn accepts(self, tag: ValueType) -> bool {
        match self {
            Self::Num => matches!(tag, ValueType::Number),
            Self::Str => matches!(tag, ValueType::String),
            Self::Any => true,
        }
    }
}

/// The operation applied when an overload matches.
///
/// Receives the popped operands in declaration order (deepest consumed
/// first) and produces the single value pushed back.
pub type CommandFn = fn(Vec<Value>) -> Result<Value>;

/// One (type pattern, operation) pair for a command label.
#[derive(Clone, Debug)]
pub struct Overload {
    pattern: Vec<Pattern>,
    apply: CommandFn,
}

impl Overload {
    /// Creates an overload from its positional pattern and operation.
    #[must_use]
    pub fn new(pattern: Vec<Pattern>, apply: CommandFn) -> Self {
        Self { pattern, apply }
    }

    /// Returns true if every pattern element accepts its operand tag.
    fn matches(&self, tags: &[ValueType]) -> bool {
        self.pattern.len() == tags.len()
            && self.pattern.iter().zip(tags).all(|(p, t)| p.accepts(*t))
    }
}

#[derive(Clone, Debug)]
struct Command {
    arity: usize,
    overloads: Vec<Overload>,
}

/// Registry mapping command labels to their ordered overload lists.
#[derive(Clone, Debug, Default)]
pub struct CommandSet {
    commands: HashMap<char, Command>,
}

impl CommandSet {
    /// Creates an empty command set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Creates a command set preloaded with the standard commands.
    ///
    /// Currently that is `+` with three overloads, tried in order:
    /// `(num, num)` numeric sum, `(str, any)` and `(any, str)` string
    /// concatenation with the non-string operand stringified.
    #[must_use]
    pub fn standard() -> Self {
        let mut commands = Self::new();
        commands.register('+', Overload::new(vec![Pattern::Num, Pattern::Num], numeric_sum));
        commands.register('+', Overload::new(vec![Pattern::Str, Pattern::Any], concatenated));
        commands.register('+', Overload::new(vec![Pattern::Any, Pattern::Str], concatenated));
        commands
    }

    /// Appends one overload to a label's list.
    ///
    /// The first registration for a label fixes its arity.
    ///
    /// # Panics
    /// Panics if a later overload's pattern length differs from the
    /// label's established arity; that is a wiring bug in the host.
    pub fn register(&mut self, label: char, overload: Overload) {
        let arity = overload.pattern.len();
        let command = self.commands.entry(label).or_insert_with(|| Command {
            arity,
            overloads: Vec::new(),
        });
        assert_eq!(
            command.arity, arity,
            "overload arity mismatch for '{label}': registered {}, got {arity}",
            command.arity
        );
        command.overloads.push(overload);
    }

    /// Returns true if the label has at least one registered overload.
    #[must_use]
    pub fn contains(&self, label: char) -> bool {
        self.commands.contains_key(&label)
    }

    /// Returns the fixed arity of a label, if registered.
    #[must_use]
    pub fn arity(&self, label: char) -> Option<usize> {
        self.commands.get(&label).map(|c| c.arity)
    }

    /// Returns the number of registered labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no labels are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Dispatches a label against the value stack.
    ///
    /// Inspects the top-of-stack type tags, selects the first overload
    /// whose pattern fully matches, pops the operands, applies the
    /// operation, and pushes the single result. The stack mutation is the
    /// only observable effect.
    ///
    /// # Errors
    /// - [`Error::UnknownCommand`] if the label is not registered.
    /// - [`Error::StackUnderflow`] if the stack is shallower than the
    ///   label's arity.
    /// - [`Error::NoMatchingOverload`] if no pattern accepts the operand
    ///   tags.
    pub fn dispatch(&self, label: char, stack: &mut Vec<Value>) -> Result<()> {
        let command = self
            .commands
            .get(&label)
            .ok_or(Error::UnknownCommand { label })?;

        let found = stack.len();
        if found < command.arity {
            return Err(Error::StackUnderflow {
                label,
                needed: command.arity,
                found,
            });
        }

        let split = found - command.arity;
        let tags: Vec<ValueType> = stack[split..].iter().map(Value::value_type).collect();
        let overload = command
            .overloads
            .iter()
            .find(|o| o.matches(&tags))
            .ok_or(Error::NoMatchingOverload {
                label,
                operands: tags,
            })?;

        let operands = stack.split_off(split);
        let result = (overload.apply)(operands)?;
        stack.push(result);
        Ok(())
    }
}

/// `(num, num)` addition.
fn numeric_sum(operands: Vec<Value>) -> Result<Value> {
    let numbers: Option<Vec<f64>> = operands.iter().map(Value::as_number).collect();
    match numbers.as_deref() {
        Some([a, b]) => Ok(Value::Number(a + b)),
        _ => Err(Error::NoMatchingOverload {
            label: '+',
            operands: operands.iter().map(Value::value_type).collect(),
        }),
    }
}

/// String concatenation with non-string operands stringified.
fn concatenated(operands: Vec<Value>) -> Result<Value> {
    let mut text = String::new();
    for operand in &operands {
        text.push_str(&operand.to_string());
    }
    Ok(Value::from(text))
}
