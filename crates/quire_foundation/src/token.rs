//! The token tree produced by the lexing pipeline.
//!
//! Tokens are built once by the lexers and block parser and are immutable
//! thereafter. Blocks nest: a block's body is itself a sequence of tokens.

/// One unit of the token tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A numeric literal, coalesced by the number lexer.
    Number(f64),
    /// A string literal, extracted by the string lexer.
    String(String),
    /// A single bare character: a command label once execution reaches it.
    Symbol(char),
    /// A nested block introduced by a structural marker.
    Block(BlockKind, Vec<Token>),
}

impl Token {
    /// Returns the numeric value if this is a number token.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this is a string token.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the character if this is a symbol token.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<char> {
        match self {
            Self::Symbol(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the kind and body if this is a block token.
    #[must_use]
    pub fn as_block(&self) -> Option<(BlockKind, &[Token])> {
        match self {
            Self::Block(kind, body) => Some((*kind, body)),
            _ => None,
        }
    }

    /// Returns true if this is a block token.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Self::Block(_, _))
    }

    /// Returns the nesting depth of this token: 0 for leaves, 1 + the
    /// deepest body depth for blocks.
    #[must_use]
    pub fn depth(&self) -> usize {
        max_depth(std::slice::from_ref(self))
    }
}

/// The kind tag of a block token.
///
/// The names follow the naming convention of the markers; all four
/// control-flow kinds are placeholders in this version, and `Literal` is
/// reserved for quoted block values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `W` - while-style block.
    While,
    /// `R` - repeat-style block.
    Repeat,
    /// `M` - map-style block.
    Map,
    /// `?` - conditional block.
    Decision,
    /// `[` - literal (unevaluated) block value.
    Literal,
}

impl BlockKind {
    /// Returns the kind opened by the given marker character, if any.
    ///
    /// `}` is the universal closer and is never a kind.
    #[must_use]
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'W' => Some(Self::While),
            'R' => Some(Self::Repeat),
            'M' => Some(Self::Map),
            '?' => Some(Self::Decision),
            '[' => Some(Self::Literal),
            _ => None,
        }
    }

    /// Returns the marker character that opens this kind.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::While => 'W',
            Self::Repeat => 'R',
            Self::Map => 'M',
            Self::Decision => '?',
            Self::Literal => '[',
        }
    }

    /// Returns a human-readable name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::While => "while",
            Self::Repeat => "repeat",
            Self::Map => "map",
            Self::Decision => "decision",
            Self::Literal => "literal",
        }
    }
}

/// Returns the maximum nesting depth of a token sequence.
///
/// A sequence with no blocks has depth 0. Walks the tree with an explicit
/// work list so adversarially deep trees cannot exhaust the call stack.
#[must_use]
pub fn max_depth(tokens: &[Token]) -> usize {
    let mut deepest = 0;
    let mut work: Vec<(&Token, usize)> = tokens.iter().map(|t| (t, 0)).collect();
    while let Some((token, level)) = work.pop() {
        if let Token::Block(_, body) = token {
            deepest = deepest.max(level + 1);
            work.extend(body.iter().map(|t| (t, level + 1)));
        }
    }
    deepest
}

/// Flattens a token tree back to the flat sequence the block parser saw:
/// each block becomes its opening marker, its flattened body, and a `}`.
#[must_use]
pub fn flatten(tokens: &[Token]) -> Vec<Token> {
    enum Step<'a> {
        Emit(&'a Token),
        Close,
    }

    let mut out = Vec::new();
    let mut work: Vec<Step> = tokens.iter().rev().map(Step::Emit).collect();
    while let Some(step) = work.pop() {
        match step {
            Step::Close => out.push(Token::Symbol('}')),
            Step::Emit(Token::Block(kind, body)) => {
                out.push(Token::Symbol(kind.marker()));
                work.push(Step::Close);
                work.extend(body.iter().rev().map(Step::Emit));
            }
            Step::Emit(leaf) => out.push(leaf.clone()),
        }
    }
    out
}
