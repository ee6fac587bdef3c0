//! Path grammar: dot-separated named segments with `[n]` index suffixes.
//!
//! Paths address elements inside a [`Tree`](crate::model::Tree) by mixing
//! name-based and position-based steps, e.g. `collectionA.listB[2].leafC`.

mod parse;
mod token;

pub use token::Token;

pub(crate) use token::write_tokens;

use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// A parsed path: an ordered, immutable token sequence.
///
/// Construct with [`Path::parse`] (or `str::parse`). `Display` renders the
/// canonical string form, which reparses to the same tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    tokens: Vec<Token>,
}

impl Path {
    /// Parses a raw path string into tokens.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] when the string violates the grammar: empty
    /// path or segment, unbalanced brackets, non-numeric index, or stray
    /// characters after a bracket group.
    pub fn parse(path: &str) -> Result<Path, PathError> {
        parse::parse_tokens(path).map(|tokens| Path { tokens })
    }

    /// Returns the parsed tokens in navigation order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<Vec<Token>> for Path {
    fn from(tokens: Vec<Token>) -> Self {
        Path { tokens }
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, &self.tokens)
    }
}
