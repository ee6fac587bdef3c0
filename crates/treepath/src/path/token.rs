//! Navigation tokens produced by path parsing.

use std::fmt;

/// A single parsed unit of a path.
///
/// A path addresses one element in the tree as an ordered sequence of
/// tokens. `Named` tokens select a child by name inside a keyed container
/// (root, Collection, Entity, Relationship); `Indexed` tokens select a
/// child by zero-based position inside a List.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Selects the first child whose name matches.
    Named(String),
    /// Selects the child at a zero-based position.
    Indexed(usize),
}

impl Token {
    /// Returns the name selected by this token, if it is `Named`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Named(name) => Some(name),
            Token::Indexed(_) => None,
        }
    }

    /// Returns the position selected by this token, if it is `Indexed`.
    pub fn index(&self) -> Option<usize> {
        match self {
            Token::Named(_) => None,
            Token::Indexed(index) => Some(*index),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Named(name) => f.write_str(name),
            Token::Indexed(index) => write!(f, "[{index}]"),
        }
    }
}

/// Writes a token sequence in path syntax: `.` before every `Named` token
/// except the first, `Indexed` tokens appended bare.
pub(crate) fn write_tokens(f: &mut fmt::Formatter<'_>, tokens: &[Token]) -> fmt::Result {
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && matches!(token, Token::Named(_)) {
            f.write_str(".")?;
        }
        write!(f, "{token}")?;
    }
    Ok(())
}
