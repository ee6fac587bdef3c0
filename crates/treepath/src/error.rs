//! Error types for path parsing, resolution, and mutation.

use std::fmt;

use thiserror::Error;

use crate::model::ElementKind;
use crate::path::{write_tokens, Token};

/// Error while parsing a path string; no tree access has happened yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,

    #[error("empty segment in path `{path}`")]
    EmptySegment { path: String },

    #[error("unbalanced brackets in segment `{segment}`")]
    UnbalancedBrackets { segment: String },

    #[error("index `{index}` in segment `{segment}` is not a valid non-negative integer")]
    InvalidIndex { segment: String, index: String },

    #[error("unexpected characters after `]` in segment `{segment}`")]
    TrailingCharacters { segment: String },
}

/// A failed resolution: which token failed and how far the walk got.
///
/// `consumed` is the longest valid prefix of the path, so callers can
/// report exactly where the address diverged from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    /// Tokens successfully consumed before the failure.
    pub consumed: Vec<Token>,
    /// The token that could not be resolved.
    pub failing: Token,
}

impl NotFound {
    /// Builds a `NotFound` for the token at `index` within `tokens`.
    pub(crate) fn at(tokens: &[Token], index: usize) -> Self {
        NotFound {
            consumed: tokens[..index].to_vec(),
            failing: tokens[index].clone(),
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.consumed.is_empty() {
            write!(f, "no element `{}` at the root", self.failing)
        } else {
            write!(f, "no element `{}` under `", self.failing)?;
            write_tokens(f, &self.consumed)?;
            f.write_str("`")
        }
    }
}

/// Error while resolving or mutating a tree.
///
/// All variants are terminal for the requested operation; nothing here is
/// transient or retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// The path string violates the grammar.
    #[error(transparent)]
    MalformedPath(#[from] PathError),

    /// Resolution failed at some token.
    #[error("{0}")]
    NotFound(NotFound),

    /// A create would duplicate a sibling name in a keyed container.
    #[error("an element named `{name}` already exists among its siblings")]
    CollidingName { name: String },

    /// A named element was pushed into a list; list items are anonymous.
    #[error("named element `{name}` cannot be appended to a list")]
    NamedInList { name: String },

    /// An anonymous element was pushed into a keyed container.
    #[error("elements in a keyed container must carry a non-empty name")]
    MissingName,

    /// The create target is a leaf and cannot hold children.
    #[error("element at `{path}` is a {kind} and cannot hold children")]
    NotAContainer { path: String, kind: ElementKind },

    /// A value read/write targeted an element that carries no value.
    #[error("element at `{path}` is a {kind} and carries no value")]
    NoValue { path: String, kind: ElementKind },
}

impl From<NotFound> for TreeError {
    fn from(not_found: NotFound) -> Self {
        TreeError::NotFound(not_found)
    }
}
