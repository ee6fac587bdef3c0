//! The path tokenizer.
//!
//! Grammar: a path is dot-separated segments, each segment a name followed
//! by zero or more `[<digits>]` bracket groups. A segment with bracket
//! groups yields its `Named` token first, then one `Indexed` token per
//! group, so `listB[2]` yields `Named("listB")`, `Indexed(2)` and
//! `matrix[0][1]` addresses into a list of lists.
//!
//! Parsing is a pure function of the input string; no tree access happens
//! here and malformed input is rejected before any resolution starts.

use crate::error::PathError;
use crate::path::Token;

/// Splits a raw path string into navigation tokens.
pub(crate) fn parse_tokens(path: &str) -> Result<Vec<Token>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let mut tokens = Vec::new();
    for segment in path.split('.') {
        parse_segment(path, segment, &mut tokens)?;
    }
    Ok(tokens)
}

fn parse_segment(path: &str, segment: &str, tokens: &mut Vec<Token>) -> Result<(), PathError> {
    let (name, mut rest) = match segment.find('[') {
        Some(at) => (&segment[..at], &segment[at..]),
        None => (segment, ""),
    };

    // Covers leading/trailing/doubled dots and segments starting with `[`.
    if name.is_empty() {
        return Err(PathError::EmptySegment {
            path: path.to_owned(),
        });
    }
    if name.contains(']') {
        return Err(PathError::UnbalancedBrackets {
            segment: segment.to_owned(),
        });
    }
    tokens.push(Token::Named(name.to_owned()));

    while !rest.is_empty() {
        let Some(after_open) = rest.strip_prefix('[') else {
            return Err(PathError::TrailingCharacters {
                segment: segment.to_owned(),
            });
        };
        let Some(close) = after_open.find(']') else {
            return Err(PathError::UnbalancedBrackets {
                segment: segment.to_owned(),
            });
        };
        let digits = &after_open[..close];
        let index = parse_index(segment, digits)?;
        tokens.push(Token::Indexed(index));
        rest = &after_open[close + 1..];
    }
    Ok(())
}

fn parse_index(segment: &str, digits: &str) -> Result<usize, PathError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PathError::InvalidIndex {
            segment: segment.to_owned(),
            index: digits.to_owned(),
        });
    }
    // All-digit input can still overflow usize.
    digits.parse().map_err(|_| PathError::InvalidIndex {
        segment: segment.to_owned(),
        index: digits.to_owned(),
    })
}
