//! Read-only resolution of paths against a live tree.
//!
//! Resolution walks the parsed tokens left to right with an index cursor,
//! keeping a current child sequence and its key mode. It never mutates the
//! tree, so any number of resolutions may run concurrently over the same
//! `&Tree`.

use crate::error::{NotFound, TreeError};
use crate::model::{Element, KeyMode, Tree};
use crate::path::{Path, Token};

/// Resolves a raw path string against the tree.
///
/// # Errors
///
/// [`TreeError::MalformedPath`] when the string violates the grammar
/// (checked before any tree access), [`TreeError::NotFound`] when a token
/// fails to resolve. The `NotFound` carries the consumed token prefix and
/// the failing token.
pub fn resolve<'a>(tree: &'a Tree, path: &str) -> Result<&'a Element, TreeError> {
    let parsed = Path::parse(path)?;
    resolve_path(tree, &parsed)
}

/// Resolves an already-parsed path against the tree.
pub fn resolve_path<'a>(tree: &'a Tree, path: &Path) -> Result<&'a Element, TreeError> {
    walk(&tree.elements, path.tokens())
}

/// Walks `tokens` starting from a root child sequence (keyed by name).
pub(crate) fn walk<'a>(roots: &'a [Element], tokens: &[Token]) -> Result<&'a Element, TreeError> {
    let mut children = roots;
    let mut mode = KeyMode::ByName;

    for (i, token) in tokens.iter().enumerate() {
        let found = lookup(children, mode, token).ok_or_else(|| NotFound::at(tokens, i))?;
        if i + 1 == tokens.len() {
            return Ok(found);
        }
        // More tokens remain, so the found node must itself be a container.
        match found.children_with_mode() {
            Some((next_mode, next_children)) => {
                mode = next_mode;
                children = next_children;
            }
            None => return Err(NotFound::at(tokens, i + 1).into()),
        }
    }

    Err(TreeError::MalformedPath(crate::error::PathError::Empty))
}

/// Looks up one token in a child sequence under the given key mode.
///
/// A `Named` token against a positional sequence (or vice versa) resolves
/// to nothing; that mismatch surfaces as `NotFound` at the token.
pub(crate) fn lookup<'a>(
    children: &'a [Element],
    mode: KeyMode,
    token: &Token,
) -> Option<&'a Element> {
    match (mode, token) {
        (KeyMode::ByName, Token::Named(name)) => find_by_name(children, name),
        (KeyMode::ByPosition, Token::Indexed(index)) => children.get(*index),
        _ => None,
    }
}

/// Finds the first child whose name matches.
///
/// First match wins: if duplicate names ever exist under one parent due to
/// corrupted data, resolution is still deterministic. The uniqueness guard
/// uses this same lookup, so read and collision-check semantics cannot
/// diverge.
pub(crate) fn find_by_name<'a>(children: &'a [Element], name: &str) -> Option<&'a Element> {
    children.iter().find(|child| child.name() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Collection, Entity, List, Property, Relationship, Value};

    fn sample() -> Tree {
        let mut tree = Tree::new();
        tree.elements.push(
            Collection::new("plant")
                .with_child(Property::new("location", "hall 3"))
                .with_child(
                    List::new("lines")
                        .with_item(
                            Collection::anonymous().with_child(Property::new("speed", 40i64)),
                        )
                        .with_item(
                            Collection::anonymous().with_child(Property::new("speed", 55i64)),
                        ),
                )
                .with_child(Entity::new("motor").with_statement(Property::new("rpm", 900i64)))
                .with_child(
                    Relationship::new("feeds").with_annotation(Property::new("note", "primary")),
                )
                .into(),
        );
        tree
    }

    #[test]
    fn test_resolve_root_child() {
        let tree = sample();
        assert_eq!(tree.get("plant").unwrap().name(), Some("plant"));
    }

    #[test]
    fn test_resolve_nested_named() {
        let tree = sample();
        let element = resolve(&tree, "plant.location").unwrap();
        assert_eq!(element.name(), Some("location"));
    }

    #[test]
    fn test_resolve_through_list() {
        let tree = sample();
        let element = resolve(&tree, "plant.lines[1].speed").unwrap();
        match element {
            Element::Property(p) => assert_eq!(p.value, Value::Int(55)),
            other => panic!("expected property, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_resolve_entity_statement_and_annotation() {
        let tree = sample();
        assert!(resolve(&tree, "plant.motor.rpm").is_ok());
        assert!(resolve(&tree, "plant.feeds.note").is_ok());
    }

    #[test]
    fn test_not_found_carries_prefix_and_failing_token() {
        let tree = sample();
        let err = resolve(&tree, "plant.missing.x").unwrap_err();
        match err {
            TreeError::NotFound(nf) => {
                assert_eq!(nf.consumed, vec![Token::Named("plant".to_string())]);
                assert_eq!(nf.failing, Token::Named("missing".to_string()));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_index_out_of_range() {
        let tree = sample();
        let err = resolve(&tree, "plant.lines[2]").unwrap_err();
        match err {
            TreeError::NotFound(nf) => assert_eq!(nf.failing, Token::Indexed(2)),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_named_token_against_list_fails() {
        let tree = sample();
        let err = resolve(&tree, "plant.lines.first").unwrap_err();
        match err {
            TreeError::NotFound(nf) => assert_eq!(nf.failing, Token::Named("first".to_string())),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_indexed_token_against_keyed_container_fails() {
        let tree = sample();
        let err = resolve(&tree, "plant[0]").unwrap_err();
        match err {
            TreeError::NotFound(nf) => {
                assert_eq!(nf.consumed, vec![Token::Named("plant".to_string())]);
                assert_eq!(nf.failing, Token::Indexed(0));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_tokens_remaining_past_leaf_fail_on_next_token() {
        let tree = sample();
        let err = resolve(&tree, "plant.location.deeper").unwrap_err();
        match err {
            TreeError::NotFound(nf) => {
                assert_eq!(
                    nf.consumed,
                    vec![
                        Token::Named("plant".to_string()),
                        Token::Named("location".to_string())
                    ]
                );
                assert_eq!(nf.failing, Token::Named("deeper".to_string()));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_path_fails_before_tree_access() {
        let tree = Tree::new();
        let err = resolve(&tree, "a..b").unwrap_err();
        assert!(matches!(err, TreeError::MalformedPath(_)));
    }

    #[test]
    fn test_duplicate_names_first_match_wins() {
        // Corrupted state constructed directly: two siblings named "dup".
        let mut tree = Tree::new();
        tree.elements
            .push(Property::new("dup", Value::Int(1)).into());
        tree.elements
            .push(Property::new("dup", Value::Int(2)).into());

        match resolve(&tree, "dup").unwrap() {
            Element::Property(p) => assert_eq!(p.value, Value::Int(1)),
            other => panic!("expected property, got {:?}", other.kind()),
        }
    }
}
