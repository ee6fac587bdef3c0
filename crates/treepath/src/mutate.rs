//! Structural edits against a resolved location.
//!
//! Each operation is a fresh resolve-mutate cycle over a `&mut Tree`; the
//! core holds nothing between calls. Dispatch over the container kinds is
//! an exhaustive match on the element enum, so adding a variant forces
//! every edit site to be revisited.

use crate::error::{NotFound, PathError, TreeError};
use crate::model::{Element, KeyMode, Tree};
use crate::path::{Path, Token};
use crate::resolve::find_by_name;

/// Creates `element` as a direct child of the tree root.
///
/// The root is keyed by name: the payload must carry a non-empty name and
/// the uniqueness guard runs against the current root children.
///
/// # Errors
///
/// [`TreeError::MissingName`], [`TreeError::CollidingName`].
pub fn create_root_element(tree: &mut Tree, element: Element) -> Result<(), TreeError> {
    keyed_insert(&mut tree.elements, element)
}

/// Creates `element` under the container addressed by `parent_path`.
///
/// List parents accept only anonymous payloads and always append at the
/// end. Keyed parents (Collection, Entity, Relationship) require a
/// non-empty name and run the uniqueness guard against their current
/// children. The parent is mutated in place; its child sequence grows by
/// one.
///
/// # Errors
///
/// [`TreeError::NotFound`] when the parent path does not resolve,
/// [`TreeError::NotAContainer`] when it resolves to a leaf,
/// [`TreeError::NamedInList`], [`TreeError::MissingName`],
/// [`TreeError::CollidingName`].
pub fn create_element(
    tree: &mut Tree,
    parent_path: &str,
    element: Element,
) -> Result<(), TreeError> {
    let parsed = Path::parse(parent_path)?;
    let parent = target_mut(&mut tree.elements, parsed.tokens())?;
    match parent {
        Element::List(list) => {
            if let Some(name) = element.name() {
                return Err(TreeError::NamedInList {
                    name: name.to_owned(),
                });
            }
            list.items.push(element);
            Ok(())
        }
        Element::Collection(collection) => keyed_insert(&mut collection.children, element),
        Element::Entity(entity) => keyed_insert(&mut entity.statements, element),
        Element::Relationship(relationship) => {
            keyed_insert(&mut relationship.annotations, element)
        }
        Element::Property(_) => Err(TreeError::NotAContainer {
            path: parsed.to_string(),
            kind: parent.kind(),
        }),
    }
}

/// Replaces the element at `path` with `replacement`.
///
/// Replacement identity follows the parent's key mode: positional for List
/// parents (any name on the payload is ignored), first-name-match for
/// keyed parents and the root. The replacement's own name is not required
/// to equal the old one; callers wanting strict identity preservation must
/// compare before calling.
///
/// # Errors
///
/// [`TreeError::NotFound`] when the path does not resolve.
pub fn update_element(tree: &mut Tree, path: &str, replacement: Element) -> Result<(), TreeError> {
    let parsed = Path::parse(path)?;
    let tokens = parsed.tokens();
    let (mode, children, last) = parent_children_mut(tree, tokens)?;
    let index =
        position_of(children, mode, last).ok_or_else(|| NotFound::at(tokens, tokens.len() - 1))?;
    children[index] = replacement;
    Ok(())
}

/// Removes the element at `path` from its parent's child sequence.
///
/// A root-depth path (a single `Named` token) takes a direct linear scan
/// over the root children; nested paths remove from the resolved parent,
/// by position for List parents and by first name match for keyed ones.
/// Sibling order of the remaining elements is preserved either way, and
/// the removed node is exactly the one resolution would have returned.
///
/// # Errors
///
/// [`TreeError::NotFound`] when the path does not resolve, including on a
/// second delete of the same path.
pub fn delete_element(tree: &mut Tree, path: &str) -> Result<(), TreeError> {
    let parsed = Path::parse(path)?;
    let tokens = parsed.tokens();
    if let [Token::Named(name)] = tokens {
        return delete_root(tree, name);
    }
    let (mode, children, last) = parent_children_mut(tree, tokens)?;
    let index =
        position_of(children, mode, last).ok_or_else(|| NotFound::at(tokens, tokens.len() - 1))?;
    children.remove(index);
    Ok(())
}

/// Top-level deletion by name: a direct scan over the root children.
fn delete_root(tree: &mut Tree, name: &str) -> Result<(), TreeError> {
    match tree
        .elements
        .iter()
        .position(|element| element.name() == Some(name))
    {
        Some(index) => {
            tree.elements.remove(index);
            Ok(())
        }
        None => Err(NotFound {
            consumed: Vec::new(),
            failing: Token::Named(name.to_owned()),
        }
        .into()),
    }
}

/// The uniqueness guard: name resolution whose absence means permission.
///
/// Deliberately implemented with the resolver's own lookup rather than a
/// separate index, so lookup-for-read and lookup-for-collision-check can
/// never disagree.
fn ensure_vacant(children: &[Element], name: &str) -> Result<(), TreeError> {
    match find_by_name(children, name) {
        Some(_) => Err(TreeError::CollidingName {
            name: name.to_owned(),
        }),
        None => Ok(()),
    }
}

/// Guarded append into a keyed child sequence.
fn keyed_insert(children: &mut Vec<Element>, element: Element) -> Result<(), TreeError> {
    let name = match element.name() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => return Err(TreeError::MissingName),
    };
    ensure_vacant(children, &name)?;
    children.push(element);
    Ok(())
}

/// Resolves the parent of the last token and returns its child sequence,
/// key mode, and the last token to apply.
fn parent_children_mut<'a>(
    tree: &'a mut Tree,
    tokens: &'a [Token],
) -> Result<(KeyMode, &'a mut Vec<Element>, &'a Token), TreeError> {
    let Some((last, parent_tokens)) = tokens.split_last() else {
        return Err(PathError::Empty.into());
    };
    if parent_tokens.is_empty() {
        return Ok((KeyMode::ByName, &mut tree.elements, last));
    }
    let parent = target_mut(&mut tree.elements, parent_tokens)?;
    match parent.children_with_mode_mut() {
        Some((mode, children)) => Ok((mode, children, last)),
        // Parent is a leaf, so the final token can never resolve.
        None => Err(NotFound::at(tokens, parent_tokens.len()).into()),
    }
}

/// Resolves `tokens` mutably, returning the addressed element.
pub(crate) fn target_mut<'a>(
    children: &'a mut Vec<Element>,
    tokens: &[Token],
) -> Result<&'a mut Element, TreeError> {
    target_mut_at(children, KeyMode::ByName, tokens, 0)
}

fn target_mut_at<'a>(
    children: &'a mut Vec<Element>,
    mode: KeyMode,
    tokens: &[Token],
    depth: usize,
) -> Result<&'a mut Element, TreeError> {
    let Some(token) = tokens.get(depth) else {
        return Err(PathError::Empty.into());
    };
    let child = match (mode, token) {
        (KeyMode::ByName, Token::Named(name)) => children
            .iter_mut()
            .find(|child| child.name() == Some(name.as_str())),
        (KeyMode::ByPosition, Token::Indexed(index)) => children.get_mut(*index),
        _ => None,
    };
    let child = child.ok_or_else(|| NotFound::at(tokens, depth))?;
    if depth + 1 == tokens.len() {
        return Ok(child);
    }
    match child.children_with_mode_mut() {
        Some((next_mode, next_children)) => {
            target_mut_at(next_children, next_mode, tokens, depth + 1)
        }
        None => Err(NotFound::at(tokens, depth + 1).into()),
    }
}

/// Applies the final token against a child sequence, yielding the slot
/// index for replacement or removal.
fn position_of(children: &[Element], mode: KeyMode, token: &Token) -> Option<usize> {
    match (mode, token) {
        (KeyMode::ByName, Token::Named(name)) => children
            .iter()
            .position(|child| child.name() == Some(name.as_str())),
        (KeyMode::ByPosition, Token::Indexed(index)) if *index < children.len() => Some(*index),
        _ => None,
    }
}
