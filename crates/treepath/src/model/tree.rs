//! The owning aggregate: a root-level set of named elements.

use crate::error::TreeError;
use crate::model::{Element, Value};
use crate::mutate::{
    create_element, create_root_element, delete_element, target_mut, update_element,
};
use crate::path::Path;
use crate::resolve::resolve;

/// A document-like aggregate of path-addressable elements.
///
/// The root behaves like a keyed container: its direct children carry
/// sibling-unique names and are addressed by a single `Named` token.
///
/// The tree imposes no locking. A write operation takes `&mut self`, so
/// the borrow checker enforces the exclusive-writer policy; shared reads
/// through `&self` may run concurrently with each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    /// Root children, keyed by name.
    pub elements: Vec<Element>,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Tree::default()
    }

    /// Returns the root children in order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Resolves `path` and returns the addressed element.
    ///
    /// # Errors
    ///
    /// [`TreeError::MalformedPath`] for grammar violations,
    /// [`TreeError::NotFound`] when some token fails to resolve.
    pub fn get(&self, path: &str) -> Result<&Element, TreeError> {
        resolve(self, path)
    }

    /// Creates `element` as a direct child of the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingName`] for anonymous payloads,
    /// [`TreeError::CollidingName`] when the name is already taken.
    pub fn create_root(&mut self, element: impl Into<Element>) -> Result<(), TreeError> {
        create_root_element(self, element.into())
    }

    /// Creates `element` under the container at `parent_path`.
    ///
    /// See [`create_element`] for the per-container rules.
    pub fn create(
        &mut self,
        parent_path: &str,
        element: impl Into<Element>,
    ) -> Result<(), TreeError> {
        create_element(self, parent_path, element.into())
    }

    /// Replaces the element at `path` with `replacement`.
    ///
    /// See [`update_element`] for the identity rules.
    pub fn update(&mut self, path: &str, replacement: impl Into<Element>) -> Result<(), TreeError> {
        update_element(self, path, replacement.into())
    }

    /// Removes the element at `path`.
    ///
    /// See [`delete_element`].
    pub fn delete(&mut self, path: &str) -> Result<(), TreeError> {
        delete_element(self, path)
    }

    /// Reads the value of the property leaf at `path`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoValue`] when the element is not a property.
    pub fn value(&self, path: &str) -> Result<&Value, TreeError> {
        match self.get(path)? {
            Element::Property(property) => Ok(&property.value),
            other => Err(TreeError::NoValue {
                path: path.to_owned(),
                kind: other.kind(),
            }),
        }
    }

    /// Replaces the value of the property leaf at `path` in place.
    ///
    /// This is value replacement, not node replacement: the element keeps
    /// its identity and only its payload changes.
    pub fn set_value(&mut self, path: &str, value: impl Into<Value>) -> Result<(), TreeError> {
        let parsed = Path::parse(path)?;
        match target_mut(&mut self.elements, parsed.tokens())? {
            Element::Property(property) => {
                property.value = value.into();
                Ok(())
            }
            other => Err(TreeError::NoValue {
                path: path.to_owned(),
                kind: other.kind(),
            }),
        }
    }
}
