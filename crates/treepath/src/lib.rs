//! treepath: path-addressed hierarchical element trees.
//!
//! This crate implements the addressing core of a document-like model:
//! typed elements nested in a heterogeneous in-memory tree, addressed by
//! textual paths that mix name-based and position-based steps
//! (`collectionA.listB[2].leafC`), with create/read/update/delete at the
//! resolved location.
//!
//! # Overview
//!
//! - **Parsing**: a path string becomes an ordered token sequence
//!   (`Named` / `Indexed`); malformed input is rejected before any tree
//!   access.
//! - **Resolution**: tokens are walked against the live tree with an index
//!   cursor; failures report the longest valid prefix and the failing
//!   token.
//! - **Mutation**: edits branch exhaustively on the container kind. Keyed
//!   containers (Collection, Entity, Relationship) enforce sibling-name
//!   uniqueness on create and replace by name identity; Lists append at
//!   the end, replace and remove strictly by position.
//!
//! # Quick Start
//!
//! ```rust
//! use treepath::{Collection, Property, Tree, Value};
//!
//! let mut tree = Tree::new();
//! tree.create_root(Collection::new("orders")).unwrap();
//! tree.create("orders", Property::new("o1", "open")).unwrap();
//!
//! let element = tree.get("orders.o1").unwrap();
//! assert_eq!(element.name(), Some("o1"));
//!
//! tree.set_value("orders.o1", "closed").unwrap();
//! assert_eq!(tree.value("orders.o1").unwrap(), &Value::text("closed"));
//!
//! tree.delete("orders.o1").unwrap();
//! assert!(tree.get("orders.o1").is_err());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Element variants, Value, Tree)
//! - [`path`]: Path grammar, tokens, and parsing
//! - [`resolve`]: Read-only path resolution
//! - [`mutate`]: Create/update/delete against a resolved location
//! - [`error`]: Error types
//!
//! # Concurrency
//!
//! The core is synchronous and does no I/O. Writes take `&mut Tree` and
//! reads take `&Tree`, so the exclusive-writer/shared-reader policy is
//! enforced by the borrow checker; serializing writers per tree instance
//! is the owning caller's concern.

pub mod error;
pub mod model;
pub mod mutate;
pub mod path;
pub mod resolve;

// Re-export commonly used types at crate root
pub use error::{NotFound, PathError, TreeError};
pub use model::{
    Collection, Element, ElementKind, Entity, KeyMode, List, Property, Relationship, Tree, Value,
};
pub use mutate::{create_element, create_root_element, delete_element, update_element};
pub use path::{Path, Token};
pub use resolve::{resolve, resolve_path};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
