//! Core data types: element variants, leaf values, and the owning tree.

mod element;
mod tree;
mod value;

pub use element::{Collection, Element, ElementKind, Entity, KeyMode, List, Property, Relationship};
pub use tree::Tree;
pub use value::Value;
