//! Element variants and their container capabilities.
//!
//! The tree is heterogeneous: one closed enum covers the leaf kind and the
//! four container kinds, and the resolver/mutator branch on it
//! exhaustively. Containers differ only in how their children are keyed:
//! by sibling-unique name (Collection, Entity, Relationship) or by
//! position (List). [`Element::key_mode`] exposes that capability so
//! traversal code does not need to care which keyed variant it is looking
//! at.

use std::fmt;

use crate::model::Value;

/// How a container addresses its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMode {
    /// Children carry sibling-unique names; lookup scans by name.
    ByName,
    /// Children are anonymous; lookup is by zero-based index.
    ByPosition,
}

/// Discriminates the element variants, mostly for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Property,
    Collection,
    List,
    Entity,
    Relationship,
}

impl ElementKind {
    /// Returns the lowercase kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Property => "property",
            ElementKind::Collection => "collection",
            ElementKind::List => "list",
            ElementKind::Entity => "entity",
            ElementKind::Relationship => "relationship",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the managed tree: a value-carrying leaf or a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Leaf carrying a value; never has children.
    Property(Property),
    /// Ordered children addressed by sibling-unique name.
    Collection(Collection),
    /// Ordered anonymous children addressed by position.
    List(List),
    /// Ordered statement children addressed by sibling-unique name.
    Entity(Entity),
    /// Ordered annotation children addressed by sibling-unique name.
    Relationship(Relationship),
}

impl Element {
    /// Returns the element's name, if it carries one.
    ///
    /// Elements held by a List are anonymous; everywhere else the name is
    /// the sibling-unique key the element is addressed by.
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Property(p) => p.name.as_deref(),
            Element::Collection(c) => c.name.as_deref(),
            Element::List(l) => l.name.as_deref(),
            Element::Entity(e) => e.name.as_deref(),
            Element::Relationship(r) => r.name.as_deref(),
        }
    }

    /// Returns which kind of element this is.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Property(_) => ElementKind::Property,
            Element::Collection(_) => ElementKind::Collection,
            Element::List(_) => ElementKind::List,
            Element::Entity(_) => ElementKind::Entity,
            Element::Relationship(_) => ElementKind::Relationship,
        }
    }

    /// Returns how this element keys its children, or `None` for leaves.
    pub fn key_mode(&self) -> Option<KeyMode> {
        match self {
            Element::Property(_) => None,
            Element::List(_) => Some(KeyMode::ByPosition),
            Element::Collection(_) | Element::Entity(_) | Element::Relationship(_) => {
                Some(KeyMode::ByName)
            }
        }
    }

    /// Returns true if this element can hold children.
    pub fn is_container(&self) -> bool {
        self.key_mode().is_some()
    }

    /// Returns the ordered child sequence, or `None` for leaves.
    pub fn children(&self) -> Option<&[Element]> {
        self.children_with_mode().map(|(_, children)| children)
    }

    /// Returns the key mode together with the child sequence.
    pub fn children_with_mode(&self) -> Option<(KeyMode, &[Element])> {
        match self {
            Element::Property(_) => None,
            Element::Collection(c) => Some((KeyMode::ByName, &c.children)),
            Element::List(l) => Some((KeyMode::ByPosition, &l.items)),
            Element::Entity(e) => Some((KeyMode::ByName, &e.statements)),
            Element::Relationship(r) => Some((KeyMode::ByName, &r.annotations)),
        }
    }

    /// Mutable variant of [`Element::children_with_mode`].
    pub fn children_with_mode_mut(&mut self) -> Option<(KeyMode, &mut Vec<Element>)> {
        match self {
            Element::Property(_) => None,
            Element::Collection(c) => Some((KeyMode::ByName, &mut c.children)),
            Element::List(l) => Some((KeyMode::ByPosition, &mut l.items)),
            Element::Entity(e) => Some((KeyMode::ByName, &mut e.statements)),
            Element::Relationship(r) => Some((KeyMode::ByName, &mut r.annotations)),
        }
    }
}

/// Leaf element holding a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: Option<String>,
    pub value: Value,
}

impl Property {
    /// Creates a named property.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Property {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    /// Creates an anonymous property, for insertion into a List.
    pub fn anonymous(value: impl Into<Value>) -> Self {
        Property {
            name: None,
            value: value.into(),
        }
    }
}

/// Container whose children are addressed by sibling-unique name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    pub name: Option<String>,
    pub children: Vec<Element>,
}

impl Collection {
    /// Creates a named, empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Collection {
            name: Some(name.into()),
            children: Vec::new(),
        }
    }

    /// Creates an anonymous, empty collection, for insertion into a List.
    pub fn anonymous() -> Self {
        Collection::default()
    }

    /// Appends a child, returning the collection for chaining.
    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// Container whose anonymous children are addressed by position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    pub name: Option<String>,
    pub items: Vec<Element>,
}

impl List {
    /// Creates a named, empty list.
    pub fn new(name: impl Into<String>) -> Self {
        List {
            name: Some(name.into()),
            items: Vec::new(),
        }
    }

    /// Creates an anonymous, empty list, for nesting inside another List.
    pub fn anonymous() -> Self {
        List::default()
    }

    /// Appends an item, returning the list for chaining.
    pub fn with_item(mut self, item: impl Into<Element>) -> Self {
        self.items.push(item.into());
        self
    }
}

/// Container holding named statement children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    pub name: Option<String>,
    pub statements: Vec<Element>,
}

impl Entity {
    /// Creates a named entity with no statements.
    pub fn new(name: impl Into<String>) -> Self {
        Entity {
            name: Some(name.into()),
            statements: Vec::new(),
        }
    }

    /// Appends a statement, returning the entity for chaining.
    pub fn with_statement(mut self, statement: impl Into<Element>) -> Self {
        self.statements.push(statement.into());
        self
    }
}

/// Container holding named annotation children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relationship {
    pub name: Option<String>,
    pub annotations: Vec<Element>,
}

impl Relationship {
    /// Creates a named relationship with no annotations.
    pub fn new(name: impl Into<String>) -> Self {
        Relationship {
            name: Some(name.into()),
            annotations: Vec::new(),
        }
    }

    /// Appends an annotation, returning the relationship for chaining.
    pub fn with_annotation(mut self, annotation: impl Into<Element>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}

impl From<Property> for Element {
    fn from(p: Property) -> Self {
        Element::Property(p)
    }
}

impl From<Collection> for Element {
    fn from(c: Collection) -> Self {
        Element::Collection(c)
    }
}

impl From<List> for Element {
    fn from(l: List) -> Self {
        Element::List(l)
    }
}

impl From<Entity> for Element {
    fn from(e: Entity) -> Self {
        Element::Entity(e)
    }
}

impl From<Relationship> for Element {
    fn from(r: Relationship) -> Self {
        Element::Relationship(r)
    }
}
