//! Core node types for the property tree

use derive_more::Display;
use std::fmt;

use crate::builder::PropertyNodeBuilder;
use crate::property::{Property, PropertyName};
use crate::value::{Value, ValueSet};

/// The kind of a [`PropertyNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    /// A regular node built by the caller
    #[display(fmt = "Node")]
    Node,
    /// The inert sentinel returned when a lookup has no match
    #[display(fmt = "NotFound")]
    NotFound,
}

impl NodeKind {
    /// Returns true if this is the not-found sentinel kind
    pub const fn is_not_found(self) -> bool {
        matches!(self, NodeKind::NotFound)
    }
}

/// A named node carrying a [`Property`] and an ordered list of children
///
/// Nodes are immutable once built. Every structural operation returns a new
/// tree and leaves the source untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    kind: NodeKind,
    property: Property,
    children: Vec<PropertyNode>,
}

static NOT_FOUND: PropertyNode = PropertyNode {
    kind: NodeKind::NotFound,
    property: Property::EMPTY,
    children: Vec::new(),
};

/// Build a node from its parts
///
/// `description` and `values` may be empty and `children` may be empty.
/// No validation happens here: empty names and duplicate sibling names are
/// accepted as given. Not-found sentinels passed as children are dropped.
///
/// ```
/// use property_tree::{by_name, property_node_of, values, ValueSet};
///
/// let tree = property_node_of(
///     "root",
///     Some("desc"),
///     values![1, 2, 3],
///     [
///         property_node_of("child1", None, values![true], []),
///         property_node_of("child2", None, ValueSet::new(), []),
///     ],
/// );
///
/// assert!(tree.find(by_name("child1")).property().is_set());
/// assert!(!tree.find(by_name("child3")).property().is_set());
/// ```
pub fn property_node_of<N, V, C>(
    name: N,
    description: Option<&str>,
    values: V,
    children: C,
) -> PropertyNode
where
    N: Into<PropertyName>,
    V: Into<ValueSet>,
    C: IntoIterator<Item = PropertyNode>,
{
    PropertyNode::from_parts(
        Property::new(name, description.map(str::to_string), values.into()),
        children,
    )
}

impl PropertyNode {
    /// Create a leaf node with no description and no values
    pub fn new(name: impl Into<PropertyName>) -> Self {
        Self::from_parts(Property::new(name, None, ValueSet::new()), Vec::new())
    }

    /// Create a node from an existing property and children
    pub fn from_parts(property: Property, children: impl IntoIterator<Item = PropertyNode>) -> Self {
        Self {
            kind: NodeKind::Node,
            property,
            children: children.into_iter().filter(PropertyNode::is_found).collect(),
        }
    }

    /// Start a nested builder
    pub fn builder() -> PropertyNodeBuilder {
        PropertyNodeBuilder::new()
    }

    /// The shared not-found sentinel
    pub fn not_found() -> &'static PropertyNode {
        &NOT_FOUND
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        if self.is_found() {
            self.property.description = Some(description.into());
        }
        self
    }

    /// Add a single value
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        if self.is_found() {
            self.property.data.insert(value);
        }
        self
    }

    /// Add several values
    pub fn with_values(mut self, values: impl Into<ValueSet>) -> Self {
        if self.is_found() {
            let values: ValueSet = values.into();
            self.property.data.extend(values);
        }
        self
    }

    /// Append a child
    pub fn with_child(self, child: PropertyNode) -> Self {
        self.with_children([child])
    }

    /// Append children in order
    pub fn with_children(mut self, children: impl IntoIterator<Item = PropertyNode>) -> Self {
        if self.is_found() {
            self.children
                .extend(children.into_iter().filter(PropertyNode::is_found));
        }
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns true if this is the not-found sentinel
    pub fn is_not_found(&self) -> bool {
        self.kind.is_not_found()
    }

    /// Returns true if this is a regular node
    pub fn is_found(&self) -> bool {
        !self.is_not_found()
    }

    pub fn name(&self) -> &str {
        self.property.name.as_str()
    }

    pub fn property_name(&self) -> &PropertyName {
        &self.property.name
    }

    pub fn description(&self) -> Option<&str> {
        self.property.description.as_deref()
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Shorthand for `self.property().data`
    pub fn data(&self) -> &ValueSet {
        &self.property.data
    }

    pub fn children(&self) -> &[PropertyNode] {
        &self.children
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Render the tree as indented ASCII art
    ///
    /// ```text
    /// root: [1,2]
    /// ├──child1: foo
    /// └──child2
    ///    └──child3: {foo=bar}
    /// ```
    pub fn draw(&self) -> String {
        self.to_string()
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_not_found() {
            return f.write_str("(not found)");
        }

        f.write_str(self.name())?;
        let data = self.data();
        if let Some(value) = data.single() {
            write!(f, ": {}", value)?;
        } else if !data.is_empty() {
            f.write_str(": [")?;
            for (i, value) in data.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", value)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        self.fmt_node(f)?;

        let last = self.children.len().saturating_sub(1);
        for (i, child) in self.children.iter().enumerate() {
            let is_last = i == last;
            write!(f, "\n{}{}", indent, if is_last { "└──" } else { "├──" })?;
            let child_indent = format!("{}{}", indent, if is_last { "   " } else { "│  " });
            child.fmt_tree(f, &child_indent)?;
        }
        Ok(())
    }
}

impl fmt::Display for PropertyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn test_node_kind() {
        assert!(NodeKind::NotFound.is_not_found());
        assert!(!NodeKind::Node.is_not_found());
        assert_eq!(NodeKind::NotFound.to_string(), "NotFound");
    }

    #[test]
    fn test_property_node_of() {
        let node = property_node_of("root", Some("description"), values![1, 2], []);
        assert_eq!(node.name(), "root");
        assert_eq!(node.description(), Some("description"));
        assert_eq!(node.data(), &values![1, 2]);
        assert!(node.is_leaf());
        assert!(node.is_found());
    }

    #[test]
    fn test_defaults() {
        let node = PropertyNode::new("plain");
        assert_eq!(node.description(), None);
        assert!(node.data().is_empty());
        assert!(!node.property().is_set());
    }

    #[test]
    fn test_duplicate_children_are_kept() {
        let node = property_node_of(
            "root",
            None,
            ValueSet::new(),
            [PropertyNode::new("a"), PropertyNode::new("a")],
        );
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_not_found_children_are_dropped() {
        let node = PropertyNode::new("root")
            .with_child(PropertyNode::new("a"))
            .with_child(PropertyNode::not_found().clone());
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_chained_construction_matches_property_node_of() {
        let chained = PropertyNode::new("root")
            .with_description("d")
            .with_values(values![1])
            .with_value(2)
            .with_child(PropertyNode::new("leaf").with_value(true));
        let direct = property_node_of(
            "root",
            Some("d"),
            values![1, 2],
            [property_node_of("leaf", None, values![true], [])],
        );
        assert_eq!(chained, direct);
    }

    #[test]
    fn test_not_found_sentinel() {
        let sentinel = PropertyNode::not_found();
        assert!(sentinel.is_not_found());
        assert!(!sentinel.property().is_set());
        assert!(sentinel.children().is_empty());
        assert_eq!(sentinel.name(), "");
        assert_ne!(sentinel, &PropertyNode::new(""));
    }

    #[test]
    fn test_sentinel_ignores_chained_construction() {
        let still_sentinel = PropertyNode::not_found()
            .clone()
            .with_value(true)
            .with_child(PropertyNode::new("a"));
        assert_eq!(&still_sentinel, PropertyNode::not_found());
    }
}
