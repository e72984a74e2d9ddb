//! Nested builder for property trees

use anyhow::{Context, Result};

use crate::node::{property_node_of, PropertyNode};
use crate::property::PropertyName;
use crate::value::{Value, ValueSet};

/// Builds a [`PropertyNode`] and its children through nested closures
///
/// ```
/// use property_tree::PropertyNode;
///
/// let tree = PropertyNode::builder()
///     .name("root")
///     .description("description")
///     .values([1, 2])
///     .child(|child| child.name("child1").value("foo"))
///     .child(|child| child.name("child2").child(|leaf| leaf.name("child3")))
///     .build()
///     .unwrap();
///
/// assert_eq!(tree.children().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyNodeBuilder {
    name: Option<PropertyName>,
    description: Option<String>,
    data: ValueSet,
    children: Vec<PropertyNodeBuilder>,
}

impl PropertyNodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<PropertyName>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.data.insert(value);
        self
    }

    pub fn values<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.data.extend(values);
        self
    }

    /// Add a child configured by `init`
    pub fn child<F>(mut self, init: F) -> Self
    where
        F: FnOnce(PropertyNodeBuilder) -> PropertyNodeBuilder,
    {
        self.children.push(init(PropertyNodeBuilder::new()));
        self
    }

    /// Build the tree, failing if any node lacks a name
    pub fn build(self) -> Result<PropertyNode> {
        let name = self.name.context("property name required")?;

        let children = self
            .children
            .into_iter()
            .enumerate()
            .map(|(index, child)| {
                child
                    .build()
                    .with_context(|| format!("child {} of '{}'", index, name))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(property_node_of(
            name,
            self.description.as_deref(),
            self.data,
            children,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_matches_property_node_of() {
        let mut object = std::collections::BTreeMap::new();
        object.insert("foo".to_string(), Value::from("bar"));

        let built = PropertyNode::builder()
            .name("root")
            .description("description")
            .values([1, 2])
            .child(|child| child.name("child1").value("foo"))
            .child(|child| {
                child
                    .name("child2")
                    .child(|leaf| leaf.name("child3").value(object.clone()))
            })
            .build()
            .unwrap();

        let expected = property_node_of(
            "root",
            Some("description"),
            values![1, 2],
            [
                property_node_of("child1", None, values!["foo"], []),
                property_node_of(
                    "child2",
                    None,
                    ValueSet::new(),
                    [property_node_of("child3", None, values![object], [])],
                ),
            ],
        );

        assert_eq!(built, expected);
    }

    #[test]
    fn test_missing_root_name() {
        let err = PropertyNodeBuilder::new().value(1).build().unwrap_err();
        assert_eq!(err.to_string(), "property name required");
    }

    #[test]
    fn test_missing_child_name_reports_path() {
        let err = PropertyNode::builder()
            .name("root")
            .child(|child| child.name("ok"))
            .child(|child| child.value(true))
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "child 1 of 'root'");
        assert_eq!(err.root_cause().to_string(), "property name required");
    }
}
