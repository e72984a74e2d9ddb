//! Read-only traversal and lookup over a property tree

use crate::node::PropertyNode;

/// Pre-order iterator over a tree
///
/// Yields a node before its children and children in declaration order.
/// Created by [`PropertyNode::traverse`].
pub struct Traverse<'a> {
    stack: Vec<&'a PropertyNode>,
}

impl<'a> Traverse<'a> {
    fn new(start: &'a PropertyNode) -> Self {
        let stack = if start.is_found() { vec![start] } else { Vec::new() };
        Self { stack }
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a PropertyNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're popped in declaration order
        self.stack.extend(current.children().iter().rev());

        Some(current)
    }
}

impl PropertyNode {
    /// Walk this node and all descendants in pre-order
    ///
    /// The not-found sentinel yields nothing.
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse::new(self)
    }

    /// First node in pre-order, starting with `self`, that satisfies `predicate`
    ///
    /// Returns the not-found sentinel when nothing matches, so the result can
    /// always be inspected without a null check.
    pub fn find<F>(&self, predicate: F) -> &PropertyNode
    where
        F: Fn(&PropertyNode) -> bool,
    {
        self.traverse()
            .find(|node| predicate(*node))
            .unwrap_or(PropertyNode::not_found())
    }

    /// All nodes in pre-order that satisfy `predicate`
    pub fn find_all<F>(&self, predicate: F) -> Vec<&PropertyNode>
    where
        F: Fn(&PropertyNode) -> bool,
    {
        self.traverse().filter(|node| predicate(*node)).collect()
    }

    /// First direct child that satisfies `predicate`
    ///
    /// Neither `self` nor deeper descendants are considered. Returns the
    /// not-found sentinel when no child matches.
    pub fn find_child<F>(&self, predicate: F) -> &PropertyNode
    where
        F: Fn(&PropertyNode) -> bool,
    {
        self.children()
            .iter()
            .find(|child| predicate(*child))
            .unwrap_or(PropertyNode::not_found())
    }

    /// All direct children that satisfy `predicate`, in declaration order
    pub fn find_children<F>(&self, predicate: F) -> Vec<&PropertyNode>
    where
        F: Fn(&PropertyNode) -> bool,
    {
        self.children()
            .iter()
            .filter(|child| predicate(*child))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::by_name;
    use crate::values;

    fn test_tree() -> PropertyNode {
        PropertyNode::new("root")
            .with_values(values![1, 2])
            .with_child(PropertyNode::new("child1").with_value("foo"))
            .with_child(
                PropertyNode::new("child2").with_child(PropertyNode::new("child3").with_value(true)),
            )
    }

    #[test]
    fn test_traverse_preorder() {
        let tree = test_tree();
        let names: Vec<_> = tree.traverse().map(PropertyNode::name).collect();
        assert_eq!(names, vec!["root", "child1", "child2", "child3"]);
    }

    #[test]
    fn test_traverse_not_found_is_empty() {
        assert_eq!(PropertyNode::not_found().traverse().count(), 0);
    }

    #[test]
    fn test_find_includes_self() {
        let tree = test_tree();
        assert_eq!(tree.find(by_name("root")), &tree);
    }

    #[test]
    fn test_find_descendant() {
        let tree = test_tree();
        assert!(tree.find(by_name("child3")).property().is_set());
        assert!(tree.find(by_name("missing")).is_not_found());
    }

    #[test]
    fn test_find_all() {
        let tree = test_tree();
        let names: Vec<_> = tree
            .find_all(|node| node.name().starts_with("child"))
            .into_iter()
            .map(PropertyNode::name)
            .collect();
        assert_eq!(names, vec!["child1", "child2", "child3"]);
    }

    #[test]
    fn test_find_child_is_shallow() {
        let tree = test_tree();
        assert_eq!(tree.find_child(by_name("child2")).name(), "child2");
        assert!(tree.find_child(by_name("child3")).is_not_found());
        assert!(tree.find_child(by_name("root")).is_not_found());
    }

    #[test]
    fn test_find_children() {
        let tree = PropertyNode::new("root")
            .with_child(PropertyNode::new("a").with_value(1))
            .with_child(PropertyNode::new("b"))
            .with_child(PropertyNode::new("a").with_value(2));

        let values: Vec<_> = tree
            .find_children(by_name("a"))
            .into_iter()
            .filter_map(|node| node.property().single_int())
            .collect();
        assert_eq!(values, vec![1, 2]);
    }
}
