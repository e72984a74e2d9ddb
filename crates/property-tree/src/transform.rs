//! Structural operations producing new trees
//!
//! Nothing here mutates the source tree. Each operation returns a freshly
//! built tree; operations on the not-found sentinel return the sentinel.

use log::trace;

use crate::node::PropertyNode;
use crate::predicate::by_name;
use crate::property::{Property, PropertyName};

impl PropertyNode {
    /// Keep only the nodes accepted by `predicate`
    ///
    /// The root is tested like any other node. Rejecting a node drops its
    /// whole subtree; a retained node has its children filtered recursively.
    /// When the root is rejected the result is the not-found sentinel.
    pub fn filter<F>(&self, predicate: F) -> PropertyNode
    where
        F: Fn(&PropertyNode) -> bool,
    {
        self.filter_with(&predicate)
    }

    fn filter_with<F>(&self, predicate: &F) -> PropertyNode
    where
        F: Fn(&PropertyNode) -> bool,
    {
        if self.is_not_found() {
            return self.clone();
        }
        if !predicate(self) {
            trace!("filter dropped subtree at '{}'", self.name());
            return PropertyNode::not_found().clone();
        }

        let children = self
            .children()
            .iter()
            .map(|child| child.filter_with(predicate))
            .collect::<Vec<_>>();
        PropertyNode::from_parts(self.property().clone(), children)
    }

    /// Drop every subtree whose root matches `predicate`
    ///
    /// The complement of [`filter`](Self::filter).
    pub fn prune<F>(&self, predicate: F) -> PropertyNode
    where
        F: Fn(&PropertyNode) -> bool,
    {
        self.filter(|node| !predicate(node))
    }

    /// Rebuild the tree bottom-up
    ///
    /// Children are transformed first and any that come back as the sentinel
    /// are dropped. `transformer` then receives the original node together
    /// with its transformed children and returns the replacement.
    pub fn transform<F>(&self, transformer: F) -> PropertyNode
    where
        F: Fn(&PropertyNode, Vec<PropertyNode>) -> PropertyNode,
    {
        self.transform_with(&transformer)
    }

    fn transform_with<F>(&self, transformer: &F) -> PropertyNode
    where
        F: Fn(&PropertyNode, Vec<PropertyNode>) -> PropertyNode,
    {
        if self.is_not_found() {
            return self.clone();
        }

        let children = self
            .children()
            .iter()
            .filter_map(|child| {
                let transformed = child.transform_with(transformer);
                if transformed.is_not_found() {
                    trace!("transform dropped subtree at '{}'", child.name());
                    return None;
                }
                Some(transformed)
            })
            .collect();
        transformer(self, children)
    }

    /// Replace every node matching `predicate` with `replacement`
    ///
    /// Matching nodes are replaced whole; their original subtrees are not
    /// visited further. Replacing with the sentinel removes the node.
    pub fn replace_where<F>(&self, replacement: &PropertyNode, predicate: F) -> PropertyNode
    where
        F: Fn(&PropertyNode) -> bool,
    {
        self.transform(|node, children| {
            if predicate(node) {
                trace!("replacing '{}' with '{}'", node.name(), replacement.name());
                replacement.clone()
            } else {
                node.replace_children(children)
            }
        })
    }

    /// Replace every node structurally equal to `target` with `replacement`
    pub fn replace_node(&self, target: &PropertyNode, replacement: &PropertyNode) -> PropertyNode {
        self.replace_where(replacement, |node| node == target)
    }

    /// Replace the first node (pre-order) named `name` with `updater(node)`
    ///
    /// Later nodes with the same name are left alone, even when they are
    /// structurally equal to the first match. The tree comes back unchanged
    /// when no node has that name.
    pub fn update_node<F>(&self, name: impl Into<PropertyName>, updater: F) -> PropertyNode
    where
        F: FnOnce(&PropertyNode) -> PropertyNode,
    {
        let predicate = by_name(name);
        let mut updater = Some(updater);
        self.update_first(&predicate, &mut updater)
    }

    fn update_first<P, F>(&self, predicate: &P, updater: &mut Option<F>) -> PropertyNode
    where
        P: Fn(&PropertyNode) -> bool,
        F: FnOnce(&PropertyNode) -> PropertyNode,
    {
        if updater.is_none() || self.is_not_found() {
            return self.clone();
        }
        if predicate(self) {
            if let Some(update) = updater.take() {
                trace!("updating '{}'", self.name());
                return update(self);
            }
        }

        let children = self
            .children()
            .iter()
            .map(|child| child.update_first(predicate, updater))
            .collect::<Vec<_>>();
        PropertyNode::from_parts(self.property().clone(), children)
    }

    /// Replace the children with `update(children)`
    pub fn update_children<F>(&self, update: F) -> PropertyNode
    where
        F: FnOnce(&[PropertyNode]) -> Vec<PropertyNode>,
    {
        if self.is_not_found() {
            return self.clone();
        }
        self.replace_children(update(self.children()))
    }

    /// Drop the children matching `predicate` and append `replacement`
    pub fn overwrite_children<F>(&self, replacement: PropertyNode, predicate: F) -> PropertyNode
    where
        F: Fn(&PropertyNode) -> bool,
    {
        self.update_children(|children| {
            children
                .iter()
                .filter(|child| !predicate(*child))
                .cloned()
                .chain(std::iter::once(replacement))
                .collect()
        })
    }

    /// Swap out the children named like `replacement` for `replacement`
    pub fn overwrite_child(&self, replacement: PropertyNode) -> PropertyNode {
        let name = replacement.property_name().clone();
        self.overwrite_children(replacement, by_name(name))
    }

    /// A copy of this node with a different property
    pub fn replace_property(&self, property: Property) -> PropertyNode {
        if self.is_not_found() || self.property() == &property {
            return self.clone();
        }
        PropertyNode::from_parts(property, self.children().to_vec())
    }

    /// A copy of this node with different children
    pub fn replace_children(&self, children: Vec<PropertyNode>) -> PropertyNode {
        if self.is_not_found() {
            return self.clone();
        }
        PropertyNode::from_parts(self.property().clone(), children)
    }
}
