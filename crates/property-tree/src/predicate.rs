//! Predicate builders for [`find`](PropertyNode::find),
//! [`find_child`](PropertyNode::find_child) and [`filter`](PropertyNode::filter)

use crate::criteria::Criteria;
use crate::node::PropertyNode;
use crate::property::PropertyName;

/// Matches nodes whose name equals `name` exactly (case sensitive)
///
/// The not-found sentinel never matches, even for an empty name.
pub fn by_name(name: impl Into<PropertyName>) -> impl Fn(&PropertyNode) -> bool {
    let name = name.into();
    move |node| node.is_found() && node.property_name() == &name
}

/// Matches nodes that satisfy every criterion in `criteria`
///
/// See [`Criteria::satisfied_by`] for the evaluation rules.
pub fn by_criteria(criteria: Criteria) -> impl Fn(&PropertyNode) -> bool {
    move |node| criteria.satisfied_by(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criterion;

    #[test]
    fn test_by_name_is_exact() {
        let node = PropertyNode::new("Child");
        assert!(by_name("Child")(&node));
        assert!(!by_name("child")(&node));
        assert!(!by_name("Chil")(&node));
    }

    #[test]
    fn test_by_name_never_matches_sentinel() {
        assert!(!by_name("")(PropertyNode::not_found()));
        assert!(by_name("")(&PropertyNode::new("")));
    }

    #[test]
    fn test_by_criteria_without_criteria_accepts() {
        let accept_all = by_criteria(Criteria::default());
        assert!(accept_all(&PropertyNode::new("anything")));
    }

    #[test]
    fn test_by_criteria_delegates() {
        let node = PropertyNode::new("rule")
            .with_child(PropertyNode::new("regionInclude").with_value("eu"));

        assert!(by_criteria(Criteria::new([Criterion::new("region", ["eu"])]))(&node));
        assert!(!by_criteria(Criteria::new([Criterion::new("region", ["us"])]))(&node));
    }
}
