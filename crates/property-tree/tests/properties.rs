//! Property tests over randomly generated trees

use proptest::collection::vec;
use proptest::prelude::*;
use property_tree::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        (0i64..4).prop_map(Value::from),
        "[xy]".prop_map(Value::from),
    ]
}

fn arb_leaf() -> impl Strategy<Value = PropertyNode> {
    ("[a-d]", vec(arb_value(), 0..3))
        .prop_map(|(name, values)| PropertyNode::new(name).with_values(values))
}

fn arb_tree() -> impl Strategy<Value = PropertyNode> {
    arb_leaf().prop_recursive(4, 48, 4, |inner| {
        ("[a-d]", vec(arb_value(), 0..3), vec(inner, 0..4)).prop_map(
            |(name, values, children)| {
                PropertyNode::new(name)
                    .with_values(values)
                    .with_children(children)
            },
        )
    })
}

/// Checks that `filtered` is `original` pruned by `predicate`
fn is_pruned_copy<F>(original: &PropertyNode, filtered: &PropertyNode, predicate: &F) -> bool
where
    F: Fn(&PropertyNode) -> bool,
{
    if !predicate(original) {
        return filtered.is_not_found();
    }

    let kept: Vec<_> = original
        .children()
        .iter()
        .filter(|child| predicate(*child))
        .collect();

    filtered.property() == original.property()
        && filtered.children().len() == kept.len()
        && kept
            .iter()
            .zip(filtered.children())
            .all(|(child, filtered_child)| is_pruned_copy(child, filtered_child, predicate))
}

proptest! {
    #[test]
    fn find_returns_first_preorder_match(tree in arb_tree(), name in "[a-d]") {
        let predicate = by_name(name);
        let found = tree.find(&predicate);

        match tree.traverse().find(|node| predicate(*node)) {
            Some(expected) => prop_assert!(std::ptr::eq(found, expected)),
            None => prop_assert!(found.is_not_found()),
        }
    }

    #[test]
    fn find_child_stays_at_depth_one(tree in arb_tree(), name in "[a-d]") {
        let found = tree.find_child(by_name(name));

        prop_assert!(
            found.is_not_found()
                || tree.children().iter().any(|child| std::ptr::eq(child, found))
        );
    }

    #[test]
    fn filter_prunes_subtrees(tree in arb_tree(), value in arb_value()) {
        let predicate = |node: &PropertyNode| !node.data().contains(&value);
        let filtered = tree.filter(predicate);

        prop_assert!(is_pruned_copy(&tree, &filtered, &predicate));
    }

    #[test]
    fn filter_is_idempotent(tree in arb_tree(), name in "[a-d]") {
        let predicate = |node: &PropertyNode| node.name() != name;
        let once = tree.filter(predicate);
        let twice = once.filter(predicate);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prune_is_filter_complement(tree in arb_tree()) {
        let pruned = tree.prune(|node| node.property().is_set());
        let filtered = tree.filter(|node| !node.property().is_set());

        prop_assert_eq!(pruned, filtered);
    }

    #[test]
    fn absent_criteria_fields_are_neutral(tree in arb_tree(), value in arb_value()) {
        // generated names never carry a criteria suffix
        let criteria = Criteria::new([
            Criterion::single("region", value.clone()),
            Criterion::new("tier", [value]),
        ]);

        prop_assert_eq!(tree.filter(by_criteria(criteria)), tree);
    }

    #[test]
    fn is_set_iff_contains_true(values in vec(arb_value(), 0..4)) {
        let expected = values.contains(&Value::Bool(true));
        let node = PropertyNode::new("node").with_values(values);

        prop_assert_eq!(node.property().is_set(), expected);
    }

    #[test]
    fn traverse_visits_every_node_once(tree in arb_tree()) {
        fn count(node: &PropertyNode) -> usize {
            1 + node.children().iter().map(count).sum::<usize>()
        }

        prop_assert_eq!(tree.traverse().count(), count(&tree));
    }
}
