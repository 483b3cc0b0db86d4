//! Randomized checks of the tree's ordering, idempotence and layout
//! guarantees.

use std::collections::{BTreeSet, HashSet};

use bst_visualizer_wasm::{BinarySearchTree, LevelOrderLayout, NodeView};
use quickcheck::{Arbitrary, Gen};

/// Something to do to a tree in a randomized test.
#[derive(Copy, Clone, Debug)]
enum Op {
    /// Insert the key
    Insert(i16),
    /// Remove the key
    Remove(i16),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(i16::arbitrary(g))
        } else {
            Op::Remove(i16::arbitrary(g))
        }
    }
}

fn build(xs: &[i16]) -> BinarySearchTree<i16> {
    let mut tree = BinarySearchTree::new();
    for &x in xs {
        tree.insert(x).unwrap();
    }
    tree
}

fn labels(views: &[NodeView]) -> Vec<String> {
    views.iter().map(|view| view.key.clone()).collect()
}

fn positions_unique(views: &[NodeView]) -> bool {
    let mut seen = HashSet::new();
    views
        .iter()
        .all(|view| seen.insert((view.position.x.to_bits(), view.position.y.to_bits())))
}

quickcheck::quickcheck! {
    fn in_order_is_ascending(xs: Vec<i16>) -> bool {
        let tree = build(&xs);
        tree.keys().windows(2).all(|pair| pair[0] < pair[1])
    }

    fn in_order_matches_sorted_distinct_keys(xs: Vec<i16>) -> bool {
        let tree = build(&xs);
        let expected: Vec<String> = xs
            .iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|x| x.to_string())
            .collect();
        labels(&tree.in_order()) == expected
    }

    fn insert_then_remove_leaves_empty(k: i16) -> bool {
        let mut tree = BinarySearchTree::new();
        tree.insert(k).unwrap();
        tree.remove(&k) == Ok(true) && tree.is_empty()
    }

    fn reinsert_is_idempotent(xs: Vec<i16>) -> bool {
        let mut tree = build(&xs);
        let before = tree.pre_order();
        for &x in &xs {
            tree.insert(x).unwrap();
        }
        tree.pre_order() == before && tree.len() == before.len()
    }

    fn layout_has_one_node_per_distinct_key(xs: Vec<i16>) -> bool {
        let tree = build(&xs);
        let distinct: BTreeSet<_> = xs.iter().collect();
        let layout = LevelOrderLayout::with_defaults().compute(&tree);

        layout.nodes.len() == distinct.len()
            && layout.edges.len() == distinct.len().saturating_sub(1)
    }

    fn layout_positions_are_unique(xs: Vec<i16>) -> bool {
        let tree = build(&xs);
        positions_unique(&LevelOrderLayout::with_defaults().compute(&tree).nodes)
    }

    fn insertion_positions_are_unique(xs: Vec<i16>) -> bool {
        positions_unique(&build(&xs).pre_order())
    }

    fn remove_preserves_order_of_the_rest(xs: Vec<i16>) -> bool {
        let distinct: BTreeSet<i16> = xs.iter().copied().collect();
        distinct.iter().all(|&victim| {
            let mut tree = build(&xs);
            let expected: Vec<String> = distinct
                .iter()
                .filter(|&&k| k != victim)
                .map(|k| k.to_string())
                .collect();

            tree.remove(&victim) == Ok(true) && labels(&tree.in_order()) == expected
        })
    }

    fn remove_missing_key_changes_nothing(xs: Vec<i16>, missing: i16) -> bool {
        if xs.contains(&missing) {
            return true;
        }
        let mut tree = build(&xs);
        let before = tree.pre_order();
        tree.remove(&missing) == Ok(false) && tree.pre_order() == before
    }

    fn random_ops_match_set_model(ops: Vec<Op>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut model = BTreeSet::new();

        for op in &ops {
            match *op {
                Op::Insert(k) => {
                    tree.insert(k).unwrap();
                    model.insert(k);
                }
                Op::Remove(k) => {
                    if tree.remove(&k) != Ok(model.remove(&k)) {
                        return false;
                    }
                }
            }
        }

        tree.keys().into_iter().eq(model.iter()) && tree.len() == model.len()
    }
}
