//! End-to-end transformation scenarios across the niwaki workspace.
//!
//! These tests exercise the whole pipeline: rule evaluation during a walk,
//! command collection, and the deferred drain against the live tree.

use pretty_assertions::assert_eq;

use niwaki_tree::{NodeId, Tree};
use niwaki_transform::{TransformQueue, TransformResult, TransformRule, TraversalStrategy};

/// Appends an `added_<name>` child to every leaf.
struct LeafExpander;

impl TransformRule<String> for LeafExpander {
    fn apply(
        &mut self,
        tree: &mut Tree<String>,
        node: NodeId,
        queue: &mut TransformQueue,
    ) -> TransformResult {
        if tree.child_count(node) == 0 {
            let name = format!("added_{}", tree.value(node).unwrap());
            let added = tree.insert(None, name);
            queue.add_child(node, added);
        }
        TransformResult::empty()
    }

    fn traversal_strategy(&self) -> TraversalStrategy {
        TraversalStrategy::PreOrder
    }
}

/// Counts rule invocations.
#[derive(Default)]
struct NodeCounter {
    visits: usize,
}

impl TransformRule<String> for NodeCounter {
    fn apply(
        &mut self,
        _tree: &mut Tree<String>,
        _node: NodeId,
        _queue: &mut TransformQueue,
    ) -> TransformResult {
        self.visits += 1;
        TransformResult::empty()
    }

    fn traversal_strategy(&self) -> TraversalStrategy {
        TraversalStrategy::PreOrder
    }
}

/// Deletes every leaf it sees.
struct LeafSweeper;

impl TransformRule<String> for LeafSweeper {
    fn apply(
        &mut self,
        tree: &mut Tree<String>,
        node: NodeId,
        queue: &mut TransformQueue,
    ) -> TransformResult {
        if tree.child_count(node) == 0 {
            queue.delete(node);
        }
        TransformResult::empty()
    }

    fn traversal_strategy(&self) -> TraversalStrategy {
        TraversalStrategy::PreOrder
    }
}

/// root -> [child1 -> [grandchild1], child2]
fn sample() -> (Tree<String>, NodeId) {
    let mut tree = Tree::new();
    let root = tree.insert(None, "root".to_string());
    let child1 = tree.insert(Some(root), "child1".to_string());
    tree.insert(Some(root), "child2".to_string());
    tree.insert(Some(child1), "grandchild1".to_string());
    (tree, root)
}

fn value(tree: &Tree<String>, id: NodeId) -> &str {
    tree.value(id).unwrap()
}

#[test]
fn leaf_expansion_end_to_end() {
    let (mut tree, root) = sample();

    let mut counter = NodeCounter::default();
    counter.visit(&mut tree, root).unwrap();
    assert_eq!(counter.visits, 4);

    LeafExpander.visit(&mut tree, root).unwrap();

    // Every leaf of the original tree gained exactly one child.
    let child1 = tree.child_at(root, 0).unwrap();
    let child2 = tree.child_at(root, 1).unwrap();
    let grandchild1 = tree.child_at(child1, 0).unwrap();

    assert_eq!(tree.child_count(grandchild1), 1);
    assert_eq!(
        value(&tree, tree.child_at(grandchild1, 0).unwrap()),
        "added_grandchild1"
    );
    assert_eq!(tree.child_count(child2), 1);
    assert_eq!(
        value(&tree, tree.child_at(child2, 0).unwrap()),
        "added_child2"
    );

    // Re-counting shows the tree grew.
    let mut recount = NodeCounter::default();
    recount.visit(&mut tree, root).unwrap();
    assert_eq!(recount.visits, 6);
}

#[test]
fn expansion_does_not_cascade_into_added_leaves() {
    let (mut tree, root) = sample();

    // The added nodes are themselves leaves, but they are attached only
    // after the walk, so a single pass must not expand them.
    LeafExpander.visit(&mut tree, root).unwrap();
    let mut counter = NodeCounter::default();
    counter.visit(&mut tree, root).unwrap();
    assert_eq!(counter.visits, 6);

    // A second pass picks up where the first left off.
    LeafExpander.visit(&mut tree, root).unwrap();
    let mut recount = NodeCounter::default();
    recount.visit(&mut tree, root).unwrap();
    assert_eq!(recount.visits, 8);
}

#[test]
fn caller_chooses_drain_order() {
    let (mut tree, root) = sample();

    let mut rule = LeafSweeper;
    let mut queue =
        TraversalStrategy::PreOrder.get_transformations(&mut tree, root, &mut rule);

    // Nothing has happened yet; the caller inspects, then drains in
    // reverse so sibling edits apply right to left.
    assert_eq!(queue.len(), 2);
    assert_eq!(tree.len(), 4);

    queue.apply_reverse(&mut tree).unwrap();

    let child1 = tree.child_at(root, 0).unwrap();
    assert_eq!(tree.child_count(root), 1);
    assert_eq!(value(&tree, child1), "child1");
    assert_eq!(tree.child_count(child1), 0);
}

#[test]
fn transformed_tree_snapshot() {
    let (mut tree, root) = sample();

    LeafExpander.visit(&mut tree, root).unwrap();

    let json = serde_json::to_value(tree.nested(root).unwrap()).unwrap();
    assert_eq!(json["value"], "root");
    assert_eq!(json["children"].as_array().unwrap().len(), 2);

    insta::assert_json_snapshot!("leaf_expansion", tree.nested(root).unwrap());
}
