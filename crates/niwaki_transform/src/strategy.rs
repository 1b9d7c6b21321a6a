//! Traversal strategies.
//!
//! A strategy owns the walk: it decides when the rule sees each node and
//! honors the rule's descent signal. Mutation never happens during the
//! walk; rules write commands into the queue, and the queue is drained
//! only after the walk returns.

use tracing::debug;

use niwaki_tree::{NodeId, Tree};

use crate::{TransformError, TransformQueue, TransformRule};

/// How a rule walks the tree.
///
/// Stateless; values are freely copied and shared across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalStrategy {
    /// Visit a node before its children. The rule's descent signal is
    /// consulted before entering the children, so returning
    /// `visit_children() == false` skips the node's whole subtree.
    PreOrder,
    /// Visit children (left to right) before their parent. By the time the
    /// rule sees a node, that node's subtree has already been fully
    /// traversed, so the descent signal has nothing left to prune and is
    /// ignored.
    PostOrder,
}

impl TraversalStrategy {
    /// Walks the subtree under `root`, collecting the rule's edits into a
    /// fresh queue, then immediately drains the queue in enqueue order.
    ///
    /// # Errors
    ///
    /// Fails if any collected command fails; see
    /// [`TransformQueue::apply`] for the partial-drain behavior.
    pub fn apply<T, R>(
        self,
        tree: &mut Tree<T>,
        root: NodeId,
        rule: &mut R,
    ) -> Result<(), TransformError>
    where
        R: TransformRule<T> + ?Sized,
    {
        let mut queue = self.get_transformations(tree, root, rule);
        queue.apply(tree)
    }

    /// Walks the subtree under `root` and returns the populated queue
    /// without draining it, leaving the drain order (or plain inspection)
    /// to the caller. The queue is named after the rule.
    pub fn get_transformations<T, R>(
        self,
        tree: &mut Tree<T>,
        root: NodeId,
        rule: &mut R,
    ) -> TransformQueue
    where
        R: TransformRule<T> + ?Sized,
    {
        let mut queue = TransformQueue::new(rule.name());
        match self {
            Self::PreOrder => walk_pre(tree, root, rule, &mut queue),
            Self::PostOrder => walk_post(tree, root, rule, &mut queue),
        }
        debug!(
            "queue '{}': collected {} transforms",
            queue.id(),
            queue.len()
        );
        queue
    }
}

fn walk_pre<T, R>(tree: &mut Tree<T>, node: NodeId, rule: &mut R, queue: &mut TransformQueue)
where
    R: TransformRule<T> + ?Sized,
{
    if !tree.is_alive(node) {
        return;
    }
    let result = rule.apply(tree, node, queue);
    if result.visit_children() {
        for child in tree.children_of(node).to_vec() {
            walk_pre(tree, child, rule, queue);
        }
    }
}

fn walk_post<T, R>(tree: &mut Tree<T>, node: NodeId, rule: &mut R, queue: &mut TransformQueue)
where
    R: TransformRule<T> + ?Sized,
{
    if !tree.is_alive(node) {
        return;
    }
    for child in tree.children_of(node).to_vec() {
        walk_post(tree, child, rule, queue);
    }
    rule.apply(tree, node, queue);
}
