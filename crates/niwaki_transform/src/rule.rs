//! The rule protocol: policy objects driving a traversal.

use std::any::type_name;

use niwaki_tree::{NodeId, Tree};

use crate::{TransformError, TransformQueue, TransformResult, TraversalStrategy};

/// A transformation policy applied across a tree.
///
/// A rule is invoked exactly once per node visited by its declared
/// [`TraversalStrategy`], in the order that strategy determines. It
/// inspects the node, enqueues zero or more edits, and returns a
/// [`TransformResult`] steering descent. Structural changes must go through
/// the queue; the mutable tree reference exists so rules can allocate
/// brand-new nodes (or [`deep_clone`](Tree::deep_clone) existing ones) for
/// later insertion.
///
/// Implementations are free to carry state (a visit counter, collected
/// ids, configuration) since `apply` takes `&mut self`.
pub trait TransformRule<T> {
    /// Evaluates the rule at one node.
    fn apply(
        &mut self,
        tree: &mut Tree<T>,
        node: NodeId,
        queue: &mut TransformQueue,
    ) -> TransformResult;

    /// The traversal strategy this rule runs under.
    fn traversal_strategy(&self) -> TraversalStrategy;

    /// Name used as the id of queues produced for this rule.
    ///
    /// Defaults to the implementing type's name; purely diagnostic.
    fn name(&self) -> &str {
        type_name::<Self>()
    }

    /// Runs this rule over the subtree under `root` using its declared
    /// strategy, applying every collected edit.
    ///
    /// # Errors
    ///
    /// Propagates the first execution failure; see
    /// [`TransformQueue::apply`].
    fn visit(&mut self, tree: &mut Tree<T>, root: NodeId) -> Result<(), TransformError>
    where
        Self: Sized,
    {
        self.traversal_strategy().apply(tree, root, self)
    }
}
