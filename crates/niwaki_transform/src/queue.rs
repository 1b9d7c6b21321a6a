//! Ordered queue of pending transforms.

use tracing::debug;

use niwaki_tree::{NodeId, Tree};

use crate::{NodeTransform, TransformError};

/// An ordered, growable sequence of pending [`NodeTransform`] commands.
///
/// A queue is the write side of a traversal: rules append edits while the
/// walk reads the tree, and only a later drain touches the structure. The
/// convenience constructors never validate or dereference their operands;
/// a stale id is accepted silently here and fails only when its command
/// executes.
///
/// Draining order matters when queued edits are positional against the same
/// parent. [`apply_reverse`](TransformQueue::apply_reverse) executes in
/// reverse enqueue order so that edits discovered left to right (the
/// natural order for a traversal) are applied right to left, where earlier
/// siblings' positions are never disturbed by later edits. This is the same
/// end-to-start discipline a text fixer uses for span edits.
/// [`apply`](TransformQueue::apply) keeps enqueue order and suits
/// independent or sequence-significant edits, such as inserts that must
/// land in the order they were requested.
#[derive(Debug)]
pub struct TransformQueue {
    id: String,
    pending: Vec<NodeTransform>,
}

impl TransformQueue {
    /// Creates an empty queue with the given debug identifier.
    ///
    /// The id carries no behavior; it names the queue in logs, typically
    /// after the rule that fills it.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pending: Vec::new(),
        }
    }

    /// The queue's debug identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Enqueues replacing `old` with `new` among `old`'s siblings.
    pub fn replace(&mut self, old: NodeId, new: NodeId) {
        self.push(NodeTransform::Replace { old, new });
    }

    /// Enqueues unlinking `node` from its parent.
    pub fn delete(&mut self, node: NodeId) {
        self.push(NodeTransform::Delete { node });
    }

    /// Enqueues exchanging the positions of `a` and `b`; each keeps its own
    /// children.
    pub fn swap(&mut self, a: NodeId, b: NodeId) {
        self.push(NodeTransform::Swap {
            a,
            b,
            swap_subtrees: true,
        });
    }

    /// Enqueues exchanging the positions of `a` and `b` while their
    /// children stay at the original sites (the children lists are handed
    /// over along with the positions).
    pub fn swap_without_subtrees(&mut self, a: NodeId, b: NodeId) {
        self.push(NodeTransform::Swap {
            a,
            b,
            swap_subtrees: false,
        });
    }

    /// Enqueues appending `child` to `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.push(NodeTransform::AddChild {
            parent,
            child,
            head: false,
        });
    }

    /// Enqueues inserting `child` as `parent`'s first child.
    pub fn add_child_head(&mut self, parent: NodeId, child: NodeId) {
        self.push(NodeTransform::AddChild {
            parent,
            child,
            head: true,
        });
    }

    /// Enqueues moving `node` to the position immediately before `target`.
    pub fn move_before(&mut self, node: NodeId, target: NodeId) {
        self.push(NodeTransform::MoveBefore { node, target });
    }

    /// Enqueues moving `node` to the position immediately after `target`.
    pub fn move_after(&mut self, node: NodeId, target: NodeId) {
        self.push(NodeTransform::MoveAfter { node, target });
    }

    /// Appends an already-built command.
    pub fn push(&mut self, transform: NodeTransform) {
        self.pending.push(transform);
    }

    /// The pending commands, in enqueue order.
    pub fn transforms(&self) -> &[NodeTransform] {
        &self.pending
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Executes every pending command in enqueue (FIFO) order, emptying the
    /// queue. A no-op when the queue is already empty.
    ///
    /// # Errors
    ///
    /// Stops at the first failing command. The failing command and the
    /// already-executed prefix are consumed; their edits stay applied and
    /// the remainder stays pending. There is no rollback.
    pub fn apply<T>(&mut self, tree: &mut Tree<T>) -> Result<(), TransformError> {
        while !self.pending.is_empty() {
            let transform = self.pending.remove(0);
            debug!("queue '{}': applying {}", self.id, transform.kind());
            transform.execute(tree)?;
        }
        Ok(())
    }

    /// Executes every pending command in reverse enqueue (LIFO) order,
    /// emptying the queue. A no-op when the queue is already empty.
    ///
    /// # Errors
    ///
    /// Same partial-drain behavior as [`apply`](TransformQueue::apply).
    pub fn apply_reverse<T>(&mut self, tree: &mut Tree<T>) -> Result<(), TransformError> {
        while let Some(transform) = self.pending.pop() {
            debug!("queue '{}': applying {} (reverse)", self.id, transform.kind());
            transform.execute(tree)?;
        }
        Ok(())
    }
}
