//! Deferred structural edit commands.
//!
//! Each command names the nodes it will act on and knows how to perform its
//! edit against the tree. Commands are inert until executed, which is what
//! makes it safe to collect them while a traversal is still reading the
//! same tree.

use std::fmt;

use serde::Serialize;

use niwaki_tree::{NodeId, Tree};

use crate::TransformError;

/// The six kinds of structural edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformKind {
    Replace,
    Delete,
    Swap,
    AddChild,
    MoveBefore,
    MoveAfter,
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Replace => "replace",
            Self::Delete => "delete",
            Self::Swap => "swap",
            Self::AddChild => "add-child",
            Self::MoveBefore => "move-before",
            Self::MoveAfter => "move-after",
        };
        f.write_str(name)
    }
}

/// A single pending structural edit.
///
/// Commands are normally created through the convenience methods on
/// [`TransformQueue`](crate::TransformQueue), hold their operand ids
/// untouched while queued, and are consumed exactly once by
/// [`execute`](NodeTransform::execute). Every edit leaves the tree's
/// parent/child link invariant intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTransform {
    /// Put `new` in `old`'s place among `old`'s siblings; `old` ends up
    /// detached.
    Replace { old: NodeId, new: NodeId },
    /// Unlink `node` from its parent, keeping the order of the remaining
    /// siblings.
    Delete { node: NodeId },
    /// Exchange the positions of `a` and `b` among their respective
    /// siblings. With `swap_subtrees` each node keeps its own children;
    /// without it the two children lists are exchanged as well, so every
    /// descendant stays at its original site under the other root.
    Swap {
        a: NodeId,
        b: NodeId,
        swap_subtrees: bool,
    },
    /// Attach `child` to `parent`: at the front when `head` is set,
    /// otherwise at the end.
    AddChild {
        parent: NodeId,
        child: NodeId,
        head: bool,
    },
    /// Reinsert `node` immediately before `target`.
    MoveBefore { node: NodeId, target: NodeId },
    /// Reinsert `node` immediately after `target`.
    MoveAfter { node: NodeId, target: NodeId },
}

impl NodeTransform {
    /// The kind of edit this command performs.
    pub fn kind(&self) -> TransformKind {
        match self {
            Self::Replace { .. } => TransformKind::Replace,
            Self::Delete { .. } => TransformKind::Delete,
            Self::Swap { .. } => TransformKind::Swap,
            Self::AddChild { .. } => TransformKind::AddChild,
            Self::MoveBefore { .. } => TransformKind::MoveBefore,
            Self::MoveAfter { .. } => TransformKind::MoveAfter,
        }
    }

    /// The operand ids, in constructor order.
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Self::Replace { old, new } => vec![old, new],
            Self::Delete { node } => vec![node],
            Self::Swap { a, b, .. } => vec![a, b],
            Self::AddChild { parent, child, .. } => vec![parent, child],
            Self::MoveBefore { node, target } => vec![node, target],
            Self::MoveAfter { node, target } => vec![node, target],
        }
    }

    /// Performs the edit against `tree`, consuming the command.
    ///
    /// All operand validation happens here, not at enqueue time: stale ids
    /// and operands lacking a required parent surface as errors only when
    /// the command runs.
    pub fn execute<T>(self, tree: &mut Tree<T>) -> Result<(), TransformError> {
        let kind = self.kind();
        for id in self.operands() {
            if !tree.is_alive(id) {
                return Err(TransformError::stale(kind));
            }
        }
        match self {
            Self::Replace { old, new } => replace(tree, old, new),
            Self::Delete { node } => delete(tree, node),
            Self::Swap {
                a,
                b,
                swap_subtrees,
            } => swap(tree, a, b, swap_subtrees),
            Self::AddChild {
                parent,
                child,
                head,
            } => {
                if head {
                    tree.insert_child_at(parent, 0, child);
                } else {
                    tree.append_child(parent, child);
                }
                Ok(())
            }
            Self::MoveBefore { node, target } => move_near(tree, node, target, 0, kind),
            Self::MoveAfter { node, target } => move_near(tree, node, target, 1, kind),
        }
    }
}

/// A node's parent and its index among that parent's children.
fn attachment<T>(
    tree: &Tree<T>,
    kind: TransformKind,
    id: NodeId,
) -> Result<(NodeId, usize), TransformError> {
    let parent = tree
        .parent_of(id)
        .ok_or_else(|| TransformError::detached(kind))?;
    let index = tree
        .index_of(id)
        .ok_or_else(|| TransformError::detached(kind))?;
    Ok((parent, index))
}

fn replace<T>(tree: &mut Tree<T>, old: NodeId, new: NodeId) -> Result<(), TransformError> {
    if old == new {
        return Ok(());
    }
    // Detach the replacement first so old's index is read from the final
    // sibling layout when the two were siblings.
    tree.detach(new);
    let (parent, index) = attachment(tree, TransformKind::Replace, old)?;
    tree.detach(old);
    tree.insert_child_at(parent, index, new);
    Ok(())
}

fn delete<T>(tree: &mut Tree<T>, node: NodeId) -> Result<(), TransformError> {
    if tree.parent_of(node).is_none() {
        return Err(TransformError::detached(TransformKind::Delete));
    }
    tree.detach(node);
    Ok(())
}

fn swap<T>(
    tree: &mut Tree<T>,
    a: NodeId,
    b: NodeId,
    swap_subtrees: bool,
) -> Result<(), TransformError> {
    if a != b {
        let (pa, ia) = attachment(tree, TransformKind::Swap, a)?;
        let (pb, ib) = attachment(tree, TransformKind::Swap, b)?;
        tree.detach(a);
        tree.detach(b);
        if pa == pb {
            // Refill the lower slot first; the higher index is then valid
            // again because only one node is still missing above it.
            let (lo, lo_node, hi, hi_node) = if ia < ib { (ia, b, ib, a) } else { (ib, a, ia, b) };
            tree.insert_child_at(pa, lo, lo_node);
            tree.insert_child_at(pa, hi, hi_node);
        } else {
            tree.insert_child_at(pa, ia, b);
            tree.insert_child_at(pb, ib, a);
        }
    }
    if !swap_subtrees {
        exchange_children(tree, a, b);
    }
    Ok(())
}

/// Hands a's children to b and b's children to a, preserving each list's
/// internal order.
fn exchange_children<T>(tree: &mut Tree<T>, a: NodeId, b: NodeId) {
    let a_children = tree.children_of(a).to_vec();
    let b_children = tree.children_of(b).to_vec();
    for &child in a_children.iter().chain(b_children.iter()) {
        tree.detach(child);
    }
    for child in b_children {
        tree.append_child(a, child);
    }
    for child in a_children {
        tree.append_child(b, child);
    }
}

fn move_near<T>(
    tree: &mut Tree<T>,
    node: NodeId,
    target: NodeId,
    offset: usize,
    kind: TransformKind,
) -> Result<(), TransformError> {
    if tree.parent_of(node).is_none() {
        return Err(TransformError::detached(kind));
    }
    let to = tree
        .parent_of(target)
        .ok_or_else(|| TransformError::detached(kind))?;
    tree.detach(node);
    // Read the target's index after the detach so same-parent moves land at
    // the target's final position.
    let index = tree
        .index_of(target)
        .ok_or_else(|| TransformError::detached(kind))?;
    tree.insert_child_at(to, index + offset, node);
    Ok(())
}
