//! # niwaki_transform
//!
//! Deferred-mutation transformation framework for trees.
//!
//! Mutating a tree while walking it is the classic way to corrupt a
//! traversal. This crate splits the two concerns into a strict two-phase
//! protocol:
//!
//! 1. a [`TraversalStrategy`] walks the tree and invokes a
//!    [`TransformRule`] at every visited node; the rule only *reads* the
//!    structure and *writes* edit commands into a [`TransformQueue`];
//! 2. after the walk, the queue is drained (forward or in reverse) and
//!    each [`NodeTransform`] performs its structural edit against the live
//!    tree.
//!
//! ## Example
//!
//! ```rust
//! use niwaki_transform::{
//!     NodeId, TransformQueue, TransformResult, TransformRule, TraversalStrategy, Tree,
//! };
//!
//! /// Deletes every node tagged "obsolete".
//! struct Sweep;
//!
//! impl TransformRule<&'static str> for Sweep {
//!     fn apply(
//!         &mut self,
//!         tree: &mut Tree<&'static str>,
//!         node: NodeId,
//!         queue: &mut TransformQueue,
//!     ) -> TransformResult {
//!         if tree.value(node) == Some(&"obsolete") {
//!             queue.delete(node);
//!         }
//!         TransformResult::empty()
//!     }
//!
//!     fn traversal_strategy(&self) -> TraversalStrategy {
//!         TraversalStrategy::PreOrder
//!     }
//! }
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, "root");
//! tree.insert(Some(root), "keep");
//! tree.insert(Some(root), "obsolete");
//!
//! Sweep.visit(&mut tree, root)?;
//! assert_eq!(tree.child_count(root), 1);
//! # Ok::<(), niwaki_transform::TransformError>(())
//! ```

mod error;
mod queue;
mod result;
mod rule;
mod strategy;
mod transform;

pub use error::TransformError;
pub use queue::TransformQueue;
pub use result::TransformResult;
pub use rule::TransformRule;
pub use strategy::TraversalStrategy;
pub use transform::{NodeTransform, TransformKind};

pub use niwaki_tree::{NodeId, Tree};
