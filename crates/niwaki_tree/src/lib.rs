//! # niwaki_tree
//!
//! The tree type underlying the niwaki transformation framework.
//!
//! This crate provides an ordered, mutable tree with parent back-references
//! and a generic payload per node.
//!
//! ## Architecture
//!
//! - All nodes of a tree live in one slot-vector arena
//! - Nodes are addressed by [`NodeId`] handles (slot index + generation)
//! - Removing a node bumps its slot's generation, so stale ids are detected
//!   rather than silently resolving to a reused slot
//! - Hierarchy edits preserve the link invariant: a child listed in a parent
//!   always points back at that parent
//!
//! ## Example
//!
//! ```rust
//! use niwaki_tree::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, "root");
//! let child = tree.insert(Some(root), "child");
//!
//! assert_eq!(tree.parent_of(child), Some(root));
//! assert_eq!(tree.children_of(root), &[child]);
//! ```

mod id;
mod nested;
mod tree;

pub use id::NodeId;
pub use nested::Nested;
pub use tree::{Descendants, Tree};
