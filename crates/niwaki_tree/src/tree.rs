//! Core tree implementation: storage, hierarchy, queries.

use std::fmt;

use crate::NodeId;

/// An ordered tree with parent back-references and a generic payload.
///
/// All nodes live in one arena owned by the tree; they are addressed through
/// [`NodeId`] handles. Ids stay valid until the node they name is removed,
/// after which every accessor treats them as stale and answers `None` (or an
/// empty slice) instead of panicking. Structural mutation goes through the
/// hierarchy primitives ([`Tree::insert_child_at`], [`Tree::append_child`],
/// [`Tree::detach`]), which keep the parent/child links consistent: a node
/// listed in some parent's children always points back at that parent, and
/// attaching an already-attached node detaches it from its old parent first.
pub struct Tree<T> {
    nodes: Vec<Option<Node<T>>>, // slots
    generations: Vec<u32>,       // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

struct Node<T> {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    value: T,
}

impl<T> Node<T> {
    fn new(generation: u32, value: T) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            value,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<T> Tree<T> {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Allocates a new node holding `value`.
    ///
    /// With `parent` given, the node is appended to that parent's children;
    /// with `None` it starts out as a detached root.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is stale.
    pub fn insert(&mut self, parent: Option<NodeId>, value: T) -> NodeId {
        if let Some(parent) = parent {
            let _ = self.node(parent); // fail fast before allocating
        }
        let (index, generation) = if let Some(index) = self.free_list.pop() {
            let generation = self.generations[index].saturating_add(1);
            self.generations[index] = generation;
            self.nodes[index] = Some(Node::new(generation, value));
            (index as u32, generation)
        } else {
            self.nodes.push(Some(Node::new(1, value)));
            self.generations.push(1);
            ((self.nodes.len() - 1) as u32, 1)
        };
        let id = NodeId::new(index, generation);
        if let Some(parent) = parent {
            self.node_mut(id).parent = Some(parent);
            self.node_mut(parent).children.push(id);
        }
        id
    }

    /// Removes a node and its whole subtree, freeing their slots.
    ///
    /// Outstanding ids for the removed nodes go stale. Stale `id`s are
    /// ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.detach(id);
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes[id.index()] = None;
        self.free_list.push(id.index());
    }

    /// Unlinks a node from its parent, preserving the order of the remaining
    /// siblings. The node stays alive as a detached root. Stale ids and
    /// already-detached nodes are ignored.
    pub fn detach(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        let Some(parent) = self.node(id).parent else {
            return;
        };
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    /// Inserts `child` into `parent`'s children at `index`.
    ///
    /// If `child` is currently attached elsewhere it is detached first, so
    /// this is a move, never an aliasing attach.
    ///
    /// # Panics
    ///
    /// Panics if either id is stale or `index` is past the end of the
    /// children sequence.
    pub fn insert_child_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        debug_assert!(parent != child, "a node cannot be its own child");
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.insert(index, child);
    }

    /// Appends `child` to the end of `parent`'s children.
    ///
    /// Same move semantics as [`Tree::insert_child_at`].
    ///
    /// # Panics
    ///
    /// Panics if either id is stale.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(parent != child, "a node cannot be its own child");
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Unlinks the child of `parent` at `index`, returning it. The child
    /// stays alive as a detached root. `None` when `parent` is stale or
    /// `index` is out of bounds.
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> Option<NodeId> {
        let child = self.child_at(parent, index)?;
        self.detach(child);
        Some(child)
    }

    /// Returns the parent of a node, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Returns the children of a node, or an empty slice for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Returns the number of children of a node (0 for stale ids).
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children_of(id).len()
    }

    /// Returns the child at `index`, if any.
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children_of(id).get(index).copied()
    }

    /// Returns a node's position among its parent's children, or `None` for
    /// roots and stale ids.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent_of(id)?;
        self.children_of(parent).iter().position(|&c| c == id)
    }

    /// Returns a reference to a node's payload, or `None` for stale ids.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node's payload, or `None` for stale
    /// ids.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.get_mut(id).map(|node| &mut node.value)
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// An id is live if its slot exists and its generation matches the
    /// generation currently stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns true if the tree holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates a subtree in depth-first pre-order, starting at (and
    /// including) `id`. Empty for stale ids.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_, T> {
        let stack = if self.is_alive(id) { vec![id] } else { Vec::new() };
        Descendants { tree: self, stack }
    }

    // --- internals ---

    fn get(&self, id: NodeId) -> Option<&Node<T>> {
        let node = self.nodes.get(id.index())?.as_ref()?;
        (node.generation == id.generation()).then_some(node)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        let node = self.nodes.get_mut(id.index())?.as_mut()?;
        (node.generation == id.generation()).then_some(node)
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.get(id).expect("stale NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.get_mut(id).expect("stale NodeId")
    }
}

impl<T: Clone> Tree<T> {
    /// Clones a whole subtree into fresh nodes and returns the copy's root,
    /// which starts out detached. Returns `None` for stale ids.
    pub fn deep_clone(&mut self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        let value = self.node(id).value.clone();
        let children = self.node(id).children.clone();
        let copy = self.insert(None, value);
        for child in children {
            if let Some(child_copy) = self.deep_clone(child) {
                self.append_child(copy, child_copy);
            }
        }
        Some(copy)
    }
}

/// Depth-first pre-order iterator over a subtree.
///
/// Created by [`Tree::descendants`].
pub struct Descendants<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for Descendants<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = self.tree.children_of(id);
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}
