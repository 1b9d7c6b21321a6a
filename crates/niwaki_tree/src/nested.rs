//! Serializable nested view of a subtree.
//!
//! [`Tree`] stores nodes flat in an arena, which is the wrong shape for
//! humans and for snapshot tests. [`Nested`] borrows a subtree and
//! serializes it in the natural recursive form.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{NodeId, Tree};

/// A borrow of one subtree, serialized as `{"value": ..., "children": [...]}`.
///
/// The `children` field is omitted for leaves. Created by [`Tree::nested`].
#[derive(Clone, Copy)]
pub struct Nested<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<T> Tree<T> {
    /// Returns a serializable nested view of the subtree rooted at `id`, or
    /// `None` for stale ids.
    pub fn nested(&self, id: NodeId) -> Option<Nested<'_, T>> {
        self.is_alive(id).then_some(Nested { tree: self, id })
    }
}

impl<'a, T: Serialize> Serialize for Nested<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let children = self.tree.children_of(self.id);

        let len = if children.is_empty() { 1 } else { 2 };
        let mut state = serializer.serialize_struct("Node", len)?;

        // A live id always has a value; `nested` refuses stale ids.
        state.serialize_field("value", &self.tree.value(self.id))?;

        if !children.is_empty() {
            let nested: Vec<Nested<'_, T>> = children
                .iter()
                .map(|&child| Nested {
                    tree: self.tree,
                    id: child,
                })
                .collect();
            state.serialize_field("children", &nested)?;
        }

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::Tree;

    #[test]
    fn test_serialize_leaf() {
        let mut tree = Tree::new();
        let leaf = tree.insert(None, "leaf");

        let json = serde_json::to_value(tree.nested(leaf).unwrap()).unwrap();

        assert_eq!(json["value"], "leaf");
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_serialize_nested_structure() {
        let mut tree = Tree::new();
        let root = tree.insert(None, "root");
        let a = tree.insert(Some(root), "a");
        tree.insert(Some(root), "b");
        tree.insert(Some(a), "c");

        let json = serde_json::to_value(tree.nested(root).unwrap()).unwrap();

        assert_eq!(json["value"], "root");
        assert_eq!(json["children"].as_array().unwrap().len(), 2);
        assert_eq!(json["children"][0]["value"], "a");
        assert_eq!(json["children"][0]["children"][0]["value"], "c");
        assert_eq!(json["children"][1]["value"], "b");
    }

    #[test]
    fn test_nested_stale_id() {
        let mut tree = Tree::new();
        let node = tree.insert(None, 1);
        tree.remove(node);
        assert!(tree.nested(node).is_none());
    }
}
