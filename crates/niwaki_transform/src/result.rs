//! Descent signal returned by rule evaluation.

/// The outcome of evaluating a rule at one node: whether the traversal
/// should descend into that node's children.
///
/// Immutable value type. The neutral result is [`TransformResult::empty`],
/// which keeps descending; rules that never prune can return it
/// unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformResult {
    visit_children: bool,
}

impl TransformResult {
    /// The neutral result: keep descending.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            visit_children: true,
        }
    }

    /// A result that keeps the traversal out of the node's children.
    #[inline]
    pub const fn prune() -> Self {
        Self {
            visit_children: false,
        }
    }

    /// Builds a result with an explicit descent decision.
    #[inline]
    pub const fn with_visit_children(visit_children: bool) -> Self {
        Self { visit_children }
    }

    /// Whether the traversal should visit the node's children.
    #[inline]
    pub const fn visit_children(&self) -> bool {
        self.visit_children
    }
}

impl Default for TransformResult {
    fn default() -> Self {
        Self::empty()
    }
}
