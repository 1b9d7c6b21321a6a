//! Transform error types.

use thiserror::Error;

use crate::TransformKind;

/// Errors that can occur while executing queued transforms.
///
/// Enqueuing never validates operands; all of these surface only when a
/// command actually runs against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// An operand id no longer names a live node.
    #[error("{kind} operand is stale or belongs to another tree")]
    Stale { kind: TransformKind },

    /// An operand has no parent where the edit requires one.
    #[error("{kind} requires an attached operand")]
    Detached { kind: TransformKind },
}

impl TransformError {
    /// Creates a stale-operand error.
    pub fn stale(kind: TransformKind) -> Self {
        Self::Stale { kind }
    }

    /// Creates a detached-operand error.
    pub fn detached(kind: TransformKind) -> Self {
        Self::Detached { kind }
    }
}
