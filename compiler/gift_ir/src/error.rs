//! Errors raised while building trees.

/// A contract violation detected while constructing a tree.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum TreeError {
    /// An operator tag outside `u`, `+` and `-`.
    #[error("invalid Boolean operator `{tag}` (expected `u`, `+` or `-`)")]
    InvalidOperator { tag: char },
    /// An internal node with a missing child, or an otherwise unusable tree.
    #[error("malformed tree: {reason}")]
    MalformedTree { reason: &'static str },
}
