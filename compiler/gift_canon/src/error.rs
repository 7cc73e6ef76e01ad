//! Canonicalization errors.

use gift_ir::TreeError;

use crate::GiftViolation;

/// Why canonicalization (or flattening) failed.
///
/// Errors are returned to the immediate caller; nothing is retried.
/// [`Canonicalizer::canonicalize`](crate::Canonicalizer::canonicalize)
/// leaves the caller's tree untouched when it fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CanonError {
    /// An operator tag outside `u`, `+` and `-`.
    #[error("invalid Boolean operator `{tag}`")]
    InvalidOperator { tag: char },
    /// A hole (missing child) was found in the tree.
    #[error("malformed tree: {reason}")]
    MalformedTree { reason: &'static str },
    /// A rewrite did not fit its node, or an iteration bound was exceeded.
    #[error("internal invariant violated: {reason}")]
    InternalInvariantViolation { reason: String },
    /// Flattening requires GIFT-Boolean form.
    #[error("tree is not in GIFT-Boolean form: {0}")]
    NotGiftForm(GiftViolation),
}

impl From<TreeError> for CanonError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::InvalidOperator { tag } => CanonError::InvalidOperator { tag },
            TreeError::MalformedTree { reason } => CanonError::MalformedTree { reason },
        }
    }
}

impl From<GiftViolation> for CanonError {
    fn from(violation: GiftViolation) -> Self {
        CanonError::NotGiftForm(violation)
    }
}
