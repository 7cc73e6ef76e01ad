//! GIFT-Boolean canonicalization of combination trees.
//!
//! The legacy region evaluator only understands combinations whose tree
//! has GIFT-Boolean form:
//!
//! - union nodes form a left-leaning spine from the root (a union's right
//!   child is never a union, and no union sits below an intersection or
//!   difference);
//! - the right child of every intersection and difference is a leaf.
//!
//! Such a tree flattens to an ordered member list (see [`flatten`]).
//!
//! # Rewrite system
//!
//! Nine local rewrite rules ([`RuleId`]) move a tree towards that form.
//! [`find_rewrite`] picks the rule for a node from its operator and its
//! children's operators; [`apply_rewrite`] performs it in place,
//! deep-copying the one operand the rule needs twice.
//!
//! The driver runs two nested fixpoints:
//!
//! 1. [`stabilize_node`] rewrites one node until no rule matches it;
//! 2. [`canonicalize_once`] stabilizes the root and then descends into the
//!    (possibly new) children; [`canonicalize`] repeats whole passes until
//!    a pass performs no rewrite.
//!
//! The outer loop is required: stabilizing a child can change the child's
//! operator, which re-exposes a rule at its already-visited parent.
//!
//! Both loops are bounded (see [`CanonOptions`]). Exceeding a bound means
//! the rule set failed to converge and is reported as
//! [`CanonError::InternalInvariantViolation`] instead of looping forever.
//!
//! # Pipeline Position
//!
//! ```text
//! gift_parse -> **gift_canon** -> gift_fmt / member list storage
//! ```

mod apply;
mod canonicalize;
mod error;
mod flatten;
mod gift_form;
mod rule;

pub use apply::apply_rewrite;
pub use canonicalize::{
    canonicalize, canonicalize_once, stabilize_node, CanonOptions, CanonStats, Canonicalizer,
};
pub use error::CanonError;
pub use flatten::flatten;
pub use gift_form::{is_gift_form, validate_gift_form, GiftViolation};
pub use rule::{find_rewrite, RuleId};
