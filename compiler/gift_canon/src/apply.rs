//! In-place application of a single rewrite rule.
//!
//! Each shape handler relinks the boxes it already owns and allocates only
//! what the rule adds: one new internal node for a distribution, plus the
//! deep copy of the operand the result needs twice.

use gift_ir::{BoolTree, Op};
use tracing::trace;

use crate::rule::Shape;
use crate::{find_rewrite, CanonError, RuleId};

/// Rewrite `node` in place with `rule`.
///
/// `rule` must be the rule [`find_rewrite`] selects for `node`; anything
/// else is an [`CanonError::InternalInvariantViolation`] and leaves the
/// node unchanged.
pub fn apply_rewrite(node: &mut BoolTree, rule: RuleId) -> Result<(), CanonError> {
    let found = find_rewrite(node)?;
    if found != Some(rule) {
        return Err(mismatch(rule));
    }

    match rule.shape() {
        Shape::Reassociate { inner, outer } => reassociate(node, rule, inner, outer)?,
        Shape::DistributeLeft { op } => distribute_left(node, rule, op)?,
        Shape::DistributeRight { left, right } => distribute_right(node, rule, left, right)?,
    }

    trace!(rule = rule.number(), identity = rule.identity(), "applied rewrite");
    Ok(())
}

fn mismatch(rule: RuleId) -> CanonError {
    CanonError::InternalInvariantViolation {
        reason: format!("{rule} does not apply to this node"),
    }
}

/// `a _ (b _ c)` => `(a inner b) outer c`.
///
/// The right child's node is reused as the new left child.
fn reassociate(node: &mut BoolTree, rule: RuleId, inner: Op, outer: Op) -> Result<(), CanonError> {
    let BoolTree::Internal { op, left, right } = node else {
        return Err(mismatch(rule));
    };
    {
        let BoolTree::Internal {
            op: right_op,
            left: b,
            right: c,
        } = right.as_mut()
        else {
            return Err(mismatch(rule));
        };
        // right (b, c) -> (c, b) -> (a, b); left a -> c
        std::mem::swap(b, c);
        std::mem::swap(left, b);
        *right_op = inner;
    }
    // left c, right (a inner b) -> left (a inner b), right c
    std::mem::swap(left, right);
    *op = outer;
    Ok(())
}

/// `(a u b) op c` => `(a op c') u (b op c)`.
///
/// The left child's node becomes `a op c'`; `b op c` is newly allocated.
fn distribute_left(node: &mut BoolTree, rule: RuleId, op: Op) -> Result<(), CanonError> {
    let BoolTree::Internal {
        op: node_op,
        left,
        right,
    } = node
    else {
        return Err(mismatch(rule));
    };
    let BoolTree::Internal {
        op: left_op,
        right: b_slot,
        ..
    } = left.as_mut()
    else {
        return Err(mismatch(rule));
    };

    let c = right.as_mut().take();
    let b = std::mem::replace(b_slot.as_mut(), c.duplicate());
    *left_op = op;
    **right = BoolTree::internal(op, b, c);
    *node_op = Op::Union;
    Ok(())
}

/// `a _ (b _ c)` => `(a left b) u (a' right c)`.
///
/// The right child's node becomes `a' right c`; `a left b` is newly
/// allocated.
fn distribute_right(
    node: &mut BoolTree,
    rule: RuleId,
    left_op: Op,
    right_op: Op,
) -> Result<(), CanonError> {
    let BoolTree::Internal {
        op: node_op,
        left,
        right,
    } = node
    else {
        return Err(mismatch(rule));
    };
    let BoolTree::Internal {
        op: inner_op,
        left: b_slot,
        ..
    } = right.as_mut()
    else {
        return Err(mismatch(rule));
    };

    let a = left.as_mut().take();
    let b = std::mem::replace(b_slot.as_mut(), a.duplicate());
    *inner_op = right_op;
    **left = BoolTree::internal(left_op, a, b);
    *node_op = Op::Union;
    Ok(())
}

#[cfg(test)]
mod tests;
