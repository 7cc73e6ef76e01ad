//! The GIFT-Boolean shape check.

use gift_ir::{BoolTree, Op};
use gift_stack::ensure_sufficient_stack;

/// The first place a tree departs from GIFT-Boolean form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GiftViolation {
    #[error("a union has a union as its right operand")]
    UnionOnRight,
    #[error("the right operand of `{op}` is not an object")]
    OperandNotLeaf { op: Op },
    #[error("a union appears below `{op}`")]
    UnionUnder { op: Op },
}

/// Check that `tree` is in GIFT-Boolean form.
///
/// Union nodes must form a left-leaning spine from the root, and every
/// intersection and difference must have an object as its right operand
/// and no union below it.
pub fn validate_gift_form(tree: &BoolTree) -> Result<(), GiftViolation> {
    ensure_sufficient_stack(|| {
        let BoolTree::Internal { op, left, right } = tree else {
            return Ok(());
        };
        match op {
            Op::Union => {
                if right.op() == Some(Op::Union) {
                    return Err(GiftViolation::UnionOnRight);
                }
            }
            &op => {
                if !right.is_leaf() {
                    return Err(GiftViolation::OperandNotLeaf { op });
                }
                if left.op() == Some(Op::Union) {
                    return Err(GiftViolation::UnionUnder { op });
                }
            }
        }
        validate_gift_form(left)?;
        validate_gift_form(right)
    })
}

#[inline]
pub fn is_gift_form(tree: &BoolTree) -> bool {
    validate_gift_form(tree).is_ok()
}
