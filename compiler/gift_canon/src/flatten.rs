//! Flattening a GIFT-form tree into its member list.

use gift_ir::{BoolTree, Member, Op};
use gift_stack::ensure_sufficient_stack;

use crate::{validate_gift_form, CanonError};

/// The member list of a tree in GIFT-Boolean form.
///
/// Members come out in left-to-right leaf order. Each member carries the
/// operator that joins it to what precedes it; the first member of every
/// union term (including the very first member) carries [`Op::Union`].
/// [`BoolTree::from_members`] is the inverse.
pub fn flatten(tree: &BoolTree) -> Result<Vec<Member>, CanonError> {
    tree.check_well_formed()?;
    validate_gift_form(tree)?;

    let mut members = Vec::with_capacity(tree.leaf_count());
    flatten_into(tree, Op::Union, &mut members);
    Ok(members)
}

/// `lead` is the operator for the leftmost leaf below `node`.
fn flatten_into(node: &BoolTree, lead: Op, out: &mut Vec<Member>) {
    ensure_sufficient_stack(|| match node {
        BoolTree::Leaf(name) => out.push(Member::new(lead, *name)),
        BoolTree::Internal { op, left, right } => {
            flatten_into(left, lead, out);
            flatten_into(right, *op, out);
        }
    });
}
