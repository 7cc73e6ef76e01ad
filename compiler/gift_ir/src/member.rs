//! Flat member lists.
//!
//! A combination in GIFT-Boolean form is stored as an ordered list of
//! `(operator, object)` pairs. Each union member starts a new term; the
//! intersection and difference members that follow apply to that term.
//!
//! ```text
//! u a            (a - b) u (c + d)
//! - b      <=>
//! u c
//! + d
//! ```

use crate::{BoolTree, Name, Op, TreeError};

/// One entry of a combination's member list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Member {
    pub op: Op,
    pub name: Name,
}

impl Member {
    #[inline]
    pub const fn new(op: Op, name: Name) -> Self {
        Member { op, name }
    }
}

impl BoolTree {
    /// Rebuild a tree from a member list.
    ///
    /// Terms are folded left-deep, and the terms are joined by a left-deep
    /// union spine, so the result is in GIFT-Boolean form. The operator of
    /// the first member is always read as a union.
    pub fn from_members(members: &[Member]) -> Result<BoolTree, TreeError> {
        let Some((first, rest)) = members.split_first() else {
            return Err(TreeError::MalformedTree {
                reason: "member list is empty",
            });
        };
        if members.iter().any(|m| m.name.is_empty()) {
            return Err(TreeError::MalformedTree {
                reason: "member without an object name",
            });
        }
        if first.op != Op::Union {
            tracing::warn!(op = %first.op, "first member is not a union; treating it as one");
        }

        let mut spine: Option<BoolTree> = None;
        let mut term = BoolTree::leaf(first.name);
        for member in rest {
            match member.op {
                Op::Union => {
                    let done = std::mem::replace(&mut term, BoolTree::leaf(member.name));
                    spine = Some(match spine.take() {
                        None => done,
                        Some(acc) => BoolTree::internal(Op::Union, acc, done),
                    });
                }
                op => term = BoolTree::internal(op, term, BoolTree::leaf(member.name)),
            }
        }

        Ok(match spine {
            None => term,
            Some(acc) => BoolTree::internal(Op::Union, acc, term),
        })
    }
}

#[cfg(test)]
mod tests;
