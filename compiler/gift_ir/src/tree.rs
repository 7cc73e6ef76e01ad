//! The owned Boolean expression tree.

use std::fmt;
use std::hash::{Hash, Hasher};

use gift_stack::ensure_sufficient_stack;

use crate::{Name, Op, StringInterner, TreeError};

/// A Boolean combination of named objects.
///
/// Internal nodes own their children, so a subtree has exactly one
/// parent. A leaf whose name is [`Name::EMPTY`] is a *hole*: the
/// placeholder [`BoolTree::take`] leaves behind, never a real object.
///
/// Equality, hashing, formatting and drop all handle trees deeper than
/// the thread's stack.
pub enum BoolTree {
    /// Reference to a named object.
    Leaf(Name),
    /// `left op right`.
    Internal {
        op: Op,
        left: Box<BoolTree>,
        right: Box<BoolTree>,
    },
}

impl BoolTree {
    const HOLE: BoolTree = BoolTree::Leaf(Name::EMPTY);

    /// Create a leaf referencing `name`.
    #[inline]
    pub fn leaf(name: Name) -> Self {
        BoolTree::Leaf(name)
    }

    /// Create an internal node `left op right`.
    #[inline]
    pub fn internal(op: Op, left: BoolTree, right: BoolTree) -> Self {
        BoolTree::Internal {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create an internal node from a textual operator tag.
    pub fn internal_from_tag(
        tag: char,
        left: BoolTree,
        right: BoolTree,
    ) -> Result<Self, TreeError> {
        Ok(Self::internal(Op::from_tag(tag)?, left, right))
    }

    /// The node's operator, or `None` for a leaf.
    #[inline]
    pub fn op(&self) -> Option<Op> {
        match self {
            BoolTree::Leaf(_) => None,
            BoolTree::Internal { op, .. } => Some(*op),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, BoolTree::Leaf(_))
    }

    /// Whether this is the placeholder left by [`BoolTree::take`].
    #[inline]
    pub fn is_hole(&self) -> bool {
        matches!(self, BoolTree::Leaf(name) if name.is_empty())
    }

    /// The leaf's object name, or `None` for an internal node.
    #[inline]
    pub fn name(&self) -> Option<Name> {
        match self {
            BoolTree::Leaf(name) => Some(*name),
            BoolTree::Internal { .. } => None,
        }
    }

    #[inline]
    pub fn left(&self) -> Option<&BoolTree> {
        match self {
            BoolTree::Leaf(_) => None,
            BoolTree::Internal { left, .. } => Some(left),
        }
    }

    #[inline]
    pub fn right(&self) -> Option<&BoolTree> {
        match self {
            BoolTree::Leaf(_) => None,
            BoolTree::Internal { right, .. } => Some(right),
        }
    }

    /// Move the tree out, leaving a hole in its place.
    #[inline]
    pub fn take(&mut self) -> BoolTree {
        std::mem::replace(self, Self::HOLE)
    }

    /// Deep copy.
    ///
    /// Every internal node of the result is freshly allocated, so the copy
    /// can be rewritten without affecting the original. Leaves copy their
    /// name.
    pub fn duplicate(&self) -> BoolTree {
        ensure_sufficient_stack(|| match self {
            BoolTree::Leaf(name) => BoolTree::Leaf(*name),
            BoolTree::Internal { op, left, right } => BoolTree::Internal {
                op: *op,
                left: Box::new(left.duplicate()),
                right: Box::new(right.duplicate()),
            },
        })
    }

    /// Number of internal (operator) nodes.
    pub fn internal_count(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            BoolTree::Leaf(_) => 0,
            BoolTree::Internal { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
        })
    }

    /// Number of leaf occurrences, counting repeated names.
    pub fn leaf_count(&self) -> usize {
        self.internal_count() + 1
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            BoolTree::Leaf(_) => 0,
            BoolTree::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        })
    }

    /// Leaf names in left-to-right order, with repetitions.
    pub fn leaves(&self) -> Vec<Name> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<Name>) {
        ensure_sufficient_stack(|| match self {
            BoolTree::Leaf(name) => out.push(*name),
            BoolTree::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        });
    }

    /// Check that the tree has no holes.
    pub fn check_well_formed(&self) -> Result<(), TreeError> {
        if self.is_hole() {
            return Err(TreeError::MalformedTree {
                reason: "tree is empty",
            });
        }
        self.check_children()
    }

    fn check_children(&self) -> Result<(), TreeError> {
        ensure_sufficient_stack(|| match self {
            BoolTree::Leaf(_) => Ok(()),
            BoolTree::Internal { left, right, .. } => {
                if left.is_hole() || right.is_hole() {
                    return Err(TreeError::MalformedTree {
                        reason: "internal node with a missing child",
                    });
                }
                left.check_children()?;
                right.check_children()
            }
        })
    }
}

impl Clone for BoolTree {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl Drop for BoolTree {
    fn drop(&mut self) {
        let BoolTree::Internal { left, right, .. } = self else {
            return;
        };
        if left.is_leaf() && right.is_leaf() {
            return;
        }

        // Detach subtrees onto a work list so each node drops with leaf
        // children only.
        let mut pending = vec![left.as_mut().take(), right.as_mut().take()];
        while let Some(mut node) = pending.pop() {
            if let BoolTree::Internal { left, right, .. } = &mut node {
                if !left.is_leaf() {
                    pending.push(left.as_mut().take());
                }
                if !right.is_leaf() {
                    pending.push(right.as_mut().take());
                }
            }
        }
    }
}

impl PartialEq for BoolTree {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (BoolTree::Leaf(a), BoolTree::Leaf(b)) => a == b,
            (
                BoolTree::Internal {
                    op: op_a,
                    left: left_a,
                    right: right_a,
                },
                BoolTree::Internal {
                    op: op_b,
                    left: left_b,
                    right: right_b,
                },
            ) => op_a == op_b && left_a == left_b && right_a == right_b,
            _ => false,
        })
    }
}

impl Eq for BoolTree {}

impl Hash for BoolTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| match self {
            BoolTree::Leaf(name) => {
                0u8.hash(state);
                name.hash(state);
            }
            BoolTree::Internal { op, left, right } => {
                1u8.hash(state);
                op.hash(state);
                left.hash(state);
                right.hash(state);
            }
        });
    }
}

impl fmt::Debug for BoolTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            BoolTree::Leaf(name) => f.debug_tuple("Leaf").field(name).finish(),
            BoolTree::Internal { op, left, right } => f
                .debug_struct("Internal")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
        })
    }
}

/// Convenience constructors that intern leaf names on the way in.
#[derive(Clone, Copy)]
pub struct TreeBuilder<'a> {
    interner: &'a StringInterner,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        TreeBuilder { interner }
    }

    /// Leaf referencing the object called `name`.
    pub fn leaf(&self, name: &str) -> BoolTree {
        BoolTree::leaf(self.interner.intern(name))
    }

    pub fn union(&self, left: BoolTree, right: BoolTree) -> BoolTree {
        BoolTree::internal(Op::Union, left, right)
    }

    pub fn intersect(&self, left: BoolTree, right: BoolTree) -> BoolTree {
        BoolTree::internal(Op::Intersection, left, right)
    }

    pub fn subtract(&self, left: BoolTree, right: BoolTree) -> BoolTree {
        BoolTree::internal(Op::Difference, left, right)
    }
}
