//! The nine rewrite rules and the matcher that selects them.

use std::fmt;

use gift_ir::{BoolTree, Op};

use crate::CanonError;

/// One of the nine rewrite rules, numbered as in the combination editor's
/// documentation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RuleId {
    /// 1. `a u (b u c)` => `(a u b) u c`
    UnionOfUnion,
    /// 2. `(a u b) + c` => `(a + c) u (b + c)`
    IntersectUnionLeft,
    /// 3. `a + (b u c)` => `(a + b) u (a + c)`
    IntersectUnionRight,
    /// 4. `(a u b) - c` => `(a - c) u (b - c)`
    SubtractFromUnion,
    /// 5. `a - (b u c)` => `(a - b) - c`
    SubtractUnion,
    /// 6. `a + (b + c)` => `(a + b) + c`
    IntersectOfIntersection,
    /// 7. `a - (b + c)` => `(a - b) u (a - c)`
    SubtractIntersection,
    /// 8. `a + (b - c)` => `(a + b) - c`
    IntersectDifference,
    /// 9. `a - (b - c)` => `(a - b) u (a + c)`
    SubtractDifference,
}

/// Structural effect of a rule.
///
/// Rules sharing a shape differ only in the operators they write.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Shape {
    /// `a _ (b _ c)` => `(a inner b) outer c`; nothing is copied.
    Reassociate { inner: Op, outer: Op },
    /// `(a u b) op c` => `(a op c') u (b op c)`; `c` is copied.
    DistributeLeft { op: Op },
    /// `a _ (b _ c)` => `(a left b) u (a' right c)`; `a` is copied.
    DistributeRight { left: Op, right: Op },
}

impl RuleId {
    /// All rules, in numeric order.
    pub const ALL: [RuleId; 9] = [
        RuleId::UnionOfUnion,
        RuleId::IntersectUnionLeft,
        RuleId::IntersectUnionRight,
        RuleId::SubtractFromUnion,
        RuleId::SubtractUnion,
        RuleId::IntersectOfIntersection,
        RuleId::SubtractIntersection,
        RuleId::IntersectDifference,
        RuleId::SubtractDifference,
    ];

    /// The rule's number, `1..=9`.
    pub const fn number(self) -> u8 {
        match self {
            RuleId::UnionOfUnion => 1,
            RuleId::IntersectUnionLeft => 2,
            RuleId::IntersectUnionRight => 3,
            RuleId::SubtractFromUnion => 4,
            RuleId::SubtractUnion => 5,
            RuleId::IntersectOfIntersection => 6,
            RuleId::SubtractIntersection => 7,
            RuleId::IntersectDifference => 8,
            RuleId::SubtractDifference => 9,
        }
    }

    /// Look a rule up by number.
    pub fn from_number(number: u8) -> Option<RuleId> {
        Self::ALL.into_iter().find(|rule| rule.number() == number)
    }

    /// The algebraic identity the rule applies.
    pub const fn identity(self) -> &'static str {
        match self {
            RuleId::UnionOfUnion => "a u (b u c) => (a u b) u c",
            RuleId::IntersectUnionLeft => "(a u b) + c => (a + c) u (b + c)",
            RuleId::IntersectUnionRight => "a + (b u c) => (a + b) u (a + c)",
            RuleId::SubtractFromUnion => "(a u b) - c => (a - c) u (b - c)",
            RuleId::SubtractUnion => "a - (b u c) => (a - b) - c",
            RuleId::IntersectOfIntersection => "a + (b + c) => (a + b) + c",
            RuleId::SubtractIntersection => "a - (b + c) => (a - b) u (a - c)",
            RuleId::IntersectDifference => "a + (b - c) => (a + b) - c",
            RuleId::SubtractDifference => "a - (b - c) => (a - b) u (a + c)",
        }
    }

    pub(crate) const fn shape(self) -> Shape {
        use Op::{Difference, Intersection, Union};
        match self {
            RuleId::UnionOfUnion => Shape::Reassociate {
                inner: Union,
                outer: Union,
            },
            RuleId::SubtractUnion => Shape::Reassociate {
                inner: Difference,
                outer: Difference,
            },
            RuleId::IntersectOfIntersection => Shape::Reassociate {
                inner: Intersection,
                outer: Intersection,
            },
            RuleId::IntersectDifference => Shape::Reassociate {
                inner: Intersection,
                outer: Difference,
            },
            RuleId::IntersectUnionLeft => Shape::DistributeLeft { op: Intersection },
            RuleId::SubtractFromUnion => Shape::DistributeLeft { op: Difference },
            RuleId::IntersectUnionRight => Shape::DistributeRight {
                left: Intersection,
                right: Intersection,
            },
            RuleId::SubtractIntersection => Shape::DistributeRight {
                left: Difference,
                right: Difference,
            },
            RuleId::SubtractDifference => Shape::DistributeRight {
                left: Difference,
                right: Intersection,
            },
        }
    }

    /// Zero-based index, for per-rule counters.
    pub(crate) const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {} ({})", self.number(), self.identity())
    }
}

/// Select the rewrite rule that applies at `node`, if any.
///
/// Looks only at the node's operator and its children's operators. At
/// most one rule matches a node. Leaves never match.
pub fn find_rewrite(node: &BoolTree) -> Result<Option<RuleId>, CanonError> {
    let BoolTree::Internal { op, left, right } = node else {
        return Ok(None);
    };
    if left.is_hole() || right.is_hole() {
        return Err(CanonError::MalformedTree {
            reason: "internal node with a missing child",
        });
    }

    let lop = left.op();
    let rop = right.op();
    let rule = match op {
        Op::Union => match rop {
            Some(Op::Union) => Some(RuleId::UnionOfUnion),
            _ => None,
        },
        Op::Intersection => match (lop, rop) {
            (Some(Op::Union), _) => Some(RuleId::IntersectUnionLeft),
            (_, Some(Op::Union)) => Some(RuleId::IntersectUnionRight),
            (_, Some(Op::Intersection)) => Some(RuleId::IntersectOfIntersection),
            (_, Some(Op::Difference)) => Some(RuleId::IntersectDifference),
            (_, None) => None,
        },
        Op::Difference => match (lop, rop) {
            (Some(Op::Union), _) => Some(RuleId::SubtractFromUnion),
            (_, Some(Op::Union)) => Some(RuleId::SubtractUnion),
            (_, Some(Op::Intersection)) => Some(RuleId::SubtractIntersection),
            (_, Some(Op::Difference)) => Some(RuleId::SubtractDifference),
            (_, None) => None,
        },
    };
    Ok(rule)
}
