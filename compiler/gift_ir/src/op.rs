//! Boolean set operators.

use std::fmt;

use crate::TreeError;

/// A Boolean operator on solids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Op {
    /// `u`: points in either operand.
    Union,
    /// `+`: points in both operands.
    Intersection,
    /// `-`: points in the left operand but not the right.
    Difference,
}

impl Op {
    /// All operators, in tag order.
    pub const ALL: [Op; 3] = [Op::Union, Op::Intersection, Op::Difference];

    /// Parse a textual operator tag.
    ///
    /// Accepts `u`, `+` and `-`, the tags used in combination member lists.
    pub fn from_tag(tag: char) -> Result<Op, TreeError> {
        match tag {
            'u' => Ok(Op::Union),
            '+' => Ok(Op::Intersection),
            '-' => Ok(Op::Difference),
            _ => Err(TreeError::InvalidOperator { tag }),
        }
    }

    /// The textual tag of this operator.
    pub const fn tag(self) -> char {
        match self {
            Op::Union => 'u',
            Op::Intersection => '+',
            Op::Difference => '-',
        }
    }

    /// The tag as a string slice, for printers.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Op::Union => "u",
            Op::Intersection => "+",
            Op::Difference => "-",
        }
    }

    /// Binding strength; lower binds tighter.
    ///
    /// Intersection and difference bind tighter than union, and all three
    /// are left-associative.
    pub const fn precedence(self) -> u8 {
        match self {
            Op::Intersection | Op::Difference => 1,
            Op::Union => 2,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
