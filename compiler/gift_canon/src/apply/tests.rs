use super::*;
use gift_ir::StringInterner;
use pretty_assertions::assert_eq;

fn parse(interner: &StringInterner, source: &str) -> BoolTree {
    match gift_parse::parse(source, interner) {
        Ok(tree) => tree,
        Err(err) => panic!("{}", err.report(source)),
    }
}

/// Apply `rule` to `input` and compare with `expected`.
fn check(rule: u8, input: &str, expected: &str) {
    let interner = StringInterner::new();
    let rule = RuleId::from_number(rule).unwrap_or_else(|| panic!("no rule {rule}"));
    let mut tree = parse(&interner, input);
    assert_eq!(apply_rewrite(&mut tree, rule), Ok(()), "{input}");
    assert_eq!(tree, parse(&interner, expected), "{input}");
}

#[test]
fn rule_1_reassociates_union() {
    check(1, "a u (b u c)", "(a u b) u c");
}

#[test]
fn rule_2_distributes_intersection_over_left_union() {
    check(2, "(a u b) + c", "(a + c) u (b + c)");
}

#[test]
fn rule_3_distributes_intersection_over_right_union() {
    check(3, "a + (b u c)", "(a + b) u (a + c)");
}

#[test]
fn rule_4_distributes_difference_over_left_union() {
    check(4, "(a u b) - c", "(a - c) u (b - c)");
}

#[test]
fn rule_5_subtracts_union_members_one_by_one() {
    check(5, "a - (b u c)", "(a - b) - c");
}

#[test]
fn rule_6_reassociates_intersection() {
    check(6, "a + (b + c)", "(a + b) + c");
}

#[test]
fn rule_7_splits_subtracted_intersection() {
    check(7, "a - (b + c)", "(a - b) u (a - c)");
}

#[test]
fn rule_8_pulls_difference_out_of_intersection() {
    check(8, "a + (b - c)", "(a + b) - c");
}

#[test]
fn rule_9_splits_subtracted_difference() {
    check(9, "a - (b - c)", "(a - b) u (a + c)");
}

#[test]
fn compound_operands_are_copied_whole() {
    check(
        2,
        "(a u b) + (x - y)",
        "(a + (x - y)) u (b + (x - y))",
    );
    check(
        3,
        "(p - q) + (b u c)",
        "((p - q) + b) u ((p - q) + c)",
    );
    check(
        9,
        "(p + q) - (b - c)",
        "((p + q) - b) u ((p + q) + c)",
    );
}

#[test]
fn compound_inner_operands_are_relinked() {
    check(
        1,
        "(a - x) u ((b + y) u (c - z))",
        "((a - x) u (b + y)) u (c - z)",
    );
    check(
        5,
        "a - ((b u c) u (d + e))",
        "(a - (b u c)) - (d + e)",
    );
}

fn sorted_leaves(tree: &BoolTree) -> Vec<u32> {
    let mut names: Vec<u32> = tree.leaves().into_iter().map(|n| n.raw()).collect();
    names.sort_unstable();
    names
}

#[test]
fn duplication_adds_exactly_the_copied_operand() {
    let interner = StringInterner::new();

    // Rule 2 copies `c`.
    let mut tree = parse(&interner, "(a u b) + (c - d)");
    let mut expected = sorted_leaves(&tree);
    expected.extend(sorted_leaves(&parse(&interner, "c - d")));
    expected.sort_unstable();
    assert_eq!(apply_rewrite(&mut tree, RuleId::IntersectUnionLeft), Ok(()));
    assert_eq!(sorted_leaves(&tree), expected);

    // Rule 7 copies `a`.
    let mut tree = parse(&interner, "(a - e) - (b + c)");
    let mut expected = sorted_leaves(&tree);
    expected.extend(sorted_leaves(&parse(&interner, "a - e")));
    expected.sort_unstable();
    assert_eq!(apply_rewrite(&mut tree, RuleId::SubtractIntersection), Ok(()));
    assert_eq!(sorted_leaves(&tree), expected);

    // Re-association copies nothing.
    let mut tree = parse(&interner, "a + (b - c)");
    let expected = sorted_leaves(&tree);
    assert_eq!(apply_rewrite(&mut tree, RuleId::IntersectDifference), Ok(()));
    assert_eq!(sorted_leaves(&tree), expected);
}

#[test]
fn copies_are_independent() {
    let interner = StringInterner::new();
    let mut tree = parse(&interner, "(p - q) + (b u c)");
    assert_eq!(apply_rewrite(&mut tree, RuleId::IntersectUnionRight), Ok(()));

    // Rewrite the original `p - q` under the left branch...
    if let BoolTree::Internal { left, .. } = &mut tree {
        if let BoolTree::Internal { left: a, .. } = left.as_mut() {
            if let BoolTree::Internal { op, .. } = a.as_mut() {
                *op = Op::Union;
            }
        }
    }
    // ...and the copy under the right branch still reads `p - q`.
    assert_eq!(tree, parse(&interner, "((p u q) + b) u ((p - q) + c)"));
}

#[test]
fn wrong_rule_is_rejected_and_leaves_node_unchanged() {
    let interner = StringInterner::new();
    let mut tree = parse(&interner, "a + (b u c)");
    let before = tree.duplicate();

    let err = apply_rewrite(&mut tree, RuleId::UnionOfUnion);
    assert_eq!(
        err,
        Err(CanonError::InternalInvariantViolation {
            reason: format!("{} does not apply to this node", RuleId::UnionOfUnion),
        })
    );
    assert_eq!(tree, before);
}

#[test]
fn leaves_cannot_be_rewritten() {
    let interner = StringInterner::new();
    let mut tree = parse(&interner, "a");
    assert!(matches!(
        apply_rewrite(&mut tree, RuleId::IntersectUnionRight),
        Err(CanonError::InternalInvariantViolation { .. })
    ));
}
