use super::*;
use gift_ir::{Name, Op, StringInterner};
use pretty_assertions::assert_eq;

use crate::is_gift_form;

fn parse(interner: &StringInterner, source: &str) -> BoolTree {
    match gift_parse::parse(source, interner) {
        Ok(tree) => tree,
        Err(err) => panic!("{}", err.report(source)),
    }
}

/// Canonicalize `input` with default options and compare with `expected`.
fn check(input: &str, expected: &str, rewrites: usize, passes: usize) {
    let interner = StringInterner::new();
    let mut tree = parse(&interner, input);
    let stats = Canonicalizer::default()
        .canonicalize(&mut tree)
        .unwrap_or_else(|err| panic!("{input}: {err}"));
    assert_eq!(tree, parse(&interner, expected), "{input}");
    assert_eq!(stats.rewrites, rewrites, "{input}");
    assert_eq!(stats.passes, passes, "{input}");
    assert!(is_gift_form(&tree), "{input}");
}

#[test]
fn single_rewrite_inputs() {
    check("a + (b u c)", "(a + b) u (a + c)", 1, 2);
    check("(a u b) - c", "(a - c) u (b - c)", 1, 2);
    check("a u (b u c)", "(a u b) u c", 1, 2);
    check("a - (b - c)", "(a - b) u (a + c)", 1, 2);
    check("a - (b + c)", "(a - b) u (a - c)", 1, 2);
    check("a + (b - c)", "(a + b) - c", 1, 2);
    check("a - (b u c)", "(a - b) - c", 1, 2);
}

#[test]
fn canonical_input_is_left_alone() {
    check("(a u b) u c", "(a u b) u c", 0, 1);
    check("a + b - c u d - e", "((a + b) - c) u (d - e)", 0, 1);
}

#[test]
fn leaf_needs_no_rewrite() {
    check("a", "a", 0, 1);
}

#[test]
fn rewrites_inside_subtrees() {
    check(
        "(a u b) + (c u d)",
        "(((a + c) u (a + d)) u (b + c)) u (b + d)",
        4,
        3,
    );
    check("a - (b - (c - d))", "(a - b) u ((a + c) - d)", 2, 2);
}

#[test]
fn outer_loop_is_required() {
    let interner = StringInterner::new();
    for source in ["a u ((b u c) + d)", "((a u b) + c) - d"] {
        let mut once = parse(&interner, source);
        assert_eq!(canonicalize_once(&mut once), Ok(1), "{source}");
        assert!(!is_gift_form(&once), "{source}");

        let mut full = parse(&interner, source);
        let stats = Canonicalizer::default()
            .canonicalize(&mut full)
            .unwrap_or_else(|err| panic!("{source}: {err}"));
        assert_eq!((stats.rewrites, stats.passes), (2, 3), "{source}");
        assert!(is_gift_form(&full), "{source}");
    }
}

#[test]
fn outer_loop_results() {
    check("a u ((b u c) + d)", "(a u (b + d)) u (c + d)", 2, 3);
    check("((a u b) + c) - d", "((a + c) - d) u ((b + c) - d)", 2, 3);
}

#[test]
fn second_run_is_a_no_op() {
    let interner = StringInterner::new();
    let mut tree = parse(&interner, "(a u b) + (c - (d u e))");
    assert!(canonicalize(&mut tree).is_ok_and(|n| n > 0));
    let first = tree.duplicate();

    let stats = Canonicalizer::default().canonicalize(&mut tree);
    assert_eq!(stats.map(|s| (s.rewrites, s.passes)), Ok((0, 1)));
    assert_eq!(tree, first);
}

#[test]
fn counts_rewrites_per_rule() {
    let interner = StringInterner::new();
    let mut tree = parse(&interner, "(a u b) + (c u d)");
    let stats = Canonicalizer::default()
        .canonicalize(&mut tree)
        .unwrap_or_else(|err| panic!("{err}"));

    assert_eq!(stats.rule_count(RuleId::UnionOfUnion), 1);
    assert_eq!(stats.rule_count(RuleId::IntersectUnionLeft), 1);
    assert_eq!(stats.rule_count(RuleId::IntersectUnionRight), 2);
    let total: usize = RuleId::ALL.iter().map(|&r| stats.rule_count(r)).sum();
    assert_eq!(total, stats.rewrites);
}

#[test]
fn stabilize_only_touches_the_node() {
    let interner = StringInterner::new();

    let mut tree = parse(&interner, "a u (b u (c u d))");
    assert_eq!(stabilize_node(&mut tree), Ok(2));
    assert_eq!(tree, parse(&interner, "((a u b) u c) u d"));

    // The offending union is a child; the root itself matches nothing.
    let mut tree = parse(&interner, "(a u (b u c)) u d");
    assert_eq!(stabilize_node(&mut tree), Ok(0));
    assert_eq!(tree, parse(&interner, "(a u (b u c)) u d"));
}

#[test]
fn node_budget_violation_leaves_root_untouched() {
    let interner = StringInterner::new();
    let canon = Canonicalizer::new(CanonOptions {
        node_rewrite_slack: 0,
        ..CanonOptions::default()
    });

    let mut tree = parse(&interner, "(a u b) + c");
    let before = tree.duplicate();
    let result = canon.canonicalize(&mut tree);
    assert!(
        matches!(result, Err(CanonError::InternalInvariantViolation { .. })),
        "{result:?}"
    );
    assert_eq!(tree, before);

    // Re-association alone stays within the spine length.
    let mut tree = parse(&interner, "a u (b u (c u d))");
    assert_eq!(canon.stabilize_node(&mut tree), Ok(2));
}

#[test]
fn pass_limit_violation_leaves_root_untouched() {
    let interner = StringInterner::new();
    let mut tree = parse(&interner, "a u (b u c)");
    let before = tree.duplicate();

    let one = Canonicalizer::new(CanonOptions {
        max_passes: Some(1),
        ..CanonOptions::default()
    });
    let result = one.canonicalize(&mut tree);
    assert!(
        matches!(result, Err(CanonError::InternalInvariantViolation { .. })),
        "{result:?}"
    );
    assert_eq!(tree, before);

    let two = Canonicalizer::new(CanonOptions {
        max_passes: Some(2),
        ..CanonOptions::default()
    });
    assert_eq!(two.canonicalize(&mut tree).map(|s| s.passes), Ok(2));
}

#[test]
fn default_pass_limit_scales_with_size() {
    let interner = StringInterner::new();
    let options = CanonOptions::default();
    assert_eq!(options.pass_limit(&parse(&interner, "a")), 8);
    assert_eq!(options.pass_limit(&parse(&interner, "a u b + c")), 12);

    let fixed = CanonOptions {
        max_passes: Some(3),
        ..options
    };
    assert_eq!(fixed.pass_limit(&parse(&interner, "a u b + c")), 3);
}

#[test]
fn holes_are_rejected() {
    let a = BoolTree::leaf(Name::from_raw(1));

    let mut empty = BoolTree::leaf(Name::EMPTY);
    assert_eq!(
        canonicalize(&mut empty),
        Err(CanonError::MalformedTree {
            reason: "tree is empty"
        })
    );

    let mut missing = BoolTree::internal(Op::Union, a, BoolTree::leaf(Name::EMPTY));
    let before = missing.duplicate();
    assert!(matches!(
        canonicalize(&mut missing),
        Err(CanonError::MalformedTree { .. })
    ));
    assert_eq!(missing, before);

    assert!(matches!(
        stabilize_node(&mut missing),
        Err(CanonError::MalformedTree { .. })
    ));
}

#[test]
fn right_spine_counts_internal_nodes() {
    let interner = StringInterner::new();
    assert_eq!(right_spine_len(&parse(&interner, "a")), 0);
    assert_eq!(right_spine_len(&parse(&interner, "a u b")), 0);
    assert_eq!(right_spine_len(&parse(&interner, "a u (b u (c - d))")), 2);
    assert_eq!(right_spine_len(&parse(&interner, "a u ((b u c) u d)")), 1);
}
