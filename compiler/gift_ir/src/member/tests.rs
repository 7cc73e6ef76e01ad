use super::*;
use crate::{StringInterner, TreeBuilder};
use pretty_assertions::assert_eq;

fn members(interner: &StringInterner, list: &[(char, &str)]) -> Vec<Member> {
    list.iter()
        .map(|&(tag, name)| {
            let op = Op::from_tag(tag).unwrap_or(Op::Union);
            Member::new(op, interner.intern(name))
        })
        .collect()
}

#[test]
fn single_member_is_a_leaf() {
    let interner = StringInterner::new();
    let b = TreeBuilder::new(&interner);

    let tree = BoolTree::from_members(&members(&interner, &[('u', "a")]));
    assert_eq!(tree, Ok(b.leaf("a")));
}

#[test]
fn terms_split_at_unions() {
    let interner = StringInterner::new();
    let b = TreeBuilder::new(&interner);

    let list = members(
        &interner,
        &[('u', "a"), ('-', "b"), ('u', "c"), ('+', "d"), ('-', "e")],
    );
    let expected = b.union(
        b.subtract(b.leaf("a"), b.leaf("b")),
        b.subtract(b.intersect(b.leaf("c"), b.leaf("d")), b.leaf("e")),
    );
    assert_eq!(BoolTree::from_members(&list), Ok(expected));
}

#[test]
fn union_spine_leans_left() {
    let interner = StringInterner::new();
    let b = TreeBuilder::new(&interner);

    let list = members(&interner, &[('u', "a"), ('u', "b"), ('u', "c")]);
    let expected = b.union(b.union(b.leaf("a"), b.leaf("b")), b.leaf("c"));
    assert_eq!(BoolTree::from_members(&list), Ok(expected));
}

#[test]
fn leading_non_union_is_read_as_union() {
    let interner = StringInterner::new();
    let b = TreeBuilder::new(&interner);

    let list = members(&interner, &[('-', "a"), ('+', "b")]);
    let expected = b.intersect(b.leaf("a"), b.leaf("b"));
    assert_eq!(BoolTree::from_members(&list), Ok(expected));
}

#[test]
fn empty_list_is_malformed() {
    assert_eq!(
        BoolTree::from_members(&[]),
        Err(TreeError::MalformedTree {
            reason: "member list is empty"
        })
    );
}

#[test]
fn unnamed_member_is_malformed() {
    let interner = StringInterner::new();
    let list = members(&interner, &[('u', "a"), ('-', "")]);
    assert_eq!(
        BoolTree::from_members(&list),
        Err(TreeError::MalformedTree {
            reason: "member without an object name"
        })
    );
}
