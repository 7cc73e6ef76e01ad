//! Boolean combination trees.
//!
//! A combination describes a solid built from named objects with three
//! set operators: union (`u`), intersection (`+`) and difference (`-`).
//! This crate holds the data model shared by the parser, the
//! canonicalizer and the printer:
//!
//! - [`Op`]: the three operators and their textual tags
//! - [`Name`] / [`StringInterner`]: interned object names
//! - [`BoolTree`]: the owned binary expression tree
//! - [`Member`]: one entry of the flat member list a canonical tree is
//!   stored as
//!
//! # Ownership
//!
//! Every internal node exclusively owns its two children (`Box`), so no
//! internal node can ever be reachable from two parents. Rewrites that
//! need a subtree twice must call [`BoolTree::duplicate`]. Leaves carry a
//! `Copy` name, so copying a leaf is a plain value copy.

mod error;
mod interner;
mod member;
mod name;
mod op;
mod tree;

pub use error::TreeError;
pub use interner::{StringInterner, StringLookup};
pub use member::Member;
pub use name::Name;
pub use op::Op;
pub use tree::{BoolTree, TreeBuilder};
