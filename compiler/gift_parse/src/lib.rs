//! Parser for infix Boolean combination expressions.
//!
//! Turns text such as `a u b - c` into a [`BoolTree`](gift_ir::BoolTree).
//!
//! # Grammar
//!
//! ```text
//! expr    := term ( "u" term )*
//! term    := primary ( ( "+" | "-" ) primary )*
//! primary := NAME | "(" expr ")"
//! ```
//!
//! Intersection and difference bind tighter than union, and every
//! operator is left-associative, so `a u b - c + d` parses as
//! `a u ((b - c) + d)`.
//!
//! Object names are runs of ASCII letters, digits, `_` and `.`. The bare
//! word `u` is always the union operator.

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{lex, Span, Token, TokenKind};
pub use parser::parse;
