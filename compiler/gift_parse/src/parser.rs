//! Recursive descent parser.

use gift_ir::{BoolTree, Op, StringInterner};
use gift_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{lex, ParseError, ParseErrorKind, Span, Token, TokenKind};

const EXPECTED_OPERAND: &str = "an object name or `(`";

/// Parse an infix Boolean expression, interning object names.
pub fn parse(source: &str, interner: &StringInterner) -> Result<BoolTree, ParseError> {
    let tokens = lex(source)?;
    trace!(tokens = tokens.len(), "parsing combination expression");

    let mut parser = Parser {
        source,
        tokens: &tokens,
        pos: 0,
        interner,
    };
    let tree = parser.parse_expr()?;
    if let Some(token) = parser.current() {
        return Err(ParseError::new(
            ParseErrorKind::TrailingInput { found: token.kind },
            token.span,
        ));
    }
    Ok(tree)
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    interner: &'a StringInterner,
}

impl Parser<'_> {
    #[inline]
    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn end_span(&self) -> Span {
        Span::point(self.source.len())
    }

    /// `expr := term ( "u" term )*`
    fn parse_expr(&mut self) -> Result<BoolTree, ParseError> {
        let mut left = self.parse_term()?;
        while let Some(Token {
            kind: TokenKind::Union,
            ..
        }) = self.current()
        {
            self.advance();
            let right = self.parse_term()?;
            left = BoolTree::internal(Op::Union, left, right);
        }
        Ok(left)
    }

    /// `term := primary ( ( "+" | "-" ) primary )*`
    fn parse_term(&mut self) -> Result<BoolTree, ParseError> {
        let mut left = self.parse_primary()?;
        loop {
            let op = match self.current().map(|t| t.kind) {
                Some(TokenKind::Intersect) => Op::Intersection,
                Some(TokenKind::Subtract) => Op::Difference,
                _ => break,
            };
            self.advance();
            let right = self.parse_primary()?;
            left = BoolTree::internal(op, left, right);
        }
        Ok(left)
    }

    /// `primary := NAME | "(" expr ")"`
    fn parse_primary(&mut self) -> Result<BoolTree, ParseError> {
        let Some(token) = self.current() else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEof {
                    expected: EXPECTED_OPERAND,
                },
                self.end_span(),
            ));
        };

        match token.kind {
            TokenKind::Name => {
                self.advance();
                let text = &self.source[token.span.start..token.span.end];
                Ok(BoolTree::leaf(self.interner.intern(text)))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = ensure_sufficient_stack(|| self.parse_expr())?;
                match self.current() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => {
                        self.advance();
                        Ok(inner)
                    }
                    Some(other) => Err(ParseError::new(
                        ParseErrorKind::UnexpectedToken {
                            expected: "`)`",
                            found: other.kind,
                        },
                        other.span,
                    )),
                    None => Err(ParseError::new(ParseErrorKind::UnclosedParen, token.span)),
                }
            }
            found => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: EXPECTED_OPERAND,
                    found,
                },
                token.span,
            )),
        }
    }
}
