//! Tokenizer built on logos.

use std::fmt;

use logos::Logos;

use crate::{ParseError, ParseErrorKind};

/// Byte range in the source text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub const fn point(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start >= self.end
    }
}

/// Token kinds of the expression language.
#[derive(Logos, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("u", priority = 3)]
    Union,
    #[token("+")]
    Intersect,
    #[token("-")]
    Subtract,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r"[A-Za-z0-9_.]+")]
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Union => "`u`",
            TokenKind::Intersect => "`+`",
            TokenKind::Subtract => "`-`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Name => "object name",
        })
    }
}

/// A token with its location.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenize `source`.
///
/// Fails on the first character that cannot start a token.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start, range.end);
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidToken {
                        text: lexer.slice().to_owned(),
                    },
                    span,
                ));
            }
        }
    }

    Ok(tokens)
}
