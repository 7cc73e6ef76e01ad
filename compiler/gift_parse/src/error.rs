//! Parse errors and their rendering.

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::{Span, TokenKind};

/// What went wrong while parsing.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A character that cannot start any token.
    #[error("unrecognized input `{text}`")]
    InvalidToken { text: String },
    /// A token that cannot appear here.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    /// Input ended in the middle of an expression.
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },
    /// A `(` without its `)`.
    #[error("unclosed `(`")]
    UnclosedParen,
    /// A complete expression followed by more tokens.
    #[error("unexpected {found} after the end of the expression")]
    TrailingInput { found: TokenKind },
}

/// A parse error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {}..{}", span.start, span.end)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Short label for the highlighted source range.
    fn label(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::InvalidToken { .. } => "not part of an expression",
            ParseErrorKind::UnexpectedToken { .. } => "unexpected token",
            ParseErrorKind::UnexpectedEof { .. } => "expression ends here",
            ParseErrorKind::UnclosedParen => "this `(` is never closed",
            ParseErrorKind::TrailingInput { .. } => "expected `u`, `+`, `-` or end of input",
        }
    }

    /// Render the error against its source as a plain-text diagnostic.
    pub fn report(&self, source: &str) -> String {
        // Widen zero-width spans (end of input) onto the last character.
        let span = if self.span.is_empty() && self.span.start > 0 {
            Span::new(self.span.start - 1, self.span.start)
        } else {
            self.span
        };

        let mut out = Vec::new();
        let written = Report::build(ReportKind::Error, (), span.start)
            .with_config(Config::default().with_color(false))
            .with_message(self.kind.to_string())
            .with_label(Label::new(span.start..span.end).with_message(self.label()))
            .finish()
            .write(Source::from(source), &mut out);

        match written {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => format!("error: {self}\n"),
        }
    }
}

#[cfg(test)]
mod tests;
