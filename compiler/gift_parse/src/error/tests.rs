use super::*;

#[test]
fn display_includes_kind_and_span() {
    let err = ParseError::new(
        ParseErrorKind::UnexpectedToken {
            expected: "an object name or `(`",
            found: TokenKind::RParen,
        },
        Span::new(4, 5),
    );
    assert_eq!(
        err.to_string(),
        "expected an object name or `(`, found `)` at 4..5"
    );
}

#[test]
fn report_mentions_message_and_label() {
    let source = "a u (b + c";
    let err = ParseError::new(ParseErrorKind::UnclosedParen, Span::new(4, 5));
    let report = err.report(source);
    assert!(report.contains("unclosed `(`"), "{report}");
    assert!(report.contains("this `(` is never closed"), "{report}");
    assert!(report.contains("a u (b + c"), "{report}");
}

#[test]
fn report_handles_end_of_input() {
    let source = "a u";
    let err = ParseError::new(
        ParseErrorKind::UnexpectedEof {
            expected: "an object name or `(`",
        },
        Span::point(source.len()),
    );
    let report = err.report(source);
    assert!(report.contains("found end of input"), "{report}");
}
