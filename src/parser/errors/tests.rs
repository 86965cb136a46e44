//! Errors as the parser produces them

use rowan::{TextRange, TextSize};

use crate::parser::parse;

use super::*;

#[test]
fn test_unclosed_brace_points_at_opener() {
    let parse = parse("ltm pool /Common/p1 {\n    monitor /Common/http\n");
    let error = parse
        .errors
        .iter()
        .find(|error| error.code == ErrorCode::E0202)
        .unwrap();

    assert!(error.message.contains("unclosed '{'"));
    assert_eq!(error.related.len(), 1);
    assert_eq!(error.related[0].message, "opened here");
    assert_eq!(
        error.related[0].range,
        TextRange::at(TextSize::new(20), TextSize::new(1))
    );
}

#[test]
fn test_unclosed_bracket_points_at_opener() {
    let parse = parse("ltm virtual v1 {\n    vlans [ /Common/a\n}\n");
    let error = parse
        .errors
        .iter()
        .find(|error| error.code == ErrorCode::E0204)
        .unwrap();

    assert_eq!(
        error.related[0].range,
        TextRange::at(TextSize::new(27), TextSize::new(1))
    );
}

#[test]
fn test_extra_tokens_carry_a_hint() {
    let parse = parse("ltm node n1 {\n    address 10.0.0.1 10.0.0.2\n}\n");
    let error = parse
        .errors
        .iter()
        .find(|error| error.code == ErrorCode::E0201)
        .unwrap();

    assert!(error.message.contains(ParseContext::ObjectBody.description()));
    assert!(error.hint.as_deref().is_some_and(|hint| hint.contains("newline")));
}

#[test]
fn test_severity_ordering() {
    assert!(Severity::Error < Severity::Warning);
    assert_eq!(Severity::default(), Severity::Error);
}
