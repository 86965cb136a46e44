//! Tokenizer behaviour through the public API

use bigip::parser::{Channel, LexState, Lexer, SyntaxKind, next_token, tokenize};
use rstest::rstest;

fn visible(input: &str) -> Vec<(SyntaxKind, &str)> {
    tokenize(input)
        .into_iter()
        .filter(|t| t.channel() == Channel::Visible)
        .map(|t| (t.kind, t.text))
        .collect()
}

#[rstest]
#[case("ltm", SyntaxKind::LTM_KW)]
#[case("snat-translation", SyntaxKind::SNAT_TRANSLATION_KW)]
#[case("100", SyntaxKind::VLAN_ID)]
#[case("0", SyntaxKind::UINT16)]
#[case("5000", SyntaxKind::UINT16)]
#[case("70000", SyntaxKind::UINT32)]
#[case("007", SyntaxKind::DEC)]
#[case("10.0.0.1", SyntaxKind::IP_ADDRESS)]
#[case("10.0.0.1:443", SyntaxKind::IP_ADDRESS_PORT)]
#[case("10.0.0.0/8", SyntaxKind::IP_PREFIX)]
#[case("2001:db8::1", SyntaxKind::IPV6_ADDRESS)]
#[case("2001:db8::1.443", SyntaxKind::IPV6_ADDRESS_PORT)]
#[case("2001:db8::/32", SyntaxKind::IPV6_PREFIX)]
#[case("65000:100", SyntaxKind::STANDARD_COMMUNITY)]
#[case("web1:80", SyntaxKind::WORD_PORT)]
#[case("web_1.example-a", SyntaxKind::WORD_ID)]
#[case("1.1", SyntaxKind::WORD)]
#[case("\"two words\"", SyntaxKind::DOUBLE_QUOTED_STRING)]
fn test_single_token_classification(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(visible(input), vec![(expected, input)]);
}

#[test]
fn test_partition_is_split_from_name() {
    assert_eq!(
        visible("/Common/web1:80"),
        vec![
            (SyntaxKind::PARTITION, "/Common/"),
            (SyntaxKind::WORD_PORT, "web1:80"),
        ]
    );
}

#[test]
fn test_comment_lookback() {
    // start of input and right after a newline: comment
    let tokens = tokenize("# one\nnode # two\n  # three\n");
    let comments: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == SyntaxKind::COMMENT_LINE)
        .map(|t| t.text)
        .collect();
    assert_eq!(comments, vec!["# one", "# three"]);
    assert!(
        tokens
            .iter()
            .any(|t| t.kind != SyntaxKind::COMMENT_LINE && t.text == "#")
    );
}

#[test]
fn test_imish_requires_preceding_newline() {
    let at_start = tokenize("!router bgp");
    assert!(at_start.iter().all(|t| t.kind != SyntaxKind::IMISH_CHUNK));

    let after_newline = tokenize("sys ntp { }\n!\nrouter bgp 1\n");
    let chunk = after_newline.last().unwrap();
    assert_eq!(chunk.kind, SyntaxKind::IMISH_CHUNK);
    assert_eq!(chunk.channel(), Channel::Hidden);
    assert_eq!(chunk.text, "!\nrouter bgp 1\n");
}

#[test]
fn test_next_token_is_reentrant() {
    let input = "# c\n";
    assert_eq!(
        next_token(input, 0, LexState::start()),
        Some((SyntaxKind::COMMENT_LINE, 3))
    );
    let mid_line = LexState::start().advance(SyntaxKind::WORD);
    assert_ne!(
        next_token(input, 0, mid_line).map(|(kind, _)| kind),
        Some(SyntaxKind::COMMENT_LINE)
    );
    assert_eq!(next_token(input, input.len(), LexState::start()), None);
}

#[test]
fn test_unknown_character_resynchronizes() {
    let kinds: Vec<SyntaxKind> = visible("a \"b\nc").into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::WORD_ID,
            SyntaxKind::ERROR,
            SyntaxKind::WORD_ID,
            SyntaxKind::NEWLINE,
            SyntaxKind::WORD_ID,
        ]
    );
}

#[test]
fn test_positions_are_one_based() {
    let tokens: Vec<_> = Lexer::new("ltm node\n  n1")
        .filter(|t| t.channel() == Channel::Visible)
        .map(|t| (t.text, t.line, t.column))
        .collect();
    assert_eq!(
        tokens,
        vec![("ltm", 1, 1), ("node", 1, 5), ("\n", 1, 9), ("n1", 2, 3)]
    );
}

#[test]
fn test_tokens_cover_fixture() {
    let input = crate::helpers::source_fixtures::FULL_CONFIG;
    let text: String = tokenize(input).iter().map(|t| t.text).collect();
    assert_eq!(text, input);
    assert!(tokenize(input).iter().all(|t| t.kind != SyntaxKind::ERROR));
}
