//! Parser behaviour over whole documents

use rstest::rstest;

use super::*;

fn kinds(input: &str) -> Vec<SyntaxKind> {
    parse(input).syntax().descendants().map(|node| node.kind()).collect()
}

fn count(input: &str, kind: SyntaxKind) -> usize {
    kinds(input).into_iter().filter(|k| *k == kind).count()
}

#[test]
fn test_tree_is_lossless() {
    let input = "# header\nltm pool /Common/p1 {\n    members {\n        /Common/n1:80 { }\n    }\n}\n!\nrouter bgp 1\n";
    assert_eq!(parse(input).syntax().text().to_string(), input);
}

#[test]
fn test_well_formed_document_has_no_errors() {
    let input = "\
ltm node /Common/n1 {
    address 10.0.0.1
}
ltm pool /Common/p1 {
    members {
        /Common/n1:80 {
            address 10.0.0.1
        }
    }
    monitor /Common/http
}
net vlan /Common/internal {
    tag 100
}
sys ntp {
    servers { 192.0.2.1 }
}
";
    let parse = parse(input);
    assert!(parse.ok(), "{:?}", parse.errors);
    assert_eq!(count(input, SyntaxKind::UNRECOGNIZED), 0);
}

#[test]
fn test_one_line_statement() {
    let input = "ltm pool p1 { members { 10.0.0.1:80 { } } }";
    let parse = parse(input);
    assert!(parse.ok(), "{:?}", parse.errors);
    assert_eq!(count(input, SyntaxKind::LPM_MEMBER), 1);
}

#[test]
fn test_unknown_statement_is_unrecognized() {
    let input = "bogus-unknown-statement foo bar\n";
    let parse = parse(input);
    assert!(parse.ok());
    assert_eq!(count(input, SyntaxKind::UNRECOGNIZED), 1);
}

#[test]
fn test_unknown_property_keeps_siblings() {
    let input = "\
ltm pool p1 {
    load-balancing-mode round-robin
    monitor http
}
";
    let parse = parse(input);
    assert!(parse.ok());
    assert_eq!(count(input, SyntaxKind::UNRECOGNIZED), 1);
    assert_eq!(count(input, SyntaxKind::LP_MONITOR), 1);
}

#[test]
fn test_unrecognized_item_swallows_nested_block() {
    let input = "\
ltm virtual v1 {
    metadata {
        key { value x }
    }
    pool p1
}
";
    assert!(parse(input).ok());
    assert_eq!(count(input, SyntaxKind::UNRECOGNIZED), 1);
    assert_eq!(count(input, SyntaxKind::LV_POOL), 1);
}

#[test]
fn test_bad_value_is_one_error_and_recovers() {
    let input = "\
ltm node n1 {
    address not-an-address extra
}
ltm node n2 {
    address 10.0.0.2
}
";
    let parse = parse(input);
    assert_eq!(parse.errors.len(), 1, "{:?}", parse.errors);
    assert_eq!(parse.errors[0].code, ErrorCode::E0303);
    assert_eq!(count(input, SyntaxKind::L_NODE), 2);
    assert_eq!(count(input, SyntaxKind::ADDRESS_VALUE), 1);
}

#[test]
fn test_one_error_per_bad_item() {
    let input = "\
net vlan v1 {
    tag 5000
}
net vlan v2 {
    tag abc
}
";
    let parse = parse(input);
    assert_eq!(parse.errors.len(), 2, "{:?}", parse.errors);
}

#[test]
fn test_unclosed_brace_reported_once() {
    let input = "ltm pool p1 {\n    members {\n        10.0.0.1:80 {\n";
    let parse = parse(input);
    let unclosed: Vec<_> = parse
        .errors
        .iter()
        .filter(|error| error.code == ErrorCode::E0202)
        .collect();
    assert_eq!(unclosed.len(), 1, "{:?}", parse.errors);
}

#[test]
fn test_stray_closer_at_top_level() {
    let input = "}\nltm node n1 { }\n";
    let parse = parse(input);
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0205);
    assert_eq!(count(input, SyntaxKind::L_NODE), 1);
}

#[test]
fn test_module_without_object() {
    let parse = parse("ltm\nltm node n1 { }\n");
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0302);
}

#[test]
fn test_unterminated_string_is_lexical_once() {
    let input = "ltm node n1 {\n    description \"open\n}\n";
    let parse = parse(input);
    assert_eq!(parse.errors.len(), 1, "{:?}", parse.errors);
    assert_eq!(parse.errors[0].code, ErrorCode::E0102);
    assert!(parse.errors[0].code.is_lexical());
}

#[test]
fn test_rule_body_is_opaque() {
    let input = "ltm rule /Common/r1 {\n    when HTTP_REQUEST { pool p1 }\n}\nltm node n1 { address 10.0.0.1 }\n";
    let parse = parse(input);
    assert!(parse.errors.is_empty(), "{:?}", parse.errors);
    assert_eq!(count(input, SyntaxKind::RULE_BODY), 1);
    assert_eq!(count(input, SyntaxKind::UNRECOGNIZED), 0);
    assert_eq!(count(input, SyntaxKind::L_NODE), 1);
}

#[test]
fn test_comment_only_at_line_start() {
    let input = "# leading comment\nltm node n1 {\n    description a#b\n}\n";
    let parse = parse(input);
    assert!(parse.ok(), "{:?}", parse.errors);
    let comments = parse
        .syntax()
        .descendants_with_tokens()
        .filter(|element| element.kind() == SyntaxKind::COMMENT_LINE)
        .count();
    assert_eq!(comments, 1);
    let description = parse
        .syntax()
        .descendants()
        .find_map(WordValue::cast)
        .map(|value| value.text());
    assert_eq!(description.as_deref(), Some("a#b"));
}

#[test]
fn test_imish_chunk_is_a_node() {
    let input = "sys ntp { }\n!\n! imish\nrouter bgp 65001\n";
    let parse = parse(input);
    assert!(parse.ok());
    let root = Configuration::cast(parse.syntax()).unwrap();
    let chunk = root.imish().and_then(|imish| imish.chunk()).unwrap();
    assert!(chunk.text().starts_with("!\n! imish"));
}

#[rstest]
#[case("sys ntp {\n    servers [ ]\n}\n", SyntaxKind::EMPTY_LIST)]
#[case("sys ntp {\n    servers [ 192.0.2.1 ]\n}\n", SyntaxKind::BRACKET_LIST)]
fn test_bracket_list_forms(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert!(parse(input).ok());
    assert_eq!(count(input, expected), 1);
}

#[test]
fn test_list_states_are_distinct() {
    let empty = "sys ntp {\n    servers [ ]\n}\n";
    let one = "sys ntp {\n    servers [ 192.0.2.1 ]\n}\n";
    let absent = "sys ntp { }\n";
    let values = |input: &str| {
        parse(input)
            .syntax()
            .descendants()
            .find_map(List::cast)
            .map(|list| (list.is_empty_list(), list.values()))
    };
    assert_eq!(values(empty), Some((true, vec![])));
    assert_eq!(values(one), Some((false, vec!["192.0.2.1".to_string()])));
    assert_eq!(values(absent), None);
}

#[test]
fn test_unclosed_bracket_list() {
    let parse = parse("sys ntp {\n    servers [ 192.0.2.1\n}\n");
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0204);
}

#[rstest]
#[case("")]
#[case("{")]
#[case("}}}}")]
#[case("ltm")]
#[case("ltm pool")]
#[case("ltm pool p1 {")]
#[case("[ ] ; ; \n\n")]
#[case("net routing bgp b { neighbor { 1.1.1.1 { address-family { ipv4 {")]
#[case("\"\"\"")]
#[case("ltm rule r { when X { } ")]
#[case("/Common/")]
fn test_malformed_input_terminates(#[case] input: &str) {
    let parse = parse(input);
    assert_eq!(parse.syntax().text().to_string(), input);
}
