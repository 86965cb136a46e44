//! Parser termination and recovery over arbitrary input

use bigip::parser::{ErrorCode, SyntaxKind, parse};

use crate::helpers::source_fixtures::FULL_CONFIG;

#[test]
fn test_every_prefix_of_fixture_terminates() {
    let boundaries = FULL_CONFIG
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(FULL_CONFIG.len()));
    for end in boundaries {
        let input = &FULL_CONFIG[..end];
        let parse = parse(input);
        assert_eq!(parse.syntax().text().to_string(), input, "prefix of {end} bytes");
    }
}

#[test]
fn test_truncated_document_reports_unclosed_once() {
    let cut = FULL_CONFIG.find("ltm pool").unwrap() + "ltm pool /Common/web-pool {".len();
    let parse = parse(&FULL_CONFIG[..cut]);
    let unclosed = parse
        .errors
        .iter()
        .filter(|e| e.code == ErrorCode::E0202)
        .count();
    assert_eq!(unclosed, 1);
}

#[test]
fn test_garbage_lines_do_not_poison_neighbours() {
    let input = "\
]]] ;;; ]
ltm node n1 {
    address 10.0.0.1
}
}}}
ltm node n2 {
    address 10.0.0.2
}
";
    let parse = parse(input);
    assert!(!parse.errors.is_empty());
    let nodes = parse
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::L_NODE)
        .count();
    assert_eq!(nodes, 2);
}

#[test]
fn test_shuffled_bytes_terminate() {
    // deterministic scramble of the fixture
    let bytes: Vec<char> = FULL_CONFIG.chars().collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut scrambled = String::with_capacity(bytes.len());
    for _ in 0..bytes.len() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        scrambled.push(bytes[(state % bytes.len() as u64) as usize]);
    }
    let parse = parse(&scrambled);
    assert_eq!(parse.syntax().text().to_string(), scrambled);
}
