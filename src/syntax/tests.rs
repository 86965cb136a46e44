use super::*;
use crate::parser::{SyntaxKind, SyntaxNode, Unrecognized, parse};

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    every_rule: usize,
    unrecognized: Vec<String>,
    errors: usize,
}

impl Listener for Recorder {
    fn enter_every_rule(&mut self, _node: &SyntaxNode) {
        self.every_rule += 1;
    }

    fn visit_unrecognized(&mut self, node: &Unrecognized) {
        self.unrecognized.push(node.text());
    }

    fn visit_error_node(&mut self, _node: &SyntaxNode) {
        self.errors += 1;
    }

    fn enter_l_pool(&mut self, _node: &SyntaxNode) {
        self.events.push("enter pool".into());
    }

    fn exit_l_pool(&mut self, _node: &SyntaxNode) {
        self.events.push("exit pool".into());
    }

    fn enter_lpm_member(&mut self, _node: &SyntaxNode) {
        self.events.push("enter member".into());
    }

    fn exit_lpm_member(&mut self, _node: &SyntaxNode) {
        self.events.push("exit member".into());
    }

    fn exit_lp_monitor(&mut self, _node: &SyntaxNode) {
        self.events.push("monitor".into());
    }
}

fn walk(input: &str) -> Recorder {
    let mut recorder = Recorder::default();
    ParseTreeWalker::walk(&mut recorder, &parse(input).syntax());
    recorder
}

#[test]
fn test_enter_exit_nest_in_tree_order() {
    let recorder = walk("ltm pool p1 {\n    members {\n        10.0.0.1:80 { }\n    }\n    monitor http\n}\n");
    assert_eq!(
        recorder.events,
        vec!["enter pool", "enter member", "exit member", "monitor", "exit pool"]
    );
}

#[test]
fn test_every_rule_counts_each_node() {
    let root = parse("sys ntp {\n    servers { a }\n}\n").syntax();
    let nodes = root.descendants().count();
    let recorder = walk("sys ntp {\n    servers { a }\n}\n");
    assert_eq!(recorder.every_rule, nodes);
}

#[test]
fn test_unrecognized_is_surfaced_separately() {
    let recorder = walk("bogus-unknown-statement foo bar\nltm pool p { }\n");
    assert_eq!(recorder.unrecognized, vec!["bogus-unknown-statement foo bar"]);
    assert_eq!(recorder.events, vec!["enter pool", "exit pool"]);
    assert_eq!(recorder.errors, 0);
}

#[test]
fn test_error_nodes_are_visited() {
    let recorder = walk("ltm node n {\n    address not-an-address\n}\n");
    assert_eq!(recorder.errors, 1);
}

#[test]
fn test_default_listener_is_a_no_op() {
    struct Silent;
    impl Listener for Silent {}
    ParseTreeWalker::walk(&mut Silent, &parse("ltm pool p { }").syntax());
}

#[test]
fn test_rule_kinds_cover_productions() {
    assert!(RULE_KINDS.contains(&SyntaxKind::CONFIGURATION));
    assert!(RULE_KINDS.contains(&SyntaxKind::NRREESC_VALUE));
    assert!(!RULE_KINDS.contains(&SyntaxKind::UNRECOGNIZED));
    assert!(!RULE_KINDS.contains(&SyntaxKind::ERROR));
}
