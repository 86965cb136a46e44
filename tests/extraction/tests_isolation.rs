//! A malformed statement never disturbs its well-formed neighbours

use bigip::DiagnosticKind;
use rstest::rstest;

use crate::helpers::assertions::{assert_entities_kept, parse_default};
use crate::helpers::source_fixtures::{FULL_CONFIG, FULL_CONFIG_PARSED};

#[rstest]
#[case::unknown_statement("bogus-unknown-statement foo bar\n", DiagnosticKind::Unrecognized)]
#[case::missing_value("ltm pool broken { monitor }\n", DiagnosticKind::Syntax)]
#[case::tag_out_of_range("net vlan v9 {\n    tag 99999\n}\n", DiagnosticKind::Syntax)]
#[case::stray_closer("}\n", DiagnosticKind::Syntax)]
#[case::bad_character("ltm node n9 {\n    description \"unterminated\n}\n", DiagnosticKind::Lexical)]
fn test_single_malformed_statement(#[case] statement: &str, #[case] kind: DiagnosticKind) {
    let first_injected_line = FULL_CONFIG.lines().count() + 1;
    let parsed = parse_default(&format!("{FULL_CONFIG}{statement}"));

    assert_eq!(parsed.diagnostics.len(), 1, "{:?}", parsed.diagnostics);
    let diagnostic = &parsed.diagnostics[0];
    assert_eq!(diagnostic.kind, kind);
    assert!(diagnostic.line >= first_injected_line);

    let clean = &FULL_CONFIG_PARSED.configuration;
    let dirty = &parsed.configuration;
    assert_entities_kept("node", &clean.nodes, &dirty.nodes);
    assert_entities_kept("pool", &clean.pools, &dirty.pools);
    assert_entities_kept("virtual", &clean.virtuals, &dirty.virtuals);
    assert_entities_kept("virtual-address", &clean.virtual_addresses, &dirty.virtual_addresses);
    assert_entities_kept("snat", &clean.snats, &dirty.snats);
    assert_entities_kept("rule", &clean.rules, &dirty.rules);
    assert_entities_kept("monitor", &clean.monitors, &dirty.monitors);
    assert_entities_kept("vlan", &clean.vlans, &dirty.vlans);
    assert_entities_kept("self", &clean.selves, &dirty.selves);
    assert_entities_kept("bgp", &clean.bgp_processes, &dirty.bgp_processes);
    assert_entities_kept("route-map", &clean.route_maps, &dirty.route_maps);
    assert_eq!(dirty.hostname, clean.hostname);
    assert_eq!(dirty.ntp_servers, clean.ntp_servers);
}

#[test]
fn test_malformed_statement_between_entities() {
    let input = "\
ltm node n1 {
    address 10.0.0.1
}
ltm node n2 {
    address not-an-address
}
ltm node n3 {
    address 10.0.0.3
}
";
    let parsed = parse_default(input);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].line, 5);

    let nodes = &parsed.configuration.nodes;
    assert_eq!(nodes.len(), 3);
    assert!(nodes["n1"].address.is_some());
    assert_eq!(nodes["n2"].address, None);
    assert!(nodes["n3"].address.is_some());
}
