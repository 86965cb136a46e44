//! End-to-end extraction scenarios

use std::net::IpAddr;

use bigip::DiagnosticKind;
use bigip::representation::{AddressFamily, SubRange};
use rstest::rstest;

use crate::helpers::assertions::{assert_no_diagnostics, parse_default};
use crate::helpers::source_fixtures::{
    BOGUS_STATEMENT, FULL_CONFIG_PARSED, POOL_ONE_LINE,
};

fn ip(text: &str) -> IpAddr {
    text.parse().unwrap()
}

#[test]
fn test_pool_with_address_member() {
    let parsed = parse_default(POOL_ONE_LINE);
    assert_no_diagnostics(&parsed);

    let config = &parsed.configuration;
    assert_eq!(config.pools.len(), 1);
    let pool = &config.pools["p1"];
    assert_eq!(pool.members.len(), 1);
    let member = &pool.members["10.0.0.1:80"];
    assert_eq!(member.address, Some(ip("10.0.0.1")));
    assert_eq!(member.port, 80);
}

#[test]
fn test_bogus_statement_is_reported_and_skipped() {
    let parsed = parse_default(BOGUS_STATEMENT);
    assert!(parsed.configuration.is_empty());
    assert!(parsed.configuration.unrecognized);
    assert_eq!(parsed.diagnostics.len(), 1);

    let diagnostic = &parsed.diagnostics[0];
    assert_eq!(diagnostic.line, 1);
    assert_eq!(diagnostic.kind, DiagnosticKind::Unrecognized);
    assert_eq!(diagnostic.text.as_deref(), Some(BOGUS_STATEMENT));
}

#[test]
fn test_full_configuration_is_clean() {
    let parsed = &*FULL_CONFIG_PARSED;
    assert_no_diagnostics(parsed);
    assert!(!parsed.configuration.unrecognized);
    assert_eq!(parsed.unrecognized_count, 0);
}

#[test]
fn test_full_configuration_ltm_entities() {
    let config = &FULL_CONFIG_PARSED.configuration;

    let pool = &config.pools["/Common/web-pool"];
    assert_eq!(
        pool.members.keys().collect::<Vec<_>>(),
        vec!["/Common/web1:80", "/Common/web2:80"]
    );
    assert_eq!(pool.members["/Common/web2:80"].node, "/Common/web2");
    assert_eq!(pool.monitors, vec!["/Common/web-check".to_string()]);

    let web = &config.virtuals["/Common/web-vs"];
    assert_eq!(web.pool.as_deref(), Some("/Common/web-pool"));
    assert_eq!(web.destination.as_deref(), Some("/Common/192.0.2.10"));
    assert_eq!(web.destination_port, Some(443));
    assert_eq!(web.rules, Some(vec!["/Common/redirect".to_string()]));
    assert_eq!(web.profiles.as_ref().map(Vec::len), Some(2));
    assert!(web.is_enabled());

    let forward = &config.virtuals["/Common/forward-vs"];
    assert!(forward.ip_forward);
    assert_eq!(forward.pool, None);
    assert!(!forward.is_enabled());
    assert_eq!(config.enabled_virtuals().count(), 1);

    assert_eq!(
        config.snatpools["/Common/outbound-pool"].members,
        Some(vec!["/Common/10.3.0.1".to_string()])
    );
    assert!(config.rules["/Common/redirect"].body.contains("HTTP::redirect"));
}

#[test]
fn test_full_configuration_net_entities() {
    let config = &FULL_CONFIG_PARSED.configuration;

    assert_eq!(config.hostname.as_deref(), Some("f5-bigip.example.com"));
    assert_eq!(config.vlans["/Common/internal"].tag, Some(100));
    assert_eq!(
        config.trunks["/Common/trunk1"].interfaces.as_ref().map(Vec::len),
        Some(2)
    );
    assert_eq!(config.selves["/Common/self-internal"].allow_service, Some(vec![]));
    assert_eq!(config.selves["/Common/self-v6"].allow_service, None);
    assert_eq!(config.routes["/Common/default-route"].gateway, Some(ip("10.1.0.254")));
    assert_eq!(config.selves.len(), 2);

    let entry = &config.prefix_lists["/Common/pl-internal"].entries[&10];
    assert_eq!(entry.length_range, Some(SubRange { start: 8, end: 24 }));

    let bgp = &config.bgp_processes["/Common/bgp-main"];
    assert_eq!(bgp.local_as, Some(65000));
    assert_eq!(bgp.router_id, Some(ip("10.1.0.1")));
    assert_eq!(
        bgp.address_family(AddressFamily::Ipv4)
            .redistribute_kernel_route_map
            .as_deref(),
        Some("/Common/rm-out")
    );
    let neighbor = &bgp.neighbors["10.1.0.2"];
    assert_eq!(neighbor.remote_as, Some(65001));
    assert_eq!(neighbor.ipv4_address_family.activate, Some(true));
    assert_eq!(neighbor.ipv6_address_family.activate, Some(false));
}

#[test]
fn test_pool_survives_reserialization() {
    let config = &FULL_CONFIG_PARSED.configuration;
    let pool = &config.pools["/Common/web-pool"];

    let mut text = format!("ltm pool {} {{\n    members {{\n", pool.name);
    for member in pool.members.values() {
        text.push_str(&format!("        {} {{\n", member.name));
        if let Some(address) = member.address {
            text.push_str(&format!("            address {address}\n"));
        }
        text.push_str("        }\n");
    }
    text.push_str("    }\n");
    for monitor in &pool.monitors {
        text.push_str(&format!("    monitor {monitor}\n"));
    }
    text.push_str("}\n");

    let reparsed = parse_default(&text);
    assert_no_diagnostics(&reparsed);
    assert_eq!(&reparsed.configuration.pools[pool.name.as_str()], pool);
}

#[rstest]
#[case::absent("sys ntp { }\n", None)]
#[case::empty("sys ntp {\n    servers [ ]\n}\n", Some(0))]
#[case::bracketed("sys ntp {\n    servers [ 192.0.2.1 192.0.2.2 ]\n}\n", Some(2))]
#[case::braced("sys ntp {\n    servers { 192.0.2.1 }\n}\n", Some(1))]
fn test_list_states(#[case] input: &str, #[case] expected: Option<usize>) {
    let parsed = parse_default(input);
    assert_no_diagnostics(&parsed);
    assert_eq!(parsed.configuration.ntp_servers.as_ref().map(Vec::len), expected);
}
