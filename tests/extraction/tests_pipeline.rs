//! Pipeline entry points and settings

use bigip::{DiagnosticKind, Error, ParseSettings, parse_all, parse_bytes, parse_configuration};

use crate::helpers::source_fixtures::{BOGUS_STATEMENT, FULL_CONFIG, POOL_ONE_LINE};

#[test]
fn test_parse_all_keeps_order_and_isolation() {
    let documents = vec![
        ("full", FULL_CONFIG.to_string()),
        ("bogus", BOGUS_STATEMENT.to_string()),
        ("pool", POOL_ONE_LINE.to_string()),
    ];
    let results = parse_all(&documents, &ParseSettings::default());

    let names: Vec<_> = results.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["full", "bogus", "pool"]);
    assert!(results[0].1.diagnostics.is_empty());
    assert_eq!(results[1].1.diagnostics.len(), 1);
    assert!(results[2].1.diagnostics.is_empty());
    assert_eq!(results[2].1.configuration.pools.len(), 1);
}

#[test]
fn test_parse_bytes_rejects_invalid_utf8() {
    let result = parse_bytes(b"ltm node n1 {\n    description \xff\xfe\n}\n", &ParseSettings::default());
    assert!(matches!(result, Err(Error::InvalidUtf8(_))));
}

#[test]
fn test_parse_bytes_accepts_utf8() {
    let parsed = parse_bytes(POOL_ONE_LINE.as_bytes(), &ParseSettings::default()).unwrap();
    assert_eq!(parsed.configuration.pools.len(), 1);
}

#[test]
fn test_max_diagnostics_truncates() {
    let input = "a 1\nb 2\nc 3\nd 4\n";
    let settings = ParseSettings::default().with_max_diagnostics(2);
    let parsed = parse_configuration(input, &settings);
    assert_eq!(parsed.diagnostics.len(), 2);
    assert_eq!(parsed.truncated, 2);
    assert_eq!(parsed.diagnostics[0].line, 1);
    assert_eq!(parsed.diagnostics[1].line, 2);
}

#[test]
fn test_undefined_references_are_opt_in() {
    let input = "\
ltm pool /Common/p1 {
    monitor /Common/missing-check
}
";
    let quiet = parse_configuration(input, &ParseSettings::default());
    assert!(quiet.diagnostics.is_empty());
    assert_eq!(quiet.structures.undefined_references().len(), 1);

    let loud = parse_configuration(input, &ParseSettings::default().with_undefined_references(true));
    assert_eq!(loud.diagnostics.len(), 1);
    assert_eq!(loud.diagnostics[0].kind, DiagnosticKind::UndefinedReference);
    assert_eq!(loud.diagnostics[0].line, 2);
}

#[test]
fn test_unrecognized_counted_when_not_recorded() {
    let settings = ParseSettings::default().with_record_unrecognized(false);
    let parsed = parse_configuration(BOGUS_STATEMENT, &settings);
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.unrecognized_count, 1);
    assert!(parsed.configuration.unrecognized);
}

#[test]
fn test_hostname_case_setting() {
    let input = "sys global-settings {\n    hostname BIG-IP.Example.com\n}\n";
    let lowered = parse_configuration(input, &ParseSettings::default());
    assert_eq!(lowered.configuration.hostname.as_deref(), Some("big-ip.example.com"));

    let kept = parse_configuration(input, &ParseSettings::default().with_lowercase_hostname(false));
    assert_eq!(kept.configuration.hostname.as_deref(), Some("BIG-IP.Example.com"));
}
