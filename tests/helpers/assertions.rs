//! Assertion helpers shared by the integration suites.

use std::fmt::Debug;

use bigip::{Diagnostic, ParseSettings, ParsedConfiguration, parse_configuration};
use indexmap::IndexMap;

/// Parses with default settings
pub fn parse_default(text: &str) -> ParsedConfiguration {
    parse_configuration(text, &ParseSettings::default())
}

fn describe(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  {d}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert a document produced no diagnostics at all.
pub fn assert_no_diagnostics(parsed: &ParsedConfiguration) {
    assert!(
        parsed.diagnostics.is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        parsed.diagnostics.len(),
        describe(&parsed.diagnostics)
    );
}

/// Every entity of `expected` is present and identical in `actual`
pub fn assert_entities_kept<T: PartialEq + Debug>(
    what: &str,
    expected: &IndexMap<String, T>,
    actual: &IndexMap<String, T>,
) {
    for (name, entity) in expected {
        assert_eq!(actual.get(name), Some(entity), "{what} '{name}' changed");
    }
}
