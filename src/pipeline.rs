//! End-to-end entry points: text in, model plus diagnostics out.

use rayon::prelude::*;

use crate::base::LineIndex;
use crate::error::Result;
use crate::extraction::{Diagnostic, Extraction, collect_structures, extract, sort_diagnostics};
use crate::parser::{self, Parse, SyntaxNode};
use crate::representation::{BigipConfiguration, StructureManager};
use crate::settings::ParseSettings;

/// Everything produced for one document
#[derive(Debug, Clone)]
pub struct ParsedConfiguration {
    pub configuration: BigipConfiguration,
    /// Sorted by source offset
    pub diagnostics: Vec<Diagnostic>,
    pub structures: StructureManager,
    /// Unrecognized statements, including ones not listed in `diagnostics`
    pub unrecognized_count: usize,
    /// Diagnostics dropped by `max_diagnostics`
    pub truncated: usize,
    pub parse: Parse,
}

impl ParsedConfiguration {
    pub fn syntax(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Tokenizes, parses and extracts one document
pub fn parse_configuration(text: &str, settings: &ParseSettings) -> ParsedConfiguration {
    let parse = parser::parse(text);
    let line_index = LineIndex::new(text);
    let root = parse.syntax();

    let mut diagnostics: Vec<Diagnostic> = parse
        .errors
        .iter()
        .map(|error| Diagnostic::from_syntax_error(error, &line_index))
        .collect();

    let Extraction {
        configuration,
        diagnostics: extracted,
        unrecognized_count,
    } = extract(&root, &line_index, settings);
    diagnostics.extend(extracted);

    let structures = collect_structures(&root, &line_index);
    if settings.report_undefined_references {
        diagnostics.extend(
            structures
                .undefined_references()
                .iter()
                .map(|reference| Diagnostic::from_undefined_reference(reference, &line_index)),
        );
    }

    sort_diagnostics(&mut diagnostics);
    let mut truncated = 0;
    if let Some(max) = settings.max_diagnostics {
        truncated = diagnostics.len().saturating_sub(max);
        diagnostics.truncate(max);
    }

    tracing::debug!(
        bytes = text.len(),
        entities = configuration.entity_count(),
        diagnostics = diagnostics.len(),
        truncated,
        unrecognized = unrecognized_count,
        "parsed document"
    );

    ParsedConfiguration {
        configuration,
        diagnostics,
        structures,
        unrecognized_count,
        truncated,
        parse,
    }
}

/// Like [`parse_configuration`], for input not yet known to be UTF-8
pub fn parse_bytes(bytes: &[u8], settings: &ParseSettings) -> Result<ParsedConfiguration> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse_configuration(text, settings))
}

/// Parses independent documents in parallel, keeping input order
pub fn parse_all<N>(
    documents: &[(N, String)],
    settings: &ParseSettings,
) -> Vec<(N, ParsedConfiguration)>
where
    N: Clone + Send + Sync,
{
    documents
        .par_iter()
        .map(|(name, text)| (name.clone(), parse_configuration(text, settings)))
        .collect()
}
