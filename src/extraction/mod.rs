//! Tree-walk extraction of the configuration model
//!
//! Two independent listeners walk the same tree:
//!
//! - [`ConfigurationBuilder`] fills a [`BigipConfiguration`] and records
//!   conversion problems and unrecognized statements as [`Diagnostic`]s
//! - [`StructureCollector`] records named-structure definitions and
//!   references for undefined-reference checks

mod builder;
mod diagnostics;
mod references;

pub use builder::{ConfigurationBuilder, Frame};
pub use diagnostics::{Diagnostic, DiagnosticKind, sort_diagnostics};
pub use references::StructureCollector;

use crate::base::LineIndex;
use crate::parser::SyntaxNode;
use crate::representation::{BigipConfiguration, StructureManager};
use crate::settings::ParseSettings;
use crate::syntax::ParseTreeWalker;

/// What one [`ConfigurationBuilder`] walk produced
#[derive(Debug, Clone)]
pub struct Extraction {
    pub configuration: BigipConfiguration,
    /// Conversion warnings and recorded unrecognized statements, in walk order
    pub diagnostics: Vec<Diagnostic>,
    /// Unrecognized statements, recorded or not
    pub unrecognized_count: usize,
}

/// Runs the [`ConfigurationBuilder`] over `root`
pub fn extract(root: &SyntaxNode, line_index: &LineIndex, settings: &ParseSettings) -> Extraction {
    let mut builder = ConfigurationBuilder::new(line_index, settings);
    ParseTreeWalker::walk(&mut builder, root);
    builder.finish()
}

/// Runs the [`StructureCollector`] over `root`
pub fn collect_structures(root: &SyntaxNode, line_index: &LineIndex) -> StructureManager {
    let mut collector = StructureCollector::new(line_index);
    ParseTreeWalker::walk(&mut collector, root);
    collector.finish()
}
