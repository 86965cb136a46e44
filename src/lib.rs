//! # bigip-structured
//!
//! Lexer, parser and extractor for F5 BIG-IP structured (tmsh) configuration.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! pipeline       → parse_configuration / parse_bytes / parse_all
//!   ↓
//! extraction     → ConfigurationBuilder, StructureCollector, Diagnostic
//!   ↓
//! representation → BigipConfiguration and its entities
//!   ↓
//! syntax         → Listener trait, ParseTreeWalker
//!   ↓
//! parser         → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base           → Primitives (LineIndex, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use bigip::{ParseSettings, parse_configuration};
//!
//! let parsed = parse_configuration(
//!     "ltm pool p1 { members { 10.0.0.1:80 { } } }\n",
//!     &ParseSettings::default(),
//! );
//! assert!(parsed.diagnostics.is_empty());
//! let member = &parsed.configuration.pools["p1"].members["10.0.0.1:80"];
//! assert_eq!(member.port, 80);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → representation →
// extraction → pipeline)
// ============================================================================

/// Foundation types: LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Syntax: Listener trait and tree walker
pub mod syntax;

/// Extracted BIG-IP configuration model
pub mod representation;

/// Listeners that build the model and collect structure references
pub mod extraction;

/// Per-parse settings
pub mod settings;

/// Library error type
pub mod error;

mod pipeline;

// Re-export commonly needed items
pub use parser::keywords;

pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};
pub use error::{Error, Result};
pub use extraction::{Diagnostic, DiagnosticKind};
pub use pipeline::{ParsedConfiguration, parse_all, parse_bytes, parse_configuration};
pub use representation::BigipConfiguration;
pub use settings::ParseSettings;
