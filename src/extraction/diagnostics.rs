//! Diagnostics collected while parsing and extracting one document.
//!
//! Nothing here ever fails a parse: every problem becomes a [`Diagnostic`]
//! next to a best-effort model.

use std::fmt;

use text_size::TextRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::base::LineIndex;
use crate::parser::{Severity, SyntaxError};
use crate::representation::UndefinedReference;

/// Where a diagnostic comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticKind {
    /// The parser recovered from malformed input
    Syntax,
    /// A character no token rule accepts
    Lexical,
    /// A statement or property no production matched
    Unrecognized,
    /// A value that parsed but could not be applied to the model
    Conversion,
    /// A reference to a structure the document never defines
    UndefinedReference,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Syntax => "syntax",
            DiagnosticKind::Lexical => "lexical",
            DiagnosticKind::Unrecognized => "unrecognized",
            DiagnosticKind::Conversion => "conversion",
            DiagnosticKind::UndefinedReference => "undefined-reference",
        }
    }
}

/// A located, human-readable problem report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Not serialized; deserialized diagnostics carry an empty range
    #[cfg_attr(feature = "serde", serde(skip, default))]
    pub range: TextRange,
    /// 1-based line of the start of `range`
    pub line: usize,
    /// 1-based column of the start of `range`
    pub column: usize,
    pub message: String,
    /// Source text the diagnostic is about, when it has one
    pub text: Option<String>,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        severity: Severity,
        range: TextRange,
        line_index: &LineIndex,
        message: impl Into<String>,
    ) -> Self {
        let start = line_index.line_col(range.start());
        Self {
            kind,
            severity,
            range,
            line: start.line,
            column: start.column,
            message: message.into(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn from_syntax_error(error: &SyntaxError, line_index: &LineIndex) -> Self {
        let kind = if error.code.is_lexical() {
            DiagnosticKind::Lexical
        } else {
            DiagnosticKind::Syntax
        };
        let mut message = format!("{}: {}", error.code, error.message);
        for related in &error.related {
            let at = line_index.line_col(related.range.start());
            message.push_str(&format!("; {} at {}", related.message, at));
        }
        if let Some(hint) = &error.hint {
            message.push_str(&format!(" ({hint})"));
        }
        Self::new(kind, Severity::Error, error.range, line_index, message)
    }

    /// Undefined references only know their line; they point at its start
    pub fn from_undefined_reference(reference: &UndefinedReference, line_index: &LineIndex) -> Self {
        let offset = line_index.line_start(reference.line).unwrap_or_default();
        let mut diagnostic = Self::new(
            DiagnosticKind::UndefinedReference,
            Severity::Warning,
            TextRange::empty(offset),
            line_index,
            reference.to_string(),
        );
        diagnostic.line = reference.line;
        diagnostic.text = Some(reference.name.to_string());
        diagnostic
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]: {}",
            self.line,
            self.column,
            self.severity.as_str(),
            self.kind.as_str(),
            self.message
        )
    }
}

/// Sorts by source offset, keeping insertion order for equal offsets
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by_key(|diagnostic| diagnostic.range.start());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorCode;
    use crate::representation::{StructureType, StructureUsage};
    use text_size::TextSize;

    #[test]
    fn test_syntax_error_location() {
        let index = LineIndex::new("ltm pool p1 {\n  monitor\n}\n");
        let error = SyntaxError::new(
            "expected monitor name",
            TextRange::at(TextSize::new(23), TextSize::new(1)),
            ErrorCode::E0303,
        );
        let diagnostic = Diagnostic::from_syntax_error(&error, &index);
        assert_eq!(diagnostic.kind, DiagnosticKind::Syntax);
        assert_eq!((diagnostic.line, diagnostic.column), (2, 10));
        assert!(diagnostic.message.starts_with("E0303"));
    }

    #[test]
    fn test_lexical_code_maps_to_lexical_kind() {
        let index = LineIndex::new("\"");
        let error = SyntaxError::new("bad", TextRange::empty(TextSize::new(0)), ErrorCode::E0102);
        assert_eq!(
            Diagnostic::from_syntax_error(&error, &index).kind,
            DiagnosticKind::Lexical
        );
    }

    #[test]
    fn test_unclosed_error_names_opener_location() {
        let text = "ltm pool p1 {\n    monitor m1\n";
        let index = LineIndex::new(text);
        let error = SyntaxError::builder(ErrorCode::E0202)
            .message("unclosed '{' at end of input")
            .range(TextRange::empty(TextSize::of(text)))
            .related("opened here", TextRange::at(TextSize::new(12), TextSize::new(1)))
            .build();
        let diagnostic = Diagnostic::from_syntax_error(&error, &index);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.message,
            "E0202: unclosed '{' at end of input; opened here at 1:13"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_diagnostic_json_round_trip() {
        let index = LineIndex::new("ltm pool p1 {\n  monitor\n}\n");
        let mut diagnostic = Diagnostic::new(
            DiagnosticKind::Conversion,
            Severity::Warning,
            TextRange::at(TextSize::new(16), TextSize::new(7)),
            &index,
            "monitor without a name",
        );
        diagnostic.text = Some("monitor".to_string());

        let json = serde_json::to_string(&diagnostic).unwrap();
        assert!(!json.contains("range"));
        let back: Diagnostic = serde_json::from_str(&json).unwrap();

        assert_eq!(back.range, TextRange::default());
        assert_eq!(back.kind, diagnostic.kind);
        assert_eq!(back.severity, diagnostic.severity);
        assert_eq!((back.line, back.column), (2, 3));
        assert_eq!(back.message, diagnostic.message);
        assert_eq!(back.text, diagnostic.text);
    }

    #[test]
    fn test_undefined_reference_points_at_line() {
        let index = LineIndex::new("a\nb\nltm virtual v { pool p }\n");
        let reference = UndefinedReference {
            structure_type: StructureType::Pool,
            name: "p".into(),
            usage: StructureUsage::VirtualPool,
            line: 3,
        };
        let diagnostic = Diagnostic::from_undefined_reference(&reference, &index);
        assert_eq!(diagnostic.line, 3);
        assert_eq!(diagnostic.column, 1);
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.text.as_deref(), Some("p"));
    }

    #[test]
    fn test_sort_is_stable() {
        let index = LineIndex::new("abc");
        let at = |offset: u32, message: &str| {
            Diagnostic::new(
                DiagnosticKind::Conversion,
                Severity::Warning,
                TextRange::empty(TextSize::new(offset)),
                &index,
                message,
            )
        };
        let mut diagnostics = vec![at(2, "late"), at(0, "first"), at(0, "second")];
        sort_diagnostics(&mut diagnostics);
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "late"]);
    }
}
