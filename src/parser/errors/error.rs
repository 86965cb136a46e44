//! Syntax errors raised while parsing one document
//!
//! A [`SyntaxError`] never stops the parse. It records what went wrong, where,
//! an optional hint, and for unclosed delimiters the range of the opener.

use rowan::{TextRange, TextSize};

use super::codes::ErrorCode;
use super::context::ParseContext;

/// How serious a reported problem is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Input the grammar could not accept
    #[default]
    Error,
    /// Accepted but suspicious or ignored input
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A second location an error points at, such as where a `{` was opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

/// One recovered parse failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub code: ErrorCode,
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            hint: None,
            related: vec![],
        }
    }

    pub fn builder(code: ErrorCode) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder {
            error: Self::new(code.default_message(), TextRange::empty(TextSize::new(0)), code),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Builds a [`SyntaxError`]; unset fields keep the code's default message
/// and an empty range at offset zero
pub struct SyntaxErrorBuilder {
    error: SyntaxError,
}

impl SyntaxErrorBuilder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.error.message = message.into();
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.error.range = range;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.error.hint = Some(hint.into());
        self
    }

    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.error.related.push(RelatedInfo {
            message: message.into(),
            range,
        });
        self
    }

    pub fn build(self) -> SyntaxError {
        self.error
    }
}

/// "unexpected X in <context>, expected <what the context accepts>"
pub fn format_context_error(
    found: &str,
    context: ParseContext,
    code: ErrorCode,
    range: TextRange,
) -> SyntaxError {
    let message = format!(
        "unexpected {} {}, expected {}",
        found,
        context.description(),
        context.expected_description()
    );
    SyntaxError::new(message, range, code)
}
