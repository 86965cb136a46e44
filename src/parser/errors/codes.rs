//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (braces, brackets, item terminators)
//! - E03xx: Declaration errors (missing object types, malformed values)
//! - E09xx: Parser loop guard

use std::fmt;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character that matches no token rule
    E0101,
    /// Unterminated double-quoted string
    E0102,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Extra tokens before the end of a statement or item
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed bracket `[`
    E0204,
    /// Unexpected closing delimiter
    E0205,
    /// Missing `{ ... }` block after an object name
    E0206,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing object type after a module keyword
    E0302,
    /// Property value of the wrong shape
    E0303,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Parser made no progress on a token
    E0901,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0901 => "E0901",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0201 => "unexpected tokens before end of line",
            Self::E0202 => "unclosed brace",
            Self::E0204 => "unclosed bracket",
            Self::E0205 => "unexpected closing delimiter",
            Self::E0206 => "missing body",
            Self::E0302 => "missing object type",
            Self::E0303 => "invalid value",
            Self::E0901 => "parser stuck",
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0102)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0202), "E0202");
    }

    #[test]
    fn test_only_tokenizer_codes_are_lexical() {
        assert!(ErrorCode::E0101.is_lexical());
        assert!(ErrorCode::E0102.is_lexical());
        assert!(!ErrorCode::E0201.is_lexical());
        assert!(!ErrorCode::E0303.is_lexical());
    }
}
