//! Parse context tracking for context-aware error messages
//!
//! The parser keeps a stack of contexts so an error can say where in the
//! configuration hierarchy it happened ("in pool body", "in route-map entry").

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// Between top-level statements
    TopLevel,
    /// After `ltm`
    LtmStatement,
    /// After `net`
    NetStatement,
    /// After `sys`
    SysStatement,
    /// Inside an object body `{ ... }`
    ObjectBody,
    /// Inside a named sub-block (pool member, prefix-list entry, ...)
    EntryBody,
    /// Inside a `{ ... }` or `[ ... ]` list
    List,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::LtmStatement => "in ltm statement",
            Self::NetStatement => "in net statement",
            Self::SysStatement => "in sys statement",
            Self::ObjectBody => "in object body",
            Self::EntryBody => "in entry body",
            Self::List => "in list",
        }
    }

    /// What the parser would accept here
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a statement such as 'ltm', 'net' or 'sys'",
            Self::LtmStatement | Self::NetStatement | Self::SysStatement => "an object type",
            Self::ObjectBody | Self::EntryBody => "a property or '}'",
            Self::List => "a list element, '}' or ']'",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_description() {
        assert_eq!(ParseContext::TopLevel.description(), "at top level");
        assert_eq!(ParseContext::List.description(), "in list");
    }

    #[test]
    fn test_expected_description() {
        assert!(ParseContext::ObjectBody.expected_description().contains("'}'"));
    }
}
