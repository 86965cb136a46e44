//! Rowan-based parser for BIG-IP structured configuration
//!
//! - **logos** for raw lexing, with an explicit lookback state for the
//!   context-sensitive comment and imish rules
//! - **rowan** for the lossless CST
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos + LexState) → Tokens with SyntaxKind and Channel
//!     ↓
//! Parser → GreenNode tree + SyntaxErrors
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over value nodes
//! ```
//!
//! Every grammar production produces a node whose kind is the production's
//! tag, so listeners can dispatch on `SyntaxKind` alone.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod grammar;
pub mod keywords;
mod lexer;
pub(crate) mod literals;
mod syntax_kind;

pub use ast::{
    AddressValue, AstNode, AstToken, CommunityValue, Configuration, Imish, List, NameWithPort,
    NodeExt, PrefixValue, StructureName, Uint16Value, Uint32Value, Unrecognized, VlanIdValue,
    WordValue, unquote,
};
pub use errors::{ErrorCode, ParseContext, Severity, SyntaxError};
pub use lexer::{Channel, LexState, Lexer, Token, next_token, tokenize};
pub use parser::{Parse, parse, parse_tokens};
pub use syntax_kind::{
    BigipLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
    kind_to_name,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};

#[cfg(test)]
mod tests;
