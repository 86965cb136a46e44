//! Logos-based lexer for BIG-IP structured configuration
//!
//! Logos finds the raw shapes (whitespace, newlines, punctuation, quoted
//! strings and word runs). Two lexical islands depend on the previous visible
//! token, so the wrapper threads an explicit [`LexState`] through the loop:
//!
//! - `# ...` is a comment only at start of input or right after a newline
//! - `!` right after a newline starts an opaque imish chunk that runs to the
//!   end of input
//!
//! Word runs are then classified into keywords and typed literals.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::literals::classify_word;
use super::syntax_kind::SyntaxKind;

/// Token channel: hidden tokens are kept for positions but never matched by
/// the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Visible,
    Hidden,
}

impl Channel {
    pub fn of(kind: SyntaxKind) -> Self {
        if kind.is_trivia() {
            Channel::Hidden
        } else {
            Channel::Visible
        }
    }
}

/// Lookback state consulted by the context-sensitive rules
///
/// `last_visible` is `None` at start of input, otherwise the most recently
/// emitted visible token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexState {
    pub last_visible: Option<SyntaxKind>,
}

impl LexState {
    /// Fresh state positioned at start of input
    pub fn start() -> Self {
        Self::default()
    }

    pub fn allows_comment(&self) -> bool {
        matches!(self.last_visible, None | Some(SyntaxKind::NEWLINE))
    }

    pub fn allows_imish(&self) -> bool {
        self.last_visible == Some(SyntaxKind::NEWLINE)
    }

    /// State after emitting a token of `kind`
    pub fn advance(self, kind: SyntaxKind) -> Self {
        match Channel::of(kind) {
            Channel::Hidden => self,
            Channel::Visible => Self {
                last_visible: Some(kind),
            },
        }
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
    /// 1-based line of the first character
    pub line: u32,
    /// 1-based column, in UTF-8 bytes from the line start, of the first
    /// character
    pub column: u32,
}

impl Token<'_> {
    pub fn channel(&self) -> Channel {
        Channel::of(self.kind)
    }

    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Scan one token at `offset`.
///
/// Returns the kind and byte length, or `None` at end of input. Every call
/// makes progress: a character no rule accepts becomes a one-character
/// `ERROR` token.
pub fn next_token(input: &str, offset: usize, state: LexState) -> Option<(SyntaxKind, usize)> {
    let rest = input.get(offset..)?;
    if rest.is_empty() {
        return None;
    }

    if state.allows_comment() && rest.starts_with('#') {
        let len = rest.find(['\r', '\n']).unwrap_or(rest.len());
        return Some((SyntaxKind::COMMENT_LINE, len));
    }
    if state.allows_imish() && rest.starts_with('!') {
        return Some((SyntaxKind::IMISH_CHUNK, rest.len()));
    }

    let mut raw = RawToken::lexer(rest);
    let token = match raw.next()? {
        Ok(token) => token,
        Err(()) => {
            let len = rest.chars().next().map_or(1, char::len_utf8);
            return Some((SyntaxKind::ERROR, len));
        }
    };
    let len = raw.span().end;
    let kind = match token {
        RawToken::Whitespace => SyntaxKind::WHITESPACE,
        RawToken::Newline => SyntaxKind::NEWLINE,
        RawToken::LBrace => SyntaxKind::L_BRACE,
        RawToken::RBrace => SyntaxKind::R_BRACE,
        RawToken::LBracket => SyntaxKind::L_BRACKET,
        RawToken::RBracket => SyntaxKind::R_BRACKET,
        RawToken::Semicolon => SyntaxKind::SEMICOLON,
        RawToken::QuotedString => SyntaxKind::DOUBLE_QUOTED_STRING,
        RawToken::Word => return Some(classify_word(&rest[..len])),
    };
    Some((kind, len))
}

/// Forward-only token stream over one document
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    state: LexState,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            state: LexState::start(),
            line: 1,
            column: 1,
        }
    }

    /// Current lookback state
    pub fn state(&self) -> LexState {
        self.state
    }

    fn advance_position(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\r' => {
                    if chars.peek() != Some(&'\n') {
                        self.line += 1;
                        self.column = 1;
                    }
                }
                _ => self.column += c.len_utf8() as u32,
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, len) = next_token(self.input, self.offset, self.state)?;
        let text = &self.input[self.offset..self.offset + len];
        let token = Token {
            kind,
            text,
            offset: TextSize::new(self.offset as u32),
            line: self.line,
            column: self.column,
        };
        self.offset += len;
        self.state = self.state.advance(kind);
        self.advance_position(text);
        Some(token)
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Raw shapes recognized by logos
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[regex(r"[\r\n]+")]
    Newline,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(";")]
    Semicolon,

    // No escapes: the next quote always closes the string
    #[regex(r#""[^"]*""#)]
    QuotedString,

    #[regex(r#"[^ \t\x0C\r\n{}\[\];"]+"#)]
    Word,
}
