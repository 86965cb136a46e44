//! Recursive descent parser for BIG-IP structured configuration
//!
//! Builds a rowan GreenNode tree from tokens. Recovery works at item
//! granularity: a malformed statement or property records one error and is
//! wrapped in an `ERROR` node up to its terminator, then parsing resumes with
//! the next sibling.

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::errors::{ErrorCode, ParseContext, SyntaxError, format_context_error};
use super::lexer::{Token, tokenize};
use super::syntax_kind::{SyntaxKind, SyntaxNode, kind_to_name};

/// End-of-input sentinel returned by lookahead
pub(super) const EOF: SyntaxKind = SyntaxKind::__LAST;

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse configuration text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens = tokenize(input);
    parse_tokens(&tokens)
}

/// Parse an already tokenized document
pub fn parse_tokens(tokens: &[Token<'_>]) -> Parse {
    let mut parser = Parser::new(tokens);
    parser.parse_configuration();
    let parse = parser.finish();
    tracing::debug!(
        tokens = tokens.len(),
        errors = parse.errors.len(),
        "parsed configuration"
    );
    parse
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    contexts: Vec<ParseContext>,
    unclosed_reported: bool,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            contexts: Vec::new(),
            unclosed_reported: false,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection (trivia is skipped by all lookahead)
    // =========================================================================

    fn significant(&self, n: usize) -> Option<&Token<'a>> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
    }

    fn significant_index(&self) -> Option<usize> {
        (self.pos..self.tokens.len()).find(|&idx| !self.tokens[idx].kind.is_trivia())
    }

    pub(super) fn nth(&self, n: usize) -> SyntaxKind {
        self.significant(n).map_or(EOF, |t| t.kind)
    }

    pub(super) fn current_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn current_range(&self) -> TextRange {
        match self.significant(0) {
            Some(token) => token.range(),
            None => TextRange::empty(self.end_offset()),
        }
    }

    fn end_offset(&self) -> TextSize {
        self.tokens
            .last()
            .map_or(TextSize::new(0), |t| t.range().end())
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    pub(super) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    pub(super) fn at_eof(&self) -> bool {
        self.current_kind() == EOF
    }

    /// At a statement or item terminator (or end of input)
    pub(super) fn at_item_end(&self) -> bool {
        let kind = self.current_kind();
        kind == EOF || kind.is_item_end()
    }

    /// The next raw token is significant and satisfies `pred` (no trivia in
    /// between)
    pub(super) fn adjacent(&self, pred: fn(SyntaxKind) -> bool) -> bool {
        self.tokens.get(self.pos).is_some_and(|t| pred(t.kind))
    }

    pub(super) fn with_context(&mut self, context: ParseContext, production: fn(&mut Self)) {
        self.contexts.push(context);
        production(self);
        self.contexts.pop();
    }

    pub(super) fn context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or(ParseContext::TopLevel)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Move pending hidden tokens into the tree. Imish chunks get their own
    /// node so a tree walk sees them.
    fn flush_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            if token.kind == SyntaxKind::IMISH_CHUNK {
                self.builder.start_node(SyntaxKind::IMISH.into());
                self.builder.token(token.kind.into(), token.text);
                self.builder.finish_node();
            } else {
                self.builder.token(token.kind.into(), token.text);
            }
            self.pos += 1;
        }
    }

    pub(super) fn bump(&mut self) {
        self.flush_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip newlines and `;` between items
    pub(super) fn eat_separators(&mut self) {
        while self.at_any(&[SyntaxKind::NEWLINE, SyntaxKind::SEMICOLON]) {
            self.bump();
        }
    }

    /// Consume the rest of an item: stops before a terminator at depth zero,
    /// keeps nested braces balanced
    pub(super) fn skip_balanced_item(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                EOF => break,
                SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_BRACE if depth == 0 => break,
                SyntaxKind::R_BRACE => depth -= 1,
                SyntaxKind::NEWLINE | SyntaxKind::SEMICOLON if depth == 0 => break,
                _ => {}
            }
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    /// Records an error; one sitting on a lexer `ERROR` token is relabelled
    /// with the lexical code so the bad character is reported only once
    pub(super) fn push_error(&mut self, mut error: SyntaxError) {
        let lexical = self
            .significant(0)
            .filter(|token| token.kind == SyntaxKind::ERROR && error.range.start() == token.offset)
            .map(|token| {
                if token.text == "\"" {
                    ErrorCode::E0102
                } else {
                    ErrorCode::E0101
                }
            });
        if let Some(code) = lexical {
            error.code = code;
            error.message = format!("{}: {}", code.default_message(), error.message);
        }
        tracing::trace!(code = %error.code, message = %error.message, "syntax error");
        self.errors.push(error);
    }

    pub(super) fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let range = self.current_range();
        self.push_error(SyntaxError::new(message, range, code));
    }

    /// Record an error and wrap the rest of the item in an `ERROR` node
    pub(super) fn recover_item(&mut self, error: SyntaxError) {
        self.push_error(error);
        if self.at_item_end() {
            return;
        }
        self.start_node(SyntaxKind::ERROR);
        self.skip_balanced_item();
        self.finish_node();
    }

    /// "expected X, found Y" for a value of the wrong shape
    pub(super) fn expected(&mut self, what: &str) {
        let found = kind_to_name(self.current_kind());
        let error = SyntaxError::new(
            format!("expected {what}, found {found}"),
            self.current_range(),
            ErrorCode::E0303,
        );
        self.recover_item(error);
    }

    fn unexpected_after_item(&mut self) {
        let found = kind_to_name(self.current_kind());
        let error = format_context_error(found, self.context(), ErrorCode::E0201, self.current_range())
            .with_hint("each property ends at a newline, ';' or '}'");
        self.recover_item(error);
    }

    fn unclosed(&mut self, open: TextRange, code: ErrorCode, what: &str) {
        if self.unclosed_reported {
            return;
        }
        self.unclosed_reported = true;
        let error = SyntaxError::builder(code)
            .message(format!("unclosed '{what}' at end of input"))
            .range(self.current_range())
            .related("opened here", open)
            .build();
        self.push_error(error);
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Start a node at the next significant token; pending trivia stays
    /// outside
    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Structural productions shared by every object grammar
    // =========================================================================

    /// Configuration = (statement | imish)* EOF
    fn parse_configuration(&mut self) {
        self.builder.start_node(SyntaxKind::CONFIGURATION.into());
        loop {
            self.eat_separators();
            if self.at_eof() {
                break;
            }
            let before = self.pos;
            self.statement();
            if !self.at_item_end() {
                self.unexpected_after_item();
            }
            if self.pos == before {
                // Safety: never loop without consuming
                self.error(ErrorCode::E0901, format!("stuck on token: {:?}", self.current_kind()));
                self.start_node(SyntaxKind::ERROR);
                self.bump();
                self.finish_node();
            }
        }
        self.flush_trivia();
        self.finish_node();
    }

    /// A closing delimiter with nothing open
    pub(super) fn stray_closer(&mut self) {
        let found = kind_to_name(self.current_kind());
        let error = format_context_error(found, self.context(), ErrorCode::E0205, self.current_range());
        self.push_error(error);
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        self.finish_node();
    }

    /// Block<P> = '{' (P | unrecognized)* '}'
    ///
    /// Items end at a newline, `;`, or right before the closing brace.
    pub(super) fn block(&mut self, context: ParseContext, item: fn(&mut Self)) {
        let open = self.current_range();
        if !self.eat(SyntaxKind::L_BRACE) {
            let found = kind_to_name(self.current_kind());
            let error = SyntaxError::new(
                format!("expected '{{', found {found}"),
                self.current_range(),
                ErrorCode::E0206,
            );
            self.recover_item(error);
            return;
        }
        self.contexts.push(context);
        loop {
            self.eat_separators();
            match self.current_kind() {
                SyntaxKind::R_BRACE => {
                    self.bump();
                    break;
                }
                EOF => {
                    self.unclosed(open, ErrorCode::E0202, "{");
                    break;
                }
                _ => {}
            }
            item(self);
            if !self.at_item_end() {
                self.unexpected_after_item();
            }
        }
        self.contexts.pop();
    }

    /// Unrecognized = token+ ('{' ... '}')? up to the item terminator
    pub(super) fn unrecognized(&mut self) {
        self.start_node(SyntaxKind::UNRECOGNIZED);
        self.skip_balanced_item();
        self.finish_node();
    }

    /// Wraps a property: `node` holds the keyword and whatever `value` adds
    pub(super) fn property(&mut self, node: SyntaxKind, value: fn(&mut Self) -> bool) {
        self.start_node(node);
        self.bump();
        value(self);
        self.finish_node();
    }

    /// A bare keyword property (`disabled`, `reject`, ...)
    pub(super) fn flag(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump();
        self.finish_node();
    }

    /// Keyword followed by a block of sub-properties
    pub(super) fn section(&mut self, node: SyntaxKind, item: fn(&mut Self)) {
        self.start_node(node);
        self.bump();
        self.block(ParseContext::ObjectBody, item);
        self.finish_node();
    }

    /// Named entry inside a section: `NAME { ... }` with an optional body
    pub(super) fn entry(&mut self, node: SyntaxKind, name: fn(&mut Self) -> bool, item: fn(&mut Self)) {
        self.start_node(node);
        if name(self) && self.at(SyntaxKind::L_BRACE) {
            self.block(ParseContext::EntryBody, item);
        }
        self.finish_node();
    }

    /// Object = TYPE-KEYWORD structure_name block
    pub(super) fn object(&mut self, node: SyntaxKind, item: fn(&mut Self)) {
        self.start_node(node);
        self.bump();
        if self.structure_name() {
            self.block(ParseContext::ObjectBody, item);
        }
        self.finish_node();
    }

    /// Object without a name (`sys ntp { ... }`)
    pub(super) fn singleton(&mut self, node: SyntaxKind, item: fn(&mut Self)) {
        self.section(node, item);
    }

    /// Opaque body: every token up to the matching `}` is kept verbatim
    pub(super) fn opaque_body(&mut self, node: SyntaxKind) {
        let open = self.current_range();
        if !self.at(SyntaxKind::L_BRACE) {
            self.expected("'{'");
            return;
        }
        self.start_node(node);
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                EOF => {
                    self.unclosed(open, ErrorCode::E0202, "{");
                    break;
                }
                SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_BRACE => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        break;
                    }
                }
                _ => {}
            }
            self.bump();
        }
        self.finish_node();
    }

    // =========================================================================
    // Typed value sub-rules
    // =========================================================================

    /// Single token wrapped in a value node
    fn token_value(&mut self, node: SyntaxKind, accept: fn(SyntaxKind) -> bool, what: &str) -> bool {
        if !accept(self.current_kind()) {
            self.expected(what);
            return false;
        }
        self.start_node(node);
        self.bump();
        self.finish_node();
        true
    }

    /// One of a fixed set of tokens, kept directly in the property node
    pub(super) fn token_choice(&mut self, kinds: &[SyntaxKind], what: &str) -> bool {
        if self.at_any(kinds) {
            self.bump();
            true
        } else {
            self.expected(what);
            false
        }
    }

    pub(super) fn enabled_or_disabled(&mut self) -> bool {
        self.token_choice(&[SyntaxKind::ENABLED_KW, SyntaxKind::DISABLED_KW], "'enabled' or 'disabled'")
    }

    /// structure_name = PARTITION? word
    pub(super) fn structure_name(&mut self) -> bool {
        let kind = self.current_kind();
        if kind != SyntaxKind::PARTITION && !kind.is_word_like() {
            self.expected("name");
            return false;
        }
        self.start_node(SyntaxKind::STRUCTURE_NAME);
        if self.eat(SyntaxKind::PARTITION) && !self.adjacent(SyntaxKind::is_word_like) {
            self.finish_node();
            self.expected("name after partition");
            return false;
        }
        self.bump();
        self.finish_node();
        true
    }

    /// PARTITION? (IP_ADDRESS_PORT | IPV6_ADDRESS_PORT | WORD_PORT)
    pub(super) fn name_with_port(&mut self) -> bool {
        fn with_port(kind: SyntaxKind) -> bool {
            matches!(
                kind,
                SyntaxKind::IP_ADDRESS_PORT | SyntaxKind::IPV6_ADDRESS_PORT | SyntaxKind::WORD_PORT
            )
        }
        let has_partition = self.at(SyntaxKind::PARTITION);
        let ok = if has_partition {
            // the name must follow the partition with no gap
            self.significant_index()
                .and_then(|idx| self.tokens.get(idx + 1))
                .is_some_and(|t| with_port(t.kind))
        } else {
            with_port(self.current_kind())
        };
        if !ok {
            self.expected("name with port");
            return false;
        }
        self.start_node(SyntaxKind::NAME_WITH_PORT);
        self.eat(SyntaxKind::PARTITION);
        self.bump();
        self.finish_node();
        true
    }

    pub(super) fn word_value(&mut self) -> bool {
        self.token_value(SyntaxKind::WORD_VALUE, SyntaxKind::is_word_like, "value")
    }

    pub(super) fn address_value(&mut self) -> bool {
        fn accept(kind: SyntaxKind) -> bool {
            matches!(kind, SyntaxKind::IP_ADDRESS | SyntaxKind::IPV6_ADDRESS | SyntaxKind::ANY_KW)
        }
        self.token_value(SyntaxKind::ADDRESS_VALUE, accept, "IP address")
    }

    pub(super) fn prefix_value(&mut self) -> bool {
        fn accept(kind: SyntaxKind) -> bool {
            matches!(
                kind,
                SyntaxKind::IP_PREFIX
                    | SyntaxKind::IPV6_PREFIX
                    | SyntaxKind::IP_ADDRESS
                    | SyntaxKind::IPV6_ADDRESS
                    | SyntaxKind::DEFAULT_KW
            )
        }
        self.token_value(SyntaxKind::PREFIX_VALUE, accept, "IP prefix")
    }

    pub(super) fn uint16_value(&mut self) -> bool {
        self.token_value(SyntaxKind::UINT16_VALUE, SyntaxKind::is_uint16, "16-bit integer")
    }

    pub(super) fn uint32_value(&mut self) -> bool {
        self.token_value(SyntaxKind::UINT32_VALUE, SyntaxKind::is_uint32, "32-bit integer")
    }

    pub(super) fn vlan_id_value(&mut self) -> bool {
        self.token_value(SyntaxKind::VLAN_ID_VALUE, |k| k == SyntaxKind::VLAN_ID, "VLAN id (1-4094)")
    }

    pub(super) fn community_value(&mut self) -> bool {
        self.token_value(
            SyntaxKind::COMMUNITY_VALUE,
            |k| k == SyntaxKind::STANDARD_COMMUNITY,
            "standard community",
        )
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// list = '{' element* '}' | bracket_list | empty_list | element
    pub(super) fn list(&mut self, element: fn(&mut Self) -> bool) -> bool {
        match self.current_kind() {
            SyntaxKind::L_BRACE => {
                self.start_node(SyntaxKind::LIST);
                self.brace_list(element);
                self.finish_node();
                true
            }
            SyntaxKind::L_BRACKET => {
                self.start_node(SyntaxKind::LIST);
                let ok = self.bracket_list(element);
                self.finish_node();
                ok
            }
            _ => {
                self.start_node(SyntaxKind::LIST);
                let ok = element(self);
                self.finish_node();
                ok
            }
        }
    }

    fn brace_list(&mut self, element: fn(&mut Self) -> bool) {
        let open = self.current_range();
        self.bump();
        self.contexts.push(ParseContext::List);
        loop {
            self.eat_separators();
            match self.current_kind() {
                SyntaxKind::R_BRACE => {
                    self.bump();
                    break;
                }
                EOF => {
                    self.unclosed(open, ErrorCode::E0202, "{");
                    break;
                }
                _ => {}
            }
            let before = self.pos;
            element(self);
            if self.pos == before {
                self.stray_closer();
            }
        }
        self.contexts.pop();
    }

    /// bracket_list = '[' element+ ']'; empty_list = '[' ']'
    fn bracket_list(&mut self, element: fn(&mut Self) -> bool) -> bool {
        if self.nth(1) == SyntaxKind::R_BRACKET {
            self.start_node(SyntaxKind::EMPTY_LIST);
            self.bump();
            self.bump();
            self.finish_node();
            return true;
        }
        let open = self.current_range();
        self.start_node(SyntaxKind::BRACKET_LIST);
        self.bump();
        self.contexts.push(ParseContext::List);
        let mut ok = true;
        loop {
            match self.current_kind() {
                SyntaxKind::R_BRACKET => {
                    self.bump();
                    break;
                }
                kind if kind == EOF || kind.is_item_end() => {
                    let error = SyntaxError::builder(ErrorCode::E0204)
                        .message("unclosed '['")
                        .range(self.current_range())
                        .related("opened here", open)
                        .build();
                    self.push_error(error);
                    ok = false;
                    break;
                }
                _ => {}
            }
            if !element(self) {
                ok = false;
                break;
            }
        }
        self.contexts.pop();
        self.finish_node();
        ok
    }
}
