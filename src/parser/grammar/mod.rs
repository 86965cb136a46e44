//! Grammar productions for the BIG-IP structured dialect
//!
//! Each production is a `Parser` method. Statements dispatch on the module
//! keyword (`ltm`, `net`, `sys`) and then on the object type; anything else
//! falls through to the `unrecognized` production.

mod ltm;
mod net;
mod sys;

use super::errors::{ErrorCode, ParseContext};
use super::parser::Parser;
use super::syntax_kind::{SyntaxKind, kind_to_name};

impl Parser<'_> {
    /// statement = s_ltm | s_net | s_sys | unrecognized
    pub(super) fn statement(&mut self) {
        match self.current_kind() {
            SyntaxKind::LTM_KW => self.module_statement(SyntaxKind::S_LTM, ParseContext::LtmStatement, Self::ltm_object),
            SyntaxKind::NET_KW => self.module_statement(SyntaxKind::S_NET, ParseContext::NetStatement, Self::net_object),
            SyntaxKind::SYS_KW => self.module_statement(SyntaxKind::S_SYS, ParseContext::SysStatement, Self::sys_object),
            SyntaxKind::R_BRACE | SyntaxKind::R_BRACKET => self.stray_closer(),
            _ => self.unrecognized(),
        }
    }

    fn module_statement(&mut self, node: SyntaxKind, context: ParseContext, object: fn(&mut Self)) {
        self.start_node(node);
        let module = kind_to_name(self.current_kind());
        self.bump();
        if self.at_item_end() {
            self.error(ErrorCode::E0302, format!("expected object type after '{module}'"));
        } else {
            self.with_context(context, object);
        }
        self.finish_node();
    }
}
