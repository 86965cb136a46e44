//! `sys` objects: global settings and NTP

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    pub(super) fn sys_object(&mut self) {
        match self.current_kind() {
            SyntaxKind::GLOBAL_SETTINGS_KW => {
                self.singleton(SyntaxKind::SYS_GLOBAL_SETTINGS, |p| match p.current_kind() {
                    SyntaxKind::HOSTNAME_KW => p.property(SyntaxKind::SGS_HOSTNAME, Self::word_value),
                    _ => p.unrecognized(),
                })
            }
            SyntaxKind::NTP_KW => self.singleton(SyntaxKind::SYS_NTP, |p| match p.current_kind() {
                SyntaxKind::SERVERS_KW => {
                    p.property(SyntaxKind::NTP_SERVERS, |p| p.list(Self::word_value))
                }
                _ => p.unrecognized(),
            }),
            _ => self.unrecognized(),
        }
    }
}
