//! Depth-first walk driving a [`Listener`]

use rowan::WalkEvent;

use super::listener::{Listener, dispatch_enter, dispatch_exit};
use crate::parser::{AstNode, SyntaxKind, SyntaxNode, Unrecognized};

/// Walks a syntax tree in pre/post order, firing listener callbacks
///
/// Unrecognized and error nodes are reported once and not descended into.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseTreeWalker;

impl ParseTreeWalker {
    pub fn walk<L: Listener + ?Sized>(listener: &mut L, root: &SyntaxNode) {
        let mut preorder = root.preorder();
        while let Some(event) = preorder.next() {
            match event {
                WalkEvent::Enter(node) => match node.kind() {
                    SyntaxKind::ERROR => {
                        listener.visit_error_node(&node);
                        preorder.skip_subtree();
                    }
                    SyntaxKind::UNRECOGNIZED => {
                        listener.enter_every_rule(&node);
                        if let Some(unrecognized) = Unrecognized::cast(node.clone()) {
                            listener.visit_unrecognized(&unrecognized);
                        }
                        listener.exit_every_rule(&node);
                        preorder.skip_subtree();
                    }
                    _ => {
                        listener.enter_every_rule(&node);
                        dispatch_enter(listener, &node);
                    }
                },
                // skip_subtree still yields the Leave of the skipped node
                WalkEvent::Leave(node) => match node.kind() {
                    SyntaxKind::ERROR | SyntaxKind::UNRECOGNIZED => {}
                    _ => {
                        dispatch_exit(listener, &node);
                        listener.exit_every_rule(&node);
                    }
                },
            }
        }
    }
}
