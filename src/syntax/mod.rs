//! Tree-walk infrastructure shared by every extractor
//!
//! [`Listener`] has an enter/exit pair per grammar production with no-op
//! defaults; [`ParseTreeWalker`] drives any number of listeners over the same
//! tree.

mod listener;
mod walker;

pub use listener::{Listener, RULE_KINDS};
pub use walker::ParseTreeWalker;

#[cfg(test)]
mod tests;
