//! Typed AST wrappers over the untyped rowan CST.
//!
//! Only value-level rules get wrappers; statement and property nodes are
//! handled directly by kind in tree walks. [`NodeExt`] adds the lookups the
//! extractors need on any node.

use std::net::IpAddr;

use super::literals::parse_port;
use super::syntax_kind::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

/// Trait for AST tokens that wrap a SyntaxToken
pub trait AstToken: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(token: SyntaxToken) -> Option<Self>;
    fn syntax(&self) -> &SyntaxToken;
    fn text(&self) -> &str {
        self.syntax().text()
    }
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Strip the quotes of a double-quoted string; other text is returned as is
pub fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}

/// Significant (non-trivia) tokens directly under `node`
fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| !token.kind().is_trivia())
}

// ============================================================================
// Root and special nodes
// ============================================================================

ast_node!(Configuration, CONFIGURATION);

impl Configuration {
    /// Imish chunk, wherever the parser attached it
    pub fn imish(&self) -> Option<Imish> {
        self.0.descendants().find_map(Imish::cast)
    }
}

ast_node!(Imish, IMISH);

impl Imish {
    pub fn chunk(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| token.kind() == SyntaxKind::IMISH_CHUNK)
    }
}

ast_node!(Unrecognized, UNRECOGNIZED);

impl Unrecognized {
    /// Statement text without surrounding trivia
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }
}

// ============================================================================
// Names
// ============================================================================

ast_node!(StructureName, STRUCTURE_NAME);

impl StructureName {
    pub fn partition(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).find(|t| t.kind() == SyntaxKind::PARTITION)
    }

    /// Unqualified part of the name
    pub fn local_name(&self) -> Option<String> {
        significant_tokens(&self.0)
            .find(|t| t.kind() != SyntaxKind::PARTITION)
            .map(|t| unquote(t.text()).to_string())
    }

    /// Full name as written, partition included (`/Common/pool1`)
    pub fn full_name(&self) -> String {
        significant_tokens(&self.0)
            .map(|t| unquote(t.text()).to_string())
            .collect()
    }
}

ast_node!(NameWithPort, NAME_WITH_PORT);

impl NameWithPort {
    fn endpoint(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).find(|t| t.kind() != SyntaxKind::PARTITION)
    }

    fn split(&self) -> Option<(String, u16)> {
        let token = self.endpoint()?;
        let text = token.text();
        let (name, port) = match token.kind() {
            SyntaxKind::IPV6_ADDRESS_PORT => text.rsplit_once('.')?,
            _ => text.rsplit_once(':')?,
        };
        let partition = self.partition_text();
        Some((format!("{partition}{name}"), parse_port(port)?))
    }

    fn partition_text(&self) -> String {
        significant_tokens(&self.0)
            .find(|t| t.kind() == SyntaxKind::PARTITION)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    /// Name part with its partition (`/Common/node1` of `/Common/node1:80`)
    pub fn name(&self) -> Option<String> {
        self.split().map(|(name, _)| name)
    }

    pub fn port(&self) -> Option<u16> {
        self.split().map(|(_, port)| port)
    }

    /// Address part when the endpoint is written as an address
    pub fn address(&self) -> Option<IpAddr> {
        let token = self.endpoint()?;
        match token.kind() {
            SyntaxKind::IP_ADDRESS_PORT | SyntaxKind::IPV6_ADDRESS_PORT => {
                let (name, _) = self.split()?;
                let local = name.rsplit('/').next().unwrap_or(&name).to_string();
                local.parse().ok()
            }
            _ => None,
        }
    }

    /// Full text as written
    pub fn full_name(&self) -> String {
        significant_tokens(&self.0).map(|t| t.text().to_string()).collect()
    }
}

// ============================================================================
// Typed values
// ============================================================================

ast_node!(WordValue, WORD_VALUE);

impl WordValue {
    pub fn text(&self) -> String {
        significant_tokens(&self.0)
            .next()
            .map(|t| unquote(t.text()).to_string())
            .unwrap_or_default()
    }
}

ast_node!(AddressValue, ADDRESS_VALUE);

impl AddressValue {
    pub fn token(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).next()
    }

    /// `None` for `any` and for text that is not an address
    pub fn ip(&self) -> Option<IpAddr> {
        self.token().and_then(|t| t.text().parse().ok())
    }

    pub fn is_any(&self) -> bool {
        self.token().is_some_and(|t| t.kind() == SyntaxKind::ANY_KW)
    }
}

ast_node!(PrefixValue, PREFIX_VALUE);

impl PrefixValue {
    pub fn token(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).next()
    }

    pub fn text(&self) -> String {
        self.token().map(|t| t.text().to_string()).unwrap_or_default()
    }

    pub fn is_default(&self) -> bool {
        self.token().is_some_and(|t| t.kind() == SyntaxKind::DEFAULT_KW)
    }
}

ast_node!(Uint16Value, UINT16_VALUE);

impl Uint16Value {
    pub fn value(&self) -> Option<u16> {
        significant_tokens(&self.0).next()?.text().parse().ok()
    }
}

ast_node!(Uint32Value, UINT32_VALUE);

impl Uint32Value {
    pub fn value(&self) -> Option<u32> {
        significant_tokens(&self.0).next()?.text().parse().ok()
    }
}

ast_node!(VlanIdValue, VLAN_ID_VALUE);

impl VlanIdValue {
    pub fn value(&self) -> Option<u16> {
        significant_tokens(&self.0).next()?.text().parse().ok()
    }
}

ast_node!(CommunityValue, COMMUNITY_VALUE);

impl CommunityValue {
    pub fn text(&self) -> String {
        significant_tokens(&self.0)
            .next()
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }
}

ast_node!(List, LIST);

impl List {
    /// `[ ]`
    pub fn is_empty_list(&self) -> bool {
        self.0.children().any(|child| child.kind() == SyntaxKind::EMPTY_LIST)
    }

    /// Element texts in order, whichever list form was written
    pub fn values(&self) -> Vec<String> {
        self.0
            .descendants()
            .filter_map(|node| match node.kind() {
                SyntaxKind::STRUCTURE_NAME => StructureName::cast(node).map(|n| n.full_name()),
                SyntaxKind::WORD_VALUE => WordValue::cast(node).map(|n| n.text()),
                SyntaxKind::COMMUNITY_VALUE => CommunityValue::cast(node).map(|n| n.text()),
                _ => None,
            })
            .collect()
    }
}

// ============================================================================
// Lookups on any node
// ============================================================================

/// Child lookups used by tree walks
pub trait NodeExt {
    /// First direct child of type `N`
    fn child<N: AstNode>(&self) -> Option<N>;

    /// First significant token of the node (where diagnostics point)
    fn first_significant_token(&self) -> Option<SyntaxToken>;

    /// Kind of the token that follows the leading keyword
    /// (`enabled` in `arp enabled`)
    fn keyword_argument(&self) -> Option<SyntaxToken>;

    /// The property holds an `ERROR` child
    fn has_error(&self) -> bool;
}

impl NodeExt for SyntaxNode {
    fn child<N: AstNode>(&self) -> Option<N> {
        self.children().find_map(N::cast)
    }

    fn first_significant_token(&self) -> Option<SyntaxToken> {
        self.descendants_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| !token.kind().is_trivia())
    }

    fn keyword_argument(&self) -> Option<SyntaxToken> {
        significant_tokens(self).nth(1)
    }

    fn has_error(&self) -> bool {
        self.children().any(|child| child.kind() == SyntaxKind::ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn first<N: AstNode>(input: &str) -> N {
        parse(input)
            .syntax()
            .descendants()
            .find_map(N::cast)
            .expect("node present")
    }

    #[test]
    fn test_structure_name_with_partition() {
        let name: StructureName = first("ltm pool /Common/p1 { }");
        assert_eq!(name.full_name(), "/Common/p1");
        assert_eq!(name.local_name().as_deref(), Some("p1"));
        assert_eq!(name.partition().map(|t| t.text().to_string()).as_deref(), Some("/Common/"));
    }

    #[test]
    fn test_quoted_name_is_unquoted() {
        let name: StructureName = first("ltm node \"my node\" { }");
        assert_eq!(name.full_name(), "my node");
    }

    #[test]
    fn test_member_name_split() {
        let member: NameWithPort = first("ltm pool p { members { /Common/10.0.0.1:80 { } } }");
        assert_eq!(member.name().as_deref(), Some("/Common/10.0.0.1"));
        assert_eq!(member.port(), Some(80));
        assert_eq!(member.address(), Some("10.0.0.1".parse().unwrap()));
    }

    #[test]
    fn test_ipv6_member_uses_dot_port() {
        let member: NameWithPort = first("ltm pool p { members { dead::beef.443 { } } }");
        assert_eq!(member.name().as_deref(), Some("dead::beef"));
        assert_eq!(member.port(), Some(443));
    }

    #[test]
    fn test_list_forms() {
        let braces: List = first("ltm virtual v { vlans { a b } }");
        assert_eq!(braces.values(), vec!["a", "b"]);

        let empty: List = first("ltm virtual v { vlans [ ] }");
        assert!(empty.is_empty_list());
        assert!(empty.values().is_empty());

        let single: List = first("ltm virtual v { vlans [ /Common/x ] }");
        assert_eq!(single.values(), vec!["/Common/x"]);
    }
}
