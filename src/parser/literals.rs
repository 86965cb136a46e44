//! Typed literal recognizers
//!
//! The raw lexer only finds word runs. Each run is classified here in a fixed
//! precedence order: partition prefix, keyword, integers, IPv4 shapes, IPv6
//! shapes, standard community, then the generic word kinds.

use std::net::{Ipv4Addr, Ipv6Addr};

use super::keywords::lookup_keyword;
use super::syntax_kind::SyntaxKind;

/// Classify a word run.
///
/// Returns the kind and the byte length it covers. Only a `PARTITION` prefix
/// covers less than the whole run; the remainder is classified by the next
/// call.
pub fn classify_word(word: &str) -> (SyntaxKind, usize) {
    if let Some(len) = partition_prefix_len(word) {
        return (SyntaxKind::PARTITION, len);
    }
    (classify_complete(word), word.len())
}

fn classify_complete(word: &str) -> SyntaxKind {
    if let Some(kind) = lookup_keyword(word) {
        return kind;
    }
    if let Some(kind) = classify_integer(word) {
        return kind;
    }
    if word.parse::<Ipv4Addr>().is_ok() {
        return SyntaxKind::IP_ADDRESS;
    }
    if is_ipv4_with_port(word) {
        return SyntaxKind::IP_ADDRESS_PORT;
    }
    if is_ipv4_prefix(word) {
        return SyntaxKind::IP_PREFIX;
    }
    if word.contains(':') && word.parse::<Ipv6Addr>().is_ok() {
        return SyntaxKind::IPV6_ADDRESS;
    }
    if is_ipv6_with_port(word) {
        return SyntaxKind::IPV6_ADDRESS_PORT;
    }
    if is_ipv6_prefix(word) {
        return SyntaxKind::IPV6_PREFIX;
    }
    if is_standard_community(word) {
        return SyntaxKind::STANDARD_COMMUNITY;
    }
    if is_word_port(word) {
        return SyntaxKind::WORD_PORT;
    }
    if is_word_id(word) {
        return SyntaxKind::WORD_ID;
    }
    SyntaxKind::WORD
}

/// `/seg/.../` at the start of a run, up to and including its last `/`.
///
/// A run with a single leading slash (`/foo`) has no partition.
fn partition_prefix_len(word: &str) -> Option<usize> {
    if !word.starts_with('/') {
        return None;
    }
    let last = word.rfind('/')?;
    // "/a/" is the shortest partition
    (last >= 2 && !word[1..=last].contains("//")).then_some(last + 1)
}

fn classify_integer(word: &str) -> Option<SyntaxKind> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if word.len() > 1 && word.starts_with('0') {
        return Some(SyntaxKind::DEC);
    }
    let kind = match word.parse::<u64>() {
        Ok(1..=4094) => SyntaxKind::VLAN_ID,
        Ok(n) if n <= u64::from(u16::MAX) => SyntaxKind::UINT16,
        Ok(n) if n <= u64::from(u32::MAX) => SyntaxKind::UINT32,
        _ => SyntaxKind::DEC,
    };
    Some(kind)
}

/// Decimal without leading zeros that fits in 16 bits
pub(crate) fn parse_port(text: &str) -> Option<u16> {
    if text.is_empty()
        || !text.bytes().all(|b| b.is_ascii_digit())
        || (text.len() > 1 && text.starts_with('0'))
    {
        return None;
    }
    text.parse().ok()
}

fn parse_prefix_len(text: &str, max: u8) -> Option<u8> {
    let len: u8 = parse_port(text)?.try_into().ok()?;
    (len <= max).then_some(len)
}

fn is_ipv4_with_port(word: &str) -> bool {
    word.split_once(':').is_some_and(|(addr, port)| {
        addr.parse::<Ipv4Addr>().is_ok() && parse_port(port).is_some()
    })
}

fn is_ipv4_prefix(word: &str) -> bool {
    word.split_once('/').is_some_and(|(addr, len)| {
        addr.parse::<Ipv4Addr>().is_ok() && parse_prefix_len(len, 32).is_some()
    })
}

/// BIG-IP writes IPv6 endpoints as `addr.port`
fn is_ipv6_with_port(word: &str) -> bool {
    word.rsplit_once('.').is_some_and(|(addr, port)| {
        addr.contains(':') && addr.parse::<Ipv6Addr>().is_ok() && parse_port(port).is_some()
    })
}

fn is_ipv6_prefix(word: &str) -> bool {
    word.split_once('/').is_some_and(|(addr, len)| {
        addr.contains(':') && addr.parse::<Ipv6Addr>().is_ok() && parse_prefix_len(len, 128).is_some()
    })
}

fn is_standard_community(word: &str) -> bool {
    word.split_once(':').is_some_and(|(high, low)| {
        parse_port(high).is_some() && parse_port(low).is_some()
    })
}

fn is_word_port(word: &str) -> bool {
    word.rsplit_once(':')
        .is_some_and(|(name, port)| is_word_id(name) && parse_port(port).is_some())
}

fn is_word_id(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
