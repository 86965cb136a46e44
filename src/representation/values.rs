//! Typed attribute values: prefixes, interface addresses, communities and
//! the small keyword enums properties take.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Failure converting a token's text into a typed value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("'{0}' is not an IPv4 or IPv6 address")]
    InvalidAddress(String),
    #[error("'{0}' is not an address prefix")]
    InvalidPrefix(String),
    #[error("prefix length {len} exceeds {max} in '{text}'")]
    PrefixLength { text: String, len: u8, max: u8 },
    #[error("'{0}' is not a port number")]
    InvalidPort(String),
    #[error("'{0}' is not a standard community")]
    InvalidCommunity(String),
    #[error("'{0}' is not a 'low:high' range")]
    InvalidSubRange(String),
    #[error("unsupported {what} '{text}'")]
    Unsupported { what: &'static str, text: String },
}

fn max_len(address: IpAddr) -> u8 {
    match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

fn split_prefix(text: &str) -> Result<(IpAddr, u8), ValueError> {
    let invalid = || ValueError::InvalidPrefix(text.to_string());
    let (address, len) = text.split_once('/').ok_or_else(invalid)?;
    let address: IpAddr = address.parse().map_err(|_| invalid())?;
    let len: u8 = len.parse().map_err(|_| invalid())?;
    if len > max_len(address) {
        return Err(ValueError::PrefixLength {
            text: text.to_string(),
            len,
            max: max_len(address),
        });
    }
    Ok((address, len))
}

fn mask(address: IpAddr, len: u8) -> IpAddr {
    match address {
        IpAddr::V4(v4) => {
            let bits = u32::from(v4);
            let mask = u32::MAX.checked_shl(32 - u32::from(len)).unwrap_or(0);
            IpAddr::V4(Ipv4Addr::from(bits & mask))
        }
        IpAddr::V6(v6) => {
            let bits = u128::from(v6);
            let mask = u128::MAX.checked_shl(128 - u32::from(len)).unwrap_or(0);
            IpAddr::V6(Ipv6Addr::from(bits & mask))
        }
    }
}

// ============================================================================
// Prefixes
// ============================================================================

/// A network prefix of either family, host bits cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prefix {
    network: IpAddr,
    len: u8,
}

impl Prefix {
    /// Builds the prefix containing `address`; `len` is clamped to the family
    /// maximum.
    pub fn new(address: IpAddr, len: u8) -> Self {
        let len = len.min(max_len(address));
        Self {
            network: mask(address, len),
            len,
        }
    }

    /// `0.0.0.0/0`
    pub fn default_v4() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
    }

    pub fn network(&self) -> IpAddr {
        self.network
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn is_ipv4(&self) -> bool {
        self.network.is_ipv4()
    }

    pub fn contains(&self, address: IpAddr) -> bool {
        address.is_ipv4() == self.network.is_ipv4() && mask(address, self.len) == self.network
    }
}

impl FromStr for Prefix {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (address, len) = split_prefix(text)?;
        Ok(Self::new(address, len))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.len)
    }
}

/// An address plus the length of its connected network (`10.0.0.1/24`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InterfaceAddress {
    pub address: IpAddr,
    pub len: u8,
}

impl InterfaceAddress {
    /// The connected network
    pub fn prefix(&self) -> Prefix {
        Prefix::new(self.address, self.len)
    }
}

impl FromStr for InterfaceAddress {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (address, len) = split_prefix(text)?;
        Ok(Self { address, len })
    }
}

impl fmt::Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.len)
    }
}

// ============================================================================
// Routing values
// ============================================================================

/// BGP standard community packed as `high << 16 | low`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandardCommunity(pub u32);

impl StandardCommunity {
    pub fn new(high: u16, low: u16) -> Self {
        Self((u32::from(high) << 16) | u32::from(low))
    }

    pub fn high(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub fn low(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }
}

impl FromStr for StandardCommunity {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidCommunity(text.to_string());
        let (high, low) = text.split_once(':').ok_or_else(invalid)?;
        Ok(Self::new(
            high.parse().map_err(|_| invalid())?,
            low.parse().map_err(|_| invalid())?,
        ))
    }
}

impl fmt::Display for StandardCommunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.high(), self.low())
    }
}

/// Inclusive integer range, written `low:high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubRange {
    pub start: u32,
    pub end: u32,
}

impl SubRange {
    pub fn contains(&self, value: u32) -> bool {
        self.start <= value && value <= self.end
    }
}

impl FromStr for SubRange {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidSubRange(text.to_string());
        let (start, end) = text.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            start: start.parse().map_err(|_| invalid())?,
            end: end.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for SubRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

// ============================================================================
// Keyword enums
// ============================================================================

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident, $what:literal { $($variant:ident => $text:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }

        impl FromStr for $name {
            type Err = ValueError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                match text {
                    $($text => Ok(Self::$variant),)*
                    _ => Err(ValueError::Unsupported {
                        what: $what,
                        text: text.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum!(
    /// Permit/deny action of a prefix-list or route-map entry
    LineAction, "line action" {
        Permit => "permit",
        Deny => "deny",
    }
);

keyword_enum!(
    /// Protocol a virtual server matches
    IpProtocol, "ip-protocol" {
        Tcp => "tcp",
        Udp => "udp",
    }
);

keyword_enum!(
    /// When a virtual address is advertised into dynamic routing
    RouteAdvertisementMode, "route-advertisement mode" {
        All => "all",
        Always => "always",
        Any => "any",
        Disabled => "disabled",
        Enabled => "enabled",
        Selective => "selective",
    }
);

keyword_enum!(
    BundleSpeed, "bundle-speed" {
        FortyG => "40G",
        OneHundredG => "100G",
    }
);

impl BundleSpeed {
    pub fn bits_per_second(&self) -> f64 {
        match self {
            BundleSpeed::FortyG => 40e9,
            BundleSpeed::OneHundredG => 100e9,
        }
    }
}

/// Parses an address of either family
pub fn parse_address(text: &str) -> Result<IpAddr, ValueError> {
    text.parse()
        .map_err(|_| ValueError::InvalidAddress(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10.1.2.3/24", "10.1.2.0/24")]
    #[case("0.0.0.0/0", "0.0.0.0/0")]
    #[case("192.0.2.7/32", "192.0.2.7/32")]
    #[case("2001:db8::1/64", "2001:db8::/64")]
    fn test_prefix_is_canonical(#[case] text: &str, #[case] expected: &str) {
        let prefix: Prefix = text.parse().unwrap();
        assert_eq!(prefix.to_string(), expected);
    }

    #[rstest]
    #[case("10.0.0.0")]
    #[case("10.0.0.0/33")]
    #[case("::/129")]
    #[case("host/8")]
    fn test_prefix_rejects(#[case] text: &str) {
        assert!(text.parse::<Prefix>().is_err());
    }

    #[test]
    fn test_interface_address_keeps_host_bits() {
        let address: InterfaceAddress = "10.0.0.5/24".parse().unwrap();
        assert_eq!(address.to_string(), "10.0.0.5/24");
        assert!(address.prefix().contains("10.0.0.200".parse().unwrap()));
        assert!(!address.prefix().contains("10.0.1.1".parse().unwrap()));
        assert!(!address.prefix().contains("::1".parse().unwrap()));
    }

    #[test]
    fn test_community_packing() {
        let community: StandardCommunity = "65000:100".parse().unwrap();
        assert_eq!(community.0, (65000 << 16) | 100);
        assert_eq!(community.to_string(), "65000:100");
        assert!("70000:1".parse::<StandardCommunity>().is_err());
    }

    #[test]
    fn test_sub_range() {
        let range: SubRange = "24:32".parse().unwrap();
        assert!(range.contains(28));
        assert!(!range.contains(33));
    }

    #[test]
    fn test_keyword_enums() {
        assert_eq!("deny".parse::<LineAction>(), Ok(LineAction::Deny));
        assert_eq!("udp".parse::<IpProtocol>(), Ok(IpProtocol::Udp));
        assert!("sctp".parse::<IpProtocol>().is_err());
        assert_eq!(BundleSpeed::OneHundredG.bits_per_second(), 100e9);
        assert_eq!(RouteAdvertisementMode::Selective.to_string(), "selective");
    }
}
