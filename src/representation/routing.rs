//! Dynamic routing entities under `net routing`: BGP processes, prefix lists
//! and route maps.

use std::collections::{BTreeMap, BTreeSet};
use std::net::IpAddr;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::values::{LineAction, Prefix, StandardCommunity, SubRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

/// `net routing bgp`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BgpProcess {
    pub name: String,
    pub ipv4_address_family: BgpAddressFamily,
    pub ipv6_address_family: BgpAddressFamily,
    pub local_as: Option<u32>,
    pub neighbors: IndexMap<String, BgpNeighbor>,
    /// IPv6 router ids are not supported and leave this unset
    pub router_id: Option<IpAddr>,
}

impl BgpProcess {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn address_family(&self, family: AddressFamily) -> &BgpAddressFamily {
        match family {
            AddressFamily::Ipv4 => &self.ipv4_address_family,
            AddressFamily::Ipv6 => &self.ipv6_address_family,
        }
    }

    pub fn address_family_mut(&mut self, family: AddressFamily) -> &mut BgpAddressFamily {
        match family {
            AddressFamily::Ipv4 => &mut self.ipv4_address_family,
            AddressFamily::Ipv6 => &mut self.ipv6_address_family,
        }
    }
}

/// Per-family settings of a BGP process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BgpAddressFamily {
    /// Route map applied when redistributing kernel routes
    pub redistribute_kernel_route_map: Option<String>,
}

/// `neighbor { ADDRESS { ... } }`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BgpNeighbor {
    pub name: String,
    pub address: Option<IpAddr>,
    pub description: Option<String>,
    pub ebgp_multihop: Option<u16>,
    pub ipv4_address_family: BgpNeighborAddressFamily,
    pub ipv6_address_family: BgpNeighborAddressFamily,
    pub remote_as: Option<u32>,
    pub update_source: Option<String>,
}

impl BgpNeighbor {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            address: name.parse().ok(),
            name,
            ..Self::default()
        }
    }

    pub fn address_family_mut(&mut self, family: AddressFamily) -> &mut BgpNeighborAddressFamily {
        match family {
            AddressFamily::Ipv4 => &mut self.ipv4_address_family,
            AddressFamily::Ipv6 => &mut self.ipv6_address_family,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BgpNeighborAddressFamily {
    pub activate: Option<bool>,
    pub route_map_out: Option<String>,
}

/// `net routing prefix-list`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrefixList {
    pub name: String,
    pub entries: BTreeMap<u32, PrefixListEntry>,
    pub route_domain: Option<String>,
}

impl PrefixList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrefixListEntry {
    pub num: u32,
    pub action: Option<LineAction>,
    pub prefix: Option<Prefix>,
    pub length_range: Option<SubRange>,
}

impl PrefixListEntry {
    pub fn new(num: u32) -> Self {
        Self {
            num,
            ..Self::default()
        }
    }

    /// Whether `prefix` matches this entry.
    ///
    /// Without a length range only the exact prefix length matches.
    pub fn matches(&self, prefix: &Prefix) -> bool {
        let Some(own) = self.prefix else {
            return false;
        };
        let len = u32::from(prefix.prefix_len());
        let in_range = match self.length_range {
            Some(range) => range.contains(len),
            None => len == u32::from(own.prefix_len()),
        };
        in_range && prefix.prefix_len() >= own.prefix_len() && own.contains(prefix.network())
    }
}

/// `net routing route-map`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteMap {
    pub name: String,
    pub entries: BTreeMap<u32, RouteMapEntry>,
    pub route_domain: Option<String>,
}

impl RouteMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteMapEntry {
    pub num: u32,
    pub action: Option<LineAction>,
    /// `match { ipv4 { address { prefix-list NAME } } }`
    pub match_ipv4_prefix_list: Option<String>,
    /// `set { community { value [...] } }`
    pub set_communities: Option<BTreeSet<StandardCommunity>>,
}

impl RouteMapEntry {
    pub fn new(num: u32) -> Self {
        Self {
            num,
            ..Self::default()
        }
    }
}
