//! Local traffic manager entities: nodes, pools, virtual servers, SNAT and
//! the named monitor/persistence/profile/rule objects they refer to.

use std::net::IpAddr;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::values::{IpProtocol, Prefix, RouteAdvertisementMode};

/// `ltm node`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub name: String,
    pub address: Option<IpAddr>,
    pub description: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// `ltm pool`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pool {
    pub name: String,
    pub description: Option<String>,
    /// Keyed by the member name as written (`/Common/10.0.0.1:80`)
    pub members: IndexMap<String, PoolMember>,
    pub monitors: Vec<String>,
}

impl Pool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One `NODE:PORT` entry of a pool's `members` block
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoolMember {
    pub name: String,
    /// Node part of the name, partition included
    pub node: String,
    pub port: u16,
    /// Set from the name when the node is an address, or by `address`
    pub address: Option<IpAddr>,
    pub description: Option<String>,
}

impl PoolMember {
    pub fn new(name: impl Into<String>, node: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            node: node.into(),
            port,
            address: None,
            description: None,
        }
    }
}

/// `ltm virtual`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Virtual {
    pub name: String,
    pub description: Option<String>,
    /// Virtual-address name of the destination
    pub destination: Option<String>,
    pub destination_port: Option<u16>,
    /// `disabled`/`enabled`; unset means enabled
    pub disabled: Option<bool>,
    pub ip_forward: bool,
    pub ip_protocol: Option<IpProtocol>,
    pub mask: Option<IpAddr>,
    /// `None` when the virtual has no `persist` section
    pub persist: Option<Vec<String>>,
    pub pool: Option<String>,
    pub profiles: Option<Vec<String>>,
    pub reject: bool,
    pub rules: Option<Vec<String>>,
    pub source: Option<Prefix>,
    pub source_address_translation_pool: Option<String>,
    pub source_address_translation_type: Option<String>,
    pub translate_address: Option<bool>,
    pub translate_port: Option<bool>,
    pub vlans: Option<Vec<String>>,
    pub vlans_enabled: Option<bool>,
}

impl Virtual {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.disabled != Some(true)
    }
}

/// `ltm virtual-address`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VirtualAddress {
    pub name: String,
    pub address: Option<IpAddr>,
    pub arp_disabled: Option<bool>,
    pub icmp_echo_disabled: Option<bool>,
    pub mask: Option<IpAddr>,
    pub route_advertisement_mode: Option<RouteAdvertisementMode>,
    pub traffic_group: Option<String>,
}

impl VirtualAddress {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// `ltm snat`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snat {
    pub name: String,
    pub origins: Vec<Prefix>,
    pub snatpool: Option<String>,
    pub vlans: Option<Vec<String>>,
    pub vlans_enabled: Option<bool>,
}

impl Snat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// `ltm snatpool`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnatPool {
    pub name: String,
    /// Snat-translation names; `Some(vec![])` for `members [ ]`
    pub members: Option<Vec<String>>,
}

impl SnatPool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: None,
        }
    }
}

/// `ltm snat-translation`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnatTranslation {
    pub name: String,
    pub address: Option<IpAddr>,
    pub traffic_group: Option<String>,
}

impl SnatTranslation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// `ltm rule`; the iRule body is kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    pub name: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MonitorKind {
    Http,
    Https,
}

/// `ltm monitor http|https`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monitor {
    pub name: String,
    pub kind: MonitorKind,
    pub defaults_from: Option<String>,
    pub ssl_profile: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PersistenceKind {
    SourceAddr,
    Ssl,
}

/// `ltm persistence source-addr|ssl`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Persistence {
    pub name: String,
    pub kind: PersistenceKind,
    pub defaults_from: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProfileKind {
    ClientSsl,
    Http,
    OcspStaplingParams,
    OneConnect,
    ServerSsl,
    Tcp,
}

/// `ltm profile <kind>`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    pub name: String,
    pub kind: ProfileKind,
    pub defaults_from: Option<String>,
}
