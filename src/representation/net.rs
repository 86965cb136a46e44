//! Network entities: interfaces, static routes, self addresses, trunks and
//! VLANs.

use std::net::IpAddr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::values::{BundleSpeed, InterfaceAddress, Prefix};

/// `net interface`
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interface {
    pub name: String,
    pub bundle: Option<String>,
    pub bundle_speed: Option<BundleSpeed>,
    pub disabled: Option<bool>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Speed in bits per second, when a bundle speed is configured
    pub fn speed(&self) -> Option<f64> {
        self.bundle_speed.map(|speed| speed.bits_per_second())
    }
}

/// `net route`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    pub name: String,
    pub gateway: Option<IpAddr>,
    pub network: Option<Prefix>,
}

impl Route {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// `net self`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelfAddress {
    pub name: String,
    pub address: Option<InterfaceAddress>,
    pub allow_service: Option<Vec<String>>,
    pub traffic_group: Option<String>,
    pub vlan: Option<String>,
}

impl SelfAddress {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// `net trunk`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trunk {
    pub name: String,
    pub interfaces: Option<Vec<String>>,
    pub lacp: Option<bool>,
}

impl Trunk {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// `net vlan`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vlan {
    pub name: String,
    /// Member interface names, in order of first appearance
    pub interfaces: Option<Vec<String>>,
    pub tag: Option<u16>,
}

impl Vlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
