//! The extracted BIG-IP configuration: every named entity of one document,
//! keyed by its partition-qualified name in order of first appearance.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ltm::{
    Monitor, Node, Persistence, Pool, Profile, Rule, Snat, SnatPool, SnatTranslation, Virtual,
    VirtualAddress,
};
use super::net::{Interface, Route, SelfAddress, Trunk, Vlan};
use super::routing::{BgpProcess, PrefixList, RouteMap};

/// The opaque routing-daemon section that follows the structured part
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImishChunk {
    /// 1-based line of the leading `!`
    pub line: usize,
    /// Byte offset of the leading `!`
    pub offset: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BigipConfiguration {
    pub hostname: Option<String>,
    pub ntp_servers: Option<Vec<String>>,

    // ltm
    pub nodes: IndexMap<String, Node>,
    pub pools: IndexMap<String, Pool>,
    pub virtuals: IndexMap<String, Virtual>,
    pub virtual_addresses: IndexMap<String, VirtualAddress>,
    pub snats: IndexMap<String, Snat>,
    pub snatpools: IndexMap<String, SnatPool>,
    pub snat_translations: IndexMap<String, SnatTranslation>,
    pub rules: IndexMap<String, Rule>,
    pub monitors: IndexMap<String, Monitor>,
    pub persistences: IndexMap<String, Persistence>,
    pub profiles: IndexMap<String, Profile>,

    // net
    pub interfaces: IndexMap<String, Interface>,
    pub routes: IndexMap<String, Route>,
    pub bgp_processes: IndexMap<String, BgpProcess>,
    pub prefix_lists: IndexMap<String, PrefixList>,
    pub route_maps: IndexMap<String, RouteMap>,
    pub selves: IndexMap<String, SelfAddress>,
    pub trunks: IndexMap<String, Trunk>,
    pub vlans: IndexMap<String, Vlan>,

    pub imish: Option<ImishChunk>,
    /// Some statement was unrecognized or malformed
    pub unrecognized: bool,
}

impl BigipConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of named entities across all maps
    pub fn entity_count(&self) -> usize {
        self.nodes.len()
            + self.pools.len()
            + self.virtuals.len()
            + self.virtual_addresses.len()
            + self.snats.len()
            + self.snatpools.len()
            + self.snat_translations.len()
            + self.rules.len()
            + self.monitors.len()
            + self.persistences.len()
            + self.profiles.len()
            + self.interfaces.len()
            + self.routes.len()
            + self.bgp_processes.len()
            + self.prefix_lists.len()
            + self.route_maps.len()
            + self.selves.len()
            + self.trunks.len()
            + self.vlans.len()
    }

    /// No entity, hostname or NTP setting was extracted
    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0 && self.hostname.is_none() && self.ntp_servers.is_none()
    }

    /// Pretty-printed JSON rendering of the model
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Virtuals that are not `disabled`
    pub fn enabled_virtuals(&self) -> impl Iterator<Item = &Virtual> {
        self.virtuals.values().filter(|v| v.is_enabled())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::representation::Node;

    #[test]
    fn test_json_keeps_entity_order() {
        let mut config = BigipConfiguration::new();
        for name in ["/Common/b", "/Common/a"] {
            config.nodes.insert(name.to_string(), Node::new(name));
        }
        let json = config.to_json().unwrap();
        let b = json.find("/Common/b").unwrap();
        let a = json.find("/Common/a").unwrap();
        assert!(b < a);
        let back: BigipConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
