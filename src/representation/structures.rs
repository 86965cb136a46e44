//! Named-structure bookkeeping: which structures a document defines, where
//! they are referenced from, and which references point nowhere.

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kinds of named structure that can be defined or referenced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StructureType {
    BgpNeighbor,
    BgpProcess,
    Interface,
    Monitor,
    MonitorHttp,
    MonitorHttps,
    Node,
    Persistence,
    PersistenceSourceAddr,
    PersistenceSsl,
    Pool,
    PrefixList,
    Profile,
    ProfileClientSsl,
    ProfileHttp,
    ProfileOcspStaplingParams,
    ProfileOneConnect,
    ProfileServerSsl,
    ProfileTcp,
    Route,
    RouteMap,
    Rule,
    SelfAddress,
    Snat,
    SnatPool,
    SnatTranslation,
    Trunk,
    Virtual,
    VirtualAddress,
    Vlan,
    /// Vlan member interfaces may name an interface or a trunk
    VlanMemberInterface,
}

impl StructureType {
    pub fn description(&self) -> &'static str {
        match self {
            StructureType::BgpNeighbor => "bgp neighbor",
            StructureType::BgpProcess => "bgp process",
            StructureType::Interface => "interface",
            StructureType::Monitor => "monitor",
            StructureType::MonitorHttp => "monitor http",
            StructureType::MonitorHttps => "monitor https",
            StructureType::Node => "node",
            StructureType::Persistence => "persistence",
            StructureType::PersistenceSourceAddr => "persistence source-addr",
            StructureType::PersistenceSsl => "persistence ssl",
            StructureType::Pool => "pool",
            StructureType::PrefixList => "prefix-list",
            StructureType::Profile => "profile",
            StructureType::ProfileClientSsl => "profile client-ssl",
            StructureType::ProfileHttp => "profile http",
            StructureType::ProfileOcspStaplingParams => "profile ocsp-stapling-params",
            StructureType::ProfileOneConnect => "profile one-connect",
            StructureType::ProfileServerSsl => "profile server-ssl",
            StructureType::ProfileTcp => "profile tcp",
            StructureType::Route => "route",
            StructureType::RouteMap => "route-map",
            StructureType::Rule => "rule",
            StructureType::SelfAddress => "self",
            StructureType::Snat => "snat",
            StructureType::SnatPool => "snatpool",
            StructureType::SnatTranslation => "snat-translation",
            StructureType::Trunk => "trunk",
            StructureType::Virtual => "virtual",
            StructureType::VirtualAddress => "virtual-address",
            StructureType::Vlan => "vlan",
            StructureType::VlanMemberInterface => "vlan member interface",
        }
    }

    /// Concrete types a reference of this type may resolve to
    pub fn concrete_types(&self) -> &'static [StructureType] {
        use StructureType::*;
        match self {
            Monitor => &[MonitorHttp, MonitorHttps],
            Persistence => &[PersistenceSourceAddr, PersistenceSsl],
            Profile => &[
                ProfileClientSsl,
                ProfileHttp,
                ProfileOcspStaplingParams,
                ProfileOneConnect,
                ProfileServerSsl,
                ProfileTcp,
            ],
            VlanMemberInterface => &[Interface, Trunk],
            BgpNeighbor => &[BgpNeighbor],
            BgpProcess => &[BgpProcess],
            Interface => &[Interface],
            MonitorHttp => &[MonitorHttp],
            MonitorHttps => &[MonitorHttps],
            Node => &[Node],
            PersistenceSourceAddr => &[PersistenceSourceAddr],
            PersistenceSsl => &[PersistenceSsl],
            Pool => &[Pool],
            PrefixList => &[PrefixList],
            ProfileClientSsl => &[ProfileClientSsl],
            ProfileHttp => &[ProfileHttp],
            ProfileOcspStaplingParams => &[ProfileOcspStaplingParams],
            ProfileOneConnect => &[ProfileOneConnect],
            ProfileServerSsl => &[ProfileServerSsl],
            ProfileTcp => &[ProfileTcp],
            Route => &[Route],
            RouteMap => &[RouteMap],
            Rule => &[Rule],
            SelfAddress => &[SelfAddress],
            Snat => &[Snat],
            SnatPool => &[SnatPool],
            SnatTranslation => &[SnatTranslation],
            Virtual => &[Virtual],
            VirtualAddress => &[VirtualAddress],
            Vlan => &[Vlan],
            Trunk => &[Trunk],
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Where a reference occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StructureUsage {
    BgpAddressFamilyRedistributeKernelRouteMap,
    BgpNeighborRouteMapOut,
    BgpNeighborSelfReference,
    BgpNeighborUpdateSource,
    BgpProcessSelfReference,
    InterfaceSelfReference,
    MonitorHttpDefaultsFrom,
    MonitorHttpsDefaultsFrom,
    MonitorHttpsSslProfile,
    PersistenceSourceAddrDefaultsFrom,
    PersistenceSslDefaultsFrom,
    PoolMember,
    PoolMonitor,
    ProfileClientSslDefaultsFrom,
    ProfileHttpDefaultsFrom,
    ProfileOcspStaplingParamsDefaultsFrom,
    ProfileOneConnectDefaultsFrom,
    ProfileServerSslDefaultsFrom,
    ProfileTcpDefaultsFrom,
    RouteMapMatchIpv4AddressPrefixList,
    RouteSelfReference,
    SelfSelfReference,
    SelfVlan,
    SnatSelfReference,
    SnatSnatpool,
    SnatVlansVlan,
    SnatpoolMembersMember,
    TrunkInterface,
    VirtualDestination,
    VirtualPersistPersistence,
    VirtualPool,
    VirtualProfile,
    VirtualRulesRule,
    VirtualSelfReference,
    VirtualSourceAddressTranslationPool,
    VirtualVlansVlan,
    VlanInterface,
}

impl StructureUsage {
    pub fn description(&self) -> &'static str {
        match self {
            StructureUsage::BgpAddressFamilyRedistributeKernelRouteMap => {
                "bgp address-family redistribute kernel route-map"
            }
            StructureUsage::BgpNeighborRouteMapOut => "bgp neighbor route-map out",
            StructureUsage::BgpNeighborSelfReference => "bgp neighbor",
            StructureUsage::BgpNeighborUpdateSource => "bgp neighbor update-source",
            StructureUsage::BgpProcessSelfReference => "bgp process",
            StructureUsage::InterfaceSelfReference => "interface",
            StructureUsage::MonitorHttpDefaultsFrom => "monitor http defaults-from",
            StructureUsage::MonitorHttpsDefaultsFrom => "monitor https defaults-from",
            StructureUsage::MonitorHttpsSslProfile => "monitor https ssl-profile",
            StructureUsage::PersistenceSourceAddrDefaultsFrom => {
                "persistence source-addr defaults-from"
            }
            StructureUsage::PersistenceSslDefaultsFrom => "persistence ssl defaults-from",
            StructureUsage::PoolMember => "pool member",
            StructureUsage::PoolMonitor => "pool monitor",
            StructureUsage::ProfileClientSslDefaultsFrom => "profile client-ssl defaults-from",
            StructureUsage::ProfileHttpDefaultsFrom => "profile http defaults-from",
            StructureUsage::ProfileOcspStaplingParamsDefaultsFrom => {
                "profile ocsp-stapling-params defaults-from"
            }
            StructureUsage::ProfileOneConnectDefaultsFrom => "profile one-connect defaults-from",
            StructureUsage::ProfileServerSslDefaultsFrom => "profile server-ssl defaults-from",
            StructureUsage::ProfileTcpDefaultsFrom => "profile tcp defaults-from",
            StructureUsage::RouteMapMatchIpv4AddressPrefixList => {
                "route-map match ipv4 address prefix-list"
            }
            StructureUsage::RouteSelfReference => "route",
            StructureUsage::SelfSelfReference => "self",
            StructureUsage::SelfVlan => "self vlan",
            StructureUsage::SnatSelfReference => "snat",
            StructureUsage::SnatSnatpool => "snat snatpool",
            StructureUsage::SnatVlansVlan => "snat vlans",
            StructureUsage::SnatpoolMembersMember => "snatpool members",
            StructureUsage::TrunkInterface => "trunk interfaces",
            StructureUsage::VirtualDestination => "virtual destination",
            StructureUsage::VirtualPersistPersistence => "virtual persist",
            StructureUsage::VirtualPool => "virtual pool",
            StructureUsage::VirtualProfile => "virtual profiles",
            StructureUsage::VirtualRulesRule => "virtual rules",
            StructureUsage::VirtualSelfReference => "virtual",
            StructureUsage::VirtualSourceAddressTranslationPool => {
                "virtual source-address-translation pool"
            }
            StructureUsage::VirtualVlansVlan => "virtual vlans",
            StructureUsage::VlanInterface => "vlan interfaces",
        }
    }
}

impl fmt::Display for StructureUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A named structure defined in the document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructureDefinition {
    pub structure_type: StructureType,
    pub name: SmolStr,
    /// 1-based lines covered by every definition of the name
    pub lines: Vec<usize>,
}

/// One reference to a named structure
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructureReference {
    pub structure_type: StructureType,
    pub name: SmolStr,
    pub usage: StructureUsage,
    pub line: usize,
}

/// A reference with no matching definition of any concrete type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UndefinedReference {
    pub structure_type: StructureType,
    pub name: SmolStr,
    pub usage: StructureUsage,
    pub line: usize,
}

impl fmt::Display for UndefinedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "undefined {} '{}' referenced by {}",
            self.structure_type, self.name, self.usage
        )
    }
}

/// Definitions and references of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureManager {
    definitions: IndexMap<(StructureType, SmolStr), StructureDefinition>,
    references: Vec<StructureReference>,
}

impl StructureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a definition; repeated definitions merge their lines
    pub fn define(
        &mut self,
        structure_type: StructureType,
        name: &str,
        lines: impl IntoIterator<Item = usize>,
    ) {
        let definition = self
            .definitions
            .entry((structure_type, SmolStr::new(name)))
            .or_insert_with(|| StructureDefinition {
                structure_type,
                name: SmolStr::new(name),
                lines: Vec::new(),
            });
        for line in lines {
            if !definition.lines.contains(&line) {
                definition.lines.push(line);
            }
        }
    }

    pub fn reference(
        &mut self,
        structure_type: StructureType,
        name: &str,
        usage: StructureUsage,
        line: usize,
    ) {
        self.references.push(StructureReference {
            structure_type,
            name: SmolStr::new(name),
            usage,
            line,
        });
    }

    pub fn is_defined(&self, structure_type: StructureType, name: &str) -> bool {
        structure_type
            .concrete_types()
            .iter()
            .any(|concrete| self.definitions.contains_key(&(*concrete, SmolStr::new(name))))
    }

    pub fn definitions(&self) -> impl Iterator<Item = &StructureDefinition> {
        self.definitions.values()
    }

    pub fn definition(
        &self,
        structure_type: StructureType,
        name: &str,
    ) -> Option<&StructureDefinition> {
        self.definitions.get(&(structure_type, SmolStr::new(name)))
    }

    pub fn references(&self) -> &[StructureReference] {
        &self.references
    }

    /// References whose target is not defined, in reference order
    pub fn undefined_references(&self) -> Vec<UndefinedReference> {
        self.references
            .iter()
            .filter(|reference| !self.is_defined(reference.structure_type, &reference.name))
            .map(|reference| UndefinedReference {
                structure_type: reference.structure_type,
                name: reference.name.clone(),
                usage: reference.usage,
                line: reference.line,
            })
            .collect()
    }
}
