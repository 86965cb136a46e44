//! Vendor configuration model produced by extraction.
//!
//! Entities are plain data with public fields. Every optional attribute the
//! document does not set stays `None`; nothing is defaulted at extraction
//! time except where a property implies another (a virtual `pool` enables
//! address and port translation).

mod builtins;
mod configuration;
mod ltm;
mod net;
mod routing;
mod structures;
mod values;

pub use builtins::{is_builtin_monitor, is_builtin_persistence, is_builtin_profile};
pub use configuration::{BigipConfiguration, ImishChunk};
pub use ltm::{
    Monitor, MonitorKind, Node, Persistence, PersistenceKind, Pool, PoolMember, Profile,
    ProfileKind, Rule, Snat, SnatPool, SnatTranslation, Virtual, VirtualAddress,
};
pub use net::{Interface, Route, SelfAddress, Trunk, Vlan};
pub use routing::{
    AddressFamily, BgpAddressFamily, BgpNeighbor, BgpNeighborAddressFamily, BgpProcess,
    PrefixList, PrefixListEntry, RouteMap, RouteMapEntry,
};
pub use structures::{
    StructureDefinition, StructureManager, StructureReference, StructureType, StructureUsage,
    UndefinedReference,
};
pub use values::{
    BundleSpeed, InterfaceAddress, IpProtocol, LineAction, Prefix, RouteAdvertisementMode,
    StandardCommunity, SubRange, ValueError, parse_address,
};
