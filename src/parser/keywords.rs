//! Keyword table for the BIG-IP structured dialect
//!
//! A static lexeme to kind table. Adding a keyword is a one-line edit here
//! plus the `SyntaxKind` variant.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::syntax_kind::SyntaxKind;

pub static KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("action", SyntaxKind::ACTION_KW),
    ("activate", SyntaxKind::ACTIVATE_KW),
    ("address", SyntaxKind::ADDRESS_KW),
    ("address-family", SyntaxKind::ADDRESS_FAMILY_KW),
    ("all", SyntaxKind::ALL_KW),
    ("allow-service", SyntaxKind::ALLOW_SERVICE_KW),
    ("always", SyntaxKind::ALWAYS_KW),
    ("any", SyntaxKind::ANY_KW),
    ("arp", SyntaxKind::ARP_KW),
    ("bgp", SyntaxKind::BGP_KW),
    ("bundle", SyntaxKind::BUNDLE_KW),
    ("bundle-speed", SyntaxKind::BUNDLE_SPEED_KW),
    ("client-ssl", SyntaxKind::CLIENT_SSL_KW),
    ("community", SyntaxKind::COMMUNITY_KW),
    ("context", SyntaxKind::CONTEXT_KW),
    ("default", SyntaxKind::DEFAULT_KW),
    ("defaults-from", SyntaxKind::DEFAULTS_FROM_KW),
    ("deny", SyntaxKind::DENY_KW),
    ("description", SyntaxKind::DESCRIPTION_KW),
    ("destination", SyntaxKind::DESTINATION_KW),
    ("disabled", SyntaxKind::DISABLED_KW),
    ("ebgp-multihop", SyntaxKind::EBGP_MULTIHOP_KW),
    ("enabled", SyntaxKind::ENABLED_KW),
    ("entries", SyntaxKind::ENTRIES_KW),
    ("40G", SyntaxKind::FORTY_G_KW),
    ("global-settings", SyntaxKind::GLOBAL_SETTINGS_KW),
    ("gw", SyntaxKind::GW_KW),
    ("hostname", SyntaxKind::HOSTNAME_KW),
    ("http", SyntaxKind::HTTP_KW),
    ("https", SyntaxKind::HTTPS_KW),
    ("icmp-echo", SyntaxKind::ICMP_ECHO_KW),
    ("if", SyntaxKind::IF_KW),
    ("interface", SyntaxKind::INTERFACE_KW),
    ("interfaces", SyntaxKind::INTERFACES_KW),
    ("ip-forward", SyntaxKind::IP_FORWARD_KW),
    ("ip-protocol", SyntaxKind::IP_PROTOCOL_KW),
    ("ipv4", SyntaxKind::IPV4_KW),
    ("ipv6", SyntaxKind::IPV6_KW),
    ("kernel", SyntaxKind::KERNEL_KW),
    ("lacp", SyntaxKind::LACP_KW),
    ("local-as", SyntaxKind::LOCAL_AS_KW),
    ("ltm", SyntaxKind::LTM_KW),
    ("mask", SyntaxKind::MASK_KW),
    ("match", SyntaxKind::MATCH_KW),
    ("members", SyntaxKind::MEMBERS_KW),
    ("monitor", SyntaxKind::MONITOR_KW),
    ("neighbor", SyntaxKind::NEIGHBOR_KW),
    ("net", SyntaxKind::NET_KW),
    ("network", SyntaxKind::NETWORK_KW),
    ("node", SyntaxKind::NODE_KW),
    ("ntp", SyntaxKind::NTP_KW),
    ("ocsp-stapling-params", SyntaxKind::OCSP_STAPLING_PARAMS_KW),
    ("one-connect", SyntaxKind::ONE_CONNECT_KW),
    ("100G", SyntaxKind::ONE_HUNDRED_G_KW),
    ("origins", SyntaxKind::ORIGINS_KW),
    ("out", SyntaxKind::OUT_KW),
    ("permit", SyntaxKind::PERMIT_KW),
    ("persist", SyntaxKind::PERSIST_KW),
    ("persistence", SyntaxKind::PERSISTENCE_KW),
    ("pool", SyntaxKind::POOL_KW),
    ("prefix", SyntaxKind::PREFIX_KW),
    ("prefix-len-range", SyntaxKind::PREFIX_LEN_RANGE_KW),
    ("prefix-list", SyntaxKind::PREFIX_LIST_KW),
    ("profile", SyntaxKind::PROFILE_KW),
    ("profiles", SyntaxKind::PROFILES_KW),
    ("redistribute", SyntaxKind::REDISTRIBUTE_KW),
    ("reject", SyntaxKind::REJECT_KW),
    ("remote-as", SyntaxKind::REMOTE_AS_KW),
    ("route", SyntaxKind::ROUTE_KW),
    ("route-advertisement", SyntaxKind::ROUTE_ADVERTISEMENT_KW),
    ("route-domain", SyntaxKind::ROUTE_DOMAIN_KW),
    ("route-map", SyntaxKind::ROUTE_MAP_KW),
    ("router-id", SyntaxKind::ROUTER_ID_KW),
    ("routing", SyntaxKind::ROUTING_KW),
    ("rule", SyntaxKind::RULE_KW),
    ("rules", SyntaxKind::RULES_KW),
    ("selective", SyntaxKind::SELECTIVE_KW),
    ("self", SyntaxKind::SELF_KW),
    ("server-ssl", SyntaxKind::SERVER_SSL_KW),
    ("servers", SyntaxKind::SERVERS_KW),
    ("set", SyntaxKind::SET_KW),
    ("snat", SyntaxKind::SNAT_KW),
    ("snat-translation", SyntaxKind::SNAT_TRANSLATION_KW),
    ("snatpool", SyntaxKind::SNATPOOL_KW),
    ("source", SyntaxKind::SOURCE_KW),
    ("source-addr", SyntaxKind::SOURCE_ADDR_KW),
    ("source-address-translation", SyntaxKind::SOURCE_ADDRESS_TRANSLATION_KW),
    ("ssl", SyntaxKind::SSL_KW),
    ("ssl-profile", SyntaxKind::SSL_PROFILE_KW),
    ("sys", SyntaxKind::SYS_KW),
    ("tag", SyntaxKind::TAG_KW),
    ("tcp", SyntaxKind::TCP_KW),
    ("traffic-group", SyntaxKind::TRAFFIC_GROUP_KW),
    ("translate-address", SyntaxKind::TRANSLATE_ADDRESS_KW),
    ("translate-port", SyntaxKind::TRANSLATE_PORT_KW),
    ("trunk", SyntaxKind::TRUNK_KW),
    ("type", SyntaxKind::TYPE_KW),
    ("udp", SyntaxKind::UDP_KW),
    ("update-source", SyntaxKind::UPDATE_SOURCE_KW),
    ("value", SyntaxKind::VALUE_KW),
    ("virtual", SyntaxKind::VIRTUAL_KW),
    ("virtual-address", SyntaxKind::VIRTUAL_ADDRESS_KW),
    ("vlan", SyntaxKind::VLAN_KW),
    ("vlans", SyntaxKind::VLANS_KW),
    ("vlans-disabled", SyntaxKind::VLANS_DISABLED_KW),
    ("vlans-enabled", SyntaxKind::VLANS_ENABLED_KW),
];

static KEYWORD_MAP: LazyLock<FxHashMap<&'static str, SyntaxKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Look up a complete word run in the keyword table
pub fn lookup_keyword(text: &str) -> Option<SyntaxKind> {
    KEYWORD_MAP.get(text).copied()
}

/// Source text of a keyword kind
pub fn keyword_text(kind: SyntaxKind) -> Option<&'static str> {
    if !kind.is_keyword() {
        return None;
    }
    KEYWORDS
        .iter()
        .find_map(|&(text, k)| (k == kind).then_some(text))
}
