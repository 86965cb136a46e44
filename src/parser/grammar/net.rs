//! `net` objects: interfaces, routes, routing (BGP, prefix lists, route maps),
//! self addresses, trunks and VLANs

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    pub(super) fn net_object(&mut self) {
        match self.current_kind() {
            SyntaxKind::INTERFACE_KW => self.object(SyntaxKind::NET_INTERFACE, Self::interface_item),
            SyntaxKind::ROUTE_KW => self.object(SyntaxKind::NET_ROUTE, Self::route_item),
            SyntaxKind::ROUTING_KW => self.net_routing(),
            SyntaxKind::SELF_KW => self.object(SyntaxKind::NET_SELF, Self::self_item),
            SyntaxKind::TRUNK_KW => self.object(SyntaxKind::NET_TRUNK, Self::trunk_item),
            SyntaxKind::VLAN_KW => self.object(SyntaxKind::NET_VLAN, Self::vlan_item),
            _ => self.unrecognized(),
        }
    }

    fn interface_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::BUNDLE_KW => self.property(SyntaxKind::NI_BUNDLE, Self::word_value),
            SyntaxKind::BUNDLE_SPEED_KW => self.property(SyntaxKind::NI_BUNDLE_SPEED, |p| {
                p.token_choice(&[SyntaxKind::FORTY_G_KW, SyntaxKind::ONE_HUNDRED_G_KW], "'40G' or '100G'")
            }),
            SyntaxKind::DISABLED_KW => self.flag(SyntaxKind::NI_DISABLED),
            SyntaxKind::ENABLED_KW => self.flag(SyntaxKind::NI_ENABLED),
            _ => self.unrecognized(),
        }
    }

    fn route_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::GW_KW => self.property(SyntaxKind::NROUTE_GW, Self::address_value),
            SyntaxKind::NETWORK_KW => self.property(SyntaxKind::NROUTE_NETWORK, Self::prefix_value),
            _ => self.unrecognized(),
        }
    }

    fn net_routing(&mut self) {
        self.start_node(SyntaxKind::NET_ROUTING);
        self.bump();
        match self.current_kind() {
            SyntaxKind::BGP_KW => self.object(SyntaxKind::NR_BGP, Self::bgp_item),
            SyntaxKind::PREFIX_LIST_KW => self.object(SyntaxKind::NR_PREFIX_LIST, Self::prefix_list_item),
            SyntaxKind::ROUTE_MAP_KW => self.object(SyntaxKind::NR_ROUTE_MAP, Self::route_map_item),
            _ if self.at_item_end() => self.expected("routing object type"),
            _ => self.unrecognized(),
        }
        self.finish_node();
    }

    // =========================================================================
    // bgp
    // =========================================================================

    fn bgp_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ADDRESS_FAMILY_KW => {
                self.section(SyntaxKind::NRB_ADDRESS_FAMILY, Self::bgp_address_family)
            }
            SyntaxKind::LOCAL_AS_KW => self.property(SyntaxKind::NRB_LOCAL_AS, Self::uint32_value),
            SyntaxKind::NEIGHBOR_KW => self.section(SyntaxKind::NRB_NEIGHBOR, |p| {
                p.entry(SyntaxKind::NRBN_NAME, Self::address_value, Self::bgp_neighbor_item)
            }),
            SyntaxKind::ROUTER_ID_KW => self.property(SyntaxKind::NRB_ROUTER_ID, Self::address_value),
            _ => self.unrecognized(),
        }
    }

    fn bgp_address_family(&mut self) {
        match self.current_kind() {
            SyntaxKind::IPV4_KW => self.section(SyntaxKind::NRBAF_IPV4, Self::bgp_address_family_item),
            SyntaxKind::IPV6_KW => self.section(SyntaxKind::NRBAF_IPV6, Self::bgp_address_family_item),
            _ => self.unrecognized(),
        }
    }

    fn bgp_address_family_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::REDISTRIBUTE_KW => self.section(SyntaxKind::NRBAF_REDISTRIBUTE, |p| {
                match p.current_kind() {
                    SyntaxKind::KERNEL_KW => p.section(SyntaxKind::NRBAFR_KERNEL, |p| {
                        match p.current_kind() {
                            SyntaxKind::ROUTE_MAP_KW => {
                                p.property(SyntaxKind::NRBAFRK_ROUTE_MAP, Self::structure_name)
                            }
                            _ => p.unrecognized(),
                        }
                    }),
                    _ => p.unrecognized(),
                }
            }),
            _ => self.unrecognized(),
        }
    }

    fn bgp_neighbor_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ADDRESS_FAMILY_KW => {
                self.section(SyntaxKind::NRBN_ADDRESS_FAMILY, |p| match p.current_kind() {
                    SyntaxKind::IPV4_KW => {
                        p.section(SyntaxKind::NRBNAF_IPV4, Self::bgp_neighbor_address_family_item)
                    }
                    SyntaxKind::IPV6_KW => {
                        p.section(SyntaxKind::NRBNAF_IPV6, Self::bgp_neighbor_address_family_item)
                    }
                    _ => p.unrecognized(),
                })
            }
            SyntaxKind::DESCRIPTION_KW => self.property(SyntaxKind::NRBN_DESCRIPTION, Self::word_value),
            SyntaxKind::EBGP_MULTIHOP_KW => {
                self.property(SyntaxKind::NRBN_EBGP_MULTIHOP, Self::uint16_value)
            }
            SyntaxKind::REMOTE_AS_KW => self.property(SyntaxKind::NRBN_REMOTE_AS, Self::uint32_value),
            SyntaxKind::UPDATE_SOURCE_KW => {
                self.property(SyntaxKind::NRBN_UPDATE_SOURCE, Self::structure_name)
            }
            _ => self.unrecognized(),
        }
    }

    fn bgp_neighbor_address_family_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ACTIVATE_KW => {
                self.property(SyntaxKind::NRBNAF_ACTIVATE, Self::enabled_or_disabled)
            }
            SyntaxKind::ROUTE_MAP_KW => self.section(SyntaxKind::NRBNAF_ROUTE_MAP, |p| {
                match p.current_kind() {
                    SyntaxKind::OUT_KW => p.property(SyntaxKind::NRBNAFR_OUT, Self::structure_name),
                    _ => p.unrecognized(),
                }
            }),
            _ => self.unrecognized(),
        }
    }

    // =========================================================================
    // prefix-list / route-map
    // =========================================================================

    fn permit_or_deny(&mut self) -> bool {
        self.token_choice(&[SyntaxKind::PERMIT_KW, SyntaxKind::DENY_KW], "'permit' or 'deny'")
    }

    fn prefix_list_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ENTRIES_KW => self.section(SyntaxKind::NRP_ENTRIES, |p| {
                p.entry(SyntaxKind::NRPE_ENTRY, Self::uint32_value, Self::prefix_list_entry_item)
            }),
            SyntaxKind::ROUTE_DOMAIN_KW => self.property(SyntaxKind::NRP_ROUTE_DOMAIN, Self::structure_name),
            _ => self.unrecognized(),
        }
    }

    fn prefix_list_entry_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ACTION_KW => self.property(SyntaxKind::NRPEE_ACTION, Self::permit_or_deny),
            SyntaxKind::PREFIX_KW => self.property(SyntaxKind::NRPEE_PREFIX, Self::prefix_value),
            // `low:high` lexes as a standard community
            SyntaxKind::PREFIX_LEN_RANGE_KW => self.property(SyntaxKind::NRPEE_PREFIX_LEN_RANGE, |p| {
                p.token_choice(&[SyntaxKind::STANDARD_COMMUNITY], "length range 'low:high'")
            }),
            _ => self.unrecognized(),
        }
    }

    fn route_map_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ENTRIES_KW => self.section(SyntaxKind::NRR_ENTRIES, |p| {
                p.entry(SyntaxKind::NRRE_ENTRY, Self::uint32_value, Self::route_map_entry_item)
            }),
            SyntaxKind::ROUTE_DOMAIN_KW => self.property(SyntaxKind::NRR_ROUTE_DOMAIN, Self::structure_name),
            _ => self.unrecognized(),
        }
    }

    fn route_map_entry_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ACTION_KW => self.property(SyntaxKind::NRREE_ACTION, Self::permit_or_deny),
            SyntaxKind::MATCH_KW => self.section(SyntaxKind::NRREE_MATCH, Self::route_map_match_item),
            SyntaxKind::SET_KW => self.section(SyntaxKind::NRREE_SET, Self::route_map_set_item),
            _ => self.unrecognized(),
        }
    }

    /// match { ipv4 { address { prefix-list NAME } } }
    fn route_map_match_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::IPV4_KW => self.section(SyntaxKind::NRREEM_IPV4, |p| match p.current_kind() {
                SyntaxKind::ADDRESS_KW => p.section(SyntaxKind::NRREEM4_ADDRESS, |p| {
                    match p.current_kind() {
                        SyntaxKind::PREFIX_LIST_KW => {
                            p.property(SyntaxKind::NRREEM4A_PREFIX_LIST, Self::structure_name)
                        }
                        _ => p.unrecognized(),
                    }
                }),
                _ => p.unrecognized(),
            }),
            _ => self.unrecognized(),
        }
    }

    /// set { community { value LIST } }
    fn route_map_set_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::COMMUNITY_KW => self.section(SyntaxKind::NRREES_COMMUNITY, |p| {
                match p.current_kind() {
                    SyntaxKind::VALUE_KW => {
                        p.property(SyntaxKind::NRREESC_VALUE, |p| p.list(Self::community_value))
                    }
                    _ => p.unrecognized(),
                }
            }),
            _ => self.unrecognized(),
        }
    }

    // =========================================================================
    // self / trunk / vlan
    // =========================================================================

    fn self_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ADDRESS_KW => self.property(SyntaxKind::NS_ADDRESS, Self::prefix_value),
            SyntaxKind::ALLOW_SERVICE_KW => {
                self.property(SyntaxKind::NS_ALLOW_SERVICE, |p| p.list(Self::word_value))
            }
            SyntaxKind::TRAFFIC_GROUP_KW => {
                self.property(SyntaxKind::NS_TRAFFIC_GROUP, Self::structure_name)
            }
            SyntaxKind::VLAN_KW => self.property(SyntaxKind::NS_VLAN, Self::structure_name),
            _ => self.unrecognized(),
        }
    }

    fn trunk_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::INTERFACES_KW => {
                self.property(SyntaxKind::NT_INTERFACES, |p| p.list(Self::word_value))
            }
            SyntaxKind::LACP_KW => self.property(SyntaxKind::NT_LACP, Self::enabled_or_disabled),
            _ => self.unrecognized(),
        }
    }

    fn vlan_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::INTERFACES_KW => self.section(SyntaxKind::NV_INTERFACES, |p| {
                p.entry(SyntaxKind::NVI_INTERFACE, Self::word_value, Self::unrecognized)
            }),
            SyntaxKind::TAG_KW => self.property(SyntaxKind::NV_TAG, Self::vlan_id_value),
            _ => self.unrecognized(),
        }
    }
}
