//! Second listener over the same tree: records which named structures the
//! document defines and every place one is referenced.

use crate::base::LineIndex;
use crate::parser::{AddressValue, List, NameWithPort, NodeExt, StructureName, SyntaxNode, WordValue};
use crate::representation::{
    StructureManager, StructureType, StructureUsage, is_builtin_monitor, is_builtin_persistence,
    is_builtin_profile,
};
use crate::syntax::Listener;

pub struct StructureCollector<'a> {
    structures: StructureManager,
    line_index: &'a LineIndex,
    /// Type of the monitor/persistence/profile being defined
    current: Option<StructureType>,
}

impl<'a> StructureCollector<'a> {
    pub fn new(line_index: &'a LineIndex) -> Self {
        Self {
            structures: StructureManager::new(),
            line_index,
            current: None,
        }
    }

    pub fn structures(&self) -> &StructureManager {
        &self.structures
    }

    pub fn finish(self) -> StructureManager {
        self.structures
    }

    fn start_line(&self, node: &SyntaxNode) -> usize {
        let offset = node
            .first_significant_token()
            .map(|token| token.text_range().start())
            .unwrap_or_else(|| node.text_range().start());
        self.line_index.line(offset)
    }

    fn lines(&self, node: &SyntaxNode) -> std::ops::RangeInclusive<usize> {
        let end = self.line_index.line(node.text_range().end());
        self.start_line(node)..=end.max(self.start_line(node))
    }

    /// Defines the object named by the node's name
    fn define(&mut self, node: &SyntaxNode, structure_type: StructureType) -> Option<(String, usize)> {
        let name = node.child::<StructureName>()?.full_name();
        let lines = self.lines(node);
        let line = *lines.start();
        self.structures.define(structure_type, &name, lines);
        Some((name, line))
    }

    /// Defines the object and records its self reference
    fn define_referenced(
        &mut self,
        node: &SyntaxNode,
        structure_type: StructureType,
        usage: StructureUsage,
    ) {
        if let Some((name, line)) = self.define(node, structure_type) {
            self.structures.reference(structure_type, &name, usage, line);
        }
    }

    fn define_typed(&mut self, node: &SyntaxNode, structure_type: StructureType) {
        if self.define(node, structure_type).is_some() {
            self.current = Some(structure_type);
        }
    }

    fn refer(&mut self, node: &SyntaxNode, structure_type: StructureType, usage: StructureUsage) {
        if let Some(name) = node.child::<StructureName>().map(|name| name.full_name()) {
            let line = self.start_line(node);
            self.structures.reference(structure_type, &name, usage, line);
        }
    }

    fn refer_list(&mut self, node: &SyntaxNode, structure_type: StructureType, usage: StructureUsage) {
        let line = self.start_line(node);
        let names = node.child::<List>().map(|list| list.values()).unwrap_or_default();
        for name in names {
            self.structures.reference(structure_type, &name, usage, line);
        }
    }
}

impl Listener for StructureCollector<'_> {
    // ltm

    fn enter_l_node(&mut self, node: &SyntaxNode) {
        // pool members reference nodes
        self.define(node, StructureType::Node);
    }

    fn enter_l_pool(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::Pool);
    }

    fn enter_lpm_member(&mut self, node: &SyntaxNode) {
        let Some(name) = node.child::<NameWithPort>().and_then(|member| member.name()) else {
            return;
        };
        let line = self.start_line(node);
        self.structures
            .reference(StructureType::Node, &name, StructureUsage::PoolMember, line);
    }

    fn exit_lp_monitor(&mut self, node: &SyntaxNode) {
        let Some(name) = node.child::<StructureName>().map(|name| name.full_name()) else {
            return;
        };
        if !is_builtin_monitor(&name) {
            let line = self.start_line(node);
            self.structures
                .reference(StructureType::Monitor, &name, StructureUsage::PoolMonitor, line);
        }
    }

    fn enter_l_virtual(&mut self, node: &SyntaxNode) {
        self.define_referenced(node, StructureType::Virtual, StructureUsage::VirtualSelfReference);
    }

    fn exit_lv_destination(&mut self, node: &SyntaxNode) {
        let Some(name) = node.child::<NameWithPort>().and_then(|destination| destination.name())
        else {
            return;
        };
        let line = self.start_line(node);
        self.structures.reference(
            StructureType::VirtualAddress,
            &name,
            StructureUsage::VirtualDestination,
            line,
        );
    }

    fn enter_lvp_persistence(&mut self, node: &SyntaxNode) {
        let Some(name) = node.child::<StructureName>().map(|name| name.full_name()) else {
            return;
        };
        if !is_builtin_persistence(&name) {
            let line = self.start_line(node);
            self.structures.reference(
                StructureType::Persistence,
                &name,
                StructureUsage::VirtualPersistPersistence,
                line,
            );
        }
    }

    fn exit_lv_pool(&mut self, node: &SyntaxNode) {
        self.refer(node, StructureType::Pool, StructureUsage::VirtualPool);
    }

    fn enter_lvpr_profile(&mut self, node: &SyntaxNode) {
        let Some(name) = node.child::<StructureName>().map(|name| name.full_name()) else {
            return;
        };
        if !is_builtin_profile(&name) {
            let line = self.start_line(node);
            self.structures.reference(
                StructureType::Profile,
                &name,
                StructureUsage::VirtualProfile,
                line,
            );
        }
    }

    fn exit_lv_rules(&mut self, node: &SyntaxNode) {
        self.refer_list(node, StructureType::Rule, StructureUsage::VirtualRulesRule);
    }

    fn exit_lvsat_pool(&mut self, node: &SyntaxNode) {
        self.refer(
            node,
            StructureType::SnatPool,
            StructureUsage::VirtualSourceAddressTranslationPool,
        );
    }

    fn exit_lv_vlans(&mut self, node: &SyntaxNode) {
        self.refer_list(node, StructureType::Vlan, StructureUsage::VirtualVlansVlan);
    }

    fn enter_l_virtual_address(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::VirtualAddress);
    }

    fn enter_l_snat(&mut self, node: &SyntaxNode) {
        self.define_referenced(node, StructureType::Snat, StructureUsage::SnatSelfReference);
    }

    fn exit_ls_snatpool(&mut self, node: &SyntaxNode) {
        self.refer(node, StructureType::SnatPool, StructureUsage::SnatSnatpool);
    }

    fn exit_ls_vlans(&mut self, node: &SyntaxNode) {
        self.refer_list(node, StructureType::Vlan, StructureUsage::SnatVlansVlan);
    }

    fn enter_l_snatpool(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::SnatPool);
    }

    fn exit_lsp_members(&mut self, node: &SyntaxNode) {
        self.refer_list(
            node,
            StructureType::SnatTranslation,
            StructureUsage::SnatpoolMembersMember,
        );
    }

    fn enter_l_snat_translation(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::SnatTranslation);
    }

    fn enter_l_rule(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::Rule);
    }

    // monitors, persistence and profiles

    fn enter_lm_http(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::MonitorHttp);
    }

    fn enter_lm_https(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::MonitorHttps);
    }

    fn exit_lmhs_ssl_profile(&mut self, node: &SyntaxNode) {
        let Some(name) = node.child::<StructureName>().map(|name| name.full_name()) else {
            return;
        };
        if !is_builtin_profile(&name) {
            let line = self.start_line(node);
            self.structures.reference(
                StructureType::ProfileServerSsl,
                &name,
                StructureUsage::MonitorHttpsSslProfile,
                line,
            );
        }
    }

    fn enter_lper_source_addr(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::PersistenceSourceAddr);
    }

    fn enter_lper_ssl(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::PersistenceSsl);
    }

    fn enter_lprof_client_ssl(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::ProfileClientSsl);
    }

    fn enter_lprof_http(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::ProfileHttp);
    }

    fn enter_lprof_ocsp_stapling_params(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::ProfileOcspStaplingParams);
    }

    fn enter_lprof_one_connect(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::ProfileOneConnect);
    }

    fn enter_lprof_server_ssl(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::ProfileServerSsl);
    }

    fn enter_lprof_tcp(&mut self, node: &SyntaxNode) {
        self.define_typed(node, StructureType::ProfileTcp);
    }

    fn exit_defaults_from(&mut self, node: &SyntaxNode) {
        let Some(structure_type) = self.current else {
            return;
        };
        let Some(name) = node.child::<StructureName>().map(|name| name.full_name()) else {
            return;
        };
        let (builtin, usage) = match structure_type {
            StructureType::MonitorHttp => {
                (is_builtin_monitor(&name), StructureUsage::MonitorHttpDefaultsFrom)
            }
            StructureType::MonitorHttps => {
                (is_builtin_monitor(&name), StructureUsage::MonitorHttpsDefaultsFrom)
            }
            StructureType::PersistenceSourceAddr => (
                is_builtin_persistence(&name),
                StructureUsage::PersistenceSourceAddrDefaultsFrom,
            ),
            StructureType::PersistenceSsl => (
                is_builtin_persistence(&name),
                StructureUsage::PersistenceSslDefaultsFrom,
            ),
            StructureType::ProfileClientSsl => {
                (is_builtin_profile(&name), StructureUsage::ProfileClientSslDefaultsFrom)
            }
            StructureType::ProfileHttp => {
                (is_builtin_profile(&name), StructureUsage::ProfileHttpDefaultsFrom)
            }
            StructureType::ProfileOcspStaplingParams => (
                is_builtin_profile(&name),
                StructureUsage::ProfileOcspStaplingParamsDefaultsFrom,
            ),
            StructureType::ProfileOneConnect => {
                (is_builtin_profile(&name), StructureUsage::ProfileOneConnectDefaultsFrom)
            }
            StructureType::ProfileServerSsl => {
                (is_builtin_profile(&name), StructureUsage::ProfileServerSslDefaultsFrom)
            }
            StructureType::ProfileTcp => {
                (is_builtin_profile(&name), StructureUsage::ProfileTcpDefaultsFrom)
            }
            _ => return,
        };
        if !builtin {
            let line = self.start_line(node);
            self.structures.reference(structure_type, &name, usage, line);
        }
    }

    fn exit_lm_http(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lm_https(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lper_source_addr(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lper_ssl(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lprof_client_ssl(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lprof_http(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lprof_ocsp_stapling_params(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lprof_one_connect(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lprof_server_ssl(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    fn exit_lprof_tcp(&mut self, _node: &SyntaxNode) {
        self.current = None;
    }

    // net

    fn enter_net_interface(&mut self, node: &SyntaxNode) {
        self.define_referenced(node, StructureType::Interface, StructureUsage::InterfaceSelfReference);
    }

    fn enter_net_route(&mut self, node: &SyntaxNode) {
        self.define_referenced(node, StructureType::Route, StructureUsage::RouteSelfReference);
    }

    fn enter_nr_bgp(&mut self, node: &SyntaxNode) {
        self.define_referenced(node, StructureType::BgpProcess, StructureUsage::BgpProcessSelfReference);
    }

    fn exit_nrbafrk_route_map(&mut self, node: &SyntaxNode) {
        self.refer(
            node,
            StructureType::RouteMap,
            StructureUsage::BgpAddressFamilyRedistributeKernelRouteMap,
        );
    }

    fn enter_nrbn_name(&mut self, node: &SyntaxNode) {
        let Some(name) = node
            .child::<AddressValue>()
            .and_then(|value| value.token())
            .map(|token| token.text().to_string())
        else {
            return;
        };
        let lines = self.lines(node);
        let line = *lines.start();
        self.structures.define(StructureType::BgpNeighbor, &name, lines);
        self.structures.reference(
            StructureType::BgpNeighbor,
            &name,
            StructureUsage::BgpNeighborSelfReference,
            line,
        );
    }

    fn exit_nrbnafr_out(&mut self, node: &SyntaxNode) {
        self.refer(node, StructureType::RouteMap, StructureUsage::BgpNeighborRouteMapOut);
    }

    fn exit_nrbn_update_source(&mut self, node: &SyntaxNode) {
        self.refer(node, StructureType::Vlan, StructureUsage::BgpNeighborUpdateSource);
    }

    fn enter_nr_prefix_list(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::PrefixList);
    }

    fn enter_nr_route_map(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::RouteMap);
    }

    fn exit_nrreem4a_prefix_list(&mut self, node: &SyntaxNode) {
        self.refer(
            node,
            StructureType::PrefixList,
            StructureUsage::RouteMapMatchIpv4AddressPrefixList,
        );
    }

    fn enter_net_self(&mut self, node: &SyntaxNode) {
        self.define_referenced(node, StructureType::SelfAddress, StructureUsage::SelfSelfReference);
    }

    fn exit_ns_vlan(&mut self, node: &SyntaxNode) {
        self.refer(node, StructureType::Vlan, StructureUsage::SelfVlan);
    }

    fn enter_net_trunk(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::Trunk);
    }

    fn exit_nt_interfaces(&mut self, node: &SyntaxNode) {
        self.refer_list(node, StructureType::Interface, StructureUsage::TrunkInterface);
    }

    fn enter_net_vlan(&mut self, node: &SyntaxNode) {
        self.define(node, StructureType::Vlan);
    }

    fn enter_nvi_interface(&mut self, node: &SyntaxNode) {
        let Some(name) = node.child::<WordValue>().map(|value| value.text()) else {
            return;
        };
        let line = self.start_line(node);
        self.structures.reference(
            StructureType::VlanMemberInterface,
            &name,
            StructureUsage::VlanInterface,
            line,
        );
    }
}
