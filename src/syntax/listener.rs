//! Listener trait with one enter/exit pair per grammar production
//!
//! Every callback defaults to a no-op, so a listener overrides only the rules
//! it cares about. Several independent listeners can walk the same tree.

use crate::parser::{SyntaxKind, SyntaxNode, Unrecognized};

macro_rules! listener {
    ($($kind:ident => $enter:ident / $exit:ident,)*) => {
        /// Callbacks fired by [`ParseTreeWalker`](super::ParseTreeWalker)
        ///
        /// `enter_*` fires before a node's children are visited, `exit_*` after.
        /// `enter_every_rule`/`exit_every_rule` wrap every rule node, including
        /// unrecognized statements.
        pub trait Listener {
            fn enter_every_rule(&mut self, _node: &SyntaxNode) {}
            fn exit_every_rule(&mut self, _node: &SyntaxNode) {}

            /// A statement or property no production matched
            fn visit_unrecognized(&mut self, _node: &Unrecognized) {}

            /// Tokens the parser skipped while recovering from a syntax error
            fn visit_error_node(&mut self, _node: &SyntaxNode) {}

            $(
                fn $enter(&mut self, _node: &SyntaxNode) {}
                fn $exit(&mut self, _node: &SyntaxNode) {}
            )*
        }

        pub(super) fn dispatch_enter<L: Listener + ?Sized>(listener: &mut L, node: &SyntaxNode) {
            match node.kind() {
                $(SyntaxKind::$kind => listener.$enter(node),)*
                _ => {}
            }
        }

        pub(super) fn dispatch_exit<L: Listener + ?Sized>(listener: &mut L, node: &SyntaxNode) {
            match node.kind() {
                $(SyntaxKind::$kind => listener.$exit(node),)*
                _ => {}
            }
        }

        /// Every kind that has a callback pair
        pub const RULE_KINDS: &[SyntaxKind] = &[$(SyntaxKind::$kind,)*];
    };
}

listener! {
    CONFIGURATION => enter_configuration / exit_configuration,
    IMISH => enter_imish / exit_imish,
    STRUCTURE_NAME => enter_structure_name / exit_structure_name,
    NAME_WITH_PORT => enter_name_with_port / exit_name_with_port,
    WORD_VALUE => enter_word_value / exit_word_value,
    ADDRESS_VALUE => enter_address_value / exit_address_value,
    PREFIX_VALUE => enter_prefix_value / exit_prefix_value,
    UINT16_VALUE => enter_uint16_value / exit_uint16_value,
    UINT32_VALUE => enter_uint32_value / exit_uint32_value,
    VLAN_ID_VALUE => enter_vlan_id_value / exit_vlan_id_value,
    COMMUNITY_VALUE => enter_community_value / exit_community_value,
    LIST => enter_list / exit_list,
    BRACKET_LIST => enter_bracket_list / exit_bracket_list,
    EMPTY_LIST => enter_empty_list / exit_empty_list,
    S_LTM => enter_s_ltm / exit_s_ltm,
    L_NODE => enter_l_node / exit_l_node,
    LN_ADDRESS => enter_ln_address / exit_ln_address,
    LN_DESCRIPTION => enter_ln_description / exit_ln_description,
    L_POOL => enter_l_pool / exit_l_pool,
    LP_DESCRIPTION => enter_lp_description / exit_lp_description,
    LP_MEMBERS => enter_lp_members / exit_lp_members,
    LPM_MEMBER => enter_lpm_member / exit_lpm_member,
    LPMM_ADDRESS => enter_lpmm_address / exit_lpmm_address,
    LPMM_DESCRIPTION => enter_lpmm_description / exit_lpmm_description,
    LP_MONITOR => enter_lp_monitor / exit_lp_monitor,
    L_VIRTUAL => enter_l_virtual / exit_l_virtual,
    LV_DESCRIPTION => enter_lv_description / exit_lv_description,
    LV_DESTINATION => enter_lv_destination / exit_lv_destination,
    LV_DISABLED => enter_lv_disabled / exit_lv_disabled,
    LV_ENABLED => enter_lv_enabled / exit_lv_enabled,
    LV_IP_FORWARD => enter_lv_ip_forward / exit_lv_ip_forward,
    LV_IP_PROTOCOL => enter_lv_ip_protocol / exit_lv_ip_protocol,
    LV_MASK => enter_lv_mask / exit_lv_mask,
    LV_PERSIST => enter_lv_persist / exit_lv_persist,
    LVP_PERSISTENCE => enter_lvp_persistence / exit_lvp_persistence,
    LVPP_DEFAULT => enter_lvpp_default / exit_lvpp_default,
    LV_POOL => enter_lv_pool / exit_lv_pool,
    LV_PROFILES => enter_lv_profiles / exit_lv_profiles,
    LVPR_PROFILE => enter_lvpr_profile / exit_lvpr_profile,
    LVPRP_CONTEXT => enter_lvprp_context / exit_lvprp_context,
    LV_REJECT => enter_lv_reject / exit_lv_reject,
    LV_RULES => enter_lv_rules / exit_lv_rules,
    LV_SOURCE => enter_lv_source / exit_lv_source,
    LV_SOURCE_ADDRESS_TRANSLATION => enter_lv_source_address_translation / exit_lv_source_address_translation,
    LVSAT_POOL => enter_lvsat_pool / exit_lvsat_pool,
    LVSAT_TYPE => enter_lvsat_type / exit_lvsat_type,
    LV_TRANSLATE_ADDRESS => enter_lv_translate_address / exit_lv_translate_address,
    LV_TRANSLATE_PORT => enter_lv_translate_port / exit_lv_translate_port,
    LV_VLANS => enter_lv_vlans / exit_lv_vlans,
    LV_VLANS_DISABLED => enter_lv_vlans_disabled / exit_lv_vlans_disabled,
    LV_VLANS_ENABLED => enter_lv_vlans_enabled / exit_lv_vlans_enabled,
    L_VIRTUAL_ADDRESS => enter_l_virtual_address / exit_l_virtual_address,
    LVA_ADDRESS => enter_lva_address / exit_lva_address,
    LVA_ARP => enter_lva_arp / exit_lva_arp,
    LVA_ICMP_ECHO => enter_lva_icmp_echo / exit_lva_icmp_echo,
    LVA_MASK => enter_lva_mask / exit_lva_mask,
    LVA_ROUTE_ADVERTISEMENT => enter_lva_route_advertisement / exit_lva_route_advertisement,
    LVA_TRAFFIC_GROUP => enter_lva_traffic_group / exit_lva_traffic_group,
    L_SNAT => enter_l_snat / exit_l_snat,
    LS_ORIGINS => enter_ls_origins / exit_ls_origins,
    LSO_ORIGIN => enter_lso_origin / exit_lso_origin,
    LS_SNATPOOL => enter_ls_snatpool / exit_ls_snatpool,
    LS_VLANS => enter_ls_vlans / exit_ls_vlans,
    LS_VLANS_DISABLED => enter_ls_vlans_disabled / exit_ls_vlans_disabled,
    LS_VLANS_ENABLED => enter_ls_vlans_enabled / exit_ls_vlans_enabled,
    L_SNATPOOL => enter_l_snatpool / exit_l_snatpool,
    LSP_MEMBERS => enter_lsp_members / exit_lsp_members,
    L_SNAT_TRANSLATION => enter_l_snat_translation / exit_l_snat_translation,
    LST_ADDRESS => enter_lst_address / exit_lst_address,
    LST_TRAFFIC_GROUP => enter_lst_traffic_group / exit_lst_traffic_group,
    L_RULE => enter_l_rule / exit_l_rule,
    RULE_BODY => enter_rule_body / exit_rule_body,
    L_MONITOR => enter_l_monitor / exit_l_monitor,
    LM_HTTP => enter_lm_http / exit_lm_http,
    LM_HTTPS => enter_lm_https / exit_lm_https,
    LMHS_SSL_PROFILE => enter_lmhs_ssl_profile / exit_lmhs_ssl_profile,
    L_PERSISTENCE => enter_l_persistence / exit_l_persistence,
    LPER_SOURCE_ADDR => enter_lper_source_addr / exit_lper_source_addr,
    LPER_SSL => enter_lper_ssl / exit_lper_ssl,
    L_PROFILE => enter_l_profile / exit_l_profile,
    LPROF_CLIENT_SSL => enter_lprof_client_ssl / exit_lprof_client_ssl,
    LPROF_HTTP => enter_lprof_http / exit_lprof_http,
    LPROF_OCSP_STAPLING_PARAMS => enter_lprof_ocsp_stapling_params / exit_lprof_ocsp_stapling_params,
    LPROF_ONE_CONNECT => enter_lprof_one_connect / exit_lprof_one_connect,
    LPROF_SERVER_SSL => enter_lprof_server_ssl / exit_lprof_server_ssl,
    LPROF_TCP => enter_lprof_tcp / exit_lprof_tcp,
    DEFAULTS_FROM => enter_defaults_from / exit_defaults_from,
    S_NET => enter_s_net / exit_s_net,
    NET_INTERFACE => enter_net_interface / exit_net_interface,
    NI_BUNDLE => enter_ni_bundle / exit_ni_bundle,
    NI_BUNDLE_SPEED => enter_ni_bundle_speed / exit_ni_bundle_speed,
    NI_DISABLED => enter_ni_disabled / exit_ni_disabled,
    NI_ENABLED => enter_ni_enabled / exit_ni_enabled,
    NET_ROUTE => enter_net_route / exit_net_route,
    NROUTE_GW => enter_nroute_gw / exit_nroute_gw,
    NROUTE_NETWORK => enter_nroute_network / exit_nroute_network,
    NET_ROUTING => enter_net_routing / exit_net_routing,
    NR_BGP => enter_nr_bgp / exit_nr_bgp,
    NRB_ADDRESS_FAMILY => enter_nrb_address_family / exit_nrb_address_family,
    NRBAF_IPV4 => enter_nrbaf_ipv4 / exit_nrbaf_ipv4,
    NRBAF_IPV6 => enter_nrbaf_ipv6 / exit_nrbaf_ipv6,
    NRBAF_REDISTRIBUTE => enter_nrbaf_redistribute / exit_nrbaf_redistribute,
    NRBAFR_KERNEL => enter_nrbafr_kernel / exit_nrbafr_kernel,
    NRBAFRK_ROUTE_MAP => enter_nrbafrk_route_map / exit_nrbafrk_route_map,
    NRB_LOCAL_AS => enter_nrb_local_as / exit_nrb_local_as,
    NRB_NEIGHBOR => enter_nrb_neighbor / exit_nrb_neighbor,
    NRBN_NAME => enter_nrbn_name / exit_nrbn_name,
    NRBN_ADDRESS_FAMILY => enter_nrbn_address_family / exit_nrbn_address_family,
    NRBNAF_IPV4 => enter_nrbnaf_ipv4 / exit_nrbnaf_ipv4,
    NRBNAF_IPV6 => enter_nrbnaf_ipv6 / exit_nrbnaf_ipv6,
    NRBNAF_ACTIVATE => enter_nrbnaf_activate / exit_nrbnaf_activate,
    NRBNAF_ROUTE_MAP => enter_nrbnaf_route_map / exit_nrbnaf_route_map,
    NRBNAFR_OUT => enter_nrbnafr_out / exit_nrbnafr_out,
    NRBN_DESCRIPTION => enter_nrbn_description / exit_nrbn_description,
    NRBN_EBGP_MULTIHOP => enter_nrbn_ebgp_multihop / exit_nrbn_ebgp_multihop,
    NRBN_REMOTE_AS => enter_nrbn_remote_as / exit_nrbn_remote_as,
    NRBN_UPDATE_SOURCE => enter_nrbn_update_source / exit_nrbn_update_source,
    NRB_ROUTER_ID => enter_nrb_router_id / exit_nrb_router_id,
    NR_PREFIX_LIST => enter_nr_prefix_list / exit_nr_prefix_list,
    NRP_ENTRIES => enter_nrp_entries / exit_nrp_entries,
    NRPE_ENTRY => enter_nrpe_entry / exit_nrpe_entry,
    NRPEE_ACTION => enter_nrpee_action / exit_nrpee_action,
    NRPEE_PREFIX => enter_nrpee_prefix / exit_nrpee_prefix,
    NRPEE_PREFIX_LEN_RANGE => enter_nrpee_prefix_len_range / exit_nrpee_prefix_len_range,
    NRP_ROUTE_DOMAIN => enter_nrp_route_domain / exit_nrp_route_domain,
    NR_ROUTE_MAP => enter_nr_route_map / exit_nr_route_map,
    NRR_ENTRIES => enter_nrr_entries / exit_nrr_entries,
    NRRE_ENTRY => enter_nrre_entry / exit_nrre_entry,
    NRREE_ACTION => enter_nrree_action / exit_nrree_action,
    NRREE_MATCH => enter_nrree_match / exit_nrree_match,
    NRREEM_IPV4 => enter_nrreem_ipv4 / exit_nrreem_ipv4,
    NRREEM4_ADDRESS => enter_nrreem4_address / exit_nrreem4_address,
    NRREEM4A_PREFIX_LIST => enter_nrreem4a_prefix_list / exit_nrreem4a_prefix_list,
    NRREE_SET => enter_nrree_set / exit_nrree_set,
    NRREES_COMMUNITY => enter_nrrees_community / exit_nrrees_community,
    NRREESC_VALUE => enter_nrreesc_value / exit_nrreesc_value,
    NRR_ROUTE_DOMAIN => enter_nrr_route_domain / exit_nrr_route_domain,
    NET_SELF => enter_net_self / exit_net_self,
    NS_ADDRESS => enter_ns_address / exit_ns_address,
    NS_ALLOW_SERVICE => enter_ns_allow_service / exit_ns_allow_service,
    NS_TRAFFIC_GROUP => enter_ns_traffic_group / exit_ns_traffic_group,
    NS_VLAN => enter_ns_vlan / exit_ns_vlan,
    NET_TRUNK => enter_net_trunk / exit_net_trunk,
    NT_INTERFACES => enter_nt_interfaces / exit_nt_interfaces,
    NT_LACP => enter_nt_lacp / exit_nt_lacp,
    NET_VLAN => enter_net_vlan / exit_net_vlan,
    NV_INTERFACES => enter_nv_interfaces / exit_nv_interfaces,
    NVI_INTERFACE => enter_nvi_interface / exit_nvi_interface,
    NV_TAG => enter_nv_tag / exit_nv_tag,
    S_SYS => enter_s_sys / exit_s_sys,
    SYS_GLOBAL_SETTINGS => enter_sys_global_settings / exit_sys_global_settings,
    SGS_HOSTNAME => enter_sgs_hostname / exit_sgs_hostname,
    SYS_NTP => enter_sys_ntp / exit_sys_ntp,
    NTP_SERVERS => enter_ntp_servers / exit_ntp_servers,
}
