//! `ltm` objects: nodes, pools, virtuals, SNAT, rules, monitors, persistence
//! and profiles

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    pub(super) fn ltm_object(&mut self) {
        match self.current_kind() {
            SyntaxKind::NODE_KW => self.object(SyntaxKind::L_NODE, Self::node_item),
            SyntaxKind::POOL_KW => self.object(SyntaxKind::L_POOL, Self::pool_item),
            SyntaxKind::VIRTUAL_KW => self.object(SyntaxKind::L_VIRTUAL, Self::virtual_item),
            SyntaxKind::VIRTUAL_ADDRESS_KW => {
                self.object(SyntaxKind::L_VIRTUAL_ADDRESS, Self::virtual_address_item)
            }
            SyntaxKind::SNAT_KW => self.object(SyntaxKind::L_SNAT, Self::snat_item),
            SyntaxKind::SNATPOOL_KW => self.object(SyntaxKind::L_SNATPOOL, Self::snatpool_item),
            SyntaxKind::SNAT_TRANSLATION_KW => {
                self.object(SyntaxKind::L_SNAT_TRANSLATION, Self::snat_translation_item)
            }
            SyntaxKind::RULE_KW => self.ltm_rule(),
            SyntaxKind::MONITOR_KW => self.typed_group(SyntaxKind::L_MONITOR, Self::monitor_object),
            SyntaxKind::PERSISTENCE_KW => {
                self.typed_group(SyntaxKind::L_PERSISTENCE, Self::persistence_object)
            }
            SyntaxKind::PROFILE_KW => self.typed_group(SyntaxKind::L_PROFILE, Self::profile_object),
            _ => self.unrecognized(),
        }
    }

    /// `monitor http NAME { ... }` style: group keyword, then a typed object
    fn typed_group(&mut self, node: SyntaxKind, object: fn(&mut Self)) {
        self.start_node(node);
        self.bump();
        if self.at_item_end() {
            self.expected("object type");
        } else {
            object(self);
        }
        self.finish_node();
    }

    // =========================================================================
    // node / pool
    // =========================================================================

    fn node_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ADDRESS_KW => self.property(SyntaxKind::LN_ADDRESS, Self::address_value),
            SyntaxKind::DESCRIPTION_KW => self.property(SyntaxKind::LN_DESCRIPTION, Self::word_value),
            _ => self.unrecognized(),
        }
    }

    fn pool_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::DESCRIPTION_KW => self.property(SyntaxKind::LP_DESCRIPTION, Self::word_value),
            SyntaxKind::MEMBERS_KW => self.section(SyntaxKind::LP_MEMBERS, Self::pool_member),
            SyntaxKind::MONITOR_KW => self.property(SyntaxKind::LP_MONITOR, Self::structure_name),
            _ => self.unrecognized(),
        }
    }

    fn pool_member(&mut self) {
        self.entry(SyntaxKind::LPM_MEMBER, Self::name_with_port, Self::pool_member_item);
    }

    fn pool_member_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ADDRESS_KW => self.property(SyntaxKind::LPMM_ADDRESS, Self::address_value),
            SyntaxKind::DESCRIPTION_KW => {
                self.property(SyntaxKind::LPMM_DESCRIPTION, Self::word_value)
            }
            _ => self.unrecognized(),
        }
    }

    // =========================================================================
    // virtual
    // =========================================================================

    fn virtual_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::DESCRIPTION_KW => self.property(SyntaxKind::LV_DESCRIPTION, Self::word_value),
            SyntaxKind::DESTINATION_KW => {
                self.property(SyntaxKind::LV_DESTINATION, Self::name_with_port)
            }
            SyntaxKind::DISABLED_KW => self.flag(SyntaxKind::LV_DISABLED),
            SyntaxKind::ENABLED_KW => self.flag(SyntaxKind::LV_ENABLED),
            SyntaxKind::IP_FORWARD_KW => self.flag(SyntaxKind::LV_IP_FORWARD),
            SyntaxKind::IP_PROTOCOL_KW => self.property(SyntaxKind::LV_IP_PROTOCOL, Self::word_value),
            SyntaxKind::MASK_KW => self.property(SyntaxKind::LV_MASK, Self::address_value),
            SyntaxKind::PERSIST_KW => self.section(SyntaxKind::LV_PERSIST, Self::virtual_persistence),
            SyntaxKind::POOL_KW => self.property(SyntaxKind::LV_POOL, Self::structure_name),
            SyntaxKind::PROFILES_KW => self.section(SyntaxKind::LV_PROFILES, Self::virtual_profile),
            SyntaxKind::REJECT_KW => self.flag(SyntaxKind::LV_REJECT),
            SyntaxKind::RULES_KW => self.property(SyntaxKind::LV_RULES, |p| p.list(Self::structure_name)),
            SyntaxKind::SOURCE_KW => self.property(SyntaxKind::LV_SOURCE, Self::prefix_value),
            SyntaxKind::SOURCE_ADDRESS_TRANSLATION_KW => self.section(
                SyntaxKind::LV_SOURCE_ADDRESS_TRANSLATION,
                Self::source_address_translation_item,
            ),
            SyntaxKind::TRANSLATE_ADDRESS_KW => {
                self.property(SyntaxKind::LV_TRANSLATE_ADDRESS, Self::enabled_or_disabled)
            }
            SyntaxKind::TRANSLATE_PORT_KW => {
                self.property(SyntaxKind::LV_TRANSLATE_PORT, Self::enabled_or_disabled)
            }
            SyntaxKind::VLANS_KW => self.property(SyntaxKind::LV_VLANS, |p| p.list(Self::structure_name)),
            SyntaxKind::VLANS_DISABLED_KW => self.flag(SyntaxKind::LV_VLANS_DISABLED),
            SyntaxKind::VLANS_ENABLED_KW => self.flag(SyntaxKind::LV_VLANS_ENABLED),
            _ => self.unrecognized(),
        }
    }

    fn virtual_persistence(&mut self) {
        self.entry(SyntaxKind::LVP_PERSISTENCE, Self::structure_name, |p| {
            match p.current_kind() {
                SyntaxKind::DEFAULT_KW => p.property(SyntaxKind::LVPP_DEFAULT, Self::word_value),
                _ => p.unrecognized(),
            }
        });
    }

    fn virtual_profile(&mut self) {
        self.entry(SyntaxKind::LVPR_PROFILE, Self::structure_name, |p| {
            match p.current_kind() {
                SyntaxKind::CONTEXT_KW => p.property(SyntaxKind::LVPRP_CONTEXT, Self::word_value),
                _ => p.unrecognized(),
            }
        });
    }

    fn source_address_translation_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::POOL_KW => self.property(SyntaxKind::LVSAT_POOL, Self::structure_name),
            SyntaxKind::TYPE_KW => self.property(SyntaxKind::LVSAT_TYPE, Self::word_value),
            _ => self.unrecognized(),
        }
    }

    // =========================================================================
    // virtual-address
    // =========================================================================

    fn virtual_address_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ADDRESS_KW => self.property(SyntaxKind::LVA_ADDRESS, Self::address_value),
            SyntaxKind::ARP_KW => self.property(SyntaxKind::LVA_ARP, Self::enabled_or_disabled),
            SyntaxKind::ICMP_ECHO_KW => {
                self.property(SyntaxKind::LVA_ICMP_ECHO, Self::enabled_or_disabled)
            }
            SyntaxKind::MASK_KW => self.property(SyntaxKind::LVA_MASK, Self::address_value),
            SyntaxKind::ROUTE_ADVERTISEMENT_KW => {
                self.property(SyntaxKind::LVA_ROUTE_ADVERTISEMENT, Self::route_advertisement_mode)
            }
            SyntaxKind::TRAFFIC_GROUP_KW => {
                self.property(SyntaxKind::LVA_TRAFFIC_GROUP, Self::structure_name)
            }
            _ => self.unrecognized(),
        }
    }

    fn route_advertisement_mode(&mut self) -> bool {
        self.token_choice(
            &[
                SyntaxKind::ALL_KW,
                SyntaxKind::ALWAYS_KW,
                SyntaxKind::ANY_KW,
                SyntaxKind::DISABLED_KW,
                SyntaxKind::ENABLED_KW,
                SyntaxKind::SELECTIVE_KW,
            ],
            "route advertisement mode",
        )
    }

    // =========================================================================
    // snat / snatpool / snat-translation
    // =========================================================================

    fn snat_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ORIGINS_KW => self.section(SyntaxKind::LS_ORIGINS, |p| {
                p.entry(SyntaxKind::LSO_ORIGIN, Self::prefix_value, Self::unrecognized)
            }),
            SyntaxKind::SNATPOOL_KW => self.property(SyntaxKind::LS_SNATPOOL, Self::structure_name),
            SyntaxKind::VLANS_KW => self.property(SyntaxKind::LS_VLANS, |p| p.list(Self::structure_name)),
            SyntaxKind::VLANS_DISABLED_KW => self.flag(SyntaxKind::LS_VLANS_DISABLED),
            SyntaxKind::VLANS_ENABLED_KW => self.flag(SyntaxKind::LS_VLANS_ENABLED),
            _ => self.unrecognized(),
        }
    }

    fn snatpool_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::MEMBERS_KW => {
                self.property(SyntaxKind::LSP_MEMBERS, |p| p.list(Self::structure_name))
            }
            _ => self.unrecognized(),
        }
    }

    fn snat_translation_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::ADDRESS_KW => self.property(SyntaxKind::LST_ADDRESS, Self::address_value),
            SyntaxKind::TRAFFIC_GROUP_KW => {
                self.property(SyntaxKind::LST_TRAFFIC_GROUP, Self::structure_name)
            }
            _ => self.unrecognized(),
        }
    }

    // =========================================================================
    // rule / monitor / persistence / profile
    // =========================================================================

    /// `ltm rule NAME { ... }`: the body is kept as opaque text
    fn ltm_rule(&mut self) {
        self.start_node(SyntaxKind::L_RULE);
        self.bump();
        if self.structure_name() {
            self.opaque_body(SyntaxKind::RULE_BODY);
        }
        self.finish_node();
    }

    fn monitor_object(&mut self) {
        match self.current_kind() {
            SyntaxKind::HTTP_KW => self.object(SyntaxKind::LM_HTTP, Self::defaults_from_item),
            SyntaxKind::HTTPS_KW => self.object(SyntaxKind::LM_HTTPS, |p| match p.current_kind() {
                SyntaxKind::SSL_PROFILE_KW => {
                    p.property(SyntaxKind::LMHS_SSL_PROFILE, Self::structure_name)
                }
                _ => p.defaults_from_item(),
            }),
            _ => self.unrecognized(),
        }
    }

    fn persistence_object(&mut self) {
        match self.current_kind() {
            SyntaxKind::SOURCE_ADDR_KW => {
                self.object(SyntaxKind::LPER_SOURCE_ADDR, Self::defaults_from_item)
            }
            SyntaxKind::SSL_KW => self.object(SyntaxKind::LPER_SSL, Self::defaults_from_item),
            _ => self.unrecognized(),
        }
    }

    fn profile_object(&mut self) {
        let node = match self.current_kind() {
            SyntaxKind::CLIENT_SSL_KW => SyntaxKind::LPROF_CLIENT_SSL,
            SyntaxKind::HTTP_KW => SyntaxKind::LPROF_HTTP,
            SyntaxKind::OCSP_STAPLING_PARAMS_KW => SyntaxKind::LPROF_OCSP_STAPLING_PARAMS,
            SyntaxKind::ONE_CONNECT_KW => SyntaxKind::LPROF_ONE_CONNECT,
            SyntaxKind::SERVER_SSL_KW => SyntaxKind::LPROF_SERVER_SSL,
            SyntaxKind::TCP_KW => SyntaxKind::LPROF_TCP,
            _ => return self.unrecognized(),
        };
        self.object(node, Self::defaults_from_item);
    }

    fn defaults_from_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::DEFAULTS_FROM_KW => {
                self.property(SyntaxKind::DEFAULTS_FROM, Self::structure_name)
            }
            _ => self.unrecognized(),
        }
    }
}
