//! Listener that builds a [`BigipConfiguration`] from a syntax tree.
//!
//! The builder keeps an explicit stack of [`Frame`]s naming the entity being
//! populated. Entering a definition inserts the entity (or finds the one an
//! earlier statement created) and pushes its key; property callbacks update
//! whatever the top frame names; the matching exit pops it. A definition
//! whose name failed to parse pushes [`Frame::Detached`], so its properties
//! land nowhere while enter/exit stay balanced.

use std::collections::BTreeSet;
use std::net::IpAddr;

use indexmap::IndexMap;

use crate::base::LineIndex;
use crate::parser::{
    AddressValue, AstNode, Imish, List, NameWithPort, NodeExt, PrefixValue, Severity,
    StructureName, SyntaxKind, SyntaxNode, Uint16Value, Uint32Value, Unrecognized, VlanIdValue,
    WordValue,
};
use crate::representation::{
    AddressFamily, BgpNeighbor, BgpProcess, BigipConfiguration, BundleSpeed, ImishChunk,
    Interface, InterfaceAddress, IpProtocol, LineAction, Monitor, MonitorKind, Node, Persistence,
    PersistenceKind, Pool, PoolMember, Prefix, PrefixList, PrefixListEntry, Profile, ProfileKind,
    Route, RouteAdvertisementMode, RouteMap, RouteMapEntry, Rule, SelfAddress, Snat, SnatPool,
    SnatTranslation, StandardCommunity, SubRange, Trunk, ValueError, Virtual, VirtualAddress,
    Vlan, parse_address,
};
use crate::settings::ParseSettings;
use crate::syntax::Listener;

use super::Extraction;
use super::diagnostics::{Diagnostic, DiagnosticKind};

/// Entity currently being populated, by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Node(String),
    Pool(String),
    PoolMember { pool: String, member: String },
    Virtual(String),
    VirtualAddress(String),
    Snat(String),
    SnatPool(String),
    SnatTranslation(String),
    Monitor(String),
    Persistence(String),
    Profile(String),
    Interface(String),
    Route(String),
    Bgp(String),
    BgpAddressFamily { process: String, family: AddressFamily },
    BgpNeighbor { process: String, neighbor: String },
    BgpNeighborAddressFamily { process: String, neighbor: String, family: AddressFamily },
    PrefixList(String),
    PrefixListEntry { list: String, num: u32 },
    RouteMap(String),
    RouteMapEntry { map: String, num: u32 },
    SelfAddress(String),
    Trunk(String),
    Vlan(String),
    /// A definition that could not be keyed
    Detached,
}

// ============================================================================
// Tree lookups
// ============================================================================

fn structure_name(node: &SyntaxNode) -> Option<String> {
    node.child::<StructureName>()
        .map(|name| name.full_name())
        .filter(|name| !name.is_empty())
}

fn word(node: &SyntaxNode) -> Option<String> {
    node.child::<WordValue>().map(|value| value.text())
}

fn list_values(node: &SyntaxNode) -> Vec<String> {
    node.child::<List>().map(|list| list.values()).unwrap_or_default()
}

/// Merges a list property into `target`; `[ ]` leaves it present but empty
fn merge_list(target: &mut Option<Vec<String>>, node: &SyntaxNode) {
    let Some(list) = node.child::<List>() else {
        return;
    };
    let values = target.get_or_insert_with(Vec::new);
    for value in list.values() {
        push_unique(values, value);
    }
}

/// `Some(true)` for `enabled`, `Some(false)` for `disabled`
fn enabled(node: &SyntaxNode) -> Option<bool> {
    match node.keyword_argument()?.kind() {
        SyntaxKind::ENABLED_KW => Some(true),
        SyntaxKind::DISABLED_KW => Some(false),
        _ => None,
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

fn parse_prefix(value: &PrefixValue) -> Result<Prefix, ValueError> {
    if value.is_default() {
        return Ok(Prefix::default_v4());
    }
    let text = value.text();
    if text.contains('/') {
        text.parse()
    } else {
        // a bare address is a host prefix
        parse_address(&text).map(|address| Prefix::new(address, u8::MAX))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Extracts the configuration model while a [`ParseTreeWalker`] walks the
/// tree
///
/// [`ParseTreeWalker`]: crate::syntax::ParseTreeWalker
pub struct ConfigurationBuilder<'a> {
    config: BigipConfiguration,
    frames: Vec<Frame>,
    diagnostics: Vec<Diagnostic>,
    unrecognized_count: usize,
    line_index: &'a LineIndex,
    settings: &'a ParseSettings,
}

impl<'a> ConfigurationBuilder<'a> {
    pub fn new(line_index: &'a LineIndex, settings: &'a ParseSettings) -> Self {
        Self {
            config: BigipConfiguration::new(),
            frames: Vec::new(),
            diagnostics: Vec::new(),
            unrecognized_count: 0,
            line_index,
            settings,
        }
    }

    pub fn configuration(&self) -> &BigipConfiguration {
        &self.config
    }

    /// Unrecognized statements seen so far, recorded or not
    pub fn unrecognized_count(&self) -> usize {
        self.unrecognized_count
    }

    /// Entity stack; empty between top-level statements
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn finish(self) -> Extraction {
        Extraction {
            configuration: self.config,
            diagnostics: self.diagnostics,
            unrecognized_count: self.unrecognized_count,
        }
    }

    // =========================================================================
    // Frame stack
    // =========================================================================

    fn push(&mut self, frame: Frame) {
        tracing::trace!(?frame, depth = self.frames.len(), "enter entity");
        self.frames.push(frame);
    }

    fn pop(&mut self) {
        if let Some(frame) = self.frames.pop() {
            tracing::trace!(?frame, "finished entity");
        }
    }

    /// Inserts (or revisits) a named top-level entity and pushes its frame
    fn enter_named<T>(
        &mut self,
        node: &SyntaxNode,
        map: fn(&mut BigipConfiguration) -> &mut IndexMap<String, T>,
        create: fn(String) -> T,
        frame: fn(String) -> Frame,
    ) {
        let Some(name) = structure_name(node) else {
            self.push(Frame::Detached);
            return;
        };
        map(&mut self.config)
            .entry(name.clone())
            .or_insert_with(|| create(name.clone()));
        self.push(frame(name));
    }

    fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    fn warn(&mut self, node: &SyntaxNode, message: String) {
        tracing::warn!(%message, "conversion problem");
        let text = node.text().to_string().trim().to_string();
        let diagnostic = Diagnostic::new(
            DiagnosticKind::Conversion,
            Severity::Warning,
            node.text_range(),
            self.line_index,
            message,
        )
        .with_text(text);
        self.diagnostics.push(diagnostic);
    }

    // =========================================================================
    // Typed value conversion
    // =========================================================================

    /// Address child of a property; `what` names it in the warning
    fn address(&mut self, node: &SyntaxNode, what: &str) -> Option<IpAddr> {
        let value = node.child::<AddressValue>()?;
        if let Some(address) = value.ip() {
            return Some(address);
        }
        let text = value.token().map(|t| t.text().to_string()).unwrap_or_default();
        self.warn(node, format!("'{text}' is neither IPv4 nor IPv6 {what}"));
        None
    }

    fn prefix(&mut self, node: &SyntaxNode) -> Option<Prefix> {
        let value = node.child::<PrefixValue>()?;
        match parse_prefix(&value) {
            Ok(prefix) => Some(prefix),
            Err(error) => {
                self.warn(
                    node,
                    format!("'{}' is neither IPv4 nor IPv6 prefix: {error}", value.text()),
                );
                None
            }
        }
    }

    /// Parses the keyword following the property keyword
    fn keyword_value<T>(&mut self, node: &SyntaxNode) -> Option<T>
    where
        T: std::str::FromStr<Err = ValueError>,
    {
        let text = node.keyword_argument()?.text().to_string();
        match text.parse() {
            Ok(value) => Some(value),
            Err(error) => {
                self.warn(node, error.to_string());
                None
            }
        }
    }

    // =========================================================================
    // Current entity accessors
    // =========================================================================

    fn current_node(&mut self) -> Option<&mut Node> {
        match self.frames.last()? {
            Frame::Node(name) => self.config.nodes.get_mut(name),
            _ => None,
        }
    }

    fn current_pool(&mut self) -> Option<&mut Pool> {
        match self.frames.last()? {
            Frame::Pool(name) => self.config.pools.get_mut(name),
            _ => None,
        }
    }

    fn current_pool_member(&mut self) -> Option<&mut PoolMember> {
        match self.frames.last()? {
            Frame::PoolMember { pool, member } => {
                self.config.pools.get_mut(pool)?.members.get_mut(member)
            }
            _ => None,
        }
    }

    fn current_virtual(&mut self) -> Option<&mut Virtual> {
        match self.frames.last()? {
            Frame::Virtual(name) => self.config.virtuals.get_mut(name),
            _ => None,
        }
    }

    fn current_virtual_address(&mut self) -> Option<&mut VirtualAddress> {
        match self.frames.last()? {
            Frame::VirtualAddress(name) => self.config.virtual_addresses.get_mut(name),
            _ => None,
        }
    }

    fn current_snat(&mut self) -> Option<&mut Snat> {
        match self.frames.last()? {
            Frame::Snat(name) => self.config.snats.get_mut(name),
            _ => None,
        }
    }

    fn current_snatpool(&mut self) -> Option<&mut SnatPool> {
        match self.frames.last()? {
            Frame::SnatPool(name) => self.config.snatpools.get_mut(name),
            _ => None,
        }
    }

    fn current_snat_translation(&mut self) -> Option<&mut SnatTranslation> {
        match self.frames.last()? {
            Frame::SnatTranslation(name) => self.config.snat_translations.get_mut(name),
            _ => None,
        }
    }

    fn current_interface(&mut self) -> Option<&mut Interface> {
        match self.frames.last()? {
            Frame::Interface(name) => self.config.interfaces.get_mut(name),
            _ => None,
        }
    }

    fn current_route(&mut self) -> Option<&mut Route> {
        match self.frames.last()? {
            Frame::Route(name) => self.config.routes.get_mut(name),
            _ => None,
        }
    }

    fn current_bgp(&mut self) -> Option<&mut BgpProcess> {
        match self.frames.last()? {
            Frame::Bgp(name) => self.config.bgp_processes.get_mut(name),
            _ => None,
        }
    }

    fn current_bgp_neighbor(&mut self) -> Option<&mut BgpNeighbor> {
        match self.frames.last()? {
            Frame::BgpNeighbor { process, neighbor } => self
                .config
                .bgp_processes
                .get_mut(process)?
                .neighbors
                .get_mut(neighbor),
            _ => None,
        }
    }

    fn current_prefix_list(&mut self) -> Option<&mut PrefixList> {
        match self.frames.last()? {
            Frame::PrefixList(name) => self.config.prefix_lists.get_mut(name),
            _ => None,
        }
    }

    fn current_prefix_list_entry(&mut self) -> Option<&mut PrefixListEntry> {
        match self.frames.last()? {
            Frame::PrefixListEntry { list, num } => {
                self.config.prefix_lists.get_mut(list)?.entries.get_mut(num)
            }
            _ => None,
        }
    }

    fn current_route_map(&mut self) -> Option<&mut RouteMap> {
        match self.frames.last()? {
            Frame::RouteMap(name) => self.config.route_maps.get_mut(name),
            _ => None,
        }
    }

    fn current_route_map_entry(&mut self) -> Option<&mut RouteMapEntry> {
        match self.frames.last()? {
            Frame::RouteMapEntry { map, num } => {
                self.config.route_maps.get_mut(map)?.entries.get_mut(num)
            }
            _ => None,
        }
    }

    fn current_self(&mut self) -> Option<&mut SelfAddress> {
        match self.frames.last()? {
            Frame::SelfAddress(name) => self.config.selves.get_mut(name),
            _ => None,
        }
    }

    fn current_trunk(&mut self) -> Option<&mut Trunk> {
        match self.frames.last()? {
            Frame::Trunk(name) => self.config.trunks.get_mut(name),
            _ => None,
        }
    }

    fn current_vlan(&mut self) -> Option<&mut Vlan> {
        match self.frames.last()? {
            Frame::Vlan(name) => self.config.vlans.get_mut(name),
            _ => None,
        }
    }

    // =========================================================================
    // Virtual server actions
    // =========================================================================

    /// Which of pool/ip-forward/reject the current virtual already uses
    fn virtual_action(&mut self) -> Option<(String, Option<&'static str>)> {
        let server = self.current_virtual()?;
        let action = if server.pool.is_some() {
            Some("pool")
        } else if server.ip_forward {
            Some("ip-forward")
        } else if server.reject {
            Some("reject")
        } else {
            None
        };
        Some((server.name.clone(), action))
    }

    fn set_virtual_pool(&mut self, node: &SyntaxNode) {
        let Some(pool) = structure_name(node) else {
            return;
        };
        let Some((name, action)) = self.virtual_action() else {
            return;
        };
        if let Some(action @ ("ip-forward" | "reject")) = action {
            self.warn(
                node,
                format!("Cannot assign pool '{pool}' to virtual '{name}' that already uses {action}"),
            );
            return;
        }
        if let Some(server) = self.current_virtual() {
            server.pool = Some(pool);
            server.translate_address.get_or_insert(true);
            server.translate_port.get_or_insert(true);
        }
    }

    /// `ip-forward` and `reject` both disable translation
    fn set_virtual_forwarding(&mut self, node: &SyntaxNode, reject: bool) {
        let wanted = if reject { "reject" } else { "ip-forward" };
        let Some((name, action)) = self.virtual_action() else {
            return;
        };
        if let Some(action) = action.filter(|action| *action != wanted) {
            self.warn(
                node,
                format!("Cannot set {wanted} on virtual '{name}' that already uses {action}"),
            );
            return;
        }
        if let Some(server) = self.current_virtual() {
            if reject {
                server.reject = true;
            } else {
                server.ip_forward = true;
            }
            server.translate_address = Some(false);
            server.translate_port = Some(false);
        }
    }

    fn set_virtual_translate(&mut self, node: &SyntaxNode, port: bool) {
        let Some(value) = enabled(node) else {
            return;
        };
        let Some((name, action)) = self.virtual_action() else {
            return;
        };
        let what = if port { "translate-port" } else { "translate-address" };
        if let Some(action @ ("ip-forward" | "reject")) = action {
            if value {
                self.warn(
                    node,
                    format!("Cannot enable {what} on virtual '{name}' that uses {action}"),
                );
                return;
            }
        }
        if let Some(server) = self.current_virtual() {
            if port {
                server.translate_port = Some(value);
            } else {
                server.translate_address = Some(value);
            }
        }
    }
}

impl Listener for ConfigurationBuilder<'_> {
    // =========================================================================
    // Document
    // =========================================================================

    fn exit_configuration(&mut self, _node: &SyntaxNode) {
        tracing::debug!(
            entities = self.config.entity_count(),
            diagnostics = self.diagnostics.len(),
            unrecognized = self.unrecognized_count,
            "extracted configuration"
        );
    }

    fn enter_imish(&mut self, node: &SyntaxNode) {
        let Some(chunk) = Imish::cast(node.clone()).and_then(|imish| imish.chunk()) else {
            return;
        };
        let offset = chunk.text_range().start();
        self.config.imish = Some(ImishChunk {
            line: self.line_index.line(offset),
            offset: u32::from(offset) as usize,
            text: chunk.text().to_string(),
        });
    }

    fn visit_unrecognized(&mut self, node: &Unrecognized) {
        self.config.unrecognized = true;
        self.unrecognized_count += 1;
        if !self.settings.record_unrecognized {
            return;
        }
        let text = node.text();
        let summary = text.lines().next().unwrap_or_default();
        let diagnostic = Diagnostic::new(
            DiagnosticKind::Unrecognized,
            Severity::Warning,
            node.syntax().text_range(),
            self.line_index,
            format!("unrecognized syntax: {summary}"),
        )
        .with_text(text.clone());
        self.diagnostics.push(diagnostic);
    }

    fn visit_error_node(&mut self, _node: &SyntaxNode) {
        // the parser already reported it
        self.config.unrecognized = true;
    }

    // =========================================================================
    // ltm node
    // =========================================================================

    fn enter_l_node(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.nodes, Node::new, Frame::Node);
    }

    fn exit_l_node(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_ln_address(&mut self, node: &SyntaxNode) {
        if let Some(address) = self.address(node, "address") {
            if let Some(entity) = self.current_node() {
                entity.address = Some(address);
            }
        }
    }

    fn exit_ln_description(&mut self, node: &SyntaxNode) {
        let description = word(node);
        if let Some(entity) = self.current_node() {
            entity.description = description;
        }
    }

    // =========================================================================
    // ltm pool
    // =========================================================================

    fn enter_l_pool(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.pools, Pool::new, Frame::Pool);
    }

    fn exit_l_pool(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_lp_description(&mut self, node: &SyntaxNode) {
        let description = word(node);
        if let Some(pool) = self.current_pool() {
            pool.description = description;
        }
    }

    fn exit_lp_monitor(&mut self, node: &SyntaxNode) {
        let Some(monitor) = structure_name(node) else {
            return;
        };
        if let Some(pool) = self.current_pool() {
            push_unique(&mut pool.monitors, monitor);
        }
    }

    fn enter_lpm_member(&mut self, node: &SyntaxNode) {
        let member = node.child::<NameWithPort>();
        let parts = member
            .as_ref()
            .and_then(|m| Some((m.full_name(), m.name()?, m.port()?, m.address())));
        let pool = match self.top() {
            Some(Frame::Pool(pool)) => Some(pool.clone()),
            _ => None,
        };
        let (Some(pool), Some((key, node_name, port, address))) = (pool, parts) else {
            self.push(Frame::Detached);
            return;
        };
        if let Some(entity) = self.config.pools.get_mut(&pool) {
            entity.members.entry(key.clone()).or_insert_with(|| {
                let mut member = PoolMember::new(key.clone(), node_name, port);
                member.address = address;
                member
            });
        }
        self.push(Frame::PoolMember { pool, member: key });
    }

    fn exit_lpm_member(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_lpmm_address(&mut self, node: &SyntaxNode) {
        if let Some(address) = self.address(node, "address") {
            if let Some(member) = self.current_pool_member() {
                member.address = Some(address);
            }
        }
    }

    fn exit_lpmm_description(&mut self, node: &SyntaxNode) {
        let description = word(node);
        if let Some(member) = self.current_pool_member() {
            member.description = description;
        }
    }

    // =========================================================================
    // ltm virtual
    // =========================================================================

    fn enter_l_virtual(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.virtuals, Virtual::new, Frame::Virtual);
    }

    fn exit_l_virtual(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_lv_description(&mut self, node: &SyntaxNode) {
        let description = word(node);
        if let Some(server) = self.current_virtual() {
            server.description = description;
        }
    }

    fn exit_lv_destination(&mut self, node: &SyntaxNode) {
        let Some(destination) = node.child::<NameWithPort>() else {
            return;
        };
        let (name, port) = (destination.name(), destination.port());
        if let Some(server) = self.current_virtual() {
            server.destination = name;
            server.destination_port = port;
        }
    }

    fn exit_lv_disabled(&mut self, _node: &SyntaxNode) {
        if let Some(server) = self.current_virtual() {
            server.disabled = Some(true);
        }
    }

    fn exit_lv_enabled(&mut self, _node: &SyntaxNode) {
        if let Some(server) = self.current_virtual() {
            server.disabled = Some(false);
        }
    }

    fn exit_lv_ip_forward(&mut self, node: &SyntaxNode) {
        self.set_virtual_forwarding(node, false);
    }

    fn exit_lv_ip_protocol(&mut self, node: &SyntaxNode) {
        let Some(text) = word(node) else {
            return;
        };
        match text.parse::<IpProtocol>() {
            Ok(protocol) => {
                if let Some(server) = self.current_virtual() {
                    server.ip_protocol = Some(protocol);
                }
            }
            Err(error) => self.warn(node, error.to_string()),
        }
    }

    fn exit_lv_mask(&mut self, node: &SyntaxNode) {
        if let Some(mask) = self.address(node, "mask") {
            if let Some(server) = self.current_virtual() {
                server.mask = Some(mask);
            }
        }
    }

    fn enter_lvp_persistence(&mut self, node: &SyntaxNode) {
        let Some(name) = structure_name(node) else {
            return;
        };
        if let Some(server) = self.current_virtual() {
            push_unique(server.persist.get_or_insert_with(Vec::new), name);
        }
    }

    fn exit_lv_pool(&mut self, node: &SyntaxNode) {
        self.set_virtual_pool(node);
    }

    fn enter_lvpr_profile(&mut self, node: &SyntaxNode) {
        let Some(name) = structure_name(node) else {
            return;
        };
        if let Some(server) = self.current_virtual() {
            push_unique(server.profiles.get_or_insert_with(Vec::new), name);
        }
    }

    fn exit_lv_reject(&mut self, node: &SyntaxNode) {
        self.set_virtual_forwarding(node, true);
    }

    fn enter_lv_persist(&mut self, _node: &SyntaxNode) {
        if let Some(server) = self.current_virtual() {
            server.persist.get_or_insert_with(Vec::new);
        }
    }

    fn enter_lv_profiles(&mut self, _node: &SyntaxNode) {
        if let Some(server) = self.current_virtual() {
            server.profiles.get_or_insert_with(Vec::new);
        }
    }

    fn exit_lv_rules(&mut self, node: &SyntaxNode) {
        if let Some(server) = self.current_virtual() {
            merge_list(&mut server.rules, node);
        }
    }

    fn exit_lv_source(&mut self, node: &SyntaxNode) {
        if let Some(source) = self.prefix(node) {
            if let Some(server) = self.current_virtual() {
                server.source = Some(source);
            }
        }
    }

    fn exit_lvsat_pool(&mut self, node: &SyntaxNode) {
        let pool = structure_name(node);
        if let Some(server) = self.current_virtual() {
            server.source_address_translation_pool = pool;
        }
    }

    fn exit_lvsat_type(&mut self, node: &SyntaxNode) {
        let kind = word(node);
        if let Some(server) = self.current_virtual() {
            server.source_address_translation_type = kind;
        }
    }

    fn exit_lv_translate_address(&mut self, node: &SyntaxNode) {
        self.set_virtual_translate(node, false);
    }

    fn exit_lv_translate_port(&mut self, node: &SyntaxNode) {
        self.set_virtual_translate(node, true);
    }

    fn exit_lv_vlans(&mut self, node: &SyntaxNode) {
        if let Some(server) = self.current_virtual() {
            merge_list(&mut server.vlans, node);
        }
    }

    fn exit_lv_vlans_disabled(&mut self, _node: &SyntaxNode) {
        if let Some(server) = self.current_virtual() {
            server.vlans_enabled = Some(false);
        }
    }

    fn exit_lv_vlans_enabled(&mut self, _node: &SyntaxNode) {
        if let Some(server) = self.current_virtual() {
            server.vlans_enabled = Some(true);
        }
    }

    // =========================================================================
    // ltm virtual-address
    // =========================================================================

    fn enter_l_virtual_address(&mut self, node: &SyntaxNode) {
        self.enter_named(
            node,
            |c| &mut c.virtual_addresses,
            VirtualAddress::new,
            Frame::VirtualAddress,
        );
    }

    fn exit_l_virtual_address(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_lva_address(&mut self, node: &SyntaxNode) {
        if let Some(address) = self.address(node, "address") {
            if let Some(entity) = self.current_virtual_address() {
                entity.address = Some(address);
            }
        }
    }

    fn exit_lva_arp(&mut self, node: &SyntaxNode) {
        let value = enabled(node);
        if let Some(entity) = self.current_virtual_address() {
            entity.arp_disabled = value.map(|on| !on);
        }
    }

    fn exit_lva_icmp_echo(&mut self, node: &SyntaxNode) {
        let value = enabled(node);
        if let Some(entity) = self.current_virtual_address() {
            entity.icmp_echo_disabled = value.map(|on| !on);
        }
    }

    fn exit_lva_mask(&mut self, node: &SyntaxNode) {
        if let Some(mask) = self.address(node, "mask") {
            if let Some(entity) = self.current_virtual_address() {
                entity.mask = Some(mask);
            }
        }
    }

    fn exit_lva_route_advertisement(&mut self, node: &SyntaxNode) {
        let mode = self.keyword_value::<RouteAdvertisementMode>(node);
        if let (Some(mode), Some(entity)) = (mode, self.current_virtual_address()) {
            entity.route_advertisement_mode = Some(mode);
        }
    }

    fn exit_lva_traffic_group(&mut self, node: &SyntaxNode) {
        let group = structure_name(node);
        if let Some(entity) = self.current_virtual_address() {
            entity.traffic_group = group;
        }
    }

    // =========================================================================
    // ltm snat / snatpool / snat-translation
    // =========================================================================

    fn enter_l_snat(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.snats, Snat::new, Frame::Snat);
    }

    fn exit_l_snat(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lso_origin(&mut self, node: &SyntaxNode) {
        let Some(origin) = self.prefix(node) else {
            return;
        };
        if let Some(snat) = self.current_snat() {
            if !snat.origins.contains(&origin) {
                snat.origins.push(origin);
            }
        }
    }

    fn exit_ls_snatpool(&mut self, node: &SyntaxNode) {
        let snatpool = structure_name(node);
        if let Some(snat) = self.current_snat() {
            snat.snatpool = snatpool;
        }
    }

    fn exit_ls_vlans(&mut self, node: &SyntaxNode) {
        if let Some(snat) = self.current_snat() {
            merge_list(&mut snat.vlans, node);
        }
    }

    fn exit_ls_vlans_disabled(&mut self, _node: &SyntaxNode) {
        if let Some(snat) = self.current_snat() {
            snat.vlans_enabled = Some(false);
        }
    }

    fn exit_ls_vlans_enabled(&mut self, _node: &SyntaxNode) {
        if let Some(snat) = self.current_snat() {
            snat.vlans_enabled = Some(true);
        }
    }

    fn enter_l_snatpool(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.snatpools, SnatPool::new, Frame::SnatPool);
    }

    fn exit_l_snatpool(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_lsp_members(&mut self, node: &SyntaxNode) {
        if let Some(snatpool) = self.current_snatpool() {
            merge_list(&mut snatpool.members, node);
        }
    }

    fn enter_l_snat_translation(&mut self, node: &SyntaxNode) {
        self.enter_named(
            node,
            |c| &mut c.snat_translations,
            SnatTranslation::new,
            Frame::SnatTranslation,
        );
    }

    fn exit_l_snat_translation(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_lst_address(&mut self, node: &SyntaxNode) {
        if let Some(address) = self.address(node, "address") {
            if let Some(translation) = self.current_snat_translation() {
                translation.address = Some(address);
            }
        }
    }

    fn exit_lst_traffic_group(&mut self, node: &SyntaxNode) {
        let group = structure_name(node);
        if let Some(translation) = self.current_snat_translation() {
            translation.traffic_group = group;
        }
    }

    // =========================================================================
    // ltm rule / monitor / persistence / profile
    // =========================================================================

    fn enter_l_rule(&mut self, node: &SyntaxNode) {
        let Some(name) = structure_name(node) else {
            return;
        };
        let body = node
            .children()
            .find(|child| child.kind() == SyntaxKind::RULE_BODY)
            .map(|body| {
                let text = body.text().to_string();
                let inner = text.trim();
                let inner = inner.strip_prefix('{').unwrap_or(inner);
                let inner = inner.strip_suffix('}').unwrap_or(inner);
                inner.trim().to_string()
            })
            .unwrap_or_default();
        self.config
            .rules
            .insert(name.clone(), Rule { name, body });
    }

    fn enter_lm_http(&mut self, node: &SyntaxNode) {
        self.enter_named(
            node,
            |c| &mut c.monitors,
            |name| Monitor {
                name,
                kind: MonitorKind::Http,
                defaults_from: None,
                ssl_profile: None,
            },
            Frame::Monitor,
        );
    }

    fn exit_lm_http(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lm_https(&mut self, node: &SyntaxNode) {
        self.enter_named(
            node,
            |c| &mut c.monitors,
            |name| Monitor {
                name,
                kind: MonitorKind::Https,
                defaults_from: None,
                ssl_profile: None,
            },
            Frame::Monitor,
        );
    }

    fn exit_lm_https(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_lmhs_ssl_profile(&mut self, node: &SyntaxNode) {
        let profile = structure_name(node);
        if let Some(Frame::Monitor(name)) = self.frames.last() {
            if let Some(monitor) = self.config.monitors.get_mut(name) {
                monitor.ssl_profile = profile;
            }
        }
    }

    fn enter_lper_source_addr(&mut self, node: &SyntaxNode) {
        self.enter_named(
            node,
            |c| &mut c.persistences,
            |name| Persistence {
                name,
                kind: PersistenceKind::SourceAddr,
                defaults_from: None,
            },
            Frame::Persistence,
        );
    }

    fn exit_lper_source_addr(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lper_ssl(&mut self, node: &SyntaxNode) {
        self.enter_named(
            node,
            |c| &mut c.persistences,
            |name| Persistence {
                name,
                kind: PersistenceKind::Ssl,
                defaults_from: None,
            },
            Frame::Persistence,
        );
    }

    fn exit_lper_ssl(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lprof_client_ssl(&mut self, node: &SyntaxNode) {
        self.enter_profile(node, ProfileKind::ClientSsl);
    }

    fn exit_lprof_client_ssl(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lprof_http(&mut self, node: &SyntaxNode) {
        self.enter_profile(node, ProfileKind::Http);
    }

    fn exit_lprof_http(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lprof_ocsp_stapling_params(&mut self, node: &SyntaxNode) {
        self.enter_profile(node, ProfileKind::OcspStaplingParams);
    }

    fn exit_lprof_ocsp_stapling_params(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lprof_one_connect(&mut self, node: &SyntaxNode) {
        self.enter_profile(node, ProfileKind::OneConnect);
    }

    fn exit_lprof_one_connect(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lprof_server_ssl(&mut self, node: &SyntaxNode) {
        self.enter_profile(node, ProfileKind::ServerSsl);
    }

    fn exit_lprof_server_ssl(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_lprof_tcp(&mut self, node: &SyntaxNode) {
        self.enter_profile(node, ProfileKind::Tcp);
    }

    fn exit_lprof_tcp(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_defaults_from(&mut self, node: &SyntaxNode) {
        let parent = structure_name(node);
        match self.frames.last() {
            Some(Frame::Monitor(name)) => {
                if let Some(monitor) = self.config.monitors.get_mut(name) {
                    monitor.defaults_from = parent;
                }
            }
            Some(Frame::Persistence(name)) => {
                if let Some(persistence) = self.config.persistences.get_mut(name) {
                    persistence.defaults_from = parent;
                }
            }
            Some(Frame::Profile(name)) => {
                if let Some(profile) = self.config.profiles.get_mut(name) {
                    profile.defaults_from = parent;
                }
            }
            _ => {}
        }
    }

    // =========================================================================
    // net interface / route
    // =========================================================================

    fn enter_net_interface(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.interfaces, Interface::new, Frame::Interface);
    }

    fn exit_net_interface(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_ni_bundle(&mut self, node: &SyntaxNode) {
        let bundle = word(node);
        if let Some(interface) = self.current_interface() {
            interface.bundle = bundle;
        }
    }

    fn exit_ni_bundle_speed(&mut self, node: &SyntaxNode) {
        let speed = self.keyword_value::<BundleSpeed>(node);
        if let (Some(speed), Some(interface)) = (speed, self.current_interface()) {
            interface.bundle_speed = Some(speed);
        }
    }

    fn exit_ni_disabled(&mut self, _node: &SyntaxNode) {
        if let Some(interface) = self.current_interface() {
            interface.disabled = Some(true);
        }
    }

    fn exit_ni_enabled(&mut self, _node: &SyntaxNode) {
        if let Some(interface) = self.current_interface() {
            interface.disabled = Some(false);
        }
    }

    fn enter_net_route(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.routes, Route::new, Frame::Route);
    }

    fn exit_net_route(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_nroute_gw(&mut self, node: &SyntaxNode) {
        let Some(gateway) = self.address(node, "address") else {
            return;
        };
        let Some(Frame::Route(route)) = self.top().cloned() else {
            return;
        };
        if gateway.is_ipv4() {
            let connected = self
                .config
                .selves
                .values()
                .filter_map(|entity| entity.address)
                .any(|address| address.prefix().contains(gateway));
            if !connected {
                self.warn(
                    node,
                    format!(
                        "Cannot set gateway IP '{gateway}' for route '{route}' that is not on a directly-connected network"
                    ),
                );
                return;
            }
        }
        if let Some(entity) = self.current_route() {
            entity.gateway = Some(gateway);
        }
    }

    fn exit_nroute_network(&mut self, node: &SyntaxNode) {
        if let Some(network) = self.prefix(node) {
            if let Some(route) = self.current_route() {
                route.network = Some(network);
            }
        }
    }

    // =========================================================================
    // net routing bgp
    // =========================================================================

    fn enter_nr_bgp(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.bgp_processes, BgpProcess::new, Frame::Bgp);
    }

    fn exit_nr_bgp(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_nrbaf_ipv4(&mut self, _node: &SyntaxNode) {
        self.enter_bgp_address_family(AddressFamily::Ipv4);
    }

    fn exit_nrbaf_ipv4(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_nrbaf_ipv6(&mut self, _node: &SyntaxNode) {
        self.enter_bgp_address_family(AddressFamily::Ipv6);
    }

    fn exit_nrbaf_ipv6(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_nrbafrk_route_map(&mut self, node: &SyntaxNode) {
        let route_map = structure_name(node);
        if let Some(Frame::BgpAddressFamily { process, family }) = self.frames.last() {
            if let Some(bgp) = self.config.bgp_processes.get_mut(process) {
                bgp.address_family_mut(*family).redistribute_kernel_route_map = route_map;
            }
        }
    }

    fn exit_nrb_local_as(&mut self, node: &SyntaxNode) {
        let local_as = node.child::<Uint32Value>().and_then(|value| value.value());
        if let Some(bgp) = self.current_bgp() {
            bgp.local_as = local_as;
        }
    }

    fn exit_nrb_router_id(&mut self, node: &SyntaxNode) {
        match self.address(node, "address") {
            Some(IpAddr::V4(id)) => {
                if let Some(bgp) = self.current_bgp() {
                    bgp.router_id = Some(IpAddr::V4(id));
                }
            }
            Some(IpAddr::V6(id)) => {
                tracing::debug!(%id, "ignoring IPv6 bgp router-id");
            }
            None => {}
        }
    }

    fn enter_nrbn_name(&mut self, node: &SyntaxNode) {
        let name = node
            .child::<AddressValue>()
            .and_then(|value| value.token())
            .map(|token| token.text().to_string());
        let process = match self.top() {
            Some(Frame::Bgp(process)) => Some(process.clone()),
            _ => None,
        };
        let (Some(process), Some(name)) = (process, name) else {
            self.push(Frame::Detached);
            return;
        };
        if let Some(bgp) = self.config.bgp_processes.get_mut(&process) {
            bgp.neighbors
                .entry(name.clone())
                .or_insert_with(|| BgpNeighbor::new(name.clone()));
        }
        self.push(Frame::BgpNeighbor {
            process,
            neighbor: name,
        });
    }

    fn exit_nrbn_name(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_nrbnaf_ipv4(&mut self, _node: &SyntaxNode) {
        self.enter_neighbor_address_family(AddressFamily::Ipv4);
    }

    fn exit_nrbnaf_ipv4(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_nrbnaf_ipv6(&mut self, _node: &SyntaxNode) {
        self.enter_neighbor_address_family(AddressFamily::Ipv6);
    }

    fn exit_nrbnaf_ipv6(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_nrbnaf_activate(&mut self, node: &SyntaxNode) {
        let activate = enabled(node);
        if let Some(family) = self.current_neighbor_address_family() {
            family.activate = activate;
        }
    }

    fn exit_nrbnafr_out(&mut self, node: &SyntaxNode) {
        let route_map = structure_name(node);
        if let Some(family) = self.current_neighbor_address_family() {
            family.route_map_out = route_map;
        }
    }

    fn exit_nrbn_description(&mut self, node: &SyntaxNode) {
        let description = word(node);
        if let Some(neighbor) = self.current_bgp_neighbor() {
            neighbor.description = description;
        }
    }

    fn exit_nrbn_ebgp_multihop(&mut self, node: &SyntaxNode) {
        let hops = node.child::<Uint16Value>().and_then(|value| value.value());
        if let Some(neighbor) = self.current_bgp_neighbor() {
            neighbor.ebgp_multihop = hops;
        }
    }

    fn exit_nrbn_remote_as(&mut self, node: &SyntaxNode) {
        let remote_as = node.child::<Uint32Value>().and_then(|value| value.value());
        if let Some(neighbor) = self.current_bgp_neighbor() {
            neighbor.remote_as = remote_as;
        }
    }

    fn exit_nrbn_update_source(&mut self, node: &SyntaxNode) {
        let source = structure_name(node);
        if let Some(neighbor) = self.current_bgp_neighbor() {
            neighbor.update_source = source;
        }
    }

    // =========================================================================
    // net routing prefix-list / route-map
    // =========================================================================

    fn enter_nr_prefix_list(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.prefix_lists, PrefixList::new, Frame::PrefixList);
    }

    fn exit_nr_prefix_list(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_nrpe_entry(&mut self, node: &SyntaxNode) {
        let num = node.child::<Uint32Value>().and_then(|value| value.value());
        let list = match self.top() {
            Some(Frame::PrefixList(list)) => Some(list.clone()),
            _ => None,
        };
        let (Some(list), Some(num)) = (list, num) else {
            self.push(Frame::Detached);
            return;
        };
        if let Some(prefix_list) = self.config.prefix_lists.get_mut(&list) {
            prefix_list
                .entries
                .entry(num)
                .or_insert_with(|| PrefixListEntry::new(num));
        }
        self.push(Frame::PrefixListEntry { list, num });
    }

    fn exit_nrpe_entry(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_nrpee_action(&mut self, node: &SyntaxNode) {
        let action = self.keyword_value::<LineAction>(node);
        if let (Some(action), Some(entry)) = (action, self.current_prefix_list_entry()) {
            entry.action = Some(action);
        }
    }

    fn exit_nrpee_prefix(&mut self, node: &SyntaxNode) {
        if let Some(prefix) = self.prefix(node) {
            if let Some(entry) = self.current_prefix_list_entry() {
                entry.prefix = Some(prefix);
            }
        }
    }

    fn exit_nrpee_prefix_len_range(&mut self, node: &SyntaxNode) {
        let range = self.keyword_value::<SubRange>(node);
        if let (Some(range), Some(entry)) = (range, self.current_prefix_list_entry()) {
            entry.length_range = Some(range);
        }
    }

    fn exit_nrp_route_domain(&mut self, node: &SyntaxNode) {
        let domain = structure_name(node);
        if let Some(list) = self.current_prefix_list() {
            list.route_domain = domain;
        }
    }

    fn enter_nr_route_map(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.route_maps, RouteMap::new, Frame::RouteMap);
    }

    fn exit_nr_route_map(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_nrre_entry(&mut self, node: &SyntaxNode) {
        let num = node.child::<Uint32Value>().and_then(|value| value.value());
        let map = match self.top() {
            Some(Frame::RouteMap(map)) => Some(map.clone()),
            _ => None,
        };
        let (Some(map), Some(num)) = (map, num) else {
            self.push(Frame::Detached);
            return;
        };
        if let Some(route_map) = self.config.route_maps.get_mut(&map) {
            route_map
                .entries
                .entry(num)
                .or_insert_with(|| RouteMapEntry::new(num));
        }
        self.push(Frame::RouteMapEntry { map, num });
    }

    fn exit_nrre_entry(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_nrree_action(&mut self, node: &SyntaxNode) {
        let action = self.keyword_value::<LineAction>(node);
        if let (Some(action), Some(entry)) = (action, self.current_route_map_entry()) {
            entry.action = Some(action);
        }
    }

    fn exit_nrreem4a_prefix_list(&mut self, node: &SyntaxNode) {
        let list = structure_name(node);
        if let Some(entry) = self.current_route_map_entry() {
            entry.match_ipv4_prefix_list = list;
        }
    }

    fn exit_nrreesc_value(&mut self, node: &SyntaxNode) {
        let mut communities = BTreeSet::new();
        for text in list_values(node) {
            match text.parse::<StandardCommunity>() {
                Ok(community) => {
                    communities.insert(community);
                }
                Err(error) => self.warn(node, error.to_string()),
            }
        }
        if let Some(entry) = self.current_route_map_entry() {
            entry.set_communities = Some(communities);
        }
    }

    fn exit_nrr_route_domain(&mut self, node: &SyntaxNode) {
        let domain = structure_name(node);
        if let Some(map) = self.current_route_map() {
            map.route_domain = domain;
        }
    }

    // =========================================================================
    // net self / trunk / vlan
    // =========================================================================

    fn enter_net_self(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.selves, SelfAddress::new, Frame::SelfAddress);
    }

    fn exit_net_self(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_ns_address(&mut self, node: &SyntaxNode) {
        let Some(value) = node.child::<PrefixValue>() else {
            return;
        };
        let text = value.text();
        match text.parse::<InterfaceAddress>() {
            Ok(address) => {
                if let Some(entity) = self.current_self() {
                    entity.address = Some(address);
                }
            }
            Err(error) => self.warn(
                node,
                format!("'{text}' is neither IPv4 nor IPv6 interface address: {error}"),
            ),
        }
    }

    fn exit_ns_allow_service(&mut self, node: &SyntaxNode) {
        let services = node.child::<List>().map(|list| list.values());
        if let (Some(services), Some(entity)) = (services, self.current_self()) {
            entity.allow_service = Some(services);
        }
    }

    fn exit_ns_traffic_group(&mut self, node: &SyntaxNode) {
        let group = structure_name(node);
        if let Some(entity) = self.current_self() {
            entity.traffic_group = group;
        }
    }

    fn exit_ns_vlan(&mut self, node: &SyntaxNode) {
        let vlan = structure_name(node);
        if let Some(entity) = self.current_self() {
            entity.vlan = vlan;
        }
    }

    fn enter_net_trunk(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.trunks, Trunk::new, Frame::Trunk);
    }

    fn exit_net_trunk(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn exit_nt_interfaces(&mut self, node: &SyntaxNode) {
        if let Some(trunk) = self.current_trunk() {
            merge_list(&mut trunk.interfaces, node);
        }
    }

    fn exit_nt_lacp(&mut self, node: &SyntaxNode) {
        let lacp = enabled(node);
        if let Some(trunk) = self.current_trunk() {
            trunk.lacp = lacp;
        }
    }

    fn enter_net_vlan(&mut self, node: &SyntaxNode) {
        self.enter_named(node, |c| &mut c.vlans, Vlan::new, Frame::Vlan);
    }

    fn exit_net_vlan(&mut self, _node: &SyntaxNode) {
        self.pop();
    }

    fn enter_nv_interfaces(&mut self, _node: &SyntaxNode) {
        if let Some(vlan) = self.current_vlan() {
            vlan.interfaces.get_or_insert_with(Vec::new);
        }
    }

    fn enter_nvi_interface(&mut self, node: &SyntaxNode) {
        let Some(interface) = word(node) else {
            return;
        };
        if let Some(vlan) = self.current_vlan() {
            push_unique(vlan.interfaces.get_or_insert_with(Vec::new), interface);
        }
    }

    fn exit_nv_tag(&mut self, node: &SyntaxNode) {
        let tag = node.child::<VlanIdValue>().and_then(|value| value.value());
        if let Some(vlan) = self.current_vlan() {
            vlan.tag = tag;
        }
    }

    // =========================================================================
    // sys
    // =========================================================================

    fn exit_sgs_hostname(&mut self, node: &SyntaxNode) {
        let Some(hostname) = word(node) else {
            return;
        };
        self.config.hostname = Some(if self.settings.lowercase_hostname {
            hostname.to_lowercase()
        } else {
            hostname
        });
    }

    fn exit_ntp_servers(&mut self, node: &SyntaxNode) {
        if node.child::<List>().is_some() {
            self.config.ntp_servers = Some(list_values(node));
        }
    }
}

impl ConfigurationBuilder<'_> {
    fn enter_profile(&mut self, node: &SyntaxNode, kind: ProfileKind) {
        let Some(name) = structure_name(node) else {
            self.push(Frame::Detached);
            return;
        };
        self.config
            .profiles
            .entry(name.clone())
            .or_insert_with(|| Profile {
                name: name.clone(),
                kind,
                defaults_from: None,
            });
        self.push(Frame::Profile(name));
    }

    fn enter_bgp_address_family(&mut self, family: AddressFamily) {
        let frame = match self.top() {
            Some(Frame::Bgp(process)) => Frame::BgpAddressFamily {
                process: process.clone(),
                family,
            },
            _ => Frame::Detached,
        };
        self.push(frame);
    }

    fn enter_neighbor_address_family(&mut self, family: AddressFamily) {
        let frame = match self.top() {
            Some(Frame::BgpNeighbor { process, neighbor }) => Frame::BgpNeighborAddressFamily {
                process: process.clone(),
                neighbor: neighbor.clone(),
                family,
            },
            _ => Frame::Detached,
        };
        self.push(frame);
    }

    fn current_neighbor_address_family(
        &mut self,
    ) -> Option<&mut crate::representation::BgpNeighborAddressFamily> {
        match self.frames.last()? {
            Frame::BgpNeighborAddressFamily {
                process,
                neighbor,
                family,
            } => Some(
                self.config
                    .bgp_processes
                    .get_mut(process)?
                    .neighbors
                    .get_mut(neighbor)?
                    .address_family_mut(*family),
            ),
            _ => None,
        }
    }
}

