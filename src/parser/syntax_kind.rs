//! Syntax kinds for the Rowan-based CST
//!
//! One tag enum covers every token kind and every grammar production. Rule
//! nodes carry the tag of the production that built them, so a tree walk can
//! pattern-match per rule without a distinct type per production.

/// All syntax kinds (tokens and nodes) of the BIG-IP structured dialect
///
/// Tokens are leaves (keywords, typed literals, punctuation, trivia).
/// Nodes are composite (statements, object definitions, properties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // HIDDEN CHANNEL (kept in the tree, never matched by the grammar)
    // =========================================================================
    WHITESPACE = 0,
    COMMENT_LINE,       // # ... at start of a line
    IMISH_CHUNK,        // ! ... through end of input, right after a newline

    // =========================================================================
    // STRUCTURAL
    // =========================================================================
    NEWLINE,
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    SEMICOLON,          // ;

    // =========================================================================
    // TYPED LITERALS
    // =========================================================================
    PARTITION,          // /Common/
    VLAN_ID,            // 1..=4094
    UINT16,
    UINT32,
    DEC,
    IP_ADDRESS,
    IP_ADDRESS_PORT,    // 10.0.0.1:80
    IP_PREFIX,          // 10.0.0.0/24
    IPV6_ADDRESS,
    IPV6_ADDRESS_PORT,  // dead::beef.80
    IPV6_PREFIX,
    STANDARD_COMMUNITY, // 65000:100
    DOUBLE_QUOTED_STRING,
    WORD_PORT,          // node1:80
    WORD_ID,
    WORD,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ACTION_KW,
    ACTIVATE_KW,
    ADDRESS_KW,
    ADDRESS_FAMILY_KW,
    ALL_KW,
    ALLOW_SERVICE_KW,
    ALWAYS_KW,
    ANY_KW,
    ARP_KW,
    BGP_KW,
    BUNDLE_KW,
    BUNDLE_SPEED_KW,
    CLIENT_SSL_KW,
    COMMUNITY_KW,
    CONTEXT_KW,
    DEFAULT_KW,
    DEFAULTS_FROM_KW,
    DENY_KW,
    DESCRIPTION_KW,
    DESTINATION_KW,
    DISABLED_KW,
    EBGP_MULTIHOP_KW,
    ENABLED_KW,
    ENTRIES_KW,
    FORTY_G_KW,
    GLOBAL_SETTINGS_KW,
    GW_KW,
    HOSTNAME_KW,
    HTTP_KW,
    HTTPS_KW,
    ICMP_ECHO_KW,
    IF_KW,
    INTERFACE_KW,
    INTERFACES_KW,
    IP_FORWARD_KW,
    IP_PROTOCOL_KW,
    IPV4_KW,
    IPV6_KW,
    KERNEL_KW,
    LACP_KW,
    LOCAL_AS_KW,
    LTM_KW,
    MASK_KW,
    MATCH_KW,
    MEMBERS_KW,
    MONITOR_KW,
    NEIGHBOR_KW,
    NET_KW,
    NETWORK_KW,
    NODE_KW,
    NTP_KW,
    OCSP_STAPLING_PARAMS_KW,
    ONE_CONNECT_KW,
    ONE_HUNDRED_G_KW,
    ORIGINS_KW,
    OUT_KW,
    PERMIT_KW,
    PERSIST_KW,
    PERSISTENCE_KW,
    POOL_KW,
    PREFIX_KW,
    PREFIX_LEN_RANGE_KW,
    PREFIX_LIST_KW,
    PROFILE_KW,
    PROFILES_KW,
    REDISTRIBUTE_KW,
    REJECT_KW,
    REMOTE_AS_KW,
    ROUTE_KW,
    ROUTE_ADVERTISEMENT_KW,
    ROUTE_DOMAIN_KW,
    ROUTE_MAP_KW,
    ROUTER_ID_KW,
    ROUTING_KW,
    RULE_KW,
    RULES_KW,
    SELECTIVE_KW,
    SELF_KW,
    SERVER_SSL_KW,
    SERVERS_KW,
    SET_KW,
    SNAT_KW,
    SNAT_TRANSLATION_KW,
    SNATPOOL_KW,
    SOURCE_KW,
    SOURCE_ADDR_KW,
    SOURCE_ADDRESS_TRANSLATION_KW,
    SSL_KW,
    SSL_PROFILE_KW,
    SYS_KW,
    TAG_KW,
    TCP_KW,
    TRAFFIC_GROUP_KW,
    TRANSLATE_ADDRESS_KW,
    TRANSLATE_PORT_KW,
    TRUNK_KW,
    TYPE_KW,
    UDP_KW,
    UPDATE_SOURCE_KW,
    VALUE_KW,
    VIRTUAL_KW,
    VIRTUAL_ADDRESS_KW,
    VLAN_KW,
    VLANS_KW,
    VLANS_DISABLED_KW,
    VLANS_ENABLED_KW,

    // =========================================================================
    // NODES - common
    // =========================================================================
    CONFIGURATION,
    IMISH,
    UNRECOGNIZED,
    STRUCTURE_NAME,
    NAME_WITH_PORT,
    WORD_VALUE,
    ADDRESS_VALUE,
    PREFIX_VALUE,
    UINT16_VALUE,
    UINT32_VALUE,
    VLAN_ID_VALUE,
    COMMUNITY_VALUE,
    LIST,
    BRACKET_LIST,
    EMPTY_LIST,

    // =========================================================================
    // NODES - ltm
    // =========================================================================
    S_LTM,
    L_NODE,
    LN_ADDRESS,
    LN_DESCRIPTION,
    L_POOL,
    LP_DESCRIPTION,
    LP_MEMBERS,
    LPM_MEMBER,
    LPMM_ADDRESS,
    LPMM_DESCRIPTION,
    LP_MONITOR,
    L_VIRTUAL,
    LV_DESCRIPTION,
    LV_DESTINATION,
    LV_DISABLED,
    LV_ENABLED,
    LV_IP_FORWARD,
    LV_IP_PROTOCOL,
    LV_MASK,
    LV_PERSIST,
    LVP_PERSISTENCE,
    LVPP_DEFAULT,
    LV_POOL,
    LV_PROFILES,
    LVPR_PROFILE,
    LVPRP_CONTEXT,
    LV_REJECT,
    LV_RULES,
    LV_SOURCE,
    LV_SOURCE_ADDRESS_TRANSLATION,
    LVSAT_POOL,
    LVSAT_TYPE,
    LV_TRANSLATE_ADDRESS,
    LV_TRANSLATE_PORT,
    LV_VLANS,
    LV_VLANS_DISABLED,
    LV_VLANS_ENABLED,
    L_VIRTUAL_ADDRESS,
    LVA_ADDRESS,
    LVA_ARP,
    LVA_ICMP_ECHO,
    LVA_MASK,
    LVA_ROUTE_ADVERTISEMENT,
    LVA_TRAFFIC_GROUP,
    L_SNAT,
    LS_ORIGINS,
    LSO_ORIGIN,
    LS_SNATPOOL,
    LS_VLANS,
    LS_VLANS_DISABLED,
    LS_VLANS_ENABLED,
    L_SNATPOOL,
    LSP_MEMBERS,
    L_SNAT_TRANSLATION,
    LST_ADDRESS,
    LST_TRAFFIC_GROUP,
    L_RULE,
    RULE_BODY,
    L_MONITOR,
    LM_HTTP,
    LM_HTTPS,
    LMHS_SSL_PROFILE,
    L_PERSISTENCE,
    LPER_SOURCE_ADDR,
    LPER_SSL,
    L_PROFILE,
    LPROF_CLIENT_SSL,
    LPROF_HTTP,
    LPROF_OCSP_STAPLING_PARAMS,
    LPROF_ONE_CONNECT,
    LPROF_SERVER_SSL,
    LPROF_TCP,
    DEFAULTS_FROM,

    // =========================================================================
    // NODES - net
    // =========================================================================
    S_NET,
    NET_INTERFACE,
    NI_BUNDLE,
    NI_BUNDLE_SPEED,
    NI_DISABLED,
    NI_ENABLED,
    NET_ROUTE,
    NROUTE_GW,
    NROUTE_NETWORK,
    NET_ROUTING,
    NR_BGP,
    NRB_ADDRESS_FAMILY,
    NRBAF_IPV4,
    NRBAF_IPV6,
    NRBAF_REDISTRIBUTE,
    NRBAFR_KERNEL,
    NRBAFRK_ROUTE_MAP,
    NRB_LOCAL_AS,
    NRB_NEIGHBOR,
    NRBN_NAME,
    NRBN_ADDRESS_FAMILY,
    NRBNAF_IPV4,
    NRBNAF_IPV6,
    NRBNAF_ACTIVATE,
    NRBNAF_ROUTE_MAP,
    NRBNAFR_OUT,
    NRBN_DESCRIPTION,
    NRBN_EBGP_MULTIHOP,
    NRBN_REMOTE_AS,
    NRBN_UPDATE_SOURCE,
    NRB_ROUTER_ID,
    NR_PREFIX_LIST,
    NRP_ENTRIES,
    NRPE_ENTRY,
    NRPEE_ACTION,
    NRPEE_PREFIX,
    NRPEE_PREFIX_LEN_RANGE,
    NRP_ROUTE_DOMAIN,
    NR_ROUTE_MAP,
    NRR_ENTRIES,
    NRRE_ENTRY,
    NRREE_ACTION,
    NRREE_MATCH,
    NRREEM_IPV4,
    NRREEM4_ADDRESS,
    NRREEM4A_PREFIX_LIST,
    NRREE_SET,
    NRREES_COMMUNITY,
    NRREESC_VALUE,
    NRR_ROUTE_DOMAIN,
    NET_SELF,
    NS_ADDRESS,
    NS_ALLOW_SERVICE,
    NS_TRAFFIC_GROUP,
    NS_VLAN,
    NET_TRUNK,
    NT_INTERFACES,
    NT_LACP,
    NET_VLAN,
    NV_INTERFACES,
    NVI_INTERFACE,
    NV_TAG,

    // =========================================================================
    // NODES - sys
    // =========================================================================
    S_SYS,
    SYS_GLOBAL_SETTINGS,
    SGS_HOSTNAME,
    SYS_NTP,
    NTP_SERVERS,

    // Special: error token (unlexable character) and error node (recovery)
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Hidden-channel tokens: kept for positions, skipped by the grammar
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT_LINE | Self::IMISH_CHUNK)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ACTION_KW as u16) && (self as u16) <= (Self::VLANS_ENABLED_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        matches!(
            self,
            Self::L_BRACE | Self::R_BRACE | Self::L_BRACKET | Self::R_BRACKET | Self::SEMICOLON
        )
    }

    /// Typed literal tokens (everything the lexer can classify a word run as)
    pub fn is_literal(self) -> bool {
        (self as u16) >= (Self::PARTITION as u16) && (self as u16) <= (Self::WORD as u16)
    }

    /// Tokens accepted by the `word` production.
    ///
    /// Keywords double as names, so `pool http` style references resolve.
    pub fn is_word_like(self) -> bool {
        (self.is_literal() && self != Self::PARTITION) || self.is_keyword()
    }

    /// Tokens accepted as an unsigned 16-bit value
    pub fn is_uint16(self) -> bool {
        matches!(self, Self::VLAN_ID | Self::UINT16)
    }

    /// Tokens accepted as an unsigned 32-bit value
    pub fn is_uint32(self) -> bool {
        matches!(self, Self::VLAN_ID | Self::UINT16 | Self::UINT32)
    }

    /// Tokens that end a statement or block item
    pub fn is_item_end(self) -> bool {
        matches!(self, Self::NEWLINE | Self::SEMICOLON | Self::R_BRACE)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BigipLanguage {}

impl rowan::Language for BigipLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<BigipLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<BigipLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<BigipLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<BigipLanguage>;

/// Human-readable name of a kind, used in syntax error messages
pub fn kind_to_name(kind: SyntaxKind) -> &'static str {
    if let Some(text) = super::keywords::keyword_text(kind) {
        return text;
    }
    match kind {
        SyntaxKind::WHITESPACE => "whitespace",
        SyntaxKind::COMMENT_LINE => "comment",
        SyntaxKind::IMISH_CHUNK => "imish chunk",
        SyntaxKind::NEWLINE => "newline",
        SyntaxKind::L_BRACE => "'{'",
        SyntaxKind::R_BRACE => "'}'",
        SyntaxKind::L_BRACKET => "'['",
        SyntaxKind::R_BRACKET => "']'",
        SyntaxKind::SEMICOLON => "';'",
        SyntaxKind::PARTITION => "partition",
        SyntaxKind::VLAN_ID => "vlan id",
        SyntaxKind::UINT16 => "16-bit integer",
        SyntaxKind::UINT32 => "32-bit integer",
        SyntaxKind::DEC => "integer",
        SyntaxKind::IP_ADDRESS => "IPv4 address",
        SyntaxKind::IP_ADDRESS_PORT => "IPv4 address with port",
        SyntaxKind::IP_PREFIX => "IPv4 prefix",
        SyntaxKind::IPV6_ADDRESS => "IPv6 address",
        SyntaxKind::IPV6_ADDRESS_PORT => "IPv6 address with port",
        SyntaxKind::IPV6_PREFIX => "IPv6 prefix",
        SyntaxKind::STANDARD_COMMUNITY => "standard community",
        SyntaxKind::DOUBLE_QUOTED_STRING => "quoted string",
        SyntaxKind::WORD_PORT => "name with port",
        SyntaxKind::WORD_ID | SyntaxKind::WORD => "word",
        SyntaxKind::ERROR => "invalid character",
        SyntaxKind::__LAST => "end of input",
        _ => "syntax node",
    }
}
