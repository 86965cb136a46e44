//! Common configuration fixtures for tests.

use bigip::{ParseSettings, ParsedConfiguration, parse_configuration};
use once_cell::sync::Lazy;

pub const POOL_ONE_LINE: &str = "ltm pool p1 { members { 10.0.0.1:80 { } } }";

pub const BOGUS_STATEMENT: &str = "bogus-unknown-statement foo bar";

/// Every supported object, all well-formed: parses with no diagnostics
pub const FULL_CONFIG: &str = r#"#TMSH-VERSION: 13.1.1

sys global-settings {
    hostname f5-bigip.example.com
}
sys ntp {
    servers { 192.0.2.123 ntp.example.com }
}
net interface 1.1 {
    bundle enabled
    bundle-speed 100G
}
net interface 1.2 {
    disabled
}
net trunk /Common/trunk1 {
    interfaces {
        1.1
        1.2
    }
    lacp enabled
}
net vlan /Common/internal {
    interfaces {
        1.1 { }
    }
    tag 100
}
net vlan /Common/external {
    tag 200
}
net self /Common/self-internal {
    address 10.1.0.1/24
    allow-service [ ]
    traffic-group /Common/traffic-group-local-only
    vlan /Common/internal
}
net self /Common/self-v6 {
    address 2001:db8::1/64
    vlan /Common/external
}
net route /Common/default-route {
    gw 10.1.0.254
    network default
}
net routing prefix-list /Common/pl-internal {
    entries {
        10 {
            action permit
            prefix 10.0.0.0/8
            prefix-len-range 8:24
        }
    }
    route-domain /Common/0
}
net routing route-map /Common/rm-out {
    entries {
        10 {
            action permit
            match {
                ipv4 {
                    address {
                        prefix-list /Common/pl-internal
                    }
                }
            }
            set {
                community {
                    value { 65000:1 }
                }
            }
        }
    }
    route-domain /Common/0
}
net routing bgp /Common/bgp-main {
    address-family {
        ipv4 {
            redistribute {
                kernel {
                    route-map /Common/rm-out
                }
            }
        }
    }
    local-as 65000
    neighbor {
        10.1.0.2 {
            address-family {
                ipv4 {
                    activate enabled
                    route-map {
                        out /Common/rm-out
                    }
                }
                ipv6 {
                    activate disabled
                }
            }
            description upstream
            remote-as 65001
            update-source /Common/internal
        }
    }
    router-id 10.1.0.1
}
ltm node /Common/web1 {
    address 10.2.0.11
}
ltm node /Common/web2 {
    address 10.2.0.12
    description "second web server"
}
ltm monitor http /Common/web-check {
    defaults-from /Common/http
}
ltm monitor https /Common/tls-check {
    defaults-from /Common/https
    ssl-profile /Common/serverssl
}
ltm persistence source-addr /Common/sticky {
    defaults-from /Common/source_addr
}
ltm profile client-ssl /Common/site-ssl {
    defaults-from /Common/clientssl
}
ltm profile http /Common/site-http {
    defaults-from /Common/http
}
ltm pool /Common/web-pool {
    members {
        /Common/web1:80 {
            address 10.2.0.11
        }
        /Common/web2:80 {
            address 10.2.0.12
        }
    }
    monitor /Common/web-check
}
ltm rule /Common/redirect {
    when HTTP_REQUEST {
        HTTP::redirect "https://[HTTP::host][HTTP::uri]"
    }
}
ltm snat-translation /Common/10.3.0.1 {
    address 10.3.0.1
    traffic-group /Common/traffic-group-1
}
ltm snatpool /Common/outbound-pool {
    members {
        /Common/10.3.0.1
    }
}
ltm snat /Common/outbound {
    origins {
        10.2.0.0/24 { }
    }
    snatpool /Common/outbound-pool
    vlans {
        /Common/internal
    }
    vlans-enabled
}
ltm virtual-address /Common/192.0.2.10 {
    address 192.0.2.10
    arp enabled
    icmp-echo enabled
    mask 255.255.255.255
    route-advertisement selective
    traffic-group /Common/traffic-group-1
}
ltm virtual /Common/web-vs {
    description "public web"
    destination /Common/192.0.2.10:443
    ip-protocol tcp
    mask 255.255.255.255
    persist {
        /Common/sticky {
            default yes
        }
    }
    pool /Common/web-pool
    profiles {
        /Common/site-http { }
        /Common/site-ssl {
            context clientside
        }
    }
    rules {
        /Common/redirect
    }
    source 0.0.0.0/0
    source-address-translation {
        pool /Common/outbound-pool
        type snat
    }
    vlans {
        /Common/external
    }
    vlans-enabled
}
ltm virtual /Common/forward-vs {
    destination /Common/0.0.0.0:0
    ip-forward
    mask 0.0.0.0
    disabled
}
"#;

/// The fixture parsed once with default settings
pub static FULL_CONFIG_PARSED: Lazy<ParsedConfiguration> =
    Lazy::new(|| parse_configuration(FULL_CONFIG, &ParseSettings::default()));
