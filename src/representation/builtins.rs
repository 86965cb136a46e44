//! Objects every BIG-IP ships with. References to these never need a
//! definition in the document.

/// Strips the `/Common/` partition the built-ins live in
fn common_local_name(name: &str) -> &str {
    name.strip_prefix("/Common/").unwrap_or(name)
}

pub fn is_builtin_monitor(name: &str) -> bool {
    matches!(
        common_local_name(name),
        "gateway_icmp"
            | "http"
            | "http_head_f5"
            | "https"
            | "https_443"
            | "https_head_f5"
            | "icmp"
            | "inband"
            | "none"
            | "tcp"
            | "tcp_echo"
            | "tcp_half_open"
            | "udp"
    )
}

pub fn is_builtin_persistence(name: &str) -> bool {
    matches!(
        common_local_name(name),
        "cookie"
            | "dest_addr"
            | "hash"
            | "msrdp"
            | "sip_info"
            | "source_addr"
            | "ssl"
            | "universal"
    )
}

pub fn is_builtin_profile(name: &str) -> bool {
    matches!(
        common_local_name(name),
        "analytics"
            | "clientssl"
            | "clientssl-insecure-compatible"
            | "clientssl-secure"
            | "fastL4"
            | "fasthttp"
            | "ftp"
            | "http"
            | "http-explicit"
            | "http-transparent"
            | "httpcompression"
            | "oneconnect"
            | "serverssl"
            | "serverssl-insecure-compatible"
            | "stream"
            | "tcp"
            | "tcp-lan-optimized"
            | "tcp-mobile-optimized"
            | "tcp-wan-optimized"
            | "udp"
            | "websecurity"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_with_and_without_partition() {
        assert!(is_builtin_monitor("/Common/http"));
        assert!(is_builtin_monitor("tcp"));
        assert!(!is_builtin_monitor("/Common/my-http"));
        assert!(!is_builtin_monitor("/Other/http"));
        assert!(is_builtin_persistence("/Common/source_addr"));
        assert!(is_builtin_profile("/Common/clientssl"));
        assert!(!is_builtin_profile("/Common/client-ssl-custom"));
    }
}
