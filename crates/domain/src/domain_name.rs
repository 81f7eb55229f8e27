//! Domain-name helpers shared by every resolver implementation.

use std::net::IpAddr;

/// Strips at most one trailing dot and folds to lowercase, so that
/// `"Example.com."` and `"example.com"` address the same records.
pub fn normalize(raw: &str) -> String {
    raw.strip_suffix('.').unwrap_or(raw).to_ascii_lowercase()
}

/// A name with no visible characters cannot be looked up.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Builds the reverse-lookup name for an IP address, suitable for a PTR
/// query: `in-addr.arpa` for IPv4, nibble-reversed `ip6.arpa` for IPv6.
pub fn reverse_lookup_name(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::new();
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.ip6.arpa", nibbles.join("."))
        }
    }
}
