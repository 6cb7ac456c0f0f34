//! Well-known WHOIS servers consulted during a lookup.

pub const WHOIS_PORT: u16 = 43;

/// Bootstrap server queried first for every lookup.
pub const CYMRU: &str = "whois.cymru.com";

pub const APNIC: &str = "whois.apnic.net";
pub const ARIN: &str = "whois.arin.net";
pub const IANA: &str = "whois.iana.org";
pub const LACNIC: &str = "whois.lacnic.net";
pub const RIPE: &str = "whois.ripe.net";

/// Registries that answer in RPSL `key: value` form.
pub const RPSL_SERVERS: &[&str] = &[APNIC, ARIN, IANA, LACNIC, RIPE];

/// Normalizes a server hostname for registry lookups.
///
/// Referral values arrive straight from response text, so they may carry
/// stray whitespace, a trailing root dot or mixed case.
pub fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}
