//! Dialect-specific WHOIS response parsers.
//!
//! WHOIS has no common response format. Which dialect a response uses is
//! fully determined by the server that produced it, so parsers are selected
//! through a hostname-keyed registry rather than by inspecting the payload.

mod cymru;
mod rpsl;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::servers::{self, normalize_host};
pub use cymru::CymruParser;
pub use rpsl::RpslParser;

/// Trait for extracting a single field from a raw WHOIS response.
pub trait ResponseParser: Send + Sync {
    /// Short name of the dialect this parser understands.
    fn name(&self) -> &'static str;

    /// Returns the value of `key` in `raw`, or an empty string when the
    /// field is absent.
    ///
    /// Field names are matched case-insensitively. Short or malformed
    /// payloads are treated as "not found" rather than as errors.
    fn get(&self, raw: &[u8], key: &str) -> String;
}

/// Mapping from WHOIS server hostname to the parser for its responses.
///
/// There is no fallback parser; a server without an entry cannot be queried.
#[derive(Clone)]
pub struct ParserRegistry {
    parsers: HashMap<String, Arc<dyn ResponseParser>>,
}

impl ParserRegistry {
    /// Creates a registry with all known servers.
    pub fn new() -> Self {
        let rpsl: Arc<dyn ResponseParser> = Arc::new(RpslParser::new());

        let mut registry = Self::empty();
        for host in servers::RPSL_SERVERS {
            registry.insert(host, rpsl.clone());
        }
        registry.insert(servers::CYMRU, Arc::new(CymruParser::new()));
        registry
    }

    /// Creates a registry with no servers.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Registers `parser` for `host`, replacing any previous entry.
    pub fn register<P>(mut self, host: &str, parser: P) -> Self
    where
        P: ResponseParser + 'static,
    {
        self.insert(host, Arc::new(parser));
        self
    }

    fn insert(&mut self, host: &str, parser: Arc<dyn ResponseParser>) {
        self.parsers.insert(normalize_host(host), parser);
    }

    /// Returns the parser registered for `host`.
    pub fn get(&self, host: &str) -> Option<Arc<dyn ResponseParser>> {
        self.parsers.get(&normalize_host(host)).cloned()
    }

    pub fn contains(&self, host: &str) -> bool {
        self.parsers.contains_key(&normalize_host(host))
    }

    /// Registered hostnames, sorted.
    pub fn hosts(&self) -> Vec<&str> {
        let mut hosts: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        hosts.sort_unstable();
        hosts
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.hosts()
                    .into_iter()
                    .filter_map(|h| self.parsers.get(h).map(|p| (h, p.name()))),
            )
            .finish()
    }
}

/// Global parser registry instance.
pub static PARSER_REGISTRY: Lazy<ParserRegistry> = Lazy::new(ParserRegistry::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_knows_all_servers() {
        let registry = ParserRegistry::new();
        assert_eq!(
            registry.hosts(),
            vec![
                "whois.apnic.net",
                "whois.arin.net",
                "whois.cymru.com",
                "whois.iana.org",
                "whois.lacnic.net",
                "whois.ripe.net",
            ]
        );
    }

    #[test]
    fn test_registry_selects_dialect_by_host() {
        let registry = ParserRegistry::new();
        for host in servers::RPSL_SERVERS {
            assert_eq!(registry.get(host).map(|p| p.name()), Some("rpsl"));
        }
        assert_eq!(registry.get("whois.cymru.com").map(|p| p.name()), Some("cymru"));
    }

    #[test]
    fn test_registry_host_lookup_is_normalized() {
        let registry = ParserRegistry::new();
        assert!(registry.contains("WHOIS.RIPE.NET"));
        assert!(registry.contains("whois.ripe.net."));
        assert!(registry.contains(" whois.ripe.net\r"));
    }

    #[test]
    fn test_registry_rejects_unknown_host() {
        assert!(PARSER_REGISTRY.get("whois.afrinic.net").is_none());
        assert!(ParserRegistry::empty().get("whois.cymru.com").is_none());
    }

    #[test]
    fn test_register_adds_server() {
        let registry = ParserRegistry::empty().register("whois.afrinic.net", RpslParser::new());
        assert_eq!(registry.hosts(), vec!["whois.afrinic.net"]);
        assert_eq!(format!("{:?}", registry), r#"{"whois.afrinic.net": "rpsl"}"#);
    }
}
