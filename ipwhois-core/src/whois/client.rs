use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::{debug, instrument};

use super::parsers::{ParserRegistry, PARSER_REGISTRY};
use super::record::Record;
use super::servers::{self, normalize_host, WHOIS_PORT};
use super::transport::{self, Limits, Target};
use crate::error::{Result, WhoisError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RESPONSE_SIZE: usize = 1024 * 1024; // 1MB

/// Field of the bootstrap response naming the authoritative server.
const REFER_FIELD: &str = "refer";

/// Two-hop WHOIS client.
///
/// A lookup queries the bootstrap server, and when its response carries a
/// `refer` field, queries the referred registry once. The referred
/// server's own referrals are never followed.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    timeout: Duration,
    port: u16,
    max_response_size: usize,
    bootstrap: String,
    registry: ParserRegistry,
    addresses: HashMap<String, SocketAddr>,
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WhoisClient {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            port: WHOIS_PORT,
            max_response_size: MAX_RESPONSE_SIZE,
            bootstrap: servers::CYMRU.to_string(),
            registry: (*PARSER_REGISTRY).clone(),
            addresses: HashMap::new(),
        }
    }

    /// Sets the timeout applied to connecting, writing and each read.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_max_response_size(mut self, max: usize) -> Self {
        self.max_response_size = max;
        self
    }

    /// Sets the server queried for the first hop.
    pub fn with_bootstrap(mut self, server: &str) -> Self {
        self.bootstrap = normalize_host(server);
        self
    }

    pub fn with_registry(mut self, registry: ParserRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Connects to `addr` whenever `server` is queried instead of resolving
    /// its name. Parser selection still uses `server`.
    pub fn with_address(mut self, server: &str, addr: SocketAddr) -> Self {
        self.addresses.insert(normalize_host(server), addr);
        self
    }

    pub fn bootstrap(&self) -> &str {
        &self.bootstrap
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Looks `query` up on the bootstrap server, then on its referral.
    ///
    /// Returns the referred server's record when a referral is present and
    /// the bootstrap record otherwise. Any failure aborts the whole lookup.
    #[instrument(skip(self))]
    pub async fn lookup(&self, query: &str) -> Result<Record> {
        let record = self.query_server(&self.bootstrap, query).await?;

        let refer = record.get(REFER_FIELD);
        let refer = refer.trim();
        if refer.is_empty() {
            debug!(server = %record.server(), "No referral, using bootstrap response");
            return Ok(record);
        }

        debug!(referral = %refer, "Following referral");
        self.query_server(refer, query).await
    }

    /// Performs a single hop against `server` with its registered parser.
    pub async fn query_server(&self, server: &str, query: &str) -> Result<Record> {
        let server = normalize_host(server);
        let parser = self
            .registry
            .get(&server)
            .ok_or_else(|| WhoisError::UnregisteredHost(server.clone()))?;

        let target = match self.addresses.get(&server) {
            Some(addr) => Target::Addr(*addr),
            None => Target::Host(&server, self.port),
        };

        debug!(whois_server = %server, dialect = parser.name(), "Querying WHOIS server");

        let limits = Limits {
            timeout: self.timeout,
            max_response_size: self.max_response_size,
        };
        let data = transport::fetch(&server, target, query, limits).await?;

        Ok(Record::new(server, parser, data))
    }

    /// Blocking variant of [`WhoisClient::lookup`].
    ///
    /// Drives the lookup on a private current-thread runtime. Returns
    /// [`WhoisError::NestedRuntime`] when called from within an async context.
    pub fn lookup_blocking(&self, query: &str) -> Result<Record> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(WhoisError::NestedRuntime);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(WhoisError::Runtime)?;
        runtime.block_on(self.lookup(query))
    }
}
