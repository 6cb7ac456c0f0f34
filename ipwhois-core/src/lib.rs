pub mod colors;
pub mod error;
pub mod output;
pub mod whois;

pub use error::{Result, WhoisError};
pub use output::{OutputFormat, OutputFormatter};
pub use whois::{ParserRegistry, Record, ResponseParser, WhoisClient};

/// Looks `query` up with a default [`WhoisClient`].
///
/// Queries whois.cymru.com and, when its answer names a `refer` server,
/// returns that server's record instead.
pub async fn lookup(query: &str) -> Result<Record> {
    WhoisClient::new().lookup(query).await
}

/// Synchronous entry points.
pub mod blocking {
    use crate::{Record, Result, WhoisClient};

    /// Blocking form of [`crate::lookup`]. Must not be called from async code.
    pub fn lookup(query: &str) -> Result<Record> {
        WhoisClient::new().lookup_blocking(query)
    }
}
