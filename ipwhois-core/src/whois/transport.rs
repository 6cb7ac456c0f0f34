use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::error::{Result, WhoisError};

/// Where to connect for a single hop.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Target<'a> {
    /// Resolve `host` and connect on `port`.
    Host(&'a str, u16),
    /// Connect to a fixed address, skipping resolution.
    Addr(SocketAddr),
}

/// Network limits applied to every hop.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub timeout: Duration,
    pub max_response_size: usize,
}

/// Builds the request line sent to a server: verbose flag, query, CRLF.
pub(crate) fn request_line(query: &str) -> Vec<u8> {
    format!(" -v {}\r\n", query).into_bytes()
}

/// Performs one WHOIS round trip and returns everything the server sent
/// before closing the connection.
pub(crate) async fn fetch(
    server: &str,
    target: Target<'_>,
    query: &str,
    limits: Limits,
) -> Result<Vec<u8>> {
    let connect = async {
        match target {
            Target::Host(host, port) => TcpStream::connect((host, port)).await,
            Target::Addr(addr) => TcpStream::connect(addr).await,
        }
    };

    let mut stream = timeout(limits.timeout, connect)
        .await
        .map_err(|_| WhoisError::Timeout(format!("Connection to {} timed out", server)))?
        .map_err(|source| WhoisError::Connect {
            server: server.to_string(),
            source,
        })?;

    let request = request_line(query);
    timeout(limits.timeout, stream.write_all(&request))
        .await
        .map_err(|_| WhoisError::Timeout(format!("Write to {} timed out", server)))?
        .map_err(|source| WhoisError::Write {
            server: server.to_string(),
            source,
        })?;
    debug!(server = %server, bytes = request.len(), "Query sent");

    let mut response = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = timeout(limits.timeout, stream.read(&mut buf))
            .await
            .map_err(|_| WhoisError::Timeout(format!("Read from {} timed out", server)))?
            .map_err(|source| WhoisError::Read {
                server: server.to_string(),
                source,
            })?;

        if n == 0 {
            break; // EOF
        }

        response.extend_from_slice(&buf[..n]);
        if response.len() > limits.max_response_size {
            return Err(WhoisError::ResponseTooLarge {
                server: server.to_string(),
                limit: limits.max_response_size,
            });
        }
    }

    debug!(server = %server, bytes = response.len(), "Response received");
    Ok(response)
}
