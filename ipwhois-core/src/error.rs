use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhoisError {
    #[error("no parser registered for WHOIS server {0}")]
    UnregisteredHost(String),

    #[error("Failed to connect to {server}: {source}")]
    Connect {
        server: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to send query to {server}: {source}")]
    Write {
        server: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error from {server}: {source}")]
    Read {
        server: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Response from {server} exceeded {limit} bytes")]
    ResponseTooLarge { server: String, limit: usize },

    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Blocking lookup called from within an async runtime")]
    NestedRuntime,
}

pub type Result<T> = std::result::Result<T, WhoisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_host_message() {
        let err = WhoisError::UnregisteredHost("whois.afrinic.net".to_string());
        assert_eq!(
            err.to_string(),
            "no parser registered for WHOIS server whois.afrinic.net"
        );
    }

    #[test]
    fn test_connect_error_keeps_source() {
        let err = WhoisError::Connect {
            server: "whois.arin.net".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert!(err.to_string().starts_with("Failed to connect to whois.arin.net"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
