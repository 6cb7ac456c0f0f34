//! Parser for RPSL-style responses.
//!
//! Regional registries answer with one attribute per line:
//! ```text
//! NetRange:       66.226.0.0 - 66.226.31.255
//! OriginAS:       AS7296
//! Organization:   Alchemy Communications, Inc. (ALCHE-2)
//! ```

use regex::bytes::RegexBuilder;
use tracing::warn;

use super::ResponseParser;

/// Line-oriented `key: value` parser.
///
/// Lines are scanned lazily on every lookup and the first matching line
/// wins.
#[derive(Debug, Clone, Default)]
pub struct RpslParser;

impl RpslParser {
    pub fn new() -> Self {
        Self
    }
}

impl ResponseParser for RpslParser {
    fn name(&self) -> &'static str {
        "rpsl"
    }

    fn get(&self, raw: &[u8], key: &str) -> String {
        // (?-u:.) so values with non-UTF-8 bytes are still captured whole
        let pattern = format!(r"{}:\s+((?-u:.)*)", regex::escape(key));
        let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                warn!(key = %key, error = %e, "Unusable RPSL field name");
                return String::new();
            }
        };

        for line in raw.split(|&b| b == b'\n') {
            if let Some(m) = re.captures(line).and_then(|caps| caps.get(1)) {
                return String::from_utf8_lossy(m.as_bytes())
                    .trim_matches('\r')
                    .to_string();
            }
        }

        String::new()
    }
}
