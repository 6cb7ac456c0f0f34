//! Parser for Team Cymru IP-to-ASN responses.
//!
//! Verbose queries to whois.cymru.com return a header row and a value row:
//! ```text
//! AS      | IP               | BGP Prefix          | CC | Registry | Allocated  | AS Name
//! 7296    | 66.226.11.227    | 66.226.0.0/19       | US | arin     | 2001-01-29 | ALCHEMYNET - Alchemy Communications, Inc., US
//! ```

use std::collections::HashMap;

use super::ResponseParser;

/// Two-line, pipe-delimited table parser.
#[derive(Debug, Clone, Default)]
pub struct CymruParser;

impl CymruParser {
    pub fn new() -> Self {
        Self
    }
}

impl ResponseParser for CymruParser {
    fn name(&self) -> &'static str {
        "cymru"
    }

    fn get(&self, raw: &[u8], key: &str) -> String {
        let mut lines = raw.split(|&b| b == b'\n');
        let (Some(header), Some(values)) = (lines.next(), lines.next()) else {
            return String::new();
        };

        let header = String::from_utf8_lossy(header);
        let values = String::from_utf8_lossy(values);

        // zip stops at the shorter row, so header columns without a value are skipped
        let mut fields: HashMap<String, &str> = HashMap::new();
        for (name, value) in header.split('|').zip(values.split('|')) {
            fields
                .entry(name.trim().to_ascii_lowercase())
                .or_insert_with(|| value.trim());
        }

        fields
            .get(&key.trim().to_ascii_lowercase())
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = "AS      | IP               | BGP Prefix          | CC | Registry | Allocated  | AS Name\n\
7296    | 66.226.11.227    | 66.226.0.0/19       | US | arin     | 2001-01-29 | ALCHEMYNET - Alchemy Communications, Inc., US\n";

    #[test]
    fn test_cymru_extracts_fields() {
        let parser = CymruParser::new();
        assert_eq!(parser.get(RESPONSE.as_bytes(), "AS"), "7296");
        assert_eq!(parser.get(RESPONSE.as_bytes(), "IP"), "66.226.11.227");
        assert_eq!(parser.get(RESPONSE.as_bytes(), "BGP Prefix"), "66.226.0.0/19");
        assert_eq!(
            parser.get(RESPONSE.as_bytes(), "AS Name"),
            "ALCHEMYNET - Alchemy Communications, Inc., US"
        );
    }

    #[test]
    fn test_cymru_key_is_case_insensitive() {
        let parser = CymruParser::new();
        assert_eq!(parser.get(RESPONSE.as_bytes(), "registry"), "arin");
        assert_eq!(parser.get(RESPONSE.as_bytes(), "as name"), parser.get(RESPONSE.as_bytes(), "AS Name"));
    }

    #[test]
    fn test_cymru_pairs_columns_by_position() {
        let parser = CymruParser::new();
        let raw = b"Zeta | Alpha | Mid\r\nz-value | a-value | m-value\r\n";
        assert_eq!(parser.get(raw, "Alpha"), "a-value");
        assert_eq!(parser.get(raw, "Zeta"), "z-value");
        assert_eq!(parser.get(raw, "Mid"), "m-value");
    }

    #[test]
    fn test_cymru_short_payload_is_empty() {
        let parser = CymruParser::new();
        assert_eq!(parser.get(b"", "AS"), "");
        assert_eq!(parser.get(b"AS | IP | AS Name", "AS"), "");
    }

    #[test]
    fn test_cymru_unterminated_value_row() {
        let parser = CymruParser::new();
        assert_eq!(parser.get(b"AS | IP\n7296 | 66.226.11.227", "IP"), "66.226.11.227");
    }

    #[test]
    fn test_cymru_missing_value_columns_are_skipped() {
        let parser = CymruParser::new();
        let raw = b"AS | IP | AS Name\n7296 | 66.226.11.227\n";
        assert_eq!(parser.get(raw, "IP"), "66.226.11.227");
        assert_eq!(parser.get(raw, "AS Name"), "");
    }

    #[test]
    fn test_cymru_ignores_lines_after_values() {
        let parser = CymruParser::new();
        let raw = b"AS | IP\n7296 | 66.226.11.227\nrefer | whois.arin.net\n";
        assert_eq!(parser.get(raw, "refer"), "");
        assert_eq!(parser.get(raw, "AS"), "7296");
    }

    #[test]
    fn test_cymru_first_duplicate_column_wins() {
        let parser = CymruParser::new();
        assert_eq!(parser.get(b"AS | as\none | two\n", "AS"), "one");
    }
}
