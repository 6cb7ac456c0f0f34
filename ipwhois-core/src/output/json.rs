use std::collections::BTreeMap;

use serde::Serialize;

use super::OutputFormatter;
use crate::whois::Record;

#[derive(Serialize)]
struct RecordOutput<'a> {
    query: &'a str,
    #[serde(flatten)]
    record: &'a Record,
}

#[derive(Serialize)]
struct FieldsOutput<'a> {
    query: &'a str,
    server: &'a str,
    dialect: &'a str,
    fields: BTreeMap<&'a str, String>,
}

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, query: &str, record: &Record) -> String {
        self.to_json(&RecordOutput { query, record })
    }

    fn format_fields(&self, query: &str, record: &Record, keys: &[String]) -> String {
        let fields = keys
            .iter()
            .map(|k| (k.as_str(), record.get(k)))
            .collect();

        self.to_json(&FieldsOutput {
            query,
            server: record.server(),
            dialect: record.dialect(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whois::CymruParser;
    use std::sync::Arc;

    fn cymru_record() -> Record {
        Record::new(
            "whois.cymru.com",
            Arc::new(CymruParser::new()),
            b"AS | IP\n7296 | 66.226.11.227\n".to_vec(),
        )
    }

    #[test]
    fn test_format_record_json() {
        let out = JsonFormatter::new()
            .compact()
            .format_record("66.226.11.227", &cymru_record());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["query"], "66.226.11.227");
        assert_eq!(value["server"], "whois.cymru.com");
        assert_eq!(value["dialect"], "cymru");
        assert_eq!(value["raw"], "AS | IP\n7296 | 66.226.11.227\n");
    }

    #[test]
    fn test_format_fields_json() {
        let keys = vec!["AS".to_string(), "refer".to_string()];
        let out = JsonFormatter::new().format_fields("66.226.11.227", &cymru_record(), &keys);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["fields"]["AS"], "7296");
        assert_eq!(value["fields"]["refer"], "");
        assert!(value.get("raw").is_none());
    }
}
