use super::OutputFormatter;
use crate::colors::PaletteExt;
use crate::whois::Record;

pub struct HumanFormatter {
    use_colors: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn paint(&self, text: &str, style: fn(&str) -> colored::ColoredString) -> String {
        if self.use_colors {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        let width = text.chars().count();
        if self.use_colors {
            format!("\n{}\n{}", text.heading(), "─".repeat(width).rule())
        } else {
            format!("\n{}\n{}", text, "-".repeat(width))
        }
    }

    fn field(&self, name: &str, value: &str) -> String {
        format!(
            "  {}: {}",
            self.paint(name, |s| s.label()),
            self.paint(value, |s| s.value())
        )
    }

    fn preamble(&self, query: &str, record: &Record) -> Vec<String> {
        vec![
            self.header(&format!("WHOIS: {}", query)),
            self.field("Server", record.server()),
            self.field("Dialect", record.dialect()),
        ]
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_record(&self, query: &str, record: &Record) -> String {
        let mut output = self.preamble(query, record);
        output.push(String::new());

        for line in record.text().lines() {
            let line = line.trim_end();
            if line.starts_with('%') || line.starts_with('#') {
                output.push(format!("  {}", self.paint(line, |s| s.muted())));
            } else {
                output.push(format!("  {}", line));
            }
        }

        output.join("\n")
    }

    fn format_fields(&self, query: &str, record: &Record, keys: &[String]) -> String {
        let mut output = self.preamble(query, record);

        for key in keys {
            let value = record.get(key);
            if value.is_empty() {
                output.push(format!(
                    "  {}: {}",
                    self.paint(key, |s| s.label()),
                    self.paint("(not found)", |s| s.missing())
                ));
            } else {
                output.push(self.field(key, &value));
            }
        }

        output.join("\n")
    }
}
