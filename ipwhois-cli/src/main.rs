mod display;

use std::time::Duration;

use clap::Parser;
use ipwhois_core::colors::PaletteExt;
use ipwhois_core::output::{get_formatter, OutputFormat};
use ipwhois_core::WhoisClient;
use tracing_subscriber::EnvFilter;

use crate::display::Spinner;

#[derive(Parser)]
#[command(name = "ipwhois")]
#[command(about = "WHOIS lookup via whois.cymru.com, following the registry referral")]
#[command(version)]
struct Cli {
    /// IP address or other query token
    query: String,

    /// Output format (human or json)
    #[arg(short, long, default_value = "human")]
    format: String,

    /// Print only these fields (repeatable, case-insensitive)
    #[arg(short = 'k', long = "field", value_name = "KEY")]
    fields: Vec<String>,

    /// Network timeout in seconds for each connect, write and read
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Server queried first
    #[arg(long, value_name = "HOST")]
    bootstrap: Option<String>,

    /// Print the raw response text only
    #[arg(long, conflicts_with = "fields")]
    raw: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let query = cli.query.trim();
    if query.is_empty() {
        anyhow::bail!("query must not be empty");
    }

    let output_format: OutputFormat = cli.format.parse().unwrap_or_default();

    let mut client = WhoisClient::new().with_timeout(Duration::from_secs(cli.timeout));
    if let Some(bootstrap) = &cli.bootstrap {
        client = client.with_bootstrap(bootstrap);
    }

    let result = {
        let _spinner = (output_format == OutputFormat::Human && !cli.raw)
            .then(|| Spinner::new(&format!("Looking up {}...", query)));
        client.lookup(query).await
    };

    let record = match result {
        Ok(record) => record,
        Err(e) => {
            eprintln!("{} {}", "Error:".error(), e);
            std::process::exit(1);
        }
    };

    if cli.raw {
        print!("{}", record.text());
        return Ok(());
    }

    let formatter = get_formatter(output_format);
    if cli.fields.is_empty() {
        println!("{}", formatter.format_record(query, &record));
    } else {
        println!("{}", formatter.format_fields(query, &record, &cli.fields));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["ipwhois", "66.226.11.227"]).unwrap();
        assert_eq!(cli.query, "66.226.11.227");
        assert_eq!(cli.format, "human");
        assert_eq!(cli.timeout, 10);
        assert!(cli.fields.is_empty());
        assert!(cli.bootstrap.is_none());
        assert!(!cli.raw);
    }

    #[test]
    fn test_cli_repeated_fields() {
        let cli = Cli::try_parse_from([
            "ipwhois", "-k", "AS", "--field", "AS Name", "-f", "json", "66.226.11.227",
        ])
        .unwrap();
        assert_eq!(cli.fields, vec!["AS", "AS Name"]);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_raw_conflicts_with_fields() {
        assert!(Cli::try_parse_from(["ipwhois", "--raw", "-k", "AS", "1.1.1.1"]).is_err());
    }
}
