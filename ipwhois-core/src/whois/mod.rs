mod client;
pub mod parsers;
mod record;
pub mod servers;
mod transport;

pub use client::WhoisClient;
pub use parsers::{CymruParser, ParserRegistry, ResponseParser, RpslParser, PARSER_REGISTRY};
pub use record::Record;
