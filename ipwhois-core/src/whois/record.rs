use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::parsers::ResponseParser;

/// Raw WHOIS response paired with the parser that understands it.
///
/// Fields are extracted on demand; nothing is parsed up front and nothing
/// is cached between calls to [`Record::get`].
#[derive(Clone)]
pub struct Record {
    server: String,
    parser: Arc<dyn ResponseParser>,
    data: Arc<[u8]>,
}

impl Record {
    pub fn new(server: impl Into<String>, parser: Arc<dyn ResponseParser>, data: Vec<u8>) -> Self {
        Self {
            server: server.into(),
            parser,
            data: data.into(),
        }
    }

    /// Returns the value of field `key`, or an empty string if absent.
    pub fn get(&self, key: &str) -> String {
        self.parser.get(&self.data, key)
    }

    /// Server that produced this response.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Name of the response dialect.
    pub fn dialect(&self) -> &'static str {
        self.parser.name()
    }

    pub fn raw(&self) -> &[u8] {
        &self.data
    }

    /// Response decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("server", &self.server)
            .field("dialect", &self.dialect())
            .field("len", &self.data.len())
            .finish()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", 3)?;
        state.serialize_field("server", &self.server)?;
        state.serialize_field("dialect", self.dialect())?;
        state.serialize_field("raw", &self.text())?;
        state.end()
    }
}
