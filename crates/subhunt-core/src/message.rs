//! Message metadata as returned by the mail service, and header lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder subject for messages without a `Subject` header.
pub const NO_SUBJECT: &str = "No Subject";
/// Placeholder sender for messages without a `From` header.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Opaque message identifier issued by the mail service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single message header. Names are not unique within a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Header and snippet metadata for one message.
///
/// Produced by the mail service per fetched identifier and consumed once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    pub id: MessageId,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl MessageMetadata {
    /// Value of the first header whose name equals `name` exactly.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name == name)
            .map(|h| h.value.as_str())
    }
}

/// The four fields the classifier reads from a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFields<'a> {
    pub subject: &'a str,
    pub sender: &'a str,
    pub date: &'a str,
    pub snippet: &'a str,
}

/// Pull subject, sender, date and snippet out of message metadata.
///
/// Header names match case-sensitively and the first match wins. Missing
/// fields fall back to [`NO_SUBJECT`], [`UNKNOWN_SENDER`] and `""`.
pub fn extract_fields(msg: &MessageMetadata) -> MessageFields<'_> {
    MessageFields {
        subject: msg.header("Subject").unwrap_or(NO_SUBJECT),
        sender: msg.header("From").unwrap_or(UNKNOWN_SENDER),
        date: msg.header("Date").unwrap_or(""),
        snippet: msg.snippet.as_deref().unwrap_or(""),
    }
}
