use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::timestamp::Timestamp;

/// A single conversation from the archive export
///
/// Fields the search core does not look at are kept in `extra`, and timestamps keep
/// their raw JSON form, so that a lookup hands back the record exactly as it was exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_uuid")]
    pub uuid: String,
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    pub chat_messages: Vec<Message>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_as_empty")]
    pub content: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Nested block inside a message; only `text` takes part in matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Conversation {
    pub fn message_count(&self) -> usize {
        self.chat_messages.len()
    }
}

impl Message {
    /// Content blocks that carry non-empty text
    pub fn text_blocks(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(|block| block.text.as_deref()).filter(|t| !t.is_empty())
    }
}
