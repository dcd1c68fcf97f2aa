//! In-memory conversation store.
//!
//! The store is built once from the loaded archive and never mutated afterwards.
//! Searches and lookups borrow it immutably, so it can be shared between request
//! handlers behind an `Arc` without any locking. Reloading means building a new
//! store and publishing a new `Arc`.

pub mod stats;

use std::collections::HashMap;

use crate::error::ArchiveError;
use crate::models::Conversation;

pub use stats::ArchiveStats;

#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    by_uuid: HashMap<String, usize>,
}

impl ConversationStore {
    /// Build a store, keeping load order
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::DuplicateUuid`] if two records share a uuid.
    pub fn from_conversations(conversations: Vec<Conversation>) -> Result<Self, ArchiveError> {
        let mut by_uuid = HashMap::with_capacity(conversations.len());
        for (idx, conv) in conversations.iter().enumerate() {
            if by_uuid.insert(conv.uuid.clone(), idx).is_some() {
                return Err(ArchiveError::DuplicateUuid { uuid: conv.uuid.clone() });
            }
        }

        Ok(Self { conversations, by_uuid })
    }

    /// All conversations in load order
    pub fn all(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn find_by_uuid(&self, uuid: &str) -> Result<&Conversation, ArchiveError> {
        self.by_uuid
            .get(uuid)
            .map(|&idx| &self.conversations[idx])
            .ok_or_else(|| ArchiveError::not_found(uuid))
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn stats(&self) -> ArchiveStats {
        ArchiveStats::collect(&self.conversations)
    }
}

/// Fetch a full, unredacted conversation by uuid
pub fn get_conversation<'a>(
    store: &'a ConversationStore,
    uuid: &str,
) -> Result<&'a Conversation, ArchiveError> {
    store.find_by_uuid(uuid)
}

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::json;

    use crate::models::{Conversation, Timestamp};

    /// Timestamp stored as integer Unix milliseconds
    pub fn ts(secs: i64) -> Timestamp {
        serde_json::from_value(json!(secs * 1000)).expect("valid timestamp")
    }

    /// Conversation with plain-text messages
    pub fn conversation(uuid: &str, name: &str, summary: &str, messages: &[&str]) -> Conversation {
        let chat_messages: Vec<_> = messages.iter().map(|t| json!({"text": t})).collect();
        serde_json::from_value(json!({
            "uuid": uuid,
            "name": name,
            "summary": summary,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
            "chat_messages": chat_messages,
        }))
        .expect("valid conversation")
    }

    /// Conversation whose messages carry content blocks: `(text, [block texts])`
    pub fn conversation_with_blocks(
        uuid: &str,
        name: &str,
        summary: &str,
        messages: &[(&str, &[&str])],
    ) -> Conversation {
        let chat_messages: Vec<_> = messages
            .iter()
            .map(|(text, blocks)| {
                let content: Vec<_> =
                    blocks.iter().map(|b| json!({"type": "text", "text": b})).collect();
                json!({"text": text, "content": content})
            })
            .collect();
        serde_json::from_value(json!({
            "uuid": uuid,
            "name": name,
            "summary": summary,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
            "chat_messages": chat_messages,
        }))
        .expect("valid conversation")
    }
}
