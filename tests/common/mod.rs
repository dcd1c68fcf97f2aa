//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a temp directory holding a `conversations.json` archive
pub struct ArchiveBuilder {
    temp_dir: TempDir,
    records: Vec<Value>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: Vec::new() }
    }

    /// Add a conversation record
    pub fn with_conversation(mut self, conversation: ConversationBuilder) -> Self {
        self.records.push(conversation.to_json());
        self
    }

    /// Add an arbitrary (possibly malformed) record
    pub fn with_raw_record(mut self, record: Value) -> Self {
        self.records.push(record);
        self
    }

    /// Write the archive and return the temp dir with the archive path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("conversations.json");
        fs::write(&path, Value::Array(self.records).to_string())
            .expect("Failed to write conversations.json");
        (self.temp_dir, path)
    }

    /// Write raw file content instead of the collected records
    pub fn build_raw(self, content: &str) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("conversations.json");
        fs::write(&path, content).expect("Failed to write conversations.json");
        (self.temp_dir, path)
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single conversation record
pub struct ConversationBuilder {
    uuid: String,
    name: String,
    summary: String,
    created_at: Value,
    updated_at: Value,
    messages: Vec<MessageBuilder>,
}

impl ConversationBuilder {
    pub fn new(uuid: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            name: "Untitled".to_string(),
            summary: String::new(),
            created_at: json!("2024-05-01T12:00:00Z"),
            updated_at: json!("2024-05-02T12:00:00Z"),
            messages: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.summary = summary.to_string();
        self
    }

    /// Set the raw created_at value (string, integer millis, or anything else)
    pub fn created_at(mut self, created_at: impl Into<Value>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Set the raw updated_at value
    pub fn updated_at(mut self, updated_at: impl Into<Value>) -> Self {
        self.updated_at = updated_at.into();
        self
    }

    pub fn message(mut self, message: MessageBuilder) -> Self {
        self.messages.push(message);
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "uuid": self.uuid,
            "name": self.name,
            "summary": self.summary,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
            "account": {"uuid": "acct-0001"},
            "chat_messages": self.messages.iter().map(MessageBuilder::to_json).collect::<Vec<_>>(),
        })
    }
}

/// Builder for a chat message with optional content blocks
pub struct MessageBuilder {
    sender: String,
    text: String,
    blocks: Vec<Value>,
}

impl MessageBuilder {
    pub fn human(text: &str) -> Self {
        Self { sender: "human".to_string(), text: text.to_string(), blocks: Vec::new() }
    }

    pub fn assistant(text: &str) -> Self {
        Self { sender: "assistant".to_string(), text: text.to_string(), blocks: Vec::new() }
    }

    /// Add a text content block
    pub fn text_block(mut self, text: &str) -> Self {
        self.blocks.push(json!({"type": "text", "text": text}));
        self
    }

    /// Add a tool_use block (no text field)
    pub fn tool_use_block(mut self, name: &str) -> Self {
        self.blocks.push(json!({"type": "tool_use", "name": name, "input": {}}));
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "sender": self.sender,
            "text": self.text,
            "content": self.blocks,
        })
    }
}

/// A small archive covering every match location
pub fn realistic_archive() -> (TempDir, PathBuf) {
    ArchiveBuilder::new()
        .with_conversation(
            ConversationBuilder::new("a1").name("Trip Planning").summary("Weekend in Lisbon"),
        )
        .with_conversation(
            ConversationBuilder::new("b2")
                .name("Rust lifetimes")
                .summary("Explaining borrow checker errors")
                .message(MessageBuilder::human("Why does my trip iterator not compile?"))
                .message(MessageBuilder::assistant("Let's look at it.").text_block("fn trip()")),
        )
        .with_conversation(
            ConversationBuilder::new("c3")
                .name("Recipes")
                .summary("Weeknight dinners")
                .message(
                    MessageBuilder::assistant("Here are some ideas")
                        .tool_use_block("web_search")
                        .text_block("Pack snacks for the road trip"),
                ),
        )
        .build()
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}
