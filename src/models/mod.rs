//! Data models for an exported chat conversation archive.
//!
//! - [`Conversation`], [`Message`], [`ContentBlock`] - records as found in
//!   `conversations.json`
//! - [`SearchResult`] - the shaped, read-only view returned by a search
//! - [`MatchLocation`] / [`MatchLocations`] - where a query matched
//! - [`Timestamp`] - a timestamp kept in its exported JSON form
//!
//! Uuids and nullable content arrays go through the custom deserializers in
//! `parsers::deserializers`.

pub mod conversation;
pub mod search;
pub mod timestamp;

pub use conversation::{ContentBlock, Conversation, Message};
pub use search::{MatchLocation, MatchLocations, SearchResult};
pub use timestamp::Timestamp;
