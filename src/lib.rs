//! Conversation Search - keyword search over an exported chat conversation archive
//!
//! This library loads a `conversations.json` export into an immutable in-memory store
//! and answers keyword queries against it. It supports:
//!
//! - Loading and validating the archive, with strict or lenient handling of bad records
//! - Case-insensitive substring search over titles, summaries and messages
//! - Deep search that also scans nested message content blocks
//! - Looking up a full conversation by uuid
//! - Serving both operations as a JSON HTTP API
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use conversation_search::{LoadPolicy, SearchEngine, load_archive};
//!
//! let store = load_archive(Path::new("conversations.json"), LoadPolicy::Lenient)?;
//! for result in SearchEngine::new(&store).search("trip", false) {
//!     println!("{} {:?}", result.name, result.match_locations);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod search;
pub mod server;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error::ArchiveError;
pub use models::{ContentBlock, Conversation, MatchLocation, MatchLocations, Message, SearchResult};
pub use parsers::{LoadPolicy, load_archive, parse_archive};
pub use search::SearchEngine;
pub use store::{ConversationStore, get_conversation};
pub use utils::format_path_with_tilde;
