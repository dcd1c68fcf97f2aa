//! Keyword search over a [`ConversationStore`](crate::store::ConversationStore).
//!
//! Matching is case-insensitive substring containment, checked field by field:
//! title, summary, message text, and (deep mode only) nested content blocks.
//! Results keep store order; there is no relevance ranking.

pub mod engine;
pub mod summary;

pub use engine::SearchEngine;
pub use summary::{ELLIPSIS, SUMMARY_LIMIT, truncate_summary};
