use thiserror::Error;

/// Errors raised while building or querying a [`ConversationStore`](crate::store::ConversationStore)
///
/// Empty queries are not errors; a search with nothing to look for simply returns no results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    #[error("Conversation not found: {uuid}")]
    NotFound { uuid: String },

    #[error("Malformed conversation record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Duplicate conversation uuid: {uuid}")]
    DuplicateUuid { uuid: String },
}

impl ArchiveError {
    pub fn not_found(uuid: impl Into<String>) -> Self {
        ArchiveError::NotFound { uuid: uuid.into() }
    }
}
