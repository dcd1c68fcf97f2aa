use tracing::debug;

use super::summary::truncate_summary;
use crate::models::{Conversation, MatchLocation, MatchLocations, SearchResult};
use crate::store::ConversationStore;

/// Runs keyword searches against a borrowed, immutable store
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    store: &'a ConversationStore,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a ConversationStore) -> Self {
        Self { store }
    }

    /// Search every conversation for `query`
    ///
    /// A blank query returns no results without scanning. In shallow mode message text
    /// is only checked when neither title nor summary matched, and content blocks are
    /// never inspected. Deep mode always scans messages and their content blocks.
    /// Results follow store order.
    pub fn search(&self, query: &str, deep: bool) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let results: Vec<SearchResult> = self
            .store
            .all()
            .iter()
            .filter_map(|conv| {
                let locations = match_conversation(conv, &needle, deep);
                (!locations.is_empty()).then(|| to_result(conv, locations))
            })
            .collect();

        debug!(query, deep, scanned = self.store.len(), matched = results.len(), "search finished");
        results
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Collect match locations for one conversation; `needle` must already be lowercased
fn match_conversation(conv: &Conversation, needle: &str, deep: bool) -> MatchLocations {
    let mut locations = MatchLocations::new();

    if contains_ci(&conv.name, needle) {
        locations.insert(MatchLocation::Title);
    }
    if contains_ci(&conv.summary, needle) {
        locations.insert(MatchLocation::Summary);
    }

    if locations.is_empty() || deep {
        for message in &conv.chat_messages {
            // The first matching message text ends the scan in both modes
            if contains_ci(&message.text, needle) {
                locations.insert(MatchLocation::Message);
                break;
            }

            if deep && message.text_blocks().any(|text| contains_ci(text, needle)) {
                locations.insert(MatchLocation::Content);
            }
        }
    }

    locations
}

fn to_result(conv: &Conversation, match_locations: MatchLocations) -> SearchResult {
    SearchResult {
        uuid: conv.uuid.clone(),
        name: conv.name.clone(),
        summary: truncate_summary(&conv.summary),
        created_at: conv.created_at.clone(),
        updated_at: conv.updated_at.clone(),
        message_count: conv.message_count(),
        match_locations,
    }
}
