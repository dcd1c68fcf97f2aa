use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Conversation;

/// Aggregate counts over the whole archive
///
/// Timestamps that do not parse are left out of the date range and counted in
/// `unparsed_timestamps` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveStats {
    pub conversations: usize,
    pub messages: usize,
    pub content_blocks: usize,
    pub oldest_created_at: Option<DateTime<Utc>>,
    pub newest_updated_at: Option<DateTime<Utc>>,
    pub unparsed_timestamps: usize,
}

impl ArchiveStats {
    pub fn collect(conversations: &[Conversation]) -> Self {
        let mut stats = Self { conversations: conversations.len(), ..Self::default() };

        for conv in conversations {
            stats.messages += conv.chat_messages.len();
            stats.content_blocks +=
                conv.chat_messages.iter().map(|m| m.content.len()).sum::<usize>();

            match conv.created_at.parse() {
                Some(created) => {
                    stats.oldest_created_at =
                        Some(stats.oldest_created_at.map_or(created, |ts| ts.min(created)));
                }
                None => stats.unparsed_timestamps += 1,
            }
            match conv.updated_at.parse() {
                Some(updated) => {
                    stats.newest_updated_at =
                        Some(stats.newest_updated_at.map_or(updated, |ts| ts.max(updated)));
                }
                None => stats.unparsed_timestamps += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::test_support::{conversation, conversation_with_blocks, ts};

    #[test]
    fn test_stats_empty() {
        assert_eq!(ArchiveStats::collect(&[]), ArchiveStats::default());
    }

    #[test]
    fn test_stats_counts_and_range() {
        let mut early = conversation("a", "a", "", &["one", "two"]);
        early.created_at = ts(1_000);
        early.updated_at = ts(5_000);
        let mut late = conversation_with_blocks("b", "b", "", &[("three", &["x", "y"])]);
        late.created_at = ts(2_000);
        late.updated_at = ts(9_000);

        let stats = ArchiveStats::collect(&[late, early]);
        assert_eq!(stats.conversations, 2);
        assert_eq!(stats.messages, 3);
        assert_eq!(stats.content_blocks, 2);
        assert_eq!(stats.oldest_created_at, DateTime::from_timestamp(1_000, 0));
        assert_eq!(stats.newest_updated_at, DateTime::from_timestamp(9_000, 0));
        assert_eq!(stats.unparsed_timestamps, 0);
    }

    #[test]
    fn test_stats_skips_unparseable_timestamps() {
        let mut odd = conversation("a", "a", "", &[]);
        odd.created_at = serde_json::from_value(json!("sometime in march")).unwrap();
        odd.updated_at = ts(3_000);
        let mut plain = conversation("b", "b", "", &[]);
        plain.created_at = serde_json::from_value(json!("2024-03-01 10:00:00")).unwrap();
        plain.updated_at = ts(4_000);

        let stats = ArchiveStats::collect(&[odd, plain]);
        assert_eq!(stats.unparsed_timestamps, 1);
        assert_eq!(
            stats.oldest_created_at,
            Some("2024-03-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap())
        );
        assert_eq!(stats.newest_updated_at, DateTime::from_timestamp(4_000, 0));
    }
}
