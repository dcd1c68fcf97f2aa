/// Maximum number of characters kept from a conversation summary
pub const SUMMARY_LIMIT: usize = 300;

/// Appended to summaries that were cut short
pub const ELLIPSIS: &str = "...";

/// Truncate a summary to [`SUMMARY_LIMIT`] characters, appending [`ELLIPSIS`] only when
/// something was cut
///
/// Counts Unicode scalar values, so multi-byte text is never split mid-character.
pub fn truncate_summary(summary: &str) -> String {
    match summary.char_indices().nth(SUMMARY_LIMIT) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + ELLIPSIS.len());
            truncated.push_str(&summary[..cut]);
            truncated.push_str(ELLIPSIS);
            truncated
        }
        None => summary.to_string(),
    }
}
