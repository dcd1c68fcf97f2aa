use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::ArchiveError;
use crate::models::Conversation;
use crate::store::ConversationStore;
use crate::utils::validate_file_size;

/// What to do with records that fail validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Abort on the first malformed or duplicate record
    Strict,
    /// Log and skip bad records, failing only when more than half are rejected
    #[default]
    Lenient,
}

/// Load a `conversations.json` export into a [`ConversationStore`]
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds the size limit, is not a JSON
/// array, or if records are rejected beyond what `policy` tolerates. In strict mode the
/// underlying [`ArchiveError`] can be recovered with `downcast_ref`.
pub fn load_archive(path: &Path, policy: LoadPolicy) -> Result<ConversationStore> {
    // Validate size on the open handle to avoid a TOCTOU race
    let file = File::open(path)
        .with_context(|| format!("Failed to open archive file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let store = parse_archive(BufReader::new(file), policy)
        .with_context(|| format!("Failed to load archive: {}", path.display()))?;

    info!(path = %path.display(), conversations = store.len(), "archive loaded");
    Ok(store)
}

/// Parse an archive from any reader; see [`load_archive`]
pub fn parse_archive<R: Read>(reader: R, policy: LoadPolicy) -> Result<ConversationStore> {
    let value: Value = serde_json::from_reader(reader).context("Archive is not valid JSON")?;
    let Value::Array(records) = value else {
        bail!("Archive must be a JSON array of conversations");
    };

    let conversations = decode_records(records, policy)?;
    Ok(ConversationStore::from_conversations(conversations)?)
}

fn decode_records(records: Vec<Value>, policy: LoadPolicy) -> Result<Vec<Conversation>> {
    let total = records.len();
    let mut conversations = Vec::with_capacity(total);
    let mut seen = HashSet::with_capacity(total);
    let mut skipped_count = 0;

    for (index, record) in records.into_iter().enumerate() {
        let rejection = match serde_json::from_value::<Conversation>(record) {
            Ok(conv) if seen.contains(&conv.uuid) => {
                ArchiveError::DuplicateUuid { uuid: conv.uuid }
            }
            Ok(conv) => {
                seen.insert(conv.uuid.clone());
                conversations.push(conv);
                continue;
            }
            Err(e) => ArchiveError::MalformedRecord { index, reason: e.to_string() },
        };

        if policy == LoadPolicy::Strict {
            return Err(rejection.into());
        }
        warn!(index, "Skipping conversation record: {}", rejection);
        skipped_count += 1;
    }

    if total > 0 {
        let failure_rate = (skipped_count as f64) / (total as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many rejected records: {} of {} failed ({:.1}%)",
                skipped_count,
                total,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        warn!(loaded = conversations.len(), skipped = skipped_count, "archive had bad records");
    }

    Ok(conversations)
}
