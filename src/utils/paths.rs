use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

// Maximum archive size: 1GiB
const MAX_FILE_SIZE_BYTES: u64 = 1024 * 1024 * 1024;

/// Expands a leading `~` to the user's home directory
///
/// Paths without a leading `~`, or when no home directory is known, are returned as-is.
pub fn expand_tilde(path: &Path) -> PathBuf {
    expand_tilde_internal(path, dirs::home_dir().as_deref())
}

pub(crate) fn expand_tilde_internal(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Validates that a file's size is within acceptable limits (1GiB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 1GiB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    validate_file_size_with_limit(file, path, MAX_FILE_SIZE_BYTES)
}

pub(crate) fn validate_file_size_with_limit(file: &File, path: &Path, limit: u64) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > limit {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), file_size, limit);
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// Only whole path components are matched, so `/home/alice` is not shortened
/// when the home directory is `/home/al`.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use conversation_search::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/exports/conversations.json");
/// // Returns "~/exports/conversations.json" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.to_string_lossy().into_owned()
}
