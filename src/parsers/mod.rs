//! Parsers for conversation archive exports
//!
//! # Error Handling Strategy
//!
//! The loader supports two policies, picked by the caller:
//!
//! - **Strict**: the first record that fails to decode (missing or mistyped field) or that
//!   repeats an earlier uuid aborts the load with a typed [`ArchiveError`](crate::error::ArchiveError).
//!
//! - **Lenient** (default): bad records are logged with `tracing::warn!` and skipped, so a
//!   single corrupted conversation does not make the whole archive unusable. If more than
//!   50% of records are rejected the load fails anyway, since the file is most likely not
//!   a conversation export at all.
//!
//! File-level problems (missing file, oversized file, invalid JSON, non-array top level)
//! always fail with `anyhow` context describing the path.

pub mod archive;
pub mod deserializers;

pub use archive::{LoadPolicy, load_archive, parse_archive};
