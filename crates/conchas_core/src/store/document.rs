//! Whole-document read and write for the JSON store.
//!
//! # Responsibility
//! - Read and parse the full document with a scoped file handle.
//! - Serialize and overwrite the full document with stable formatting.
//!
//! # Invariants
//! - The read handle is released before any write phase begins.
//! - Serialized output uses two-space indentation and literal non-ASCII text.

use super::{Document, StoreResult};
use log::{error, info};
use std::path::Path;
use std::time::Instant;

/// Reads the document file and parses it into memory.
///
/// The whole file is held in memory at once; the target document is assumed
/// small.
///
/// # Errors
/// - Returns `StoreError::Io` when the file is missing or unreadable.
/// - Returns `StoreError::Json` when the content is not valid JSON.
pub fn load_document(path: impl AsRef<Path>) -> StoreResult<Document> {
    let started_at = Instant::now();
    info!("event=store_load module=store status=start");

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            error!(
                "event=store_load module=store status=error duration_ms={} error_code=store_read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match serde_json::from_str(&raw) {
        Ok(document) => {
            info!(
                "event=store_load module=store status=ok duration_ms={} bytes={}",
                started_at.elapsed().as_millis(),
                raw.len()
            );
            Ok(document)
        }
        Err(err) => {
            error!(
                "event=store_load module=store status=error duration_ms={} error_code=store_parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

/// Serializes the document and overwrites the file at `path`.
///
/// The write is not atomic: a failure mid-write can leave a truncated file.
///
/// # Side effects
/// - Replaces the previous file content entirely.
/// - Emits `store_save` logging events with duration and status.
pub fn save_document(path: impl AsRef<Path>, document: &Document) -> StoreResult<()> {
    let started_at = Instant::now();
    info!("event=store_save module=store status=start");

    let serialized = match serde_json::to_string_pretty(document) {
        Ok(serialized) => serialized,
        Err(err) => {
            error!(
                "event=store_save module=store status=error duration_ms={} error_code=store_serialize_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match std::fs::write(path, serialized.as_bytes()) {
        Ok(()) => {
            info!(
                "event=store_save module=store status=ok duration_ms={} bytes={}",
                started_at.elapsed().as_millis(),
                serialized.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=store status=error duration_ms={} error_code=store_write_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
