//! Managed collection registry and executor.
//!
//! # Responsibility
//! - Register the collections every deployment of the store must carry.
//! - Insert missing collections idempotently and persist the result.
//!
//! # Invariants
//! - Collections already present are never modified, whatever their value.
//! - Keys outside the managed set are never touched.

use super::document::{load_document, save_document};
use super::{json_type_name, Document, StoreError, StoreResult};
use log::{error, info};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

const MANAGED_COLLECTIONS: &[&str] = &["categories", "pricing", "systemSettings"];

/// Returns the managed collection names in registration order.
pub fn managed_collections() -> &'static [&'static str] {
    MANAGED_COLLECTIONS
}

/// Result of one augmentation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AugmentOutcome {
    /// Collection names inserted by this run, in registration order.
    pub added: Vec<&'static str>,
}

/// Inserts every missing managed collection with an empty array value.
///
/// Returns the names actually inserted, in registration order. Collections
/// already present keep their value unchanged, whatever its type.
///
/// # Errors
/// - Returns `StoreError::NotAnObject` when the document root is not a JSON
///   object.
pub fn ensure_collections(document: &mut Document) -> StoreResult<Vec<&'static str>> {
    let found = json_type_name(document);
    let root = match document.as_object_mut() {
        Some(root) => root,
        None => return Err(StoreError::NotAnObject { found }),
    };

    let mut added = Vec::new();
    for name in MANAGED_COLLECTIONS {
        if !root.contains_key(*name) {
            root.insert((*name).to_string(), Document::Array(Vec::new()));
            added.push(*name);
        }
    }

    Ok(added)
}

/// Loads the store file, inserts missing managed collections, and writes the
/// full document back to the same path.
///
/// The file is rewritten even when nothing was missing, so repeated runs
/// converge on the same serialized form.
///
/// # Side effects
/// - Overwrites the target file once the document parses as an object.
/// - Emits `store_migrate` logging events with duration and status.
pub fn augment_store(path: impl AsRef<Path>) -> StoreResult<AugmentOutcome> {
    let started_at = Instant::now();
    info!("event=store_migrate module=store status=start");

    match run_migration(path.as_ref()) {
        Ok(outcome) => {
            info!(
                "event=store_migrate module=store status=ok duration_ms={} added={}",
                started_at.elapsed().as_millis(),
                outcome.added.len()
            );
            Ok(outcome)
        }
        Err(err) => {
            error!(
                "event=store_migrate module=store status=error duration_ms={} error_code=store_migrate_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn run_migration(path: &Path) -> StoreResult<AugmentOutcome> {
    let mut document = load_document(path)?;
    let added = ensure_collections(&mut document)?;
    for name in &added {
        info!("event=collection_added module=store status=ok collection={name}");
    }
    save_document(path, &document)?;
    Ok(AugmentOutcome { added })
}
