//! Read-only collection inventory over a loaded document.

use super::{json_type_name, Document, StoreError, StoreResult};
use serde::Serialize;

/// Inventory entry for one top-level collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionStat {
    /// Top-level key name.
    pub name: String,
    /// Entry count when the value is an array, `None` otherwise.
    pub entries: Option<usize>,
}

/// Inventory of the document's top-level collections, in document key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionReport {
    pub collections: Vec<CollectionStat>,
}

impl CollectionReport {
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// Builds the collection inventory for a loaded document.
///
/// # Errors
/// - Returns `StoreError::NotAnObject` when the document root is not a JSON
///   object.
pub fn collection_report(document: &Document) -> StoreResult<CollectionReport> {
    let root = document.as_object().ok_or(StoreError::NotAnObject {
        found: json_type_name(document),
    })?;

    let collections = root
        .iter()
        .map(|(name, value)| CollectionStat {
            name: name.clone(),
            entries: value.as_array().map(Vec::len),
        })
        .collect();

    Ok(CollectionReport { collections })
}
