//! JSON document store bootstrap and collection migration entry points.
//!
//! # Responsibility
//! - Load and persist the backend `db.json` document store.
//! - Ensure required collections exist in deterministic order.
//!
//! # Invariants
//! - Collection membership is checked against the live document, never cached.
//! - Store code must not overwrite the file before a successful parse.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod document;
pub mod migrations;
pub mod report;

pub use document::{load_document, save_document};
pub use migrations::{augment_store, ensure_collections, managed_collections, AugmentOutcome};
pub use report::{collection_report, CollectionReport, CollectionStat};

/// In-memory form of the persisted `db.json` document.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type Document = serde_json::Value;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NotAnObject { found: &'static str },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::NotAnObject { found } => {
                write!(f, "document root must be a JSON object, found {found}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::NotAnObject { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

pub(crate) fn json_type_name(value: &Document) -> &'static str {
    match value {
        Document::Null => "null",
        Document::Bool(_) => "boolean",
        Document::Number(_) => "number",
        Document::String(_) => "string",
        Document::Array(_) => "array",
        Document::Object(_) => "object",
    }
}
