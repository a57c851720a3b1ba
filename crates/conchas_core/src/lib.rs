//! Core document-store logic for the conchas backend tooling.
//! This crate is the single source of truth for store invariants.

pub mod logging;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use store::{
    augment_store, collection_report, ensure_collections, load_document, managed_collections,
    save_document, AugmentOutcome, CollectionReport, CollectionStat, Document, StoreError,
    StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
