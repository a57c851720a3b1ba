use conchas_core::{collection_report, CollectionStat, StoreError};
use serde_json::json;

#[test]
fn reports_each_collection_with_entry_counts() {
    let document = json!({
        "categories": [{"id": "cat-001"}, {"id": "cat-002"}],
        "pricing": [],
        "meta": {"version": 3},
    });

    let report = collection_report(&document).unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(
        report.collections[0],
        CollectionStat {
            name: "categories".to_string(),
            entries: Some(2),
        }
    );
    assert_eq!(
        report.collections[1],
        CollectionStat {
            name: "pricing".to_string(),
            entries: Some(0),
        }
    );
    assert_eq!(
        report.collections[2],
        CollectionStat {
            name: "meta".to_string(),
            entries: None,
        }
    );
}

#[test]
fn empty_document_reports_no_collections() {
    let report = collection_report(&json!({})).unwrap();

    assert!(report.is_empty());
    assert_eq!(report.len(), 0);
}

#[test]
fn rejects_non_object_root() {
    let err = collection_report(&json!("conchas")).unwrap_err();

    match err {
        StoreError::NotAnObject { found } => assert_eq!(found, "string"),
        other => panic!("unexpected error: {other}"),
    }
}
