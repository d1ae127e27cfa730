//! Citation store integration tests against on-disk databases

use papertrail_domain::{CitationRecord, SourceType};
use papertrail_store::{CitationStore, StoreError};
use rstest::rstest;
use tempfile::TempDir;

fn sample(title: &str) -> CitationRecord {
    CitationRecord::website(format!("https://example.org/{}", title))
        .with_title(title)
        .with_authors("Grace Hopper, Alan Turing")
        .with_year("1952")
        .with_journal("Journal of Machines")
        .with_volume("3")
        .with_issue("1")
        .with_pages("1-9")
        .with_doi("10.1000/machines")
}

#[test]
fn test_list_all_preserves_insertion_order() {
    let store = CitationStore::in_memory().unwrap();
    let ids: Vec<i64> = ["first", "second", "third"]
        .iter()
        .map(|t| store.create(&sample(t)).unwrap())
        .collect();

    let records = store.list_all().unwrap();
    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
    assert_eq!(
        records.iter().map(|r| r.id.unwrap()).collect::<Vec<_>>(),
        ids
    );
}

#[test]
fn test_all_fields_survive_storage() {
    let store = CitationStore::in_memory().unwrap();
    let original = sample("complete");
    let id = store.create(&original).unwrap();

    let loaded = store.get(id).unwrap();
    let expected = original.with_identity(id, loaded.date_added.clone());
    assert_eq!(loaded, expected);
    assert_eq!(loaded.source_type, SourceType::Website);
}

#[test]
fn test_delete_then_list() {
    let store = CitationStore::in_memory().unwrap();
    let a = store.create(&sample("a")).unwrap();
    let b = store.create(&sample("b")).unwrap();

    assert!(store.delete(a).unwrap());
    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, Some(b));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn test_clear_all_reports_removed(#[case] count: usize) {
    let store = CitationStore::in_memory().unwrap();
    for i in 0..count {
        store.create(&sample(&i.to_string())).unwrap();
    }
    assert_eq!(store.clear_all().unwrap(), count);
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_reopen_keeps_records_and_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("citations.db");

    let id = {
        let store = CitationStore::open(&path).unwrap();
        store.create(&sample("persisted")).unwrap()
    };

    let store = CitationStore::open(&path).unwrap();
    assert_eq!(store.get(id).unwrap().title, "persisted");
    assert_eq!(store.schema_version(), papertrail_store::SCHEMA_VERSION);
}

#[test]
fn test_unknown_source_type_round_trips() {
    let store = CitationStore::in_memory().unwrap();
    let mut record = sample("imported");
    record.source_type = SourceType::from("bibtex");

    let id = store.create(&record).unwrap();
    assert_eq!(
        store.get(id).unwrap().source_type,
        SourceType::Other("bibtex".to_string())
    );
}

#[test]
fn test_missing_id_error_message() {
    let store = CitationStore::in_memory().unwrap();
    let err = store.get(7).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(7)));
    assert_eq!(err.to_string(), "Citation not found: 7");
}
