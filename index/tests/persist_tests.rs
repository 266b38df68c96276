use index::{InvertedIndex, StorageError};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn sorted_docs(idx: &InvertedIndex, word: &str) -> Vec<String> {
    let mut docs = idx.get_docs(word);
    docs.sort();
    docs
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.json");

    let mut idx = InvertedIndex::new();
    idx.add_doc("http://x/1", &words(&["rust", "web", "search"]));
    idx.add_doc("http://x/2", &words(&["rust"]));
    idx.add_doc("http://x/3", &words(&["web", "crawl"]));
    idx.save(&path).unwrap();

    let loaded = InvertedIndex::load(&path).unwrap();
    assert_eq!(loaded.doc_count(), 3);
    for word in ["rust", "web", "search", "crawl", "missing"] {
        assert_eq!(sorted_docs(&loaded, word), sorted_docs(&idx, word));
    }
}

#[test]
fn saved_file_uses_docs_and_words_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.json");

    let mut idx = InvertedIndex::new();
    idx.add_doc("http://x/1", &words(&["rust"]));
    idx.add_doc("http://x/2", &words(&["rust"]));
    idx.save(&path).unwrap();

    let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["Docs"][0], "http://x/1");
    assert_eq!(json["Docs"][1], "http://x/2");
    assert_eq!(json["Words"]["rust"]["0"], true);
    assert_eq!(json["Words"]["rust"]["1"], true);
}

#[test]
fn load_missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = InvertedIndex::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StorageError::Read { .. }), "got {err:?}");
}

#[test]
fn load_invalid_json_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.json");
    fs::write(&path, "{ not json").unwrap();
    let err = InvertedIndex::load(&path).unwrap_err();
    assert!(matches!(err, StorageError::Malformed { .. }), "got {err:?}");
}

#[test]
fn load_wrong_shape_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.json");
    fs::write(&path, r#"{"Docs": "nope", "Words": {}}"#).unwrap();
    let err = InvertedIndex::load(&path).unwrap_err();
    assert!(matches!(err, StorageError::Malformed { .. }), "got {err:?}");
}

#[test]
fn load_rejects_out_of_range_doc_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.json");
    fs::write(
        &path,
        r#"{"Docs": ["http://x/1"], "Words": {"rust": {"0": true, "9": true}}}"#,
    )
    .unwrap();
    let err = InvertedIndex::load(&path).unwrap_err();
    assert!(
        matches!(err, StorageError::DocIdOutOfRange { doc_id: 9, num_docs: 1, .. }),
        "got {err:?}"
    );
}

#[test]
fn empty_index_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.json");
    InvertedIndex::new().save(&path).unwrap();
    let loaded = InvertedIndex::load(&path).unwrap();
    assert!(loaded.is_empty());
    assert_eq!(loaded.word_count(), 0);
}
