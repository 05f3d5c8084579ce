//! Reference-string input from files and the configured entry point.

use std::fs;

use pagesim::{load_references, Error, PageId, Policy, SimConfig};
use tempfile::tempdir;

#[test]
fn test_load_references_whitespace_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "7 0 1\n2 0 3\n").unwrap();

    let refs = load_references(&path).unwrap();
    let expected: Vec<PageId> = [7, 0, 1, 2, 0, 3].into_iter().map(PageId::new).collect();
    assert_eq!(refs, expected);
}

#[test]
fn test_load_references_comma_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.csv");
    fs::write(&path, "1,2;3,\n4\n").unwrap();

    let refs = load_references(&path).unwrap();
    assert_eq!(refs.len(), 4);
    assert_eq!(refs[3], PageId::new(4));
}

#[test]
fn test_load_references_invalid_token() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1 2 three").unwrap();

    match load_references(&path) {
        Err(Error::InvalidToken(token)) => assert_eq!(token, "three"),
        other => panic!("Expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn test_load_references_missing_file() {
    let dir = tempdir().unwrap();
    let result = load_references(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_file_to_trace() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "3,3,3,2,2,4,5,6,54,3,2,54,8,2,2,8").unwrap();

    let refs = load_references(&path).unwrap();
    let trace = SimConfig::default().run(&refs).unwrap();

    assert_eq!(trace.policy(), Policy::Lru);
    assert_eq!(trace.capacity(), 3);
    assert_eq!(trace.len(), 16);
    assert_eq!(trace.metrics().hits, 7);
}

#[test]
fn test_empty_file_rejected_by_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "  \n").unwrap();

    let refs = load_references(&path).unwrap();
    assert!(refs.is_empty());
    assert!(matches!(
        SimConfig::default().run(&refs),
        Err(Error::EmptyReferences)
    ));
}
