use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_storage_path_lives_next_to_config() {
    let path = storage_path().unwrap();
    assert!(path.to_string_lossy().contains(".config/alumni-toast"));
    assert!(path.to_string_lossy().ends_with("storage.json"));
}

#[test]
fn test_memory_store_set_get_remove() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get(EMAIL_KEY), None);

    store.set(EMAIL_KEY, "user@example.com").unwrap();
    assert_eq!(store.get(EMAIL_KEY).as_deref(), Some("user@example.com"));

    store.set(EMAIL_KEY, "other@example.com").unwrap();
    assert_eq!(store.get(EMAIL_KEY).as_deref(), Some("other@example.com"));
    assert_eq!(store.len(), 1);

    store.remove(EMAIL_KEY).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_memory_store_remove_missing_key() {
    let mut store = MemoryStore::new();
    assert!(store.remove("nothing").is_ok());
}

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("storage.json")).unwrap();
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn test_file_store_persists_across_opens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("storage.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(REMEMBER_ME_KEY, "true").unwrap();
    store.set(EMAIL_KEY, "user@example.com").unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get(REMEMBER_ME_KEY).as_deref(), Some("true"));
    assert_eq!(reopened.get(EMAIL_KEY).as_deref(), Some("user@example.com"));
    assert_eq!(reopened.path(), path.as_path());
}

#[test]
fn test_file_store_remove_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(TOKEN_KEY, "abc").unwrap();
    store.remove(TOKEN_KEY).unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get(TOKEN_KEY), None);
}

#[test]
fn test_file_store_reads_existing_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, r#"{"token": "secret-token"}"#).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("secret-token"));
}

#[test]
fn test_file_store_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "not json").unwrap();

    let result = JsonFileStore::open(&path);
    assert!(matches!(result, Err(AppError::Storage(_))));
}
