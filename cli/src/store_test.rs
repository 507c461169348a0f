use super::*;

#[test]
fn missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("state.json"));
    assert_eq!(store.get("access_token"), None);
}

#[test]
fn writes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");
    let store = FileStore::open(&path);
    store.set("locale", "en").unwrap();
    store.set("access_token", "tok").unwrap();
    store.remove("access_token").unwrap();

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("locale").as_deref(), Some("en"));
    assert_eq!(reopened.get("access_token"), None);
}

#[test]
fn removing_missing_key_does_not_touch_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let store = FileStore::open(&path);
    store.remove("refresh_token").unwrap();
    assert!(!path.exists());
}

#[test]
fn corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "[1, 2").unwrap();
    let store = FileStore::open(&path);
    assert_eq!(store.get("locale"), None);
    store.set("locale", "fr").unwrap();
    assert_eq!(FileStore::open(&path).get("locale").as_deref(), Some("fr"));
}

#[test]
fn failed_write_leaves_entries_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"access_token":"tok"}"#).unwrap();
    let store = FileStore::open(&path);

    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    assert!(matches!(store.remove("access_token"), Err(StoreError::Write(_))));
    assert_eq!(store.get("access_token").as_deref(), Some("tok"));
    assert!(store.set("locale", "en").is_err());
    assert_eq!(store.get("locale"), None);
}
