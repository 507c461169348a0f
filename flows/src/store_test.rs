use super::*;

#[test]
fn memory_store_round_trips_and_removes() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k").unwrap();
    assert_eq!(store.get("k"), None);
}

#[test]
fn removing_missing_key_succeeds() {
    let store = MemoryStore::new();
    assert!(store.remove("nothing").is_ok());
}

#[test]
fn entries_are_key_ordered() {
    let store = MemoryStore::new();
    store.set("b", "2").unwrap();
    store.set("a", "1").unwrap();
    let keys: Vec<_> = store.entries().into_keys().collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn store_error_messages() {
    assert_eq!(StoreError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StoreError::Write("quota".into()).to_string(), "storage write failed: quota");
}
