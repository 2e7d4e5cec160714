use super::*;

#[test]
fn memory_store_reads_back_written_value() {
    let store = MemoryStore::new();
    assert_eq!(store.get("cbe-theme"), None);
    store.set("cbe-theme", "dark").unwrap();
    assert_eq!(store.get("cbe-theme").as_deref(), Some("dark"));
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let reopened = store.clone();
    store.set("k", "v").unwrap();
    assert_eq!(reopened.get("k").as_deref(), Some("v"));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Rejected { key: "cbe-theme".to_owned() };
    assert_eq!(err.to_string(), "storage rejected write for `cbe-theme`");
}
