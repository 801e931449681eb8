use super::*;

#[test]
fn memory_store_set_get_remove() {
    let mut store = MemoryStore::default();
    assert!(store.is_empty());

    store.set("k", "v1");
    store.set("k", "v2");
    assert_eq!(store.get("k").as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);

    store.remove("k");
    store.remove("k");
    assert_eq!(store.get("k"), None);
    assert!(store.is_empty());
}
