use glyphlab_core::{AssetId, AssetStore, FsAssetStore, StoreError};
use tempfile::TempDir;

fn store() -> (TempDir, FsAssetStore) {
    let dir = TempDir::new().unwrap();
    let store = FsAssetStore::new(dir.path()).unwrap();
    (dir, store)
}

#[test]
fn create_and_read_roundtrip() {
    let (_dir, store) = store();

    let id = store.create(b"glyph bytes").unwrap();
    assert_eq!(store.read(&id).unwrap(), b"glyph bytes");
}

#[test]
fn create_generates_distinct_ids() {
    let (_dir, store) = store();

    let a = store.create(b"a").unwrap();
    let b = store.create(b"a").unwrap();
    assert_ne!(a, b);
    assert_eq!(store.list_ids().unwrap().len(), 2);
}

#[test]
fn list_is_lexicographically_sorted() {
    let (_dir, store) = store();

    for _ in 0..8 {
        store.create(b"glyph").unwrap();
    }

    let ids = store.list_ids().unwrap();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn read_of_missing_asset_is_not_found() {
    let (_dir, store) = store();

    let absent = AssetId::new("character_missing.png").unwrap();
    let err = store.read(&absent).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == absent));
}

#[test]
fn delete_removes_asset_and_absent_delete_is_a_hard_error() {
    let (_dir, store) = store();

    let id = store.create(b"doomed").unwrap();
    store.delete(&id).unwrap();
    assert!(store.list_ids().unwrap().is_empty());

    let err = store.delete(&id).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
}

#[test]
fn overwrite_replaces_bytes_in_place() {
    let (_dir, store) = store();

    let id = store.create(b"first draft").unwrap();
    store.write(&id, b"second draft").unwrap();

    assert_eq!(store.read(&id).unwrap(), b"second draft");
    assert_eq!(store.list_ids().unwrap(), vec![id]);
}

#[test]
fn export_then_import_roundtrips_bytes_under_a_fresh_id() {
    let (_dir, store) = store();
    let outside = TempDir::new().unwrap();

    let original = store.create(b"portable glyph").unwrap();
    let exported = outside.path().join("exported.png");
    store.export(&original, &exported).unwrap();

    let reimported = store.import(&exported).unwrap();
    assert_ne!(reimported, original);
    assert_eq!(store.read(&reimported).unwrap(), b"portable glyph");
}

#[test]
fn export_of_missing_asset_is_not_found() {
    let (_dir, store) = store();
    let outside = TempDir::new().unwrap();

    let absent = AssetId::new("character_missing.png").unwrap();
    let err = store
        .export(&absent, &outside.path().join("out.png"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == absent));
}

#[test]
fn import_of_missing_source_is_a_storage_error() {
    let (_dir, store) = store();
    let outside = TempDir::new().unwrap();

    let err = store.import(&outside.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
