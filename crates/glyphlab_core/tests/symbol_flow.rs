use glyphlab_core::service::symbol_service::{CATALOG_FILE, SYMBOLS_DIR};
use glyphlab_core::{
    AssetId, GlyphKind, GlyphRecord, SelectionCursor, StoreError, SymbolError, SymbolService,
};
use std::fs;
use tempfile::TempDir;

fn record(kind: GlyphKind, sound: &str, meaning: &str) -> GlyphRecord {
    GlyphRecord {
        kind,
        pronunciation: sound.to_string(),
        meaning: meaning.to_string(),
    }
}

#[test]
fn create_stores_image_and_metadata_together() {
    let root = TempDir::new().unwrap();
    let (mut service, warning) = SymbolService::open(root.path()).unwrap();
    assert!(warning.is_none());

    let id = service
        .create_symbol(b"strokes", record(GlyphKind::Character, "su", "sun"))
        .unwrap();

    assert_eq!(service.read_image(&id).unwrap(), b"strokes");
    assert_eq!(service.describe(&id).meaning, "sun");
    assert_eq!(service.list_ordered().unwrap(), vec![id]);
}

#[test]
fn delete_removes_asset_then_metadata() {
    let root = TempDir::new().unwrap();
    let (mut service, _) = SymbolService::open(root.path()).unwrap();

    let keep = service
        .create_symbol(b"keep", record(GlyphKind::Character, "", ""))
        .unwrap();
    let doomed = service
        .create_symbol(b"doomed", record(GlyphKind::Both, "d", "doom"))
        .unwrap();

    service.delete_symbol(&doomed).unwrap();

    let ids = service.list_ordered().unwrap();
    assert!(!ids.contains(&doomed));
    assert_eq!(ids, vec![keep]);
    assert!(service.catalog().get(&doomed).is_none());
}

#[test]
fn delete_of_missing_symbol_aborts_before_touching_the_catalog() {
    let root = TempDir::new().unwrap();
    let (mut service, _) = SymbolService::open(root.path()).unwrap();

    let id = service
        .create_symbol(b"bytes", record(GlyphKind::Character, "", "still here"))
        .unwrap();

    // Remove the asset behind the service's back, then delete through it:
    // the store reports NotFound and the metadata entry survives as an
    // orphan the caller may prune.
    fs::remove_file(root.path().join(SYMBOLS_DIR).join(id.as_str())).unwrap();
    let err = service.delete_symbol(&id).unwrap_err();
    assert!(matches!(err, SymbolError::Store(StoreError::NotFound(_))));
    assert!(service.catalog().contains(&id));
}

#[test]
fn update_replaces_bytes_and_record() {
    let root = TempDir::new().unwrap();
    let (mut service, _) = SymbolService::open(root.path()).unwrap();

    let id = service
        .create_symbol(b"draft", record(GlyphKind::Character, "m", "moon"))
        .unwrap();

    service
        .update_symbol(&id, Some(b"final"), record(GlyphKind::Letter, "m", "moon"))
        .unwrap();

    assert_eq!(service.read_image(&id).unwrap(), b"final");
    let updated = service.describe(&id);
    assert_eq!(updated.kind, GlyphKind::Letter);
    // Switching to Letter drops the meaning on the way in.
    assert_eq!(updated.meaning, "");
}

#[test]
fn metadata_only_update_keeps_image_bytes() {
    let root = TempDir::new().unwrap();
    let (mut service, _) = SymbolService::open(root.path()).unwrap();

    let id = service
        .create_symbol(b"strokes", record(GlyphKind::Character, "", ""))
        .unwrap();
    service
        .update_symbol(&id, None, record(GlyphKind::Character, "ne", "new gloss"))
        .unwrap();

    assert_eq!(service.read_image(&id).unwrap(), b"strokes");
    assert_eq!(service.describe(&id).meaning, "new gloss");
}

#[test]
fn import_attaches_the_default_untagged_record() {
    let root = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let (mut service, _) = SymbolService::open(root.path()).unwrap();

    let source = outside.path().join("fontforge_export.png");
    fs::write(&source, b"external glyph").unwrap();

    let id = service.import_symbol(&source).unwrap();

    assert_eq!(service.read_image(&id).unwrap(), b"external glyph");
    assert_eq!(service.describe(&id), GlyphRecord::default());
    assert!(service.catalog().contains(&id));
}

#[test]
fn export_leaves_the_catalog_untouched() {
    let root = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let (mut service, _) = SymbolService::open(root.path()).unwrap();

    let id = service
        .create_symbol(b"glyph", record(GlyphKind::Character, "g", "glyph"))
        .unwrap();
    let tagged_before = service.catalog().len();

    let destination = outside.path().join("exported.png");
    service.export_symbol(&id, &destination).unwrap();

    assert_eq!(fs::read(&destination).unwrap(), b"glyph");
    assert_eq!(service.catalog().len(), tagged_before);
}

#[test]
fn untagged_assets_still_appear_in_the_browse_list() {
    let root = TempDir::new().unwrap();
    let (service, _) = SymbolService::open(root.path()).unwrap();

    // An asset dropped into the directory without metadata (e.g. a copy
    // made by hand) is browsable with empty defaults.
    let stray = AssetId::new("character_stray.png").unwrap();
    fs::write(
        root.path().join(SYMBOLS_DIR).join(stray.as_str()),
        b"stray",
    )
    .unwrap();

    assert_eq!(service.list_ordered().unwrap(), vec![stray.clone()]);
    assert!(service.catalog().get(&stray).is_none());
    assert_eq!(service.describe(&stray), GlyphRecord::default());
}

#[test]
fn open_surfaces_a_corrupt_catalog_as_a_warning() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join(SYMBOLS_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(CATALOG_FILE), b"not json at all").unwrap();
    fs::write(dir.join("character_survivor.png"), b"glyph").unwrap();

    let (service, warning) = SymbolService::open(root.path()).unwrap();

    // Corruption warns but never blocks: the catalog is empty while the
    // assets on disk stay browsable.
    assert!(warning.is_some());
    assert!(service.catalog().is_empty());
    assert_eq!(service.list_ordered().unwrap().len(), 1);
}

#[test]
fn browsing_cursor_follows_deletions() {
    let root = TempDir::new().unwrap();
    let (mut service, _) = SymbolService::open(root.path()).unwrap();

    for n in 0..3 {
        service
            .create_symbol(format!("glyph {n}").as_bytes(), GlyphRecord::default())
            .unwrap();
    }

    let mut cursor = SelectionCursor::new();
    let ids = service.list_ordered().unwrap();
    cursor.select(0, ids.len());
    cursor.next(ids.len());
    cursor.next(ids.len());
    assert_eq!(cursor.current(), Some(2));

    // Deleting the selected last item wraps the cursor to the front.
    service.delete_symbol(&ids[2]).unwrap();
    let remaining = service.list_ordered().unwrap();
    cursor.clamp_after_removal(remaining.len());
    assert_eq!(cursor.current(), Some(0));

    service.delete_symbol(&remaining[0]).unwrap();
    service.delete_symbol(&remaining[1]).unwrap();
    cursor.clamp_after_removal(0);
    assert_eq!(cursor.current(), None);
}
