//! Symbol use-case service.
//!
//! # Responsibility
//! - Provide create/update/import/export/delete entry points that keep the
//!   asset store and the catalog consistent.
//! - Expose the ordered browse list the selection cursor runs over.
//!
//! # Invariants
//! - Deletion runs asset-first, then metadata: a partial failure can strand
//!   an untagged asset or prune orphaned metadata, but never leave metadata
//!   pointing at a live asset half-removed.
//! - Creation runs asset-first, then metadata, so the only transient
//!   inconsistency is a harmless untagged asset.

use crate::catalog::{Catalog, CatalogError};
use crate::model::glyph::{AssetId, GlyphRecord};
use crate::store::fs_store::{AssetStore, FsAssetStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Directory holding glyph images and the catalog file, relative to the
/// workspace root.
pub const SYMBOLS_DIR: &str = "characters";

/// File name of the durable catalog inside the symbols directory.
pub const CATALOG_FILE: &str = "metadata.json";

pub type SymbolResult<T> = Result<T, SymbolError>;

/// Service error wrapping the layer it originated in.
#[derive(Debug)]
pub enum SymbolError {
    Store(StoreError),
    Catalog(CatalogError),
}

impl Display for SymbolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SymbolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<StoreError> for SymbolError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<CatalogError> for SymbolError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Use-case facade over one asset store and its catalog.
///
/// All mutation funnels through this type, so write-through persistence
/// stays centralized instead of being scattered across call sites.
pub struct SymbolService<S: AssetStore> {
    store: S,
    catalog: Catalog,
}

impl SymbolService<FsAssetStore> {
    /// Opens the conventional on-disk layout under `root`:
    /// `<root>/characters/` for images, with `metadata.json` alongside
    /// them.
    ///
    /// A corrupt catalog file is recovered as empty; the load warning is
    /// returned beside the service so the caller can show it.
    ///
    /// # Errors
    /// - Returns `SymbolError::Store` when the symbols directory cannot be
    ///   created.
    pub fn open(root: impl AsRef<Path>) -> SymbolResult<(Self, Option<CatalogError>)> {
        let dir: PathBuf = root.as_ref().join(SYMBOLS_DIR);
        let store = FsAssetStore::new(&dir)?;
        let (catalog, warning) = Catalog::open(dir.join(CATALOG_FILE));
        Ok((Self::new(store, catalog), warning))
    }
}

impl<S: AssetStore> SymbolService<S> {
    /// Wires a service from explicit store and catalog instances.
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    /// Stores a freshly drawn glyph and its metadata.
    pub fn create_symbol(&mut self, bytes: &[u8], record: GlyphRecord) -> SymbolResult<AssetId> {
        let id = self.store.create(bytes)?;
        self.catalog.put(id.clone(), record)?;
        info!("event=symbol_created module=service status=ok id={id}");
        Ok(id)
    }

    /// Updates an existing glyph: optionally replaces its image bytes,
    /// then stores the new metadata.
    pub fn update_symbol(
        &mut self,
        id: &AssetId,
        bytes: Option<&[u8]>,
        record: GlyphRecord,
    ) -> SymbolResult<()> {
        if let Some(bytes) = bytes {
            self.store.write(id, bytes)?;
        }
        self.catalog.put(id.clone(), record)?;
        info!("event=symbol_updated module=service status=ok id={id}");
        Ok(())
    }

    /// Copies an external image in and tags it with the default untagged
    /// record, ready for editing.
    pub fn import_symbol(&mut self, source: &Path) -> SymbolResult<AssetId> {
        let id = self.store.import(source)?;
        self.catalog.put(id.clone(), GlyphRecord::default())?;
        info!("event=symbol_imported module=service status=ok id={id}");
        Ok(id)
    }

    /// Copies a glyph's image bytes out; the catalog is untouched.
    pub fn export_symbol(&self, id: &AssetId, destination: &Path) -> SymbolResult<()> {
        self.store.export(id, destination)?;
        Ok(())
    }

    /// Deletes a glyph: asset first, then its metadata.
    ///
    /// The ordering is deliberate. If the metadata removal fails the entry
    /// is orphaned and can be pruned later; reversing the order could leave
    /// metadata that claims an asset which no longer exists.
    pub fn delete_symbol(&mut self, id: &AssetId) -> SymbolResult<()> {
        self.store.delete(id)?;
        self.catalog.remove(id)?;
        info!("event=symbol_deleted module=service status=ok id={id}");
        Ok(())
    }

    /// Image bytes for display.
    pub fn read_image(&self, id: &AssetId) -> SymbolResult<Vec<u8>> {
        Ok(self.store.read(id)?)
    }

    /// The ordered browse list: every asset the store knows, sorted,
    /// whether or not it has metadata yet.
    pub fn list_ordered(&self) -> SymbolResult<Vec<AssetId>> {
        Ok(self.store.list_ids()?)
    }

    /// Metadata for display, with empty defaults for untagged assets.
    pub fn describe(&self, id: &AssetId) -> GlyphRecord {
        self.catalog.record_or_default(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable catalog access, e.g. to retry a failed save.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
