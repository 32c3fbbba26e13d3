//! Asset store contract and directory-backed implementation.
//!
//! # Responsibility
//! - Provide create/read/write/delete/list/import/export over glyph images.
//! - Map filesystem failures onto semantic store errors.
//!
//! # Invariants
//! - Asset writes go through a temp file + rename, so readers never observe
//!   a partially written asset under its final name.
//! - Deleting an absent asset is a hard `NotFound` error, never a no-op.
//! - Only `*.png` entries are enumerated; anything else in the directory is
//!   ignored.

use crate::model::glyph::AssetId;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error distinguishing missing assets from transport failures.
#[derive(Debug)]
pub enum StoreError {
    /// No asset exists under the given identifier.
    NotFound(AssetId),
    /// Filesystem read/write failure at `path`.
    Io { path: PathBuf, source: io::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "asset not found: {id}"),
            Self::Io { path, source } => {
                write!(f, "asset storage failure at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl StoreError {
    fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Access contract for durable glyph image storage.
///
/// The service layer depends on this trait, not on `FsAssetStore`, so tests
/// and alternative backends can substitute their own implementation.
pub trait AssetStore {
    /// Stores new image bytes under a freshly generated identifier.
    fn create(&self, bytes: &[u8]) -> StoreResult<AssetId>;

    /// Reads the image bytes stored under `id`.
    fn read(&self, id: &AssetId) -> StoreResult<Vec<u8>>;

    /// Replaces the bytes of an existing asset (the edit path).
    fn write(&self, id: &AssetId, bytes: &[u8]) -> StoreResult<()>;

    /// Removes the asset. Absent assets are a hard error.
    fn delete(&self, id: &AssetId) -> StoreResult<()>;

    /// Lists all asset identifiers, lexicographically sorted.
    fn list_ids(&self) -> StoreResult<Vec<AssetId>>;

    /// Copies an external image file in under a fresh identifier.
    fn import(&self, source: &Path) -> StoreResult<AssetId>;

    /// Copies the asset's bytes out to an external path.
    fn export(&self, id: &AssetId, destination: &Path) -> StoreResult<()>;
}

/// Flat-directory asset store; file names double as identifiers.
pub struct FsAssetStore {
    dir: PathBuf,
}

impl FsAssetStore {
    /// Opens (and creates if needed) the asset directory.
    ///
    /// # Errors
    /// - Returns `StoreError::Io` when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| StoreError::io(&dir, err))?;
        Ok(Self { dir })
    }

    /// Absolute path of the asset stored under `id`.
    pub fn asset_path(&self, id: &AssetId) -> PathBuf {
        self.dir.join(id.as_str())
    }

    /// Writes bytes to the asset's final name through a temp file.
    ///
    /// The temp name has no `.png` extension, so a crashed write is never
    /// picked up by `list_ids`.
    fn write_atomic(&self, id: &AssetId, bytes: &[u8]) -> StoreResult<()> {
        let final_path = self.asset_path(id);
        let temp_path = self.dir.join(format!(".{}.tmp", id.as_str()));

        fs::write(&temp_path, bytes).map_err(|err| StoreError::io(&temp_path, err))?;
        if let Err(err) = fs::rename(&temp_path, &final_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::io(&final_path, err));
        }
        Ok(())
    }
}

impl AssetStore for FsAssetStore {
    fn create(&self, bytes: &[u8]) -> StoreResult<AssetId> {
        let id = AssetId::generate();
        self.write_atomic(&id, bytes)?;
        info!(
            "event=asset_created module=store status=ok id={id} bytes={}",
            bytes.len()
        );
        Ok(id)
    }

    fn read(&self, id: &AssetId) -> StoreResult<Vec<u8>> {
        let path = self.asset_path(id);
        fs::read(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(id.clone()),
            _ => StoreError::io(path, err),
        })
    }

    fn write(&self, id: &AssetId, bytes: &[u8]) -> StoreResult<()> {
        // Overwrite is an edit of an existing glyph; creating through this
        // path would bypass identifier generation.
        if !self.asset_path(id).is_file() {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.write_atomic(id, bytes)?;
        info!(
            "event=asset_overwritten module=store status=ok id={id} bytes={}",
            bytes.len()
        );
        Ok(())
    }

    fn delete(&self, id: &AssetId) -> StoreResult<()> {
        let path = self.asset_path(id);
        fs::remove_file(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(id.clone()),
            _ => StoreError::io(path, err),
        })?;
        info!("event=asset_deleted module=store status=ok id={id}");
        Ok(())
    }

    fn list_ids(&self) -> StoreResult<Vec<AssetId>> {
        let entries = fs::read_dir(&self.dir).map_err(|err| StoreError::io(&self.dir, err))?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| StoreError::io(&self.dir, err))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(id) = AssetId::from_file_name(name) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn import(&self, source: &Path) -> StoreResult<AssetId> {
        let bytes = fs::read(source).map_err(|err| StoreError::io(source, err))?;
        let id = self.create(&bytes)?;
        info!(
            "event=asset_imported module=store status=ok id={id} source={}",
            source.display()
        );
        Ok(id)
    }

    fn export(&self, id: &AssetId, destination: &Path) -> StoreResult<()> {
        let bytes = self.read(id)?;
        fs::write(destination, &bytes).map_err(|err| StoreError::io(destination, err))?;
        info!(
            "event=asset_exported module=store status=ok id={id} destination={}",
            destination.display()
        );
        Ok(())
    }
}
