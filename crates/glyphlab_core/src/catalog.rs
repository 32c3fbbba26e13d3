//! Symbol catalog: metadata mapping and its durable JSON file.
//!
//! # Responsibility
//! - Own the `AssetId -> GlyphRecord` mapping in memory.
//! - Write every mutation through to the flat catalog file before
//!   returning.
//! - Recover from an unreadable file by starting empty and surfacing a
//!   warning, never by refusing to open.
//!
//! # Invariants
//! - `put` stores normalized records only (`Letter` never keeps a meaning).
//! - Records are kept exactly as loaded until mutated, so an unchanged
//!   catalog re-saves byte-identically.
//! - The catalog never touches the asset store; deletion sequencing lives
//!   in the service layer.

use crate::model::glyph::{AssetId, GlyphRecord};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog persistence error.
#[derive(Debug)]
pub enum CatalogError {
    /// The durable file existed but could not be read or parsed. The
    /// catalog recovered by starting empty; existing assets are untouched.
    Load { path: PathBuf, message: String },
    /// A write-through save failed. The in-memory state keeps the mutation
    /// and diverges from disk until a later `save` succeeds.
    Persist { path: PathBuf, source: io::Error },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load { path, message } => {
                write!(f, "could not load catalog `{}`: {message}", path.display())
            }
            Self::Persist { path, source } => {
                write!(f, "could not save catalog `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load { .. } => None,
            Self::Persist { source, .. } => Some(source),
        }
    }
}

/// In-memory glyph metadata map synchronized to one flat JSON file.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    records: BTreeMap<AssetId, GlyphRecord>,
}

impl Catalog {
    /// Opens the catalog at `path`.
    ///
    /// A missing file is a normal first run and yields an empty catalog
    /// with no warning. An unreadable or corrupt file also yields an empty
    /// catalog, but the `CatalogError::Load` travels back beside it so the
    /// caller can warn the user; opening never fails outright.
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<CatalogError>) {
        let path = path.into();

        if !path.exists() {
            info!(
                "event=catalog_opened module=catalog status=ok entries=0 fresh=true path={}",
                path.display()
            );
            return (Self::empty(path), None);
        }

        let loaded = fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|text| {
                serde_json::from_str::<BTreeMap<AssetId, GlyphRecord>>(&text)
                    .map_err(|err| err.to_string())
            });

        match loaded {
            Ok(records) => {
                info!(
                    "event=catalog_opened module=catalog status=ok entries={} path={}",
                    records.len(),
                    path.display()
                );
                (Self { path, records }, None)
            }
            Err(message) => {
                warn!(
                    "event=catalog_recovered module=catalog status=warn reason={message} path={}",
                    path.display()
                );
                let warning = CatalogError::Load {
                    path: path.clone(),
                    message,
                };
                (Self::empty(path), Some(warning))
            }
        }
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            records: BTreeMap::new(),
        }
    }

    /// Path of the durable catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pure lookup; `None` is the valid "untagged asset" state.
    pub fn get(&self, id: &AssetId) -> Option<&GlyphRecord> {
        self.records.get(id)
    }

    /// Metadata for `id`, with empty defaults for untagged assets.
    pub fn record_or_default(&self, id: &AssetId) -> GlyphRecord {
        self.records.get(id).cloned().unwrap_or_default()
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &GlyphRecord)> {
        self.records.iter()
    }

    /// Stores (normalized) metadata for `id` and writes through to disk.
    ///
    /// # Errors
    /// - Returns `CatalogError::Persist` when the save fails. The
    ///   in-memory map keeps the new record so the caller can retry with
    ///   `save` without losing the edit.
    pub fn put(&mut self, id: AssetId, record: GlyphRecord) -> CatalogResult<()> {
        self.records.insert(id.clone(), record.normalized());
        let result = self.save();
        match &result {
            Ok(()) => info!("event=catalog_put module=catalog status=ok id={id}"),
            Err(err) => warn!("event=catalog_put module=catalog status=error id={id} error={err}"),
        }
        result
    }

    /// Drops the entry for `id`, if any, and writes through to disk.
    ///
    /// Removing an id with no entry is a no-op success; the file is only
    /// rewritten when something actually changed.
    pub fn remove(&mut self, id: &AssetId) -> CatalogResult<()> {
        if self.records.remove(id).is_none() {
            return Ok(());
        }
        let result = self.save();
        match &result {
            Ok(()) => info!("event=catalog_remove module=catalog status=ok id={id}"),
            Err(err) => {
                warn!("event=catalog_remove module=catalog status=error id={id} error={err}")
            }
        }
        result
    }

    /// Writes the current in-memory state to the durable file.
    ///
    /// Also serves as the retry hook after a `Persist` failure.
    pub fn save(&self) -> CatalogResult<()> {
        let persist = |source: io::Error| CatalogError::Persist {
            path: self.path.clone(),
            source,
        };

        let mut text = serde_json::to_string_pretty(&self.records)
            .map_err(|err| persist(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        text.push('\n');

        // Same temp-then-rename discipline as the asset store, so a failed
        // save cannot truncate the previous catalog file.
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, text).map_err(&persist)?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(persist(err));
        }
        Ok(())
    }
}
