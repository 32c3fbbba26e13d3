//! Core domain logic for GlyphLab, an invented-writing-system builder.
//! This crate is the single source of truth for symbol-catalog invariants
//! and sentence layout; drawing and window toolkits live elsewhere.

pub mod catalog;
pub mod compose;
pub mod cursor;
pub mod logging;
pub mod model;
pub mod palette;
pub mod service;
pub mod store;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use compose::{layout, Direction, PlacementGrid, Sentence, DEFAULT_MAX_COLUMNS};
pub use cursor::SelectionCursor;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::glyph::{AssetId, GlyphKind, GlyphRecord, InvalidAssetId};
pub use palette::{highlight_example, math_bold, IpaKey, IPA_KEYS};
pub use service::symbol_service::{SymbolError, SymbolResult, SymbolService};
pub use store::fs_store::{AssetStore, FsAssetStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
