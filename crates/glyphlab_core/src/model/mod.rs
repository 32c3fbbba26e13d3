//! Domain model for glyph assets and their metadata.
//!
//! # Responsibility
//! - Define the canonical identifier and metadata shapes shared by the
//!   asset store, catalog and composition layers.
//!
//! # Invariants
//! - Every glyph is identified by a stable `AssetId` that doubles as its
//!   on-disk file name.
//! - A `Letter` glyph never carries a meaning.

pub mod glyph;
