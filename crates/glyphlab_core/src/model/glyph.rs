//! Glyph identifier and metadata model.
//!
//! # Responsibility
//! - Define `AssetId`, the join key between the asset store and the catalog.
//! - Define `GlyphRecord` and its normalization rule.
//!
//! # Invariants
//! - An `AssetId` is a plain `*.png` file name with no path separators.
//! - `AssetId` values are never reused; fresh ids come from a v4 UUID.
//! - `kind == Letter` implies `meaning` is empty after normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// File extension every stored glyph image carries.
pub const ASSET_EXTENSION: &str = "png";

static ASSET_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*\.png$").expect("valid asset id regex"));

/// Raised when a string cannot serve as an asset identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAssetId(pub String);

impl Display for InvalidAssetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid asset identifier: `{}`", self.0)
    }
}

impl Error for InvalidAssetId {}

/// Stable identifier for a stored glyph image.
///
/// Identifiers double as file names inside the asset directory, so the
/// value is restricted to a single `*.png` path component. Ordering is
/// lexicographic on the underlying string, which keeps browse order
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId(String);

impl AssetId {
    /// Validates and wraps an identifier string.
    ///
    /// # Errors
    /// - Returns `InvalidAssetId` when the string is not a plain `*.png`
    ///   file name (path separators, empty stem, wrong extension).
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidAssetId> {
        let value = value.into();
        if ASSET_ID_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidAssetId(value))
        }
    }

    /// Generates a fresh, never-reused identifier.
    ///
    /// Uses a v4 UUID rather than a wall-clock timestamp so rapid
    /// successive calls cannot collide. The `character_` prefix keeps the
    /// on-disk naming convention stable.
    pub fn generate() -> Self {
        Self(format!("character_{}.{ASSET_EXTENSION}", Uuid::new_v4().simple()))
    }

    /// Wraps a directory entry name, skipping files that are not glyph
    /// assets.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::new(name).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssetId {
    type Error = InvalidAssetId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssetId> for String {
    fn from(value: AssetId) -> Self {
        value.0
    }
}

impl Display for AssetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of a glyph.
///
/// Serialized under the capitalized variant names used by the durable
/// catalog format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlyphKind {
    /// Denotes a concept; may carry both a sound and a meaning.
    #[default]
    Character,
    /// Denotes a sound only; never carries a meaning.
    Letter,
    /// Acts as character and letter at once.
    Both,
}

/// Metadata attached to one glyph asset.
///
/// Field names in the durable format are `type`, `sound` and `meaning`;
/// fields missing from an older file load as their empty defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphRecord {
    /// Serialized as `type` to match the durable catalog schema.
    #[serde(rename = "type")]
    pub kind: GlyphKind,
    /// Concatenated IPA tokens, in pronunciation order.
    #[serde(rename = "sound")]
    pub pronunciation: String,
    /// Free-text gloss; always empty for `GlyphKind::Letter`.
    pub meaning: String,
}

impl GlyphRecord {
    /// Creates a record and applies the Letter normalization rule.
    pub fn new(
        kind: GlyphKind,
        pronunciation: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        let mut record = Self {
            kind,
            pronunciation: pronunciation.into(),
            meaning: meaning.into(),
        };
        record.normalize();
        record
    }

    /// Clears `meaning` when `kind == Letter`.
    ///
    /// Switching a glyph's kind to `Letter` silently drops its meaning;
    /// keeping the rule here makes it hold for every entry path, not only
    /// interactive edits.
    pub fn normalize(&mut self) {
        if self.kind == GlyphKind::Letter {
            self.meaning.clear();
        }
    }

    /// Returns the normalized form without mutating `self`.
    pub fn normalized(&self) -> Self {
        let mut record = self.clone();
        record.normalize();
        record
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetId, GlyphKind, GlyphRecord};

    #[test]
    fn generated_ids_are_valid_and_distinct() {
        let a = AssetId::generate();
        let b = AssetId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("character_"));
        assert!(a.as_str().ends_with(".png"));
        assert_eq!(AssetId::new(a.as_str().to_string()).unwrap(), a);
    }

    #[test]
    fn asset_id_rejects_paths_and_foreign_extensions() {
        assert!(AssetId::new("../escape.png").is_err());
        assert!(AssetId::new("nested/name.png").is_err());
        assert!(AssetId::new("notes.txt").is_err());
        assert!(AssetId::new(".png").is_err());
        assert!(AssetId::new("").is_err());
        assert!(AssetId::new("character_1.png").is_ok());
    }

    #[test]
    fn letter_records_drop_meaning() {
        let record = GlyphRecord::new(GlyphKind::Letter, "ŋ", "sing");
        assert_eq!(record.meaning, "");
        assert_eq!(record.pronunciation, "ŋ");

        let kept = GlyphRecord::new(GlyphKind::Both, "ŋ", "sing");
        assert_eq!(kept.meaning, "sing");
    }

    #[test]
    fn normalize_only_touches_letters() {
        let mut record = GlyphRecord::new(GlyphKind::Character, "i", "tree");
        record.kind = GlyphKind::Letter;
        record.normalize();
        assert_eq!(record.meaning, "");

        let mut character = GlyphRecord::new(GlyphKind::Character, "i", "tree");
        character.normalize();
        assert_eq!(character.meaning, "tree");
    }

    #[test]
    fn default_record_is_untagged_character() {
        let record = GlyphRecord::default();
        assert_eq!(record.kind, GlyphKind::Character);
        assert_eq!(record.pronunciation, "");
        assert_eq!(record.meaning, "");
    }
}
