//! Sentence composition: direction-aware insertion and grid layout.
//!
//! # Responsibility
//! - Hold the transient ordered glyph sequence being composed.
//! - Lay the sequence out into a bounded-width placement grid.
//!
//! # Invariants
//! - Insertion direction is part of the sequence semantics: right-to-left
//!   insertion pushes to the *front* of the sentence, so switching
//!   direction mid-composition changes where the next glyph lands.
//! - `layout` is pure: the same sentence, direction and width always yield
//!   the same grid, and no two indices share a cell.
//! - The grid is rebuilt from scratch on every call, never patched.

use crate::model::glyph::AssetId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Default row width of the sentence grid.
pub const DEFAULT_MAX_COLUMNS: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(width) => width,
    None => unreachable!(),
};

/// Writing/insertion direction for sentence composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Ordered glyph sequence under composition.
///
/// Purely transient UI state: never persisted, cleared explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    items: Vec<AssetId>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a glyph under the given direction.
    ///
    /// Left-to-right appends; right-to-left prepends, so the newest glyph
    /// reads first. This front-insertion is load-bearing behavior, not a
    /// rendering detail.
    pub fn insert(&mut self, direction: Direction, id: AssetId) {
        match direction {
            Direction::LeftToRight => self.items.push(id),
            Direction::RightToLeft => self.items.insert(0, id),
        }
    }

    /// Resets the sentence; the next layout yields an empty grid.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[AssetId] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetId> {
        self.items.iter()
    }
}

impl FromIterator<AssetId> for Sentence {
    fn from_iter<T: IntoIterator<Item = AssetId>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Sparse `(row, column) -> glyph` placement produced by `layout`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlacementGrid {
    cells: BTreeMap<(usize, usize), AssetId>,
}

impl PlacementGrid {
    /// Glyph placed at `(row, column)`, if any.
    pub fn get(&self, row: usize, column: usize) -> Option<&AssetId> {
        self.cells.get(&(row, column))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &AssetId)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of occupied rows (highest row index + 1).
    pub fn row_count(&self) -> usize {
        self.cells
            .keys()
            .next_back()
            .map(|(row, _)| row + 1)
            .unwrap_or(0)
    }
}

/// Lays the sentence out into a wrapped grid of width `max_columns`.
///
/// Row is `i / max_columns` for the glyph at sequence index `i`. The
/// column runs left-to-right or is mirrored for right-to-left, so the
/// first glyph of each row sits flush right. Within one row the column
/// mapping is injective, so cells never collide.
pub fn layout(sentence: &Sentence, direction: Direction, max_columns: NonZeroUsize) -> PlacementGrid {
    let width = max_columns.get();
    let mut cells = BTreeMap::new();

    for (index, id) in sentence.iter().enumerate() {
        let row = index / width;
        let column = match direction {
            Direction::LeftToRight => index % width,
            Direction::RightToLeft => (width - 1) - (index % width),
        };
        cells.insert((row, column), id.clone());
    }

    PlacementGrid { cells }
}
