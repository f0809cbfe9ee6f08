//! Grid cell coordinates.
//!
//! A [`Cell`] is the (column, row) address of one position on the board.
//! It is a small value type with structural equality, ordering, and hashing,
//! so it can be used directly as a set member with no parse/format step on
//! the stepping hot path.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single cell position on the grid.
///
/// `x` is the column index and `y` the row index, both zero-based with the
/// origin in the top-left corner. Ordering is lexicographic on `(x, y)`,
/// which fixes the iteration order of live-cell sets and therefore the token
/// order of encoded boards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct Cell {
    /// Zero-based column index.
    pub x: u32,
    /// Zero-based row index (0 = top row).
    pub y: u32,
}

impl Cell {
    /// Create a cell from column and row indices.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
