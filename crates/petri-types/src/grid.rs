//! Fixed grid dimensions shared by the board, the engine, and the codec.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cell::Cell;

/// Number of columns the algebraic notation can address with a single
/// letter (`A`..=`Z`). Board construction rejects wider grids so that every
/// live cell stays encodable.
pub const MAX_COLUMNS: u32 = 26;

/// Fixed board dimensions for one session.
///
/// Dimensions never change for the lifetime of a session. A coordinate
/// `(x, y)` is valid iff `x < cols` and `y < rows`. Validation happens where
/// state is constructed: `BoardState::new` rejects empty or over-wide grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GridDims {
    /// Number of rows (board height).
    pub rows: u32,
    /// Number of columns (board width).
    pub cols: u32,
}

impl GridDims {
    /// Create a dimensions value.
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Check whether a cell lies inside the grid.
    pub const fn contains(self, cell: Cell) -> bool {
        cell.x < self.cols && cell.y < self.rows
    }
}

impl core::fmt::Display for GridDims {
    /// Formats as `<cols>x<rows>`, e.g. `20x15` for a 20-column, 15-row board.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_both_bounds() {
        let dims = GridDims::new(3, 5);
        assert!(dims.contains(Cell::new(0, 0)));
        assert!(dims.contains(Cell::new(4, 2)));
        assert!(!dims.contains(Cell::new(5, 2)));
        assert!(!dims.contains(Cell::new(4, 3)));
        assert!(!dims.contains(Cell::new(5, 3)));
    }

    #[test]
    fn display_is_cols_by_rows() {
        assert_eq!(GridDims::new(15, 20).to_string(), "20x15");
    }
}
