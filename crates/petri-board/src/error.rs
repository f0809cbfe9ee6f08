//! Error types for the `petri-board` crate.
//!
//! All fallible operations in this crate return [`BoardError`] through the
//! standard [`Result`] type alias.

use petri_types::{Cell, GridDims, MAX_COLUMNS};

/// Errors that can occur when constructing or mutating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A coordinate outside the grid was supplied to a mutating operation.
    #[error("cell {cell} is outside the {dims} grid")]
    InvalidCoordinate {
        /// The out-of-range cell.
        cell: Cell,
        /// The grid the cell was checked against.
        dims: GridDims,
    },

    /// The grid has zero rows or zero columns.
    #[error("grid dimensions {dims} must be at least 1x1")]
    EmptyGrid {
        /// The rejected dimensions.
        dims: GridDims,
    },

    /// The grid is wider than the single-letter column alphabet.
    #[error("grid width {cols} exceeds the {MAX_COLUMNS}-column notation alphabet")]
    TooManyColumns {
        /// The rejected column count.
        cols: u32,
    },
}
