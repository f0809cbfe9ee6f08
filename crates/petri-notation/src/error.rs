//! Error types for the `petri-notation` crate.

use petri_types::{Cell, GridDims, MAX_COLUMNS};

/// Failures while encoding or decoding the algebraic cell notation.
///
/// Decoding is strict: any malformed segment fails the whole string, and the
/// error names the first offending piece so a share link can be diagnosed
/// from the log line alone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The whole notation string was empty.
    ///
    /// Callers that treat "no string" as "no cells" must branch before
    /// decoding; an empty string reaching the codec is malformed input.
    #[error("notation string is empty")]
    EmptyNotation,

    /// A delimiter-separated segment was empty, as in `B2__B1`.
    #[error("empty cell code between delimiters")]
    EmptyCellCode,

    /// The first character of a cell code was not an ASCII uppercase letter.
    #[error("column letter must be A-Z, found {found:?}")]
    BadColumn {
        /// The character found where the column letter was expected.
        found: char,
    },

    /// The remainder of a cell code after the column letter was not a
    /// non-negative integer.
    #[error("row component {token:?} is not a non-negative integer")]
    BadRow {
        /// The offending row text, verbatim.
        token: String,
    },

    /// The row number was parsed but does not exist on the grid.
    #[error("row {row} does not fit a grid with {rows} rows")]
    RowOutOfRange {
        /// The notation row number (counted from the bottom edge).
        row: u32,
        /// The number of rows on the grid.
        rows: u32,
    },

    /// The decoded or to-be-encoded cell lies outside the grid.
    #[error("cell {cell} is outside the {dims} grid")]
    CellOutOfRange {
        /// The out-of-range cell.
        cell: Cell,
        /// The grid the cell was checked against.
        dims: GridDims,
    },

    /// The column index has no single-letter encoding.
    ///
    /// Only reachable when encoding against a grid wider than
    /// [`MAX_COLUMNS`]; boards constructed through `petri-board` never
    /// carry such cells.
    #[error("column {x} exceeds the {MAX_COLUMNS}-letter notation alphabet")]
    ColumnOverflow {
        /// The zero-based column index with no letter.
        x: u32,
    },
}
