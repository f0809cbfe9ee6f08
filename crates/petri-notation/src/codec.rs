//! The algebraic cell notation: `B2`-style codes and encoded boards.
//!
//! A cell code is a column letter followed by a row number. Columns map
//! left-to-right onto `A`..=`Z`; rows are numbered bottom-up, board-game
//! style, so row `0` is the bottom edge and the top-left cell of a 3x3 grid
//! encodes as `A2`. A whole board is the codes of its live cells joined with
//! `_` in set order, e.g. `B2_B1_B0` for a vertical bar in the middle column.
//!
//! Encoding and decoding are exact inverses over valid boards. Decoding is
//! strict: the first malformed segment fails the whole string, and row
//! numbers must be bare non-negative integers with no trailing text.

use std::collections::BTreeSet;

use petri_types::{Cell, GridDims, MAX_COLUMNS};

use crate::error::NotationError;

/// Separator between cell codes in an encoded board.
pub const CELL_DELIMITER: &str = "_";

/// Encode one cell as its column letter and bottom-up row number.
///
/// # Errors
///
/// Returns [`NotationError::CellOutOfRange`] if the cell does not lie on the
/// grid, or [`NotationError::ColumnOverflow`] if the grid itself is wider
/// than the letter alphabet.
pub fn encode_cell(cell: Cell, dims: GridDims) -> Result<String, NotationError> {
    if !dims.contains(cell) {
        return Err(NotationError::CellOutOfRange { cell, dims });
    }
    let letter = column_letter(cell.x)?;
    let row = dims.rows.saturating_sub(cell.y).saturating_sub(1);
    Ok(format!("{letter}{row}"))
}

/// Decode one cell code back into grid coordinates.
///
/// # Errors
///
/// Returns [`NotationError::EmptyCellCode`] for an empty code,
/// [`NotationError::BadColumn`] if the first character is not `A`..=`Z`,
/// [`NotationError::BadRow`] if the remainder is not a non-negative integer,
/// [`NotationError::RowOutOfRange`] if the row does not exist on the grid,
/// or [`NotationError::CellOutOfRange`] if the column falls off the grid.
pub fn decode_cell(code: &str, dims: GridDims) -> Result<Cell, NotationError> {
    let mut chars = code.chars();
    let Some(first) = chars.next() else {
        return Err(NotationError::EmptyCellCode);
    };
    if !first.is_ascii_uppercase() {
        return Err(NotationError::BadColumn { found: first });
    }
    let x = u32::from(first).saturating_sub(u32::from('A'));

    let row_text = chars.as_str();
    let Ok(row) = row_text.parse::<u32>() else {
        return Err(NotationError::BadRow {
            token: row_text.to_owned(),
        });
    };
    if row >= dims.rows {
        return Err(NotationError::RowOutOfRange {
            row,
            rows: dims.rows,
        });
    }

    // Flip the bottom-up notation row back into a top-down y coordinate.
    let cell = Cell::new(x, dims.rows.saturating_sub(row).saturating_sub(1));
    if !dims.contains(cell) {
        return Err(NotationError::CellOutOfRange { cell, dims });
    }
    Ok(cell)
}

/// Encode a live-cell set as delimiter-joined cell codes.
///
/// The set's own `(x, y)` order fixes the token order, so the output never
/// depends on insertion history. An empty set encodes as the empty string.
///
/// # Errors
///
/// Propagates the first [`encode_cell`] failure.
pub fn encode_board(cells: &BTreeSet<Cell>, dims: GridDims) -> Result<String, NotationError> {
    let codes = cells
        .iter()
        .map(|&cell| encode_cell(cell, dims))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(codes.join(CELL_DELIMITER))
}

/// Decode a delimiter-joined board string into a live-cell set.
///
/// Duplicate codes collapse silently; the result is a set. Callers that
/// treat a missing string as an empty board must branch before calling:
/// the empty string is rejected here, not mapped to an empty set.
///
/// # Errors
///
/// Returns [`NotationError::EmptyNotation`] for an empty string, and
/// propagates the first [`decode_cell`] failure otherwise.
pub fn decode_board(notation: &str, dims: GridDims) -> Result<BTreeSet<Cell>, NotationError> {
    if notation.is_empty() {
        return Err(NotationError::EmptyNotation);
    }
    let mut cells = BTreeSet::new();
    for code in notation.split(CELL_DELIMITER) {
        cells.insert(decode_cell(code, dims)?);
    }
    Ok(cells)
}

fn column_letter(x: u32) -> Result<char, NotationError> {
    if x >= MAX_COLUMNS {
        return Err(NotationError::ColumnOverflow { x });
    }
    u32::from('A')
        .checked_add(x)
        .and_then(char::from_u32)
        .ok_or(NotationError::ColumnOverflow { x })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dims_3x3() -> GridDims {
        GridDims::new(3, 3)
    }

    #[test]
    fn encode_cell_flips_the_row() {
        let dims = dims_3x3();
        assert_eq!(encode_cell(Cell::new(1, 0), dims).unwrap(), "B2");
        assert_eq!(encode_cell(Cell::new(1, 1), dims).unwrap(), "B1");
        assert_eq!(encode_cell(Cell::new(1, 2), dims).unwrap(), "B0");
        assert_eq!(encode_cell(Cell::new(0, 0), dims).unwrap(), "A2");
        assert_eq!(encode_cell(Cell::new(2, 2), dims).unwrap(), "C0");
    }

    #[test]
    fn encode_cell_rejects_off_grid_cells() {
        assert!(matches!(
            encode_cell(Cell::new(3, 0), dims_3x3()),
            Err(NotationError::CellOutOfRange { .. })
        ));
    }

    #[test]
    fn decode_cell_inverts_encode_cell() {
        let dims = dims_3x3();
        for x in 0..3 {
            for y in 0..3 {
                let cell = Cell::new(x, y);
                let code = encode_cell(cell, dims).unwrap();
                assert_eq!(decode_cell(&code, dims).unwrap(), cell);
            }
        }
    }

    #[test]
    fn decode_cell_rejects_bad_columns() {
        let dims = dims_3x3();
        assert_eq!(
            decode_cell("1A", dims),
            Err(NotationError::BadColumn { found: '1' })
        );
        assert_eq!(
            decode_cell("b2", dims),
            Err(NotationError::BadColumn { found: 'b' })
        );
    }

    #[test]
    fn decode_cell_rejects_bad_rows() {
        let dims = dims_3x3();
        assert_eq!(
            decode_cell("B", dims),
            Err(NotationError::BadRow {
                token: String::new()
            })
        );
        assert_eq!(
            decode_cell("B2x", dims),
            Err(NotationError::BadRow {
                token: "2x".to_owned()
            })
        );
        assert_eq!(
            decode_cell("B-1", dims),
            Err(NotationError::BadRow {
                token: "-1".to_owned()
            })
        );
    }

    #[test]
    fn decode_cell_rejects_out_of_range_coordinates() {
        let dims = dims_3x3();
        // Row 99 does not exist on a 3-row grid.
        assert_eq!(
            decode_cell("Z99", dims),
            Err(NotationError::RowOutOfRange { row: 99, rows: 3 })
        );
        // The row fits but column Z falls off a 3-column grid.
        assert!(matches!(
            decode_cell("Z0", dims),
            Err(NotationError::CellOutOfRange { .. })
        ));
    }

    #[test]
    fn decode_cell_rejects_empty_codes() {
        assert_eq!(decode_cell("", dims_3x3()), Err(NotationError::EmptyCellCode));
    }

    #[test]
    fn encode_board_uses_set_order() {
        let dims = dims_3x3();
        // Middle-column vertical bar; insertion order is irrelevant.
        let cells: BTreeSet<Cell> =
            [Cell::new(1, 2), Cell::new(1, 0), Cell::new(1, 1)].into_iter().collect();
        assert_eq!(encode_board(&cells, dims).unwrap(), "B2_B1_B0");
    }

    #[test]
    fn encode_board_of_empty_set_is_empty_string() {
        assert_eq!(encode_board(&BTreeSet::new(), dims_3x3()).unwrap(), "");
    }

    #[test]
    fn decode_board_inverts_encode_board() {
        let dims = dims_3x3();
        let cells: BTreeSet<Cell> =
            [Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)].into_iter().collect();
        let encoded = encode_board(&cells, dims).unwrap();
        assert_eq!(decode_board(&encoded, dims).unwrap(), cells);
    }

    #[test]
    fn decode_board_reads_the_shared_example() {
        let expected: BTreeSet<Cell> =
            [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)].into_iter().collect();
        assert_eq!(decode_board("B2_B1_B0", dims_3x3()).unwrap(), expected);
    }

    #[test]
    fn decode_board_rejects_empty_input() {
        assert_eq!(
            decode_board("", dims_3x3()),
            Err(NotationError::EmptyNotation)
        );
    }

    #[test]
    fn decode_board_rejects_empty_segments() {
        assert_eq!(
            decode_board("B2__B1", dims_3x3()),
            Err(NotationError::EmptyCellCode)
        );
    }

    #[test]
    fn decode_board_collapses_duplicates() {
        let cells = decode_board("B1_B1", dims_3x3()).unwrap();
        assert_eq!(cells.len(), 1);
        assert!(cells.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn one_bad_segment_fails_the_whole_board() {
        assert!(decode_board("B2_x1_B0", dims_3x3()).is_err());
    }
}
