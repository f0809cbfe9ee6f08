//! Generation stepping: the birth/death rule evaluated over a board snapshot.
//!
//! One generation is computed in two passes over the live-cell set, both
//! reading only the pre-step snapshot:
//!
//! 1. **Survival** -- every live cell with fewer than 2 or more than 3 live
//!    neighbours is marked dead.
//! 2. **Birth** -- every dead position adjacent to a live cell with exactly
//!    3 live neighbours is marked born.
//!
//! The passes produce a [`GenerationDelta`]; the session applies it to the
//! board afterwards, so a cell killed in this generation still counts as a
//! neighbour for every other cell in the same generation.
//!
//! Two different edge clamps are in play and they are not the same. The
//! neighbour-counting window clamps its upper bound to the dimension itself,
//! one past the last valid index; the extra probes always miss because the
//! board never stores off-board cells. The birth-candidate scan clamps to
//! the last valid index, one tighter. Both clamps are load-bearing for
//! compatibility with existing shared boards and must not be unified.

use std::collections::BTreeSet;

use petri_board::BoardState;
use petri_types::Cell;

/// The cell-level changes one generation produces.
///
/// Deaths and births are disjoint by construction: deaths come from the
/// live set, births from dead positions only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationDelta {
    /// Live cells that die this generation.
    pub deaths: BTreeSet<Cell>,
    /// Dead positions that come alive this generation.
    pub births: BTreeSet<Cell>,
}

impl GenerationDelta {
    /// Check whether this generation changes nothing.
    pub fn is_empty(&self) -> bool {
        self.deaths.is_empty() && self.births.is_empty()
    }
}

/// Count the live neighbours of a cell, excluding the cell itself.
///
/// The window is `[x-1, min(cols, x+1)] x [y-1, min(rows, y+1)]` inclusive,
/// saturating at zero on the low side. The upper bound is the dimension
/// itself, so the scan probes one off-board column and row at the far
/// edges; those probes read dead because off-board cells are never stored.
///
/// The result is at most 8 for any in-range cell.
pub fn count_live_neighbours(board: &BoardState, cell: Cell) -> u8 {
    let dims = board.dims();
    let x_hi = cell.x.saturating_add(1).min(dims.cols);
    let y_hi = cell.y.saturating_add(1).min(dims.rows);

    let mut count: u8 = 0;
    for x in cell.x.saturating_sub(1)..=x_hi {
        for y in cell.y.saturating_sub(1)..=y_hi {
            let probe = Cell::new(x, y);
            if probe == cell {
                continue;
            }
            if board.contains(probe) {
                count = count.saturating_add(1);
            }
        }
    }
    count
}

/// Compute the next generation's delta from the current board snapshot.
///
/// The board is not mutated; every neighbour count reads the pre-step
/// state. Birth candidates are gathered from the dead positions around
/// each live cell, clamped to the last valid index -- one tighter than
/// the counting window -- and revive on a neighbour count of exactly 3.
#[must_use]
pub fn next_generation(board: &BoardState) -> GenerationDelta {
    let dims = board.dims();
    let mut delta = GenerationDelta::default();

    for &cell in board.live_cells() {
        let neighbours = count_live_neighbours(board, cell);
        if !(2..=3).contains(&neighbours) {
            delta.deaths.insert(cell);
        }

        let x_hi = cell.x.saturating_add(1).min(dims.cols.saturating_sub(1));
        let y_hi = cell.y.saturating_add(1).min(dims.rows.saturating_sub(1));
        for x in cell.x.saturating_sub(1)..=x_hi {
            for y in cell.y.saturating_sub(1)..=y_hi {
                let candidate = Cell::new(x, y);
                if board.contains(candidate) {
                    continue;
                }
                if count_live_neighbours(board, candidate) == 3 {
                    delta.births.insert(candidate);
                }
            }
        }
    }

    delta
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use petri_types::GridDims;

    use super::*;

    fn make_board(rows: u32, cols: u32, cells: &[(u32, u32)]) -> BoardState {
        let mut board = BoardState::new(GridDims::new(rows, cols)).unwrap();
        for &(x, y) in cells {
            board.add(Cell::new(x, y)).unwrap();
        }
        board
    }

    fn apply(board: &mut BoardState, delta: &GenerationDelta) {
        for &cell in &delta.deaths {
            board.remove(cell).unwrap();
        }
        for &cell in &delta.births {
            board.add(cell).unwrap();
        }
    }

    fn full_3x3() -> BoardState {
        make_board(
            3,
            3,
            &[
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (1, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2),
            ],
        )
    }

    #[test]
    fn neighbour_count_excludes_the_cell_itself() {
        let board = full_3x3();
        // All 9 cells live; the centre sees only the other 8.
        assert_eq!(count_live_neighbours(&board, Cell::new(1, 1)), 8);
    }

    #[test]
    fn corner_edge_and_centre_counts() {
        let board = full_3x3();
        assert_eq!(count_live_neighbours(&board, Cell::new(0, 0)), 3);
        assert_eq!(count_live_neighbours(&board, Cell::new(1, 0)), 5);
        assert_eq!(count_live_neighbours(&board, Cell::new(1, 1)), 8);
    }

    #[test]
    fn far_edge_counts_are_unaffected_by_the_off_board_probe() {
        // Right column fully live; (2, 1) sees only its two column
        // neighbours even though the window reaches x = 3.
        let board = make_board(3, 3, &[(2, 0), (2, 1), (2, 2)]);
        assert_eq!(count_live_neighbours(&board, Cell::new(2, 1)), 2);
    }

    #[test]
    fn empty_board_counts_zero_everywhere() {
        let board = make_board(3, 3, &[]);
        assert_eq!(count_live_neighbours(&board, Cell::new(1, 1)), 0);
    }

    #[test]
    fn lonely_cell_dies_and_nothing_is_born() {
        let board = make_board(3, 3, &[(1, 1)]);
        let delta = next_generation(&board);
        assert_eq!(delta.deaths, [Cell::new(1, 1)].into_iter().collect());
        assert!(delta.births.is_empty());
    }

    #[test]
    fn overcrowded_centre_dies() {
        let board = full_3x3();
        let delta = next_generation(&board);
        assert!(delta.deaths.contains(&Cell::new(1, 1)));
        // Corners have exactly 3 neighbours and survive.
        assert!(!delta.deaths.contains(&Cell::new(0, 0)));
    }

    #[test]
    fn exactly_three_neighbours_gives_birth() {
        let board = make_board(3, 3, &[(0, 0), (1, 0), (0, 1)]);
        let delta = next_generation(&board);
        assert_eq!(delta.births, [Cell::new(1, 1)].into_iter().collect());
        assert!(delta.deaths.is_empty());
    }

    #[test]
    fn block_is_a_still_life() {
        let board = make_board(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let delta = next_generation(&board);
        assert!(delta.is_empty());
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let vertical: BTreeSet<Cell> =
            [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)].into_iter().collect();
        let horizontal: BTreeSet<Cell> =
            [Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)].into_iter().collect();

        let mut board = make_board(3, 3, &[(1, 0), (1, 1), (1, 2)]);

        let delta = next_generation(&board);
        apply(&mut board, &delta);
        assert_eq!(board.live_cells(), &horizontal);

        let delta = next_generation(&board);
        apply(&mut board, &delta);
        assert_eq!(board.live_cells(), &vertical);
    }

    #[test]
    fn empty_board_steps_to_empty_delta() {
        let board = make_board(3, 3, &[]);
        assert!(next_generation(&board).is_empty());
    }

    #[test]
    fn deaths_and_births_never_overlap() {
        let board = make_board(5, 5, &[(1, 1), (2, 1), (3, 1), (2, 2), (2, 3)]);
        let delta = next_generation(&board);
        assert!(delta.deaths.is_disjoint(&delta.births));
    }
}
