//! Sparse board state: the set of live cells on a fixed-size grid.
//!
//! A [`BoardState`] owns the live-cell set for one session. Only live cells
//! are stored; every other position on the grid is dead by omission. The set
//! is ordered (column first, then row), so iteration -- and therefore the
//! token order of an encoded board -- does not depend on insertion history.
//!
//! Mutating operations validate coordinates eagerly and reject out-of-range
//! cells before touching the set, so the stepping engine can trust that
//! every stored cell lies inside the grid.

use std::collections::BTreeSet;

use petri_types::{Cell, GridDims, MAX_COLUMNS};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// The live-cell set for a fixed-size grid.
///
/// Created empty or from a decoded cell set; mutated by single-cell edits
/// ([`add`](Self::add), [`remove`](Self::remove), [`toggle`](Self::toggle))
/// and by the per-generation bulk edit the engine computes. Invariant: every
/// stored cell is valid for [`dims`](Self::dims), and no cell appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Fixed dimensions for the lifetime of this board.
    dims: GridDims,
    /// Currently live cells, ordered by `(x, y)`.
    live: BTreeSet<Cell>,
}

impl BoardState {
    /// Create an empty board for the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyGrid`] if either dimension is zero, or
    /// [`BoardError::TooManyColumns`] if the grid is wider than the
    /// single-letter notation alphabet.
    pub const fn new(dims: GridDims) -> Result<Self, BoardError> {
        if dims.rows == 0 || dims.cols == 0 {
            return Err(BoardError::EmptyGrid { dims });
        }
        if dims.cols > MAX_COLUMNS {
            return Err(BoardError::TooManyColumns { cols: dims.cols });
        }
        Ok(Self {
            dims,
            live: BTreeSet::new(),
        })
    }

    /// Create a board pre-populated with the given live cells.
    ///
    /// # Errors
    ///
    /// Returns the same dimension errors as [`new`](Self::new), or
    /// [`BoardError::InvalidCoordinate`] if any cell is out of range.
    pub fn from_cells(dims: GridDims, cells: BTreeSet<Cell>) -> Result<Self, BoardError> {
        let mut board = Self::new(dims)?;
        for cell in cells {
            board.add(cell)?;
        }
        Ok(board)
    }

    /// Return the fixed grid dimensions.
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    // -------------------------------------------------------------------
    // Membership edits
    // -------------------------------------------------------------------

    /// Mark a cell as alive. No-op if the cell is already live.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCoordinate`] if the cell is out of range.
    pub fn add(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(cell)?;
        self.live.insert(cell);
        Ok(())
    }

    /// Mark a cell as dead. No-op if the cell is already dead.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCoordinate`] if the cell is out of range.
    pub fn remove(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(cell)?;
        self.live.remove(&cell);
        Ok(())
    }

    /// Invert a cell's membership. Exactly one of the add/remove paths runs.
    ///
    /// Returns `true` if the cell is alive after the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCoordinate`] if the cell is out of range.
    pub fn toggle(&mut self, cell: Cell) -> Result<bool, BoardError> {
        self.check_bounds(cell)?;
        if self.live.contains(&cell) {
            self.live.remove(&cell);
            Ok(false)
        } else {
            self.live.insert(cell);
            Ok(true)
        }
    }

    /// Kill every cell on the board.
    pub fn clear(&mut self) {
        self.live.clear();
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Check whether a cell is currently alive.
    ///
    /// Out-of-range cells are never stored, so they always read as dead.
    pub fn contains(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Return a read-only view of the live-cell set for iteration.
    pub const fn live_cells(&self) -> &BTreeSet<Cell> {
        &self.live
    }

    /// Return the number of live cells.
    ///
    /// Returns `u32::MAX` in the (practically impossible) case where the
    /// live set exceeds `u32::MAX` entries.
    pub fn population(&self) -> u32 {
        u32::try_from(self.live.len()).unwrap_or(u32::MAX)
    }

    /// Check whether the board has no live cells.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Reject cells that lie outside the grid before any mutation.
    const fn check_bounds(&self, cell: Cell) -> Result<(), BoardError> {
        if self.dims.contains(cell) {
            Ok(())
        } else {
            Err(BoardError::InvalidCoordinate {
                cell,
                dims: self.dims,
            })
        }
    }
}
