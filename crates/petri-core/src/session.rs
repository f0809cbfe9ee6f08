//! Session control: one board, its starting snapshot, and the generation
//! counter behind a command interface.
//!
//! [`LifeSession`] is the only writer of its board. Manual edits, generation
//! steps, reset, and back-to-start all go through command methods, which is
//! what keeps the starting snapshot and the generation counter consistent
//! with the board they describe. The timer loop lives in [`crate::runner`];
//! this module is purely synchronous.

use std::collections::BTreeSet;

use petri_board::{BoardError, BoardState};
use petri_notation::{NotationError, ShareKey, ShareState, decode_board, encode_board};
use petri_types::{Cell, GridDims, SessionId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation;

/// Errors that can occur while operating a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A board mutation failed.
    #[error("board error: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// Encoding or decoding a board notation failed.
    #[error("notation error: {source}")]
    Notation {
        /// The underlying notation error.
        #[from]
        source: NotationError,
    },

    /// The generation counter overflowed.
    #[error("generation counter overflowed")]
    GenerationOverflow,
}

/// Whether the session's timer loop should be stepping the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Editing: the board only changes through explicit commands.
    Idle,
    /// Playing: the run loop steps the board on a timer.
    Running,
}

/// What one step call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A generation was computed and applied.
    Stepped(StepSummary),
    /// The board was already empty; nothing ran and the phase dropped to
    /// [`SessionPhase::Idle`].
    Extinct,
}

/// Summary of a single executed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    /// The generation number after this step.
    pub generation: u64,
    /// Cells that came alive this step.
    pub births: BTreeSet<Cell>,
    /// Cells that died this step.
    pub deaths: BTreeSet<Cell>,
    /// Live-cell count after this step.
    pub population: u32,
}

/// JSON-serializable snapshot of a session for status reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    /// The session's identifier.
    pub id: SessionId,
    /// Current generation number.
    pub generation: u64,
    /// Current live-cell count.
    pub population: u32,
    /// Current phase.
    pub phase: SessionPhase,
    /// The fixed grid dimensions.
    pub dims: GridDims,
}

/// One interactive Game of Life session.
///
/// Owns the board, the manually-edited starting snapshot, the generation
/// counter, and the play/pause phase flag. Every mutation goes through a
/// command method; there is no other way to change the board, which keeps
/// the starting snapshot and the counter honest.
#[derive(Debug, Clone)]
pub struct LifeSession {
    /// Identifier used in logs and status payloads.
    id: SessionId,
    /// The evolving board.
    board: BoardState,
    /// Snapshot of the last manually-edited pattern, for back-to-start.
    starting: BTreeSet<Cell>,
    /// Generation number; starts at 1 and advances once per executed step.
    generation: u64,
    /// Play/pause phase.
    phase: SessionPhase,
}

impl LifeSession {
    /// Create a session with an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Board`] if the dimensions are rejected.
    pub fn new(dims: GridDims) -> Result<Self, SessionError> {
        Ok(Self {
            id: SessionId::new(),
            board: BoardState::new(dims)?,
            starting: BTreeSet::new(),
            generation: 1,
            phase: SessionPhase::Idle,
        })
    }

    /// Create a session seeded from an encoded board.
    ///
    /// The decoded pattern becomes both the board and the starting
    /// snapshot. An empty string seeds an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Notation`] if the notation is malformed, or
    /// [`SessionError::Board`] if the dimensions are rejected or a decoded
    /// cell does not fit them.
    pub fn from_notation(dims: GridDims, notation: &str) -> Result<Self, SessionError> {
        let mut session = Self::new(dims)?;
        if notation.is_empty() {
            return Ok(session);
        }
        let cells = decode_board(notation, dims)?;
        session.board = BoardState::from_cells(dims, cells.clone())?;
        session.starting = cells;
        Ok(session)
    }

    /// Create a session from a share-link state.
    ///
    /// The board loads from the `current` slot when present, otherwise
    /// from `starting`; the starting snapshot loads from the `starting`
    /// slot only. A session restored mid-run therefore keeps its original
    /// back-to-start pattern, and a share link with only a `current` board
    /// backs up to an empty grid.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`from_notation`](Self::from_notation), for
    /// whichever slots are present.
    pub fn from_share(dims: GridDims, share: &ShareState) -> Result<Self, SessionError> {
        let mut session = Self::new(dims)?;
        if let Some(notation) = share.get(ShareKey::Starting) {
            session.starting = decode_board(notation, dims)?;
        }
        if let Some(notation) = share.effective() {
            let cells = decode_board(notation, dims)?;
            session.board = BoardState::from_cells(dims, cells)?;
        }
        Ok(session)
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Toggle one cell and refresh the starting snapshot.
    ///
    /// Every manual edit redefines the pattern that back-to-start returns
    /// to, so the snapshot is rewritten from the whole board on each call.
    ///
    /// Returns `true` if the cell is alive after the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Board`] if the cell is out of range.
    pub fn toggle_cell(&mut self, cell: Cell) -> Result<bool, SessionError> {
        let alive = self.board.toggle(cell)?;
        self.starting = self.board.live_cells().clone();
        Ok(alive)
    }

    /// Execute one generation step.
    ///
    /// An empty board is extinct: the call is a no-op that reports
    /// [`StepOutcome::Extinct`], drops the phase to idle, and leaves the
    /// generation counter untouched. Otherwise the delta is computed from
    /// the pre-step snapshot, deaths are applied before births, and the
    /// counter advances by one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GenerationOverflow`] if the counter cannot
    /// advance. Board errors cannot occur: the delta only names in-range
    /// cells.
    pub fn step(&mut self) -> Result<StepOutcome, SessionError> {
        if self.board.is_empty() {
            self.phase = SessionPhase::Idle;
            return Ok(StepOutcome::Extinct);
        }

        let delta = generation::next_generation(&self.board);
        for &cell in &delta.deaths {
            self.board.remove(cell)?;
        }
        for &cell in &delta.births {
            self.board.add(cell)?;
        }
        self.generation = self
            .generation
            .checked_add(1)
            .ok_or(SessionError::GenerationOverflow)?;

        let summary = StepSummary {
            generation: self.generation,
            births: delta.births,
            deaths: delta.deaths,
            population: self.board.population(),
        };
        debug!(
            session_id = %self.id,
            generation = summary.generation,
            births = summary.births.len(),
            deaths = summary.deaths.len(),
            population = summary.population,
            "Generation stepped"
        );
        Ok(StepOutcome::Stepped(summary))
    }

    /// Wipe the session back to an empty idle board at generation 1.
    ///
    /// Clears the starting snapshot too; there is nothing to go back to
    /// after a reset.
    pub fn reset(&mut self) {
        self.board.clear();
        self.starting.clear();
        self.generation = 1;
        self.phase = SessionPhase::Idle;
    }

    /// Restore the board from the starting snapshot at generation 1.
    ///
    /// With an empty snapshot this lands on an empty board. The phase
    /// drops to idle so the restored pattern can be inspected or edited
    /// before playing again.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Board`] if a snapshot cell no longer fits
    /// the grid; unreachable in practice because dimensions never change.
    pub fn back_to_start(&mut self) -> Result<(), SessionError> {
        self.board = BoardState::from_cells(self.board.dims(), self.starting.clone())?;
        self.generation = 1;
        self.phase = SessionPhase::Idle;
        Ok(())
    }

    /// Move between the idle and running phases.
    pub const fn set_running(&mut self, running: bool) {
        self.phase = if running {
            SessionPhase::Running
        } else {
            SessionPhase::Idle
        };
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The session's identifier.
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Read-only view of the board.
    pub const fn board(&self) -> &BoardState {
        &self.board
    }

    /// Read-only view of the starting snapshot.
    pub const fn starting_cells(&self) -> &BTreeSet<Cell> {
        &self.starting
    }

    /// Current generation number.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Current live-cell count.
    pub fn population(&self) -> u32 {
        self.board.population()
    }

    /// Whether the session is in the running phase.
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Encode both share slots from the session's state.
    ///
    /// An empty board or snapshot leaves its slot unset, which drops the
    /// key from the share link entirely.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Notation`] if a cell cannot be encoded;
    /// unreachable for boards built through this session's commands.
    pub fn share_state(&self) -> Result<ShareState, SessionError> {
        let dims = self.board.dims();
        let mut share = ShareState::new();
        share.set(ShareKey::Starting, &encode_board(&self.starting, dims)?);
        share.set(ShareKey::Current, &encode_board(self.board.live_cells(), dims)?);
        Ok(share)
    }

    /// Serializable status snapshot for logs and observers.
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            id: self.id,
            generation: self.generation,
            population: self.board.population(),
            phase: self.phase,
            dims: self.board.dims(),
        }
    }
}
