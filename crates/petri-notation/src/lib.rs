//! Board notation for the Petri life simulator.
//!
//! Two layers live here. The codec maps between grid coordinates and the
//! compact algebraic notation used in share links (`B2` for a single cell,
//! `B2_B1_B0` for a whole board). The share module models the two-slot
//! (`starting`/`current`) query-string format those encoded boards travel
//! in.
//!
//! Everything is a pure function over [`petri_types::GridDims`]; no board
//! state is held here.

pub mod codec;
pub mod error;
pub mod share;

pub use codec::{CELL_DELIMITER, decode_board, decode_cell, encode_board, encode_cell};
pub use error::NotationError;
pub use share::{ShareKey, ShareState};
