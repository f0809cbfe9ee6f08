//! Board state for the Petri life simulator.
//!
//! This crate owns the sparse live-cell representation: a fixed-size grid on
//! which only the live cells are stored. It validates coordinates at every
//! mutation so downstream crates (the stepping engine, the notation codec)
//! can assume that any cell they read from a board is in range.
//!
//! Rendering and persistence live elsewhere; this crate is purely the
//! in-memory membership model.

pub mod board;
pub mod error;

pub use board::BoardState;
pub use error::BoardError;
