//! Shared type definitions for the Petri Game of Life workspace.
//!
//! This crate is the single source of truth for the value types used across
//! the workspace. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` for the canvas frontend.
//!
//! # Modules
//!
//! - [`cell`] -- The [`Cell`] coordinate value type
//! - [`grid`] -- Fixed [`GridDims`] and the notation column limit
//! - [`ids`] -- Type-safe UUID wrapper for session identifiers

pub mod cell;
pub mod grid;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use cell::Cell;
pub use grid::{GridDims, MAX_COLUMNS};
pub use ids::SessionId;

#[cfg(test)]
mod tests {
    //! Integration test for `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation;
        // the files are written to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        let _ = crate::cell::Cell::export_all();
        let _ = crate::grid::GridDims::export_all();
        let _ = crate::ids::SessionId::export_all();
    }
}
