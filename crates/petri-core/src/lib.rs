//! Generation stepping, session control, and orchestration for the Petri
//! Game of Life simulator.
//!
//! This crate owns the step cycle that drives a session: compute the next
//! generation's delta from the board snapshot, apply it, advance the
//! counter, and report a summary to observers.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `petri-config.yaml` into
//!   strongly-typed structs.
//! - [`control`] -- [`SessionControls`], the shared pause/stop/cadence
//!   control plane for the run loop.
//! - [`generation`] -- Neighbour counting and the birth/death rule over a
//!   board snapshot.
//! - [`runner`] -- The async run loop, [`StepCallback`], and run results.
//! - [`session`] -- [`LifeSession`], the command interface owning one
//!   board, its starting snapshot, and the generation counter.
//!
//! [`SessionControls`]: control::SessionControls
//! [`StepCallback`]: runner::StepCallback
//! [`LifeSession`]: session::LifeSession

pub mod config;
pub mod control;
pub mod generation;
pub mod runner;
pub mod session;
