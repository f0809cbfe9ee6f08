//! Session host binary for the Petri Game of Life.
//!
//! This is the headless counterpart of the browser host: it loads a board
//! from a share-link query, plays it on a timer, and keeps the share state
//! up to date after every generation. It draws nothing; observers get the
//! structured log stream and the final share link instead of a canvas.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `petri-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Parse the share-link query from the config
//! 4. Create the session (falling back to an empty board on a bad link)
//! 5. Create the session controls
//! 6. Run the session loop
//! 7. Log the result and the final share link

mod error;
mod share_callback;

use std::path::Path;
use std::sync::Arc;

use petri_core::config::LifeConfig;
use petri_core::control::SessionControls;
use petri_core::runner;
use petri_core::session::{LifeSession, SessionError};
use petri_notation::ShareState;
use petri_types::GridDims;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::share_callback::ShareCallback;

/// Application entry point for the session host.
///
/// Initializes all subsystems and runs the session loop. Returns an
/// error code on failure.
///
/// # Errors
///
/// Returns an error if any initialization step or the run itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("petri-engine starting");
    info!(
        rows = config.grid.rows,
        cols = config.grid.cols,
        step_interval_ms = config.session.step_interval_ms,
        max_steps = config.session.max_steps,
        "Configuration loaded"
    );

    // 3. Parse the share-link query.
    let share = ShareState::from_query(&config.board.share);

    // 4. Create the session (empty-board fallback for a bad share link).
    let dims = GridDims::new(config.grid.rows, config.grid.cols);
    let mut session = build_session(dims, &share)?;
    info!(
        session_id = %session.id(),
        population = session.population(),
        generation = session.generation(),
        "Session created"
    );

    // 5. Create the session controls.
    let controls = Arc::new(SessionControls::new(
        config.session.step_interval_ms,
        config.session.max_steps,
    ));

    // 6. Run the session loop, mirroring each step into the share state.
    let mut callback = ShareCallback::new(session.share_state().map_err(EngineError::from)?);
    let result = runner::run_session(&mut session, &controls, &mut callback)
        .await
        .map_err(EngineError::from)?;

    // 7. Log the result and the final share link.
    runner::log_run_end(&result);
    info!(
        share = %callback.share().to_query(),
        elapsed_seconds = controls.elapsed_seconds(),
        "Final share state"
    );

    Ok(())
}

/// Load the host configuration, treating a missing file as all-defaults.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if the file exists but cannot be read
/// or parsed.
fn load_config() -> Result<LifeConfig, EngineError> {
    let path = Path::new("petri-config.yaml");
    if path.exists() {
        Ok(LifeConfig::from_file(path)?)
    } else {
        Ok(LifeConfig::default())
    }
}

/// Build the session from the parsed share state.
///
/// A malformed share link is collaborator input, not a reason to crash:
/// the decode failure is logged and the session starts from an empty
/// board. Every other failure mode -- invalid grid dimensions, in
/// practice -- is a configuration fault and propagates untouched, so the
/// log names the real cause instead of blaming the link.
///
/// # Errors
///
/// Returns [`EngineError::Session`] if the grid dimensions are rejected.
fn build_session(dims: GridDims, share: &ShareState) -> Result<LifeSession, EngineError> {
    match LifeSession::from_share(dims, share) {
        Ok(session) => Ok(session),
        Err(SessionError::Notation { source }) => {
            warn!(error = %source, "Malformed share state, starting with an empty board");
            LifeSession::new(dims).map_err(EngineError::from)
        }
        Err(e) => Err(EngineError::from(e)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use petri_notation::ShareKey;

    use super::*;

    #[test]
    fn bad_share_notation_falls_back_to_an_empty_board() {
        let mut share = ShareState::new();
        share.set(ShareKey::Starting, "not-a-board");
        let session = build_session(GridDims::new(3, 3), &share).unwrap();
        assert!(session.board().is_empty());
        assert!(session.starting_cells().is_empty());
    }

    #[test]
    fn valid_share_notation_seeds_the_board() {
        let mut share = ShareState::new();
        share.set(ShareKey::Starting, "B2_B1_B0");
        let session = build_session(GridDims::new(3, 3), &share).unwrap();
        assert_eq!(session.population(), 3);
    }

    #[test]
    fn invalid_dimensions_propagate_instead_of_falling_back() {
        // 30 columns cannot be addressed by single letters; the grid is
        // rejected as configuration, not blamed on the share link.
        let mut share = ShareState::new();
        share.set(ShareKey::Starting, "B2_B1_B0");
        let result = build_session(GridDims::new(3, 30), &share);
        assert!(matches!(result, Err(EngineError::Session { .. })));
    }
}
