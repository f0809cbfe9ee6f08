//! Session run loop with pause, stop, and cadence controls.
//!
//! This module provides [`run_session`], the top-level async function that
//! plays a session on a timer:
//!
//! - **Bounded runs**: stop after `max_steps` generations
//! - **Pause/resume**: the driver can halt and continue the loop
//! - **Variable cadence**: step interval adjustable at runtime
//! - **Extinction**: an emptied board ends the run on the following beat
//!
//! The runner wraps the single-step [`LifeSession::step`] command and adds
//! the control plane around it. At most one step is ever in flight; the
//! loop awaits each step's bookkeeping before sleeping toward the next.

use std::sync::Arc;

use tracing::{info, warn};

use crate::control::{EndReason, SessionControls};
use crate::session::{LifeSession, SessionError, StepOutcome, StepSummary};

/// Errors that can occur during a session run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A step execution failed.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: SessionError,
    },
}

/// Result of a session run.
#[derive(Debug)]
pub struct RunResult {
    /// The reason the run ended.
    pub end_reason: EndReason,
    /// The last step summary, if any step completed.
    pub final_summary: Option<StepSummary>,
    /// Total number of steps executed.
    pub total_steps: u64,
}

/// Callback invoked after each step completes.
///
/// Implementations can use this to push the new board to a renderer,
/// refresh a share link, and so on. The callback receives the step
/// summary and the session it came from.
pub trait StepCallback: Send {
    /// Called after a step completes successfully.
    fn on_step(&mut self, summary: &StepSummary, session: &LifeSession);
}

/// A no-op step callback for testing.
pub struct NoOpCallback;

impl StepCallback for NoOpCallback {
    fn on_step(&mut self, _summary: &StepSummary, _session: &LifeSession) {}
}

/// Run the session loop until a termination condition is met.
///
/// The session is put into the running phase and stepped once per
/// interval until the driver requests a stop, the step bound is hit, or
/// the board goes extinct. Extinction is detected at the top of a beat,
/// the same way the interactive loop behaves: the board empties, one more
/// interval elapses, and the loop then observes the empty board and ends.
///
/// # Arguments
///
/// * `session` - The session to play
/// * `controls` - Shared control state (pause, stop, cadence, bounds)
/// * `callback` - Called after each step for observer updates
///
/// # Returns
///
/// Returns a [`RunResult`] describing why the run ended and the final
/// step summary.
///
/// # Errors
///
/// Returns [`RunnerError`] if a step execution fails unrecoverably.
pub async fn run_session(
    session: &mut LifeSession,
    controls: &Arc<SessionControls>,
    callback: &mut dyn StepCallback,
) -> Result<RunResult, RunnerError> {
    let mut last_summary: Option<StepSummary> = None;
    let mut total_steps: u64 = 0;

    info!(
        session_id = %session.id(),
        population = session.population(),
        max_steps = controls.max_steps(),
        step_interval_ms = controls.step_interval_ms(),
        "Session starting"
    );
    session.set_running(true);

    loop {
        // --- Check pause ---
        if controls.is_paused() {
            info!("Session paused, waiting for resume...");
            session.set_running(false);
            controls.wait_if_paused().await;
            session.set_running(true);
            info!("Session resumed");
        }

        // --- Check stop request (before step) ---
        if controls.is_stop_requested() {
            info!("Stop requested");
            session.set_running(false);
            let reason = EndReason::Stopped;
            controls.set_end_reason(reason.clone()).await;
            return Ok(RunResult {
                end_reason: reason,
                final_summary: last_summary,
                total_steps,
            });
        }

        // --- Execute step ---
        let summary = match session.step()? {
            StepOutcome::Stepped(summary) => summary,
            StepOutcome::Extinct => {
                info!(
                    generation = session.generation(),
                    "Board is empty -- extinction"
                );
                let reason = EndReason::Extinction;
                controls.set_end_reason(reason.clone()).await;
                return Ok(RunResult {
                    end_reason: reason,
                    final_summary: last_summary,
                    total_steps,
                });
            }
        };

        total_steps = total_steps.saturating_add(1);

        // --- Notify callback ---
        callback.on_step(&summary, session);

        // --- Check step limit (after step) ---
        if controls.step_limit_reached(total_steps) {
            info!(
                generation = summary.generation,
                max_steps = controls.max_steps(),
                "Step limit reached"
            );
            session.set_running(false);
            let reason = EndReason::MaxStepsReached;
            controls.set_end_reason(reason.clone()).await;
            return Ok(RunResult {
                end_reason: reason,
                final_summary: Some(summary),
                total_steps,
            });
        }

        last_summary = Some(summary);

        // --- Sleep for step interval ---
        let interval_ms = controls.step_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        }
    }
}

/// Log the run end sequence.
///
/// Called after [`run_session`] returns, so the final state lands in the
/// log even when the driver exits immediately afterwards.
pub fn log_run_end(result: &RunResult) {
    info!(
        reason = ?result.end_reason,
        total_steps = result.total_steps,
        final_generation = result.final_summary.as_ref().map(|s| s.generation),
        final_population = result.final_summary.as_ref().map(|s| s.population),
        "Session ended"
    );

    if result.final_summary.is_none() {
        warn!("Session ended with no steps executed");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    use petri_types::{Cell, GridDims};

    use super::*;

    fn make_blinker_session() -> LifeSession {
        // Oscillates forever; never goes extinct on its own.
        LifeSession::from_notation(GridDims::new(3, 3), "B2_B1_B0").unwrap()
    }

    #[tokio::test]
    async fn bounded_by_max_steps() {
        let mut session = make_blinker_session();
        let controls = Arc::new(SessionControls::new(0, 5));
        let mut cb = NoOpCallback;

        let result = run_session(&mut session, &controls, &mut cb).await.unwrap();

        assert_eq!(result.end_reason, EndReason::MaxStepsReached);
        assert_eq!(result.total_steps, 5);
        assert_eq!(session.generation(), 6);
        assert!(!session.is_running());
        assert_eq!(controls.end_reason().await, Some(EndReason::MaxStepsReached));
    }

    #[tokio::test]
    async fn stop_request_before_first_step() {
        let mut session = make_blinker_session();
        let controls = Arc::new(SessionControls::new(0, 0));
        controls.request_stop();
        let mut cb = NoOpCallback;

        let result = run_session(&mut session, &controls, &mut cb).await.unwrap();

        assert_eq!(result.end_reason, EndReason::Stopped);
        assert_eq!(result.total_steps, 0);
        assert!(result.final_summary.is_none());
        assert_eq!(session.generation(), 1);
    }

    #[tokio::test]
    async fn extinction_ends_the_run() {
        let mut session = LifeSession::new(GridDims::new(3, 3)).unwrap();
        // A lone cell dies on the first step; the following beat sees the
        // empty board and ends the run.
        session.toggle_cell(Cell::new(1, 1)).unwrap();
        let controls = Arc::new(SessionControls::new(0, 0));
        let mut cb = NoOpCallback;

        let result = run_session(&mut session, &controls, &mut cb).await.unwrap();

        assert_eq!(result.end_reason, EndReason::Extinction);
        assert_eq!(result.total_steps, 1);
        assert_eq!(result.final_summary.map(|s| s.population), Some(0));
        assert!(!session.is_running());
    }

    #[tokio::test]
    async fn empty_board_ends_immediately() {
        let mut session = LifeSession::new(GridDims::new(3, 3)).unwrap();
        let controls = Arc::new(SessionControls::new(0, 0));
        let mut cb = NoOpCallback;

        let result = run_session(&mut session, &controls, &mut cb).await.unwrap();

        assert_eq!(result.end_reason, EndReason::Extinction);
        assert_eq!(result.total_steps, 0);
        assert!(result.final_summary.is_none());
        assert_eq!(session.generation(), 1);
    }

    #[tokio::test]
    async fn step_callback_is_called() {
        struct CountCallback {
            count: u64,
        }
        impl StepCallback for CountCallback {
            fn on_step(&mut self, _summary: &StepSummary, _session: &LifeSession) {
                self.count = self.count.saturating_add(1);
            }
        }

        let mut session = make_blinker_session();
        let controls = Arc::new(SessionControls::new(0, 3));
        let mut cb = CountCallback { count: 0 };

        let _ = run_session(&mut session, &controls, &mut cb).await.unwrap();

        assert_eq!(cb.count, 3);
    }

    #[tokio::test]
    async fn callback_observes_the_running_session() {
        struct PhaseCallback {
            saw_running: bool,
        }
        impl StepCallback for PhaseCallback {
            fn on_step(&mut self, summary: &StepSummary, session: &LifeSession) {
                self.saw_running = session.is_running();
                assert_eq!(summary.generation, session.generation());
            }
        }

        let mut session = make_blinker_session();
        let controls = Arc::new(SessionControls::new(0, 1));
        let mut cb = PhaseCallback { saw_running: false };

        let _ = run_session(&mut session, &controls, &mut cb).await.unwrap();

        assert!(cb.saw_running);
    }

    #[tokio::test]
    async fn pause_holds_the_loop_until_resume() {
        struct SharedCountCallback {
            steps: Arc<AtomicU64>,
            only_running: Arc<AtomicBool>,
        }
        impl StepCallback for SharedCountCallback {
            fn on_step(&mut self, _summary: &StepSummary, session: &LifeSession) {
                self.steps.fetch_add(1, Ordering::SeqCst);
                self.only_running.fetch_and(session.is_running(), Ordering::SeqCst);
            }
        }

        let steps = Arc::new(AtomicU64::new(0));
        let only_running = Arc::new(AtomicBool::new(true));

        let mut session = make_blinker_session();
        let controls = Arc::new(SessionControls::new(0, 3));
        controls.pause();

        let run_controls = Arc::clone(&controls);
        let mut cb = SharedCountCallback {
            steps: Arc::clone(&steps),
            only_running: Arc::clone(&only_running),
        };
        let handle = tokio::spawn(async move {
            let result = run_session(&mut session, &run_controls, &mut cb).await;
            (result, session)
        });

        // Paused before the first beat: the loop must idle without stepping.
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        assert_eq!(steps.load(Ordering::SeqCst), 0);
        assert!(!handle.is_finished());

        controls.resume();
        let (result, session) = handle.await.unwrap();
        let result = result.unwrap();

        assert_eq!(result.end_reason, EndReason::MaxStepsReached);
        assert_eq!(result.total_steps, 3);
        assert_eq!(steps.load(Ordering::SeqCst), 3);
        assert_eq!(session.generation(), 4);
        // Every callback fired with the session back in the running phase.
        assert!(only_running.load(Ordering::SeqCst));
        assert!(!session.is_running());
    }
}
