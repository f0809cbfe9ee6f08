//! Shared control state for a running session.
//!
//! The run loop and whatever drives it (a host binary, a test) share one
//! [`SessionControls`] value wrapped in [`Arc`]. The driver can pause and
//! resume the loop, change the step cadence, and request a clean stop
//! without tearing the task down.
//!
//! All mutable fields use [`std::sync::atomic`] types so the loop reads
//! them lock-free between steps.
//!
//! [`Arc`]: std::sync::Arc

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, Notify};

/// Reason why a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The board emptied out.
    Extinction,
    /// Reached the configured `max_steps` limit.
    MaxStepsReached,
    /// The driver issued a stop request.
    Stopped,
}

/// Shared run-loop control state.
///
/// Wrapped in [`Arc`](std::sync::Arc) and shared between the run loop and
/// its driver. Atomic fields keep reads lock-free on the stepping path.
#[derive(Debug)]
pub struct SessionControls {
    /// Whether the run loop is currently paused.
    paused: AtomicBool,

    /// Notification used to wake the run loop when resumed.
    resume_notify: Notify,

    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Current step interval in milliseconds (runtime-adjustable).
    step_interval_ms: AtomicU64,

    /// Wall-clock time when the controls were created.
    started_at: DateTime<Utc>,

    /// Maximum number of steps (0 = unlimited).
    max_steps: u64,

    /// Reason the run ended, if it has.
    end_reason: Mutex<Option<EndReason>>,
}

impl SessionControls {
    /// Create control state with the given cadence and step bound.
    pub fn new(step_interval_ms: u64, max_steps: u64) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            step_interval_ms: AtomicU64::new(step_interval_ms),
            started_at: Utc::now(),
            max_steps,
            end_reason: Mutex::new(None),
        }
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Check whether the run loop is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause the run loop. It will sleep until resumed.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume the run loop and wake it.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Wait until the run loop is no longer paused.
    ///
    /// Returns immediately if not paused. Otherwise blocks until
    /// [`resume`](Self::resume) is called.
    pub async fn wait_if_paused(&self) {
        while self.paused.load(Ordering::Acquire) {
            self.resume_notify.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Record the reason the run ended.
    pub async fn set_end_reason(&self, reason: EndReason) {
        let mut guard = self.end_reason.lock().await;
        *guard = Some(reason);
    }

    /// Get the reason the run ended, if it has.
    pub async fn end_reason(&self) -> Option<EndReason> {
        self.end_reason.lock().await.clone()
    }

    // -----------------------------------------------------------------------
    // Step cadence
    // -----------------------------------------------------------------------

    /// Get the current step interval in milliseconds.
    pub fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms.load(Ordering::Acquire)
    }

    /// Set the step interval in milliseconds. Must be at least 100ms.
    ///
    /// Returns the previous interval on success, or `None` if the
    /// value was rejected (below 100ms).
    pub fn set_step_interval_ms(&self, ms: u64) -> Option<u64> {
        if ms < 100 {
            return None;
        }
        let prev = self.step_interval_ms.swap(ms, Ordering::AcqRel);
        Some(prev)
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    /// Check whether the step limit has been reached.
    ///
    /// Returns `true` if `max_steps > 0` and `steps_executed >= max_steps`.
    pub const fn step_limit_reached(&self, steps_executed: u64) -> bool {
        self.max_steps > 0 && steps_executed >= self.max_steps
    }

    /// Get the configured max steps.
    pub const fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Return the wall-clock start time.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Return elapsed seconds since the controls were created.
    pub fn elapsed_seconds(&self) -> u64 {
        let elapsed = Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds();
        // `num_seconds` can be negative if clocks are weird; treat as 0.
        u64::try_from(elapsed.max(0)).unwrap_or(u64::MAX)
    }
}
