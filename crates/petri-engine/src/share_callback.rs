//! Step callback that keeps the share-link state fresh.
//!
//! After each step, this callback re-encodes both share slots from the
//! session, playing the role the browser host plays when it rewrites the
//! address bar after every generation.

use petri_core::runner::StepCallback;
use petri_core::session::{LifeSession, StepSummary};
use petri_notation::ShareState;
use tracing::{debug, warn};

/// Callback that mirrors the session into a [`ShareState`].
pub struct ShareCallback {
    share: ShareState,
}

impl ShareCallback {
    /// Create a share callback seeded with the pre-run share state.
    pub const fn new(initial: ShareState) -> Self {
        Self { share: initial }
    }

    /// The most recently encoded share state.
    pub const fn share(&self) -> &ShareState {
        &self.share
    }
}

impl StepCallback for ShareCallback {
    fn on_step(&mut self, summary: &StepSummary, session: &LifeSession) {
        match session.share_state() {
            Ok(share) => {
                debug!(
                    generation = summary.generation,
                    share = %share.to_query(),
                    "Share state refreshed"
                );
                self.share = share;
            }
            Err(e) => {
                warn!(error = %e, "Failed to encode share state, keeping the previous one");
            }
        }
    }
}
