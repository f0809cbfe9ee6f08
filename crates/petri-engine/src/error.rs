//! Error types for the session host binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during host startup and session execution.

/// Top-level error for the session host binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: petri_core::config::ConfigError,
    },

    /// A session operation failed.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: petri_core::session::SessionError,
    },

    /// The session run loop failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: petri_core::runner::RunnerError,
    },
}
