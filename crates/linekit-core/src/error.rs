//! Error types for the editing engine.
//!
//! Boundary conditions inside the engine (cursor at either end, empty
//! history, empty kill slot, no completion match) are defined as silent
//! no-ops and never produce an error. `EngineError` covers the cases that
//! are genuine contract violations: an unknown command name at the dispatch
//! boundary, a misbehaving candidate provider, or invalid configuration.

use std::fmt;

/// Errors produced by the editing engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A command name with no entry in the dispatch table.
    UnknownCommand(String),
    /// The candidate provider returned text the buffer cannot hold.
    InvalidCandidate { candidate: String, reason: String },
    /// Session configuration failed validation.
    InvalidConfig(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownCommand(name) => {
                write!(f, "unknown command '{name}'")
            }
            EngineError::InvalidCandidate { candidate, reason } => {
                write!(f, "invalid completion candidate {candidate:?}: {reason}")
            }
            EngineError::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Create an unknown-command error.
    pub fn unknown_command(name: &str) -> Self {
        EngineError::UnknownCommand(name.to_string())
    }

    /// Create an invalid-candidate error.
    pub fn invalid_candidate(candidate: &str, reason: &str) -> Self {
        EngineError::InvalidCandidate {
            candidate: candidate.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(msg: &str) -> Self {
        EngineError::InvalidConfig(msg.to_string())
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_carry_context() {
        let err = EngineError::unknown_command("no-such-thing");
        assert_eq!(err.to_string(), "unknown command 'no-such-thing'");

        let err = EngineError::invalid_candidate("bad\nline", "embedded newline");
        assert!(err.to_string().contains("embedded newline"));

        let err = EngineError::invalid_config("history bound must be at least 1");
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&EngineError::unknown_command("x"));
    }
}
