//! The completion protocol's provider side.
//!
//! Candidates come from an external [`CandidateProvider`] capability
//! supplied by the embedding application. The engine hands it the word
//! fragment ending at the cursor, filters the returned candidates to those
//! that actually start with the fragment, and then branches on the match
//! count (see `Session::dispatch` for the buffer side). Provider output is
//! validated before it can reach the buffer: a candidate a single-line
//! buffer cannot hold is a contract violation, reported as a typed error.

use crate::error::{EngineError, EngineResult};

/// Source of completion candidates for a word prefix.
///
/// Implement this trait directly, or use any `Fn(&str) -> Vec<String>`
/// closure, which implements it automatically.
///
/// # Examples
///
/// ```
/// use linekit_core::complete::CandidateProvider;
///
/// let provider = |prefix: &str| {
///     ["--help", "--verbose"]
///         .iter()
///         .filter(|option| option.starts_with(prefix))
///         .map(|option| option.to_string())
///         .collect()
/// };
/// assert_eq!(provider.candidates("--h"), vec!["--help".to_string()]);
/// ```
pub trait CandidateProvider {
    /// Return candidate strings for the given prefix, most relevant first.
    ///
    /// The provider may return an unfiltered list; the engine filters to
    /// candidates starting with the prefix and preserves provider order.
    fn candidates(&self, prefix: &str) -> Vec<String>;
}

impl<F> CandidateProvider for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn candidates(&self, prefix: &str) -> Vec<String> {
        self(prefix)
    }
}

/// Check that a provider-supplied candidate can live in a line buffer.
///
/// Line breaks and other control characters are rejected: the buffer is a
/// single line and a candidate carrying them would corrupt it.
pub fn validate_candidate(candidate: &str) -> EngineResult<()> {
    if candidate.chars().any(char::is_control) {
        return Err(EngineError::invalid_candidate(
            candidate,
            "contains control characters",
        ));
    }
    Ok(())
}

/// Filter candidates to those starting with `prefix`, preserving order.
pub fn prefix_matches(prefix: &str, candidates: Vec<String>) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.starts_with(prefix))
        .collect()
}
