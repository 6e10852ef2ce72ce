//! Ready-made completion providers.
//!
//! The engine only defines the [`CandidateProvider`] contract; this module
//! supplies the implementations most applications reach for first. For
//! anything dynamic, a plain closure already implements the trait.

use linekit_core::CandidateProvider;

/// A provider that matches against a fixed list of candidates.
///
/// Candidates are kept in construction order, which is the order the engine
/// reports them in for an ambiguous completion.
///
/// # Examples
///
/// ```
/// use linekit::completion::StaticCandidates;
/// use linekit::CandidateProvider;
///
/// let provider = StaticCandidates::from_strings(vec!["--help", "--verbose"]);
/// assert_eq!(provider.candidates("--h"), vec!["--help".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCandidates {
    candidates: Vec<String>,
}

impl StaticCandidates {
    /// Create a provider over an owned candidate list.
    pub fn new(candidates: Vec<String>) -> Self {
        StaticCandidates { candidates }
    }

    /// Create a provider from anything string-like.
    pub fn from_strings<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticCandidates {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// The full candidate list, unfiltered.
    pub fn all(&self) -> &[String] {
        &self.candidates
    }
}

impl CandidateProvider for StaticCandidates {
    fn candidates(&self, prefix: &str) -> Vec<String> {
        self.candidates
            .iter()
            .filter(|candidate| candidate.starts_with(prefix))
            .cloned()
            .collect()
    }
}
