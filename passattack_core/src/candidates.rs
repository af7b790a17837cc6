//! Candidate generation strategies
//!
//! A `CandidateSource` produces a lazy, finite, deterministic sequence of
//! password candidates. Sources are restartable per run (construct a new
//! one) but not resumable mid-run. Each source owns its own progress
//! throttle: `progress_due` yields a sample at most once per pulled
//! candidate, at the cadence that makes sense for that strategy.

use crate::Result;
use serde::{Deserialize, Serialize};

mod brute_force;
mod dictionary;
mod hybrid;
mod rules;

pub use brute_force::BruteForceGenerator;
pub use dictionary::DictionaryStream;
pub use hybrid::HybridMutator;
pub use rules::MutationRules;

/// Candidate generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Streamed wordlist lookup
    Dictionary,
    /// Bounded combinatorial enumeration
    BruteForce,
    /// Rule-based mutation of wordlist entries
    Hybrid,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Dictionary => write!(f, "dictionary"),
            Strategy::BruteForce => write!(f, "brute_force"),
            Strategy::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// Producer of a lazy, finite sequence of password candidates
pub trait CandidateSource: Send {
    /// Pull the next candidate; `Ok(None)` once the source is exhausted
    fn next_candidate(&mut self) -> Result<Option<String>>;

    /// Throttled progress sample, due at most once per pulled candidate
    ///
    /// Dictionary and brute-force sources key this on candidate count;
    /// the hybrid source keys it on base-word count, since its variant
    /// count is not known in advance.
    fn progress_due(&mut self) -> Option<String>;

    /// Which strategy this source implements
    fn strategy(&self) -> Strategy;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Dictionary.to_string(), "dictionary");
        assert_eq!(Strategy::BruteForce.to_string(), "brute_force");
        assert_eq!(Strategy::Hybrid.to_string(), "hybrid");
    }
}
