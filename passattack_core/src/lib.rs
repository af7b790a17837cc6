//! Passattack Core Library
//!
//! Multi-strategy password recovery engine: generates candidates by
//! streamed dictionary lookup, bounded brute force, or rule-based mutation
//! of dictionary words, and verifies each against a target hash under
//! cooperative cancellation with throttled progress reporting. Memory
//! stays bounded regardless of wordlist size or search-space size.
//!
//! The engine runs synchronously on whatever worker context the caller
//! provides; presentation and persistence are strictly downstream
//! consumers of [`AttackResult`] and [`ProgressEvent`].

pub mod attack;
pub mod cancel;
pub mod candidates;
pub mod error;
pub mod hashing;
pub mod progress;

// Re-export main types
pub use attack::{
    run_brute_force_attack, run_dictionary_attack, run_hybrid_attack, AttackOrchestrator,
    AttackResult, AttackStatus, RunOptions,
};
pub use cancel::CancelHandle;
pub use candidates::{
    BruteForceGenerator, CandidateSource, DictionaryStream, HybridMutator, MutationRules, Strategy,
};
pub use error::{Error, Result};
pub use hashing::{AlgorithmExt, AlgorithmId, Availability, HashSpec, HashVerifier};
pub use progress::{ChannelSink, NullSink, ProgressEvent, ProgressSink};
