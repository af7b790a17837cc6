//! Attack orchestration
//!
//! The orchestrator drives a candidate source through the hash verifier on
//! the caller's worker context, synchronously and with no internal
//! parallelism across candidates. That keeps the enumeration order fully
//! deterministic, so the attempt count at success time is a reproducible
//! value. Every failure mode is captured into the returned `AttackResult`;
//! callers never need exception handling around a running attack.

use crate::cancel::CancelHandle;
use crate::candidates::CandidateSource;
use crate::hashing::{HashSpec, HashVerifier};
use crate::progress::{ProgressEvent, ProgressSink};
use log::debug;
use serde::Serialize;
use std::time::Instant;

const STOP_MESSAGE: &str = "Attack stopped by user.";

/// Terminal outcome of an attack run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackStatus {
    /// A candidate matched the target
    #[serde(rename = "SUCCESS")]
    Success,
    /// The source ran to exhaustion with no match
    #[serde(rename = "FAILED")]
    Failure,
    /// Cooperative stop observed
    #[serde(rename = "CANCELLED")]
    Cancelled,
    /// Unrecoverable runtime failure mid-run
    #[serde(rename = "ERROR")]
    Error,
}

impl std::fmt::Display for AttackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackStatus::Success => write!(f, "SUCCESS"),
            AttackStatus::Failure => write!(f, "FAILED"),
            AttackStatus::Cancelled => write!(f, "CANCELLED"),
            AttackStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Terminal record of one attack run
#[derive(Debug, Clone, Serialize)]
pub struct AttackResult {
    pub status: AttackStatus,
    /// The matching candidate, exactly as produced by the source
    pub cracked_candidate: Option<String>,
    pub attempts: u64,
    pub elapsed_seconds: f64,
    pub error: Option<String>,
}

impl AttackResult {
    /// Result for a run whose source could not even be constructed
    ///
    /// No attempt was made and no time is charged.
    fn not_started(error: crate::Error) -> Self {
        Self {
            status: AttackStatus::Error,
            cracked_candidate: None,
            attempts: 0,
            elapsed_seconds: 0.0,
            error: Some(error.to_string()),
        }
    }

    /// Attempts per second; 0 when no time elapsed
    pub fn speed(&self) -> f64 {
        if self.elapsed_seconds > 0.0 {
            self.attempts as f64 / self.elapsed_seconds
        } else {
            0.0
        }
    }

    /// Human-readable throughput, scaled to M/s or K/s
    pub fn speed_display(&self) -> String {
        let speed = self.speed();
        if speed >= 1_000_000.0 {
            format!("{:.2}M/s", speed / 1_000_000.0)
        } else if speed >= 1_000.0 {
            format!("{:.1}K/s", speed / 1_000.0)
        } else {
            format!("{speed:.0}/s")
        }
    }
}

/// Lifecycle recorder: NotStarted -> Running -> exactly one terminal state
///
/// The second and later finish calls are ignored; elapsed time is frozen
/// at the first terminal transition.
struct RunRecorder {
    started_at: Option<Instant>,
    result: Option<AttackResult>,
}

impl RunRecorder {
    fn new() -> Self {
        Self {
            started_at: None,
            result: None,
        }
    }

    fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn finish(
        &mut self,
        status: AttackStatus,
        cracked_candidate: Option<String>,
        attempts: u64,
        error: Option<String>,
    ) -> AttackResult {
        if let Some(existing) = &self.result {
            return existing.clone();
        }

        let elapsed_seconds = self
            .started_at
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0);

        let result = AttackResult {
            status,
            cracked_candidate,
            attempts,
            elapsed_seconds,
            error,
        };
        self.result = Some(result.clone());
        result
    }
}

/// Optional bounds for one attack run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop after this many attempts; exhausting the budget is a normal
    /// negative result, not an error
    pub max_attempts: Option<u64>,
}

/// Drives a candidate source through the hash verifier
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackOrchestrator {
    verifier: HashVerifier,
}

impl AttackOrchestrator {
    pub fn new() -> Self {
        Self {
            verifier: HashVerifier::new(),
        }
    }

    /// Run one attack to a terminal state
    ///
    /// Pulls candidates one at a time, verifying each against the target
    /// until the source is exhausted, a match is found, cancellation is
    /// observed, or an unrecoverable error occurs. The cancellation handle
    /// is polled once per candidate.
    pub fn run(
        &self,
        spec: &HashSpec,
        source: &mut dyn CandidateSource,
        options: RunOptions,
        progress: Option<&dyn ProgressSink>,
        cancel: Option<&CancelHandle>,
    ) -> AttackResult {
        let mut recorder = RunRecorder::new();
        recorder.start();
        debug!(
            "starting {} attack against {} target",
            source.strategy(),
            spec.algorithm()
        );

        let mut attempts: u64 = 0;
        loop {
            if let Some(max) = options.max_attempts {
                if attempts >= max {
                    debug!("attempt budget of {max} exhausted");
                    return recorder.finish(AttackStatus::Failure, None, attempts, None);
                }
            }

            let candidate = match source.next_candidate() {
                Ok(Some(candidate)) => candidate,
                Ok(None) => {
                    debug!("source exhausted after {attempts} attempts");
                    return recorder.finish(AttackStatus::Failure, None, attempts, None);
                }
                Err(e) => {
                    return recorder.finish(
                        AttackStatus::Error,
                        None,
                        attempts,
                        Some(e.to_string()),
                    );
                }
            };

            if let Some(handle) = cancel {
                if handle.is_cancelled() {
                    debug!("cancellation observed after {attempts} attempts");
                    return recorder.finish(
                        AttackStatus::Cancelled,
                        None,
                        attempts,
                        Some(STOP_MESSAGE.to_string()),
                    );
                }
            }

            attempts += 1;

            if let Some(sample) = source.progress_due() {
                if let Some(sink) = progress {
                    sink.report(ProgressEvent {
                        attempts,
                        total: -1,
                        sample,
                    });
                }
            }

            match self
                .verifier
                .verify(&candidate, spec.target(), spec.algorithm())
            {
                Ok(true) => {
                    debug!("match found after {attempts} attempts");
                    return recorder.finish(AttackStatus::Success, Some(candidate), attempts, None);
                }
                Ok(false) => {}
                Err(e) => {
                    return recorder.finish(
                        AttackStatus::Error,
                        None,
                        attempts,
                        Some(e.to_string()),
                    );
                }
            }
        }
    }
}

/// Dictionary attack over a wordlist file
///
/// A wordlist that cannot be opened yields an `Error` result with zero
/// attempts; no failure escapes as an `Err`.
pub fn run_dictionary_attack(
    spec: &HashSpec,
    wordlist_path: &std::path::Path,
    options: RunOptions,
    progress: Option<&dyn ProgressSink>,
    cancel: Option<&CancelHandle>,
) -> AttackResult {
    match crate::candidates::DictionaryStream::open(wordlist_path) {
        Ok(mut source) => {
            AttackOrchestrator::new().run(spec, &mut source, options, progress, cancel)
        }
        Err(e) => AttackResult::not_started(e),
    }
}

/// Brute-force attack over the 62-character alphanumeric alphabet
pub fn run_brute_force_attack(
    spec: &HashSpec,
    max_length: usize,
    options: RunOptions,
    progress: Option<&dyn ProgressSink>,
    cancel: Option<&CancelHandle>,
) -> AttackResult {
    match crate::candidates::BruteForceGenerator::alphanumeric(max_length) {
        Ok(mut source) => {
            AttackOrchestrator::new().run(spec, &mut source, options, progress, cancel)
        }
        Err(e) => AttackResult::not_started(e),
    }
}

/// Hybrid attack: canonical mutation rules over a wordlist of base words
pub fn run_hybrid_attack(
    spec: &HashSpec,
    wordlist_path: &std::path::Path,
    options: RunOptions,
    progress: Option<&dyn ProgressSink>,
    cancel: Option<&CancelHandle>,
) -> AttackResult {
    match crate::candidates::HybridMutator::open(wordlist_path) {
        Ok(mut source) => {
            AttackOrchestrator::new().run(spec, &mut source, options, progress, cancel)
        }
        Err(e) => AttackResult::not_started(e),
    }
}
