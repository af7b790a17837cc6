//! Bounded combinatorial candidate source

use super::{CandidateSource, Strategy};
use crate::error::ValidationError;
use crate::{Error, Result};
use std::collections::HashSet;

/// Default alphabet: lowercase, uppercase, digits (62 characters)
const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Emit a progress sample every N candidates
const PROGRESS_INTERVAL: u64 = 5_000;

/// Enumerates every string over a fixed alphabet, length-major
///
/// All candidates of length n come before any of length n+1; within a
/// length the order is lexicographic by alphabet position, driven by an
/// odometer counter with the most-significant position first. State is
/// O(max_length) regardless of how many combinations the space holds, so
/// cancelling mid-run never leaves materialized candidates behind.
///
/// The space grows as alphabet^n; callers should clamp `max_length` to a
/// sane ceiling before constructing one of these.
pub struct BruteForceGenerator {
    alphabet: Vec<char>,
    max_length: usize,
    indices: Vec<usize>,
    started: bool,
    produced: u64,
    pending_progress: Option<String>,
}

impl BruteForceGenerator {
    /// Generator over the 62-character alphanumeric alphabet
    pub fn alphanumeric(max_length: usize) -> Result<Self> {
        Self::with_alphabet(ALPHANUMERIC, max_length)
    }

    /// Generator over a caller-supplied alphabet
    ///
    /// Repeated characters keep their first occurrence; enumeration order
    /// follows the order given.
    pub fn with_alphabet(alphabet: &str, max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::Validation(ValidationError::invalid_parameter(
                "max_length",
                "must be at least 1",
            )));
        }

        let mut seen = HashSet::new();
        let alphabet: Vec<char> = alphabet.chars().filter(|c| seen.insert(*c)).collect();
        if alphabet.is_empty() {
            return Err(Error::Validation(ValidationError::invalid_parameter(
                "alphabet",
                "must contain at least one character",
            )));
        }

        Ok(Self {
            alphabet,
            max_length,
            indices: Vec::with_capacity(max_length),
            started: false,
            produced: 0,
            pending_progress: None,
        })
    }

    /// Total number of candidates, when it fits in a u64
    pub fn space_size(&self) -> Option<u64> {
        let radix = self.alphabet.len() as u64;
        let mut total: u64 = 0;
        let mut per_length: u64 = 1;
        for _ in 0..self.max_length {
            per_length = per_length.checked_mul(radix)?;
            total = total.checked_add(per_length)?;
        }
        Some(total)
    }

    /// Step the odometer; false once the space is exhausted
    fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            self.indices.push(0);
            return true;
        }

        let radix = self.alphabet.len();
        let mut pos = self.indices.len();
        while pos > 0 {
            pos -= 1;
            self.indices[pos] += 1;
            if self.indices[pos] < radix {
                return true;
            }
            self.indices[pos] = 0;
        }

        // Every position carried over: move to the next length
        if self.indices.len() == self.max_length {
            return false;
        }
        self.indices.push(0);
        true
    }

    fn current(&self) -> String {
        self.indices.iter().map(|&i| self.alphabet[i]).collect()
    }
}

impl CandidateSource for BruteForceGenerator {
    fn next_candidate(&mut self) -> Result<Option<String>> {
        if !self.advance() {
            return Ok(None);
        }

        let candidate = self.current();
        self.produced += 1;
        if self.produced % PROGRESS_INTERVAL == 0 {
            self.pending_progress = Some(candidate.clone());
        }
        Ok(Some(candidate))
    }

    fn progress_due(&mut self) -> Option<String> {
        self.pending_progress.take()
    }

    fn strategy(&self) -> Strategy {
        Strategy::BruteForce
    }
}
