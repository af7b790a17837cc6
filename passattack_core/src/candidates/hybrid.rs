//! Rule-based mutation candidate source

use super::dictionary::DictionaryStream;
use super::rules::MutationRules;
use super::{CandidateSource, Strategy};
use crate::Result;
use std::collections::{HashSet, VecDeque};
use std::path::Path;

/// Emit a progress sample every N base words
const PROGRESS_INTERVAL: u64 = 200;

/// Mutates each wordlist entry through a fixed rule pipeline
///
/// For every base word a deterministic, finite, deduplicated variant
/// sequence is generated in canonical order: base case forms, suffixed
/// forms, prefixed forms, doubled forms, then symbol substitutions. The
/// dedup set is scoped to the current base word and discarded afterwards,
/// so memory stays bounded by one word's variants rather than growing with
/// the wordlist.
pub struct HybridMutator {
    words: DictionaryStream,
    rules: MutationRules,
    queue: VecDeque<String>,
    words_consumed: u64,
    pending_progress: Option<String>,
}

impl HybridMutator {
    /// Open a wordlist of base words with the canonical rule set
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_rules(path, MutationRules::canonical())
    }

    /// Open a wordlist of base words with a caller-supplied rule set
    pub fn with_rules(path: impl AsRef<Path>, rules: MutationRules) -> Result<Self> {
        Ok(Self {
            words: DictionaryStream::open(path)?,
            rules,
            queue: VecDeque::new(),
            words_consumed: 0,
            pending_progress: None,
        })
    }

    /// Base words consumed so far; progress is keyed on this count
    pub fn base_words_consumed(&self) -> u64 {
        self.words_consumed
    }

    /// Pull the next base word and expand it; false when the list is done
    fn refill(&mut self) -> Result<bool> {
        match self.words.next_candidate()? {
            None => Ok(false),
            Some(word) => {
                self.words_consumed += 1;
                if self.words_consumed % PROGRESS_INTERVAL == 0 {
                    self.pending_progress = Some(word.clone());
                }
                self.queue = expand(&word, &self.rules);
                Ok(true)
            }
        }
    }
}

impl CandidateSource for HybridMutator {
    fn next_candidate(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(candidate) = self.queue.pop_front() {
                return Ok(Some(candidate));
            }
            if !self.refill()? {
                return Ok(None);
            }
        }
    }

    fn progress_due(&mut self) -> Option<String> {
        self.pending_progress.take()
    }

    fn strategy(&self) -> Strategy {
        Strategy::Hybrid
    }
}

/// Generate all variants of `word` in canonical order, deduplicated
fn expand(word: &str, rules: &MutationRules) -> VecDeque<String> {
    fn emit(variant: String, out: &mut VecDeque<String>, seen: &mut HashSet<String>) {
        if !variant.is_empty() && seen.insert(variant.clone()) {
            out.push_back(variant);
        }
    }

    let mut seen = HashSet::new();
    let mut out = VecDeque::new();

    let lower = word.to_lowercase();
    let cap = capitalize(word);
    let upper = word.to_uppercase();
    let swapped = swap_case(word);
    let leet = rules.apply_leet(&lower);
    let leet_cap = capitalize(&leet);

    // Base case forms
    for base in [
        word.to_string(),
        lower.clone(),
        cap.clone(),
        upper,
        swapped,
        leet,
        leet_cap,
    ] {
        emit(base, &mut out, &mut seen);
    }

    // base + suffix
    for base in [lower.as_str(), cap.as_str(), word] {
        for suffix in rules.suffixes() {
            emit(format!("{base}{suffix}"), &mut out, &mut seen);
        }
    }

    // prefix + base
    for prefix in rules.prefixes() {
        for base in [lower.as_str(), cap.as_str()] {
            emit(format!("{prefix}{base}"), &mut out, &mut seen);
        }
    }

    // doubled word
    for base in [lower.as_str(), cap.as_str()] {
        emit(format!("{base}{base}"), &mut out, &mut seen);
        emit(format!("{base}{base}123"), &mut out, &mut seen);
    }

    // symbol replacements
    for replaced in rules.substitution_variants(&lower) {
        if replaced != lower {
            emit(replaced.clone(), &mut out, &mut seen);
            emit(capitalize(&replaced), &mut out, &mut seen);
        }
    }

    out
}

/// Uppercase the first character, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

fn swap_case(word: &str) -> String {
    word.chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}
