//! End-to-end attack flow tests
//!
//! Exercises the orchestrator against real sources: file-backed wordlists,
//! the brute-force odometer, and the hybrid mutation pipeline.

use passattack_core::progress::{ProgressEvent, ProgressSink};
use passattack_core::{
    run_brute_force_attack, run_dictionary_attack, run_hybrid_attack, AlgorithmId,
    AttackOrchestrator, AttackStatus, BruteForceGenerator, CancelHandle, DictionaryStream,
    HashSpec, HashVerifier, HybridMutator, RunOptions,
};
use passattack_test_utils::{CollectingSink, WordlistBuilder};

fn digest(password: &str, algorithm: AlgorithmId) -> String {
    HashVerifier::new().digest(password, algorithm).unwrap()
}

fn spec(password: &str, algorithm: AlgorithmId) -> HashSpec {
    HashSpec::new(algorithm, &digest(password, algorithm)).unwrap()
}

#[test]
fn dictionary_attack_attempts_match_line_position() {
    let wordlist = WordlistBuilder::new()
        .with_words(&["test", "admin", "password123"])
        .build();
    let spec = spec("password123", AlgorithmId::Sha256);

    let result = run_dictionary_attack(&spec, wordlist.path(), RunOptions::default(), None, None);

    assert_eq!(result.status, AttackStatus::Success);
    assert_eq!(result.cracked_candidate.as_deref(), Some("password123"));
    assert_eq!(result.attempts, 3);
    assert!(result.error.is_none());
}

#[test]
fn dictionary_attack_empty_lines_do_not_count_as_attempts() {
    let wordlist = WordlistBuilder::new()
        .with_blank_line()
        .with_word("alpha")
        .with_blank_line()
        .with_word("bravo")
        .build();
    let spec = spec("bravo", AlgorithmId::Md5);

    let result = run_dictionary_attack(&spec, wordlist.path(), RunOptions::default(), None, None);

    assert_eq!(result.status, AttackStatus::Success);
    assert_eq!(result.attempts, 2);
}

#[test]
fn dictionary_attack_exhaustion_is_failure_not_error() {
    let wordlist = WordlistBuilder::new()
        .with_words(&["one", "two", "three"])
        .build();
    let spec = spec("not-in-the-list", AlgorithmId::Sha1);

    let result = run_dictionary_attack(&spec, wordlist.path(), RunOptions::default(), None, None);

    assert_eq!(result.status, AttackStatus::Failure);
    assert_eq!(result.attempts, 3);
    assert!(result.cracked_candidate.is_none());
    assert!(result.error.is_none());
}

#[test]
fn dictionary_attack_missing_wordlist_is_error_with_zero_attempts() {
    let spec = spec("whatever", AlgorithmId::Sha256);

    let result = run_dictionary_attack(
        &spec,
        std::path::Path::new("/no/such/wordlist.txt"),
        RunOptions::default(),
        None,
        None,
    );

    assert_eq!(result.status, AttackStatus::Error);
    assert_eq!(result.attempts, 0);
    assert!(result.error.unwrap().contains("Wordlist not found"));
}

#[test]
fn dictionary_attack_is_deterministic() {
    let wordlist = WordlistBuilder::new()
        .with_filler("word", 100)
        .with_word("target-word")
        .build();
    let spec = spec("target-word", AlgorithmId::Sha256);

    let first = run_dictionary_attack(&spec, wordlist.path(), RunOptions::default(), None, None);
    let second = run_dictionary_attack(&spec, wordlist.path(), RunOptions::default(), None, None);

    assert_eq!(first.status, AttackStatus::Success);
    assert_eq!(first.attempts, second.attempts);
    assert_eq!(first.cracked_candidate, second.cracked_candidate);
}

#[test]
fn brute_force_attempts_equal_ordinal_position() {
    // Position computed independently of the generator: all shorter
    // lengths, then lexicographic rank within the password's length.
    let alphabet = "abc";
    let password = "cb";
    let index_of = |c: char| alphabet.chars().position(|a| a == c).unwrap() as u64;
    let expected = alphabet.len() as u64
        + index_of(password.chars().next().unwrap()) * alphabet.len() as u64
        + index_of(password.chars().nth(1).unwrap())
        + 1;

    let spec = spec(password, AlgorithmId::Md5);
    let mut source = BruteForceGenerator::with_alphabet(alphabet, 3).unwrap();
    let result =
        AttackOrchestrator::new().run(&spec, &mut source, RunOptions::default(), None, None);

    assert_eq!(result.status, AttackStatus::Success);
    assert_eq!(result.cracked_candidate.as_deref(), Some(password));
    assert_eq!(result.attempts, expected);
}

#[test]
fn brute_force_alphanumeric_end_to_end() {
    const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let index_of = |c: char| ALPHABET.chars().position(|a| a == c).unwrap() as u64;
    let expected = 62 + index_of('a') * 62 + index_of('b') + 1;

    let spec = spec("ab", AlgorithmId::Md5);
    let result = run_brute_force_attack(&spec, 2, RunOptions::default(), None, None);

    assert_eq!(result.status, AttackStatus::Success);
    assert_eq!(result.cracked_candidate.as_deref(), Some("ab"));
    assert_eq!(result.attempts, expected);
}

/// Sink that flips the cancel handle once attempts cross a threshold
struct CancelAtSink {
    handle: CancelHandle,
    threshold: u64,
}

impl ProgressSink for CancelAtSink {
    fn report(&self, event: ProgressEvent) {
        if event.attempts >= self.threshold {
            self.handle.cancel();
        }
    }
}

#[test]
fn brute_force_cancellation_observed_within_one_progress_batch() {
    let spec = spec("zzzzzzzz-unreachable", AlgorithmId::Sha256);
    let cancel = CancelHandle::new();
    let sink = CancelAtSink {
        handle: cancel.clone(),
        threshold: 5_000,
    };

    let result = run_brute_force_attack(&spec, 6, RunOptions::default(), Some(&sink), Some(&cancel));

    assert_eq!(result.status, AttackStatus::Cancelled);
    assert!(result.attempts >= 5_000);
    assert!(result.attempts < 10_000);
    assert_eq!(result.error.as_deref(), Some("Attack stopped by user."));
}

#[test]
fn cancellation_set_before_run_counts_no_attempts() {
    let wordlist = WordlistBuilder::new().with_filler("w", 50).build();
    let spec = spec("absent", AlgorithmId::Sha256);
    let cancel = CancelHandle::new();
    cancel.cancel();

    let result =
        run_dictionary_attack(&spec, wordlist.path(), RunOptions::default(), None, Some(&cancel));

    assert_eq!(result.status, AttackStatus::Cancelled);
    assert_eq!(result.attempts, 0);
    assert!(result.error.unwrap().contains("stopped by user"));
}

#[test]
fn hybrid_attack_cracks_suffixed_capitalized_word() {
    let wordlist = WordlistBuilder::new().with_word("Summer").build();
    let spec = spec("Summer2024", AlgorithmId::Sha256);

    let result = run_hybrid_attack(&spec, wordlist.path(), RunOptions::default(), None, None);

    assert_eq!(result.status, AttackStatus::Success);
    assert_eq!(result.cracked_candidate.as_deref(), Some("Summer2024"));
}

#[test]
fn hybrid_attack_cracks_lowercased_word_with_digit_suffix() {
    let wordlist = WordlistBuilder::new().with_word("Password").build();
    let spec = spec("password1", AlgorithmId::Sha256);

    let result = run_hybrid_attack(&spec, wordlist.path(), RunOptions::default(), None, None);

    assert_eq!(result.status, AttackStatus::Success);
    assert_eq!(result.cracked_candidate.as_deref(), Some("password1"));
}

#[test]
fn hybrid_attack_missing_wordlist_is_error_with_zero_attempts() {
    let spec = spec("anything", AlgorithmId::Md5);

    let result = run_hybrid_attack(
        &spec,
        std::path::Path::new("/no/such/base-words.txt"),
        RunOptions::default(),
        None,
        None,
    );

    assert_eq!(result.status, AttackStatus::Error);
    assert_eq!(result.attempts, 0);
}

#[test]
fn attempt_budget_exhaustion_is_failure() {
    let wordlist = WordlistBuilder::new().with_filler("w", 20).build();
    let spec = spec("w15", AlgorithmId::Sha256);
    let options = RunOptions {
        max_attempts: Some(5),
    };

    let result = run_dictionary_attack(&spec, wordlist.path(), options, None, None);

    assert_eq!(result.status, AttackStatus::Failure);
    assert_eq!(result.attempts, 5);
    assert!(result.cracked_candidate.is_none());
}

#[test]
fn progress_events_carry_unknown_total() {
    let wordlist = WordlistBuilder::new().with_filler("w", 1200).build();
    let spec = spec("absent", AlgorithmId::Md5);
    let sink = CollectingSink::new();

    let result =
        run_dictionary_attack(&spec, wordlist.path(), RunOptions::default(), Some(&sink), None);

    assert_eq!(result.status, AttackStatus::Failure);
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].attempts, 500);
    assert_eq!(events[0].total, -1);
    assert_eq!(events[0].sample, "w499");
    assert_eq!(events[1].attempts, 1000);
}

#[test]
fn hybrid_progress_is_keyed_on_base_words() {
    let wordlist = WordlistBuilder::new().with_filler("base", 210).build();
    let spec = spec("absent", AlgorithmId::Md5);
    let sink = CollectingSink::new();

    let result =
        run_hybrid_attack(&spec, wordlist.path(), RunOptions::default(), Some(&sink), None);

    assert_eq!(result.status, AttackStatus::Failure);
    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].sample, "base199");
    // many variants per base word, so far more attempts than base words
    assert!(events[0].attempts > 200);
}

#[test]
fn source_exhaustion_reports_every_candidate_attempted() {
    let wordlist = WordlistBuilder::new().with_filler("w", 7).build();
    let spec = spec("absent", AlgorithmId::Sha512);
    let mut source = DictionaryStream::open(wordlist.path()).unwrap();

    let result =
        AttackOrchestrator::new().run(&spec, &mut source, RunOptions::default(), None, None);

    assert_eq!(result.attempts, 7);
    assert_eq!(source.lines_produced(), 7);
}

#[test]
fn hybrid_source_can_be_driven_directly() {
    let wordlist = WordlistBuilder::new().with_word("Monkey").build();
    let spec = spec("MONKEY", AlgorithmId::Sha256);
    let mut source = HybridMutator::open(wordlist.path()).unwrap();

    let result =
        AttackOrchestrator::new().run(&spec, &mut source, RunOptions::default(), None, None);

    assert_eq!(result.status, AttackStatus::Success);
    assert_eq!(result.cracked_candidate.as_deref(), Some("MONKEY"));
    assert_eq!(source.base_words_consumed(), 1);
}

#[test]
fn result_serializes_for_downstream_consumers() {
    let wordlist = WordlistBuilder::new().with_word("secret").build();
    let spec = spec("secret", AlgorithmId::Sha256);

    let result = run_dictionary_attack(&spec, wordlist.path(), RunOptions::default(), None, None);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["status"], "SUCCESS");
    assert_eq!(json["cracked_candidate"], "secret");
    assert_eq!(json["attempts"], 1);
    assert!(json["elapsed_seconds"].as_f64().unwrap() >= 0.0);
}
