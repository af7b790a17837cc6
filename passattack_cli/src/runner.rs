//! Attack execution on a background worker
//!
//! The engine itself is synchronous; this module gives it a dedicated
//! blocking worker so the CLI stays responsive, wires Ctrl-C to the
//! cooperative cancellation handle, and bridges progress events to the
//! renderer through a bounded channel.

use anyhow::{bail, Context, Result};
use passattack_core::{
    run_brute_force_attack, run_dictionary_attack, run_hybrid_attack, AttackResult, CancelHandle,
    ChannelSink, HashSpec, HashVerifier, RunOptions,
};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::progress;

/// Strategy plus its parameters, resolved from CLI arguments
pub enum StrategySelection {
    Dictionary { wordlist: PathBuf },
    BruteForce { max_length: usize },
    Hybrid { wordlist: PathBuf },
}

/// Fail fast before committing to a long-running attack
///
/// Checks backend availability for the chosen algorithm and, for
/// wordlist-backed strategies, that the wordlist exists. A failed check
/// means the attack is never launched.
pub fn preflight(spec: &HashSpec, strategy: &StrategySelection) -> Result<()> {
    let probe = HashVerifier::new().availability(spec.algorithm());
    if !probe.available {
        bail!(
            "Algorithm '{}' unavailable: {}",
            spec.algorithm(),
            probe.reason
        );
    }

    match strategy {
        StrategySelection::Dictionary { wordlist } | StrategySelection::Hybrid { wordlist } => {
            if !wordlist.is_file() {
                bail!("Wordlist not found: {}", wordlist.display());
            }
        }
        StrategySelection::BruteForce { .. } => {}
    }

    Ok(())
}

/// Clamp a requested brute-force length into `1..=ceiling`
pub fn clamp_max_length(requested: usize, ceiling: usize) -> usize {
    let clamped = requested.clamp(1, ceiling.max(1));
    if clamped != requested {
        log::warn!("max_length {requested} clamped to {clamped}; the search space grows as 62^n");
    }
    clamped
}

/// Run the attack to completion on a blocking worker
pub async fn execute(
    spec: HashSpec,
    strategy: StrategySelection,
    max_attempts: Option<u64>,
    show_progress: bool,
) -> Result<AttackResult> {
    let cancel = CancelHandle::new();
    {
        let handle = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                handle.cancel();
            }
        });
    }

    let (tx, rx) = mpsc::channel(64);
    let renderer = tokio::spawn(progress::render(rx, show_progress));

    let options = RunOptions { max_attempts };
    let result = tokio::task::spawn_blocking(move || {
        let sink = ChannelSink::new(tx);
        match strategy {
            StrategySelection::Dictionary { wordlist } => {
                run_dictionary_attack(&spec, &wordlist, options, Some(&sink), Some(&cancel))
            }
            StrategySelection::BruteForce { max_length } => {
                run_brute_force_attack(&spec, max_length, options, Some(&sink), Some(&cancel))
            }
            StrategySelection::Hybrid { wordlist } => {
                run_hybrid_attack(&spec, &wordlist, options, Some(&sink), Some(&cancel))
            }
        }
    })
    .await
    .context("attack worker panicked")?;

    // Sender dropped with the worker, so the renderer drains and stops
    let _ = renderer.await;
    Ok(result)
}
