//! Progress rendering for the CLI
//!
//! Consumes throttled progress events from the attack worker's channel and
//! drives an indicatif spinner. The attack loop never blocks on this: the
//! channel sink drops events when the renderer falls behind.

use indicatif::{ProgressBar, ProgressStyle};
use passattack_core::ProgressEvent;
use tokio::sync::mpsc;

/// Render progress events until the channel closes
pub async fn render(mut rx: mpsc::Receiver<ProgressEvent>, enabled: bool) {
    if !enabled {
        // Drain silently so the sender never sees a closed channel mid-run
        while rx.recv().await.is_some() {}
        return;
    }

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );

    while let Some(event) = rx.recv().await {
        bar.set_message(format_event(&event));
        bar.tick();
    }

    bar.finish_and_clear();
}

fn format_event(event: &ProgressEvent) -> String {
    if event.total < 0 {
        format!("{} attempts | trying: {}", event.attempts, event.sample)
    } else {
        format!(
            "{}/{} attempts | trying: {}",
            event.attempts, event.total, event.sample
        )
    }
}
