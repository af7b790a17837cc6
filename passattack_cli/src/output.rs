//! Result rendering for the CLI

use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use passattack_core::{AttackResult, AttackStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// JSON summary shape for downstream tooling
#[derive(Serialize)]
struct Summary<'a> {
    status: AttackStatus,
    cracked_candidate: Option<&'a str>,
    attempts: u64,
    elapsed_seconds: f64,
    speed: f64,
    error: Option<&'a str>,
}

/// Render an attack result in the requested format
pub fn render(result: &AttackResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => {
            let summary = Summary {
                status: result.status,
                cracked_candidate: result.cracked_candidate.as_deref(),
                attempts: result.attempts,
                elapsed_seconds: result.elapsed_seconds,
                speed: result.speed(),
                error: result.error.as_deref(),
            };
            Ok(serde_json::to_string_pretty(&summary)?)
        }
    }
}

fn render_text(result: &AttackResult) -> String {
    let status = match result.status {
        AttackStatus::Success => "SUCCESS".green().bold(),
        AttackStatus::Failure => "FAILED".red(),
        AttackStatus::Cancelled => "CANCELLED".yellow(),
        AttackStatus::Error => "ERROR".red().bold(),
    };

    let mut lines = vec![
        format!("Status:   {status}"),
        format!(
            "Cracked:  {}",
            result.cracked_candidate.as_deref().unwrap_or("Not found")
        ),
        format!("Attempts: {}", result.attempts),
        format!("Time:     {:.4}s", result.elapsed_seconds),
        format!("Speed:    {}", result.speed_display()),
    ];

    if let Some(error) = &result.error {
        lines.push(format!("Note:     {error}"));
    }

    lines.join("\n")
}

/// Process exit code for a terminal attack status
pub fn exit_code(status: AttackStatus) -> i32 {
    match status {
        AttackStatus::Success => 0,
        AttackStatus::Failure => 1,
        AttackStatus::Error => 2,
        AttackStatus::Cancelled => 130,
    }
}
