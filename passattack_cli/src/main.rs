use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use is_terminal::IsTerminal as _;
use std::path::PathBuf;

mod config;
mod output;
mod progress;
mod runner;

use crate::config::{AppConfig, ConfigManager};
use crate::output::OutputFormat;
use crate::runner::StrategySelection;
use passattack_core::{AlgorithmExt, AlgorithmId, HashSpec, HashVerifier};

#[derive(Parser)]
#[command(name = "passattack")]
#[command(author, version, about = "Password attack simulator - multi-strategy hash cracking for security awareness", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a password attack against a target hash
    Crack {
        #[command(subcommand)]
        strategy: CrackCommand,
    },

    /// Compute the canonical hash of a password
    Hash {
        /// Password to hash
        password: String,

        /// Hash algorithm to use
        #[arg(short, long, default_value = "sha256")]
        algorithm: String,
    },

    /// List supported algorithms and their availability
    Algorithms,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args)]
struct CrackArgs {
    /// Target hash value
    hash: String,

    /// Hash algorithm the target was produced with
    #[arg(short, long)]
    algorithm: String,

    /// Stop after this many attempts
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable the progress spinner
    #[arg(long)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum CrackCommand {
    /// Stream a wordlist and test each entry
    Dictionary {
        #[command(flatten)]
        common: CrackArgs,

        /// Path to a newline-delimited wordlist
        #[arg(short, long)]
        wordlist: PathBuf,
    },

    /// Enumerate every alphanumeric combination up to a maximum length
    BruteForce {
        #[command(flatten)]
        common: CrackArgs,

        /// Maximum candidate length (clamped to the configured ceiling)
        #[arg(short, long, default_value_t = 4)]
        max_length: usize,
    },

    /// Mutate each wordlist entry through suffix/prefix/leet rules
    Hybrid {
        #[command(flatten)]
        common: CrackArgs,

        /// Path to a newline-delimited wordlist of base words
        #[arg(short, long)]
        wordlist: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            2
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let manager = ConfigManager::new();
    let config = manager.load()?;

    if !config.output.color_enabled || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Crack { strategy } => run_crack(strategy, &config).await,
        Commands::Hash {
            password,
            algorithm,
        } => run_hash(&password, &algorithm),
        Commands::Algorithms => run_algorithms(),
        Commands::Config { command } => run_config(command, &manager, &config),
    }
}

async fn run_crack(strategy: CrackCommand, config: &AppConfig) -> Result<i32> {
    let (common, selection) = match strategy {
        CrackCommand::Dictionary { common, wordlist } => {
            (common, StrategySelection::Dictionary { wordlist })
        }
        CrackCommand::BruteForce { common, max_length } => {
            let max_length =
                runner::clamp_max_length(max_length, config.attack.max_brute_length);
            (common, StrategySelection::BruteForce { max_length })
        }
        CrackCommand::Hybrid { common, wordlist } => {
            (common, StrategySelection::Hybrid { wordlist })
        }
    };

    let algorithm: AlgorithmId = common.algorithm.parse()?;
    let spec = HashSpec::new(algorithm, &common.hash)?;

    runner::preflight(&spec, &selection)?;

    let show_progress = config.output.progress_enabled
        && !common.no_progress
        && std::io::stderr().is_terminal();

    let result = runner::execute(spec, selection, common.max_attempts, show_progress).await?;

    let format = resolve_format(common.format, config);
    println!("{}", output::render(&result, format)?);
    Ok(output::exit_code(result.status))
}

fn run_hash(password: &str, algorithm: &str) -> Result<i32> {
    let algorithm: AlgorithmId = algorithm.parse()?;

    let verifier = HashVerifier::new();
    let probe = verifier.availability(algorithm);
    if !probe.available {
        anyhow::bail!("Algorithm '{algorithm}' unavailable: {}", probe.reason);
    }

    println!("{}", verifier.digest(password, algorithm)?);
    Ok(0)
}

fn run_algorithms() -> Result<i32> {
    let verifier = HashVerifier::new();
    for id in AlgorithmId::ALL {
        let probe = verifier.availability(id);
        let status = if probe.available {
            "available".green().to_string()
        } else {
            format!("{} ({})", "unavailable".red(), probe.reason)
        };
        println!("{:<14} {:<15} {status}", id.to_string(), id.to_impl().display_name());
    }
    Ok(0)
}

fn run_config(command: ConfigCommand, manager: &ConfigManager, config: &AppConfig) -> Result<i32> {
    match command {
        ConfigCommand::Show => println!("{}", toml::to_string_pretty(config)?),
        ConfigCommand::Path => println!("{}", manager.config_path().display()),
    }
    Ok(0)
}

fn resolve_format(requested: Option<OutputFormat>, config: &AppConfig) -> OutputFormat {
    requested.unwrap_or(match config.output.default_format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    })
}
