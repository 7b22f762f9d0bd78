//! idmatch CLI - Command-line interface for identity record verification.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod input;
mod output;

use commands::{compare, lookup, normalize, parse, show_config};

#[derive(Parser)]
#[command(name = "idmatch")]
#[command(about = "Verify extracted identity document fields against candidate records")]
struct Cli {
    /// TOML configuration file (default: $IDMATCH_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match an extracted identity against one candidate record
    Match {
        /// Extracted identity JSON file
        extracted: String,
        /// Candidate record JSON file
        candidate: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code unless the verdict is VERIFIED
        #[arg(long)]
        strict: bool,
        /// Name similarity threshold, overriding the config file
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Look up the candidate for an extracted identity and match it
    Lookup {
        /// Extracted identity JSON file
        extracted: String,
        /// Candidate store (JSON array of records)
        #[arg(long)]
        store: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code unless the verdict is VERIFIED
        #[arg(long)]
        strict: bool,
        /// Name similarity threshold, overriding the config file
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Show normalized fields and the hygiene report for an extracted identity
    Normalize {
        /// Extracted identity JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Parse raw model output into an extracted identity
    Parse {
        /// Model output file (or stdin if not provided)
        input: Option<String>,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Match {
            extracted,
            candidate,
            json,
            strict,
            threshold,
        } => compare::run(&settings, extracted, candidate, json, strict, threshold),
        Commands::Lookup {
            extracted,
            store,
            json,
            strict,
            threshold,
        } => lookup::run(&settings, extracted, store, json, strict, threshold),
        Commands::Normalize { input } => normalize::run(input),
        Commands::Parse { input } => parse::run(input),
        Commands::Config => show_config::run(&settings),
    }
}
