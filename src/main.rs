use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use version_order::config::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, OrderConfig};
use version_order::version::order_versions;

#[derive(Parser)]
#[command(name = "version-order")]
#[command(version, about = "Sort version strings deterministically")]
struct Cli {
    /// Versions to order. Read one per line from stdin when omitted
    versions: Vec<String>,

    /// Print the latest version first
    #[arg(long)]
    descending: bool,

    /// Fail on inputs that are not valid semantic versions, suffix included
    #[arg(long)]
    reject_invalid: bool,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_stdin() -> anyhow::Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read versions from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            versions.push(trimmed.to_string());
        }
    }
    Ok(versions)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => OrderConfig::from_path(path)?,
        None => OrderConfig::default(),
    };
    config.output.descending |= cli.descending;
    config.input.reject_invalid |= cli.reject_invalid;

    let inputs = if cli.versions.is_empty() {
        read_stdin()?
    } else {
        cli.versions
    };
    info!("Ordering {} versions", inputs.len());

    let ordered = order_versions(inputs, &config).context("Failed to order versions")?;

    let mut stdout = io::stdout().lock();
    for version in ordered {
        writeln!(stdout, "{}", version)?;
    }
    Ok(())
}
