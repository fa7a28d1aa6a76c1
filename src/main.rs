// src/main.rs
//! Ledger Solana derivation path tool entry point
use anyhow::{Context, Result};
use clap::Parser;
use solana_ledger_path::cli::Cli;
use solana_ledger_path::core::config::PathConfig;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Exit status when the supplied path data is rejected
const EXIT_INPUT_ERROR: i32 = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    let config = match cli.config.as_deref() {
        Some(path) => PathConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PathConfig::from_env().context("loading config from LEDGER_PATH_CONFIG")?,
    };
    debug!(?config, "configuration loaded");

    let output = match cli.command.execute(&config) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Error: {}", err);
            let code = if err.is_input_error() { EXIT_INPUT_ERROR } else { 1 };
            std::process::exit(code);
        }
    };
    println!("{}", output);
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
