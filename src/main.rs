//! Strictly Hands - Unified CLI
//!
//! Rock-paper-scissors against the computer, played with a hand pose.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_hands::{
    Cli, Command, Frame, GameConfig, JsonLandmarkDetector, LandmarkDetector, RoundRunner,
    TableArgs, classify, describe, replay_rig,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { table } => run_play(table).await,
        Command::Tui { table } => run_tui(table).await,
        Command::Classify { file } => run_classify(&file),
    }
}

/// Play one round headless and print the result
async fn run_play(table: TableArgs) -> Result<()> {
    initialize_tracing();

    let config = load_config(&table)?;
    info!(countdown_secs = config.countdown_secs(), "Playing one round");

    let mut runner = RoundRunner::new(replay_rig(&config));
    let outcome = runner.play().await?;

    info!(?outcome, "Round finished");
    println!("{}", describe(&outcome));
    Ok(())
}

/// Run the terminal UI
async fn run_tui(table: TableArgs) -> Result<()> {
    // Log to a file so tracing output does not tear the screen
    let log_file = std::fs::File::create("strictly_hands_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let config = load_config(&table)?;
    strictly_hands::tui::run_tui(config).await
}

/// Classify a single capture file
#[instrument(skip(file), fields(file = %file.display()))]
fn run_classify(file: &Path) -> Result<()> {
    initialize_tracing();

    let bytes = std::fs::read(file)
        .with_context(|| format!("Failed to read capture {}", file.display()))?;
    let frame = Frame::new(file.display().to_string(), bytes);

    let gesture = JsonLandmarkDetector::new()
        .detect(&frame)?
        .and_then(|landmarks| classify(&landmarks));

    match gesture {
        Some(gesture) => println!("{}", gesture),
        None => println!("unrecognized"),
    }
    Ok(())
}

#[instrument(skip(table), fields(config_path = %table.config.display()))]
fn load_config(table: &TableArgs) -> Result<GameConfig> {
    let config = GameConfig::load(&table.config)?;
    Ok(table.apply(config))
}

#[instrument]
fn initialize_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_hands=debug")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    info!("Tracing initialized");
}
