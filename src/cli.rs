//! Command-line interface for strictly_hands.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Hands - rock-paper-scissors played with a hand pose
#[derive(Parser, Debug)]
#[command(name = "strictly_hands")]
#[command(about = "Play rock-paper-scissors against the computer with your hand", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single round and print the result
    Play {
        /// Table settings
        #[command(flatten)]
        table: TableArgs,
    },

    /// Run the terminal UI
    Tui {
        /// Table settings
        #[command(flatten)]
        table: TableArgs,
    },

    /// Classify one capture file and print the gesture
    Classify {
        /// Capture file holding a landmark export
        file: PathBuf,
    },
}

/// Settings shared by every command that plays rounds.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Path to the game configuration file
    #[arg(short, long, default_value = "strictly_hands.toml")]
    pub config: PathBuf,

    /// Directory of capture files (overrides the config)
    #[arg(long)]
    pub captures: Option<PathBuf>,

    /// Seconds to wait before taking the picture (overrides the config)
    #[arg(long)]
    pub countdown: Option<u64>,

    /// Seed for the computer's moves (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TableArgs {
    /// Applies command-line overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: crate::GameConfig) -> crate::GameConfig {
        if let Some(dir) = &self.captures {
            config = config.with_captures_dir(dir.clone());
        }
        if let Some(secs) = self.countdown {
            config = config.with_countdown_secs(secs);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
