//! Strictly Hands library - rock-paper-scissors played with a hand pose
//!
//! Wires a camera and a landmark detector to the pure game logic in
//! [`strictly_rps`].
//!
//! # Architecture
//!
//! - **Camera / Detector**: collaborators that produce a frame and a hand
//! - **Round**: camera → detector → classifier → engine, failures as outcomes
//! - **Runner**: plays one round at a time on a blocking worker
//! - **Presentation**: all user-facing wording
//! - **TUI**: terminal front end
//!
//! # Example
//!
//! ```no_run
//! use strictly_hands::{GameConfig, RoundRunner, describe, replay_rig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default().with_captures_dir("captures");
//! let mut runner = RoundRunner::new(replay_rig(&config));
//! let outcome = runner.play().await?;
//! println!("{}", describe(&outcome));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod camera;
mod cli;
mod config;
mod detector;
mod presentation;
mod round;
mod runner;

/// Terminal user interface.
pub mod tui;

// Crate-level exports - Collaborators
pub use camera::{Camera, Frame, OpenCamera, ReplayCamera};
pub use detector::{DetectError, JsonLandmarkDetector, LandmarkDetector};

// Crate-level exports - Configuration and CLI
pub use cli::{Cli, Command, TableArgs};
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Rounds
pub use round::{ReplayRig, Rig, RoundSource, play_captured_round, replay_rig};
pub use runner::{RoundRunner, RunnerError};

// Crate-level exports - Presentation
pub use presentation::{describe, gesture_label, headline};

// Re-export the core so callers need a single dependency.
pub use strictly_rps::{Gesture, Outcome, RoundEngine, RoundOutcome, classify};
