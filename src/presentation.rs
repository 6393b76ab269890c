//! Human-readable round results.
//!
//! The core only hands back values; all wording lives here.

use strictly_rps::{Gesture, Outcome, RoundOutcome};
use tracing::instrument;

/// Display name of a gesture.
pub fn gesture_label(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::Rock => "Rock ✊",
        Gesture::Paper => "Paper ✋",
        Gesture::Scissors => "Scissors ✌️",
    }
}

/// One-line summary of an outcome.
pub fn headline(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWins => "YOU WIN 🎉",
        Outcome::ComputerWins => "YOU LOSE 😭",
        Outcome::Draw => "DRAW 😐",
        Outcome::NoGestureDetected => "🤔 Gesture not recognized. Try again.",
        Outcome::CameraUnavailable => "📷 Error: camera not found!",
        Outcome::CaptureFailed => "❌ Error: could not capture an image from the camera",
    }
}

/// Full text shown for a finished round.
#[instrument]
pub fn describe(round: &RoundOutcome) -> String {
    match (round.player(), round.computer()) {
        (Some(player), Some(computer)) => format!(
            "You: {}\nComputer: {}\n\n{}",
            gesture_label(player),
            gesture_label(computer),
            headline(round.outcome())
        ),
        _ => headline(round.outcome()).to_string(),
    }
}
