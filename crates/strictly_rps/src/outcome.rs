//! Round results.

use crate::gesture::Gesture;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Outcome {
    /// Player's gesture beats the computer's.
    PlayerWins,
    /// Computer's gesture beats the player's.
    ComputerWins,
    /// Both chose the same gesture.
    Draw,
    /// No hand in frame, or the pose matched no gesture.
    NoGestureDetected,
    /// Camera could not be opened.
    CameraUnavailable,
    /// Camera opened but no usable frame was captured.
    CaptureFailed,
}

impl Outcome {
    /// Returns true if both sides played.
    pub fn is_decided(self) -> bool {
        matches!(self, Outcome::PlayerWins | Outcome::ComputerWins | Outcome::Draw)
    }
}

/// Terminal artifact of a round: the outcome plus both moves, if made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// How the round ended.
    #[getter(copy)]
    outcome: Outcome,
    /// Player's recognized gesture.
    #[getter(copy)]
    player: Option<Gesture>,
    /// Computer's drawn gesture.
    #[getter(copy)]
    computer: Option<Gesture>,
}

impl RoundOutcome {
    /// A round where both sides played.
    #[instrument]
    pub fn decided(player: Gesture, computer: Gesture) -> Self {
        Self {
            outcome: crate::engine::judge(player, computer),
            player: Some(player),
            computer: Some(computer),
        }
    }

    /// Player's pose was not recognized; the computer did not move.
    pub fn no_gesture() -> Self {
        Self::aborted(Outcome::NoGestureDetected)
    }

    /// Camera failed to open.
    pub fn camera_unavailable() -> Self {
        Self::aborted(Outcome::CameraUnavailable)
    }

    /// Frame capture failed.
    pub fn capture_failed() -> Self {
        Self::aborted(Outcome::CaptureFailed)
    }

    fn aborted(outcome: Outcome) -> Self {
        Self {
            outcome,
            player: None,
            computer: None,
        }
    }
}
