//! Round engine: the computer's draw and the winner rules.

use crate::gesture::Gesture;
use crate::outcome::{Outcome, RoundOutcome};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Decides a round between two gestures.
///
/// Exhaustive because [`Gesture::beats`] is a 3-cycle: any two distinct
/// gestures have exactly one winner.
#[instrument]
pub fn judge(player: Gesture, computer: Gesture) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats() == computer {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}

/// Plays rounds against a computer opponent drawing from `R`.
#[derive(Debug, Clone)]
pub struct RoundEngine<R> {
    rng: R,
}

impl<R: Rng> RoundEngine<R> {
    /// Creates an engine drawing computer moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Plays one round.
    ///
    /// With no player gesture the round ends as
    /// [`Outcome::NoGestureDetected`] and no randomness is consumed.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, player: Option<Gesture>) -> RoundOutcome {
        let Some(player) = player else {
            debug!("No player gesture, computer does not move");
            return RoundOutcome::no_gesture();
        };

        let computer = Gesture::random(&mut self.rng);
        let result = RoundOutcome::decided(player, computer);
        info!(%player, %computer, outcome = ?result.outcome(), "Round played");
        result
    }

    /// Consumes the engine, returning its random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl RoundEngine<SmallRng> {
    /// Engine with a reproducible computer opponent.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Engine seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_judge_matrix() {
        for player in Gesture::iter() {
            for computer in Gesture::iter() {
                let outcome = judge(player, computer);
                let draw = player == computer;
                let win = player.beats() == computer;
                assert_eq!(outcome == Outcome::Draw, draw);
                assert_eq!(outcome == Outcome::PlayerWins, win);
                assert_eq!(outcome == Outcome::ComputerWins, !draw && !win);
            }
        }
    }

    #[test]
    fn test_judge_examples() {
        assert_eq!(judge(Gesture::Rock, Gesture::Scissors), Outcome::PlayerWins);
        assert_eq!(judge(Gesture::Rock, Gesture::Paper), Outcome::ComputerWins);
        assert_eq!(judge(Gesture::Paper, Gesture::Paper), Outcome::Draw);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = RoundEngine::from_seed(7);
        let mut b = RoundEngine::from_seed(7);
        for _ in 0..20 {
            assert_eq!(
                a.play_round(Some(Gesture::Rock)),
                b.play_round(Some(Gesture::Rock))
            );
        }
    }
}
