//! Hand gestures and the beats-relation between them.

use rand::Rng;
use rand::distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A rock-paper-scissors gesture.
///
/// An unrecognized hand pose is represented as `Option::<Gesture>::None`
/// rather than a fourth variant, so every `Gesture` is a playable move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gesture {
    /// Closed fist.
    Rock,
    /// Flat open hand.
    Paper,
    /// Index and middle fingers extended.
    Scissors,
}

impl Gesture {
    /// All three gestures.
    pub const ALL: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Returns the gesture this one defeats.
    ///
    /// Rock beats scissors, scissors beats paper, paper beats rock.
    #[instrument]
    pub fn beats(self) -> Gesture {
        match self {
            Gesture::Rock => Gesture::Scissors,
            Gesture::Scissors => Gesture::Paper,
            Gesture::Paper => Gesture::Rock,
        }
    }

    /// Draws a gesture with exactly equal probability for each of the three.
    ///
    /// Samples `u32` words from `rng` and rejects the few that would bias
    /// the draw, so this usually consumes one word and occasionally more.
    #[instrument(skip(rng))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Gesture {
        let index = Uniform::new(0u32, Self::ALL.len() as u32)
            .expect("Gesture range is non-empty")
            .sample(rng);
        Self::ALL[index as usize]
    }
}
