//! Tests for the round engine's use of randomness and its outcomes.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::collections::HashMap;
use strictly_rps::{Gesture, Outcome, RoundEngine};
use strum::IntoEnumIterator;

/// Random source that counts how often it is sampled.
struct CountingRng {
    inner: SmallRng,
    calls: usize,
}

impl CountingRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            calls: 0,
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.calls += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.calls += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.calls += 1;
        self.inner.fill_bytes(dst)
    }
}

#[test]
fn test_no_gesture_consumes_no_randomness() {
    let mut engine = RoundEngine::new(CountingRng::new(1));
    for _ in 0..10 {
        let round = engine.play_round(None);
        assert_eq!(round.outcome(), Outcome::NoGestureDetected);
        assert_eq!(round.player(), None);
        assert_eq!(round.computer(), None);
    }
    assert_eq!(engine.into_rng().calls, 0);
}

#[test]
fn test_gesture_consumes_randomness() {
    let mut engine = RoundEngine::new(CountingRng::new(1));
    engine.play_round(Some(Gesture::Paper));
    assert!(engine.into_rng().calls > 0);
}

#[test]
fn test_skipped_round_does_not_shift_sequence() {
    let mut plain = RoundEngine::from_seed(99);
    let mut with_skips = RoundEngine::from_seed(99);

    for _ in 0..25 {
        with_skips.play_round(None);
        assert_eq!(
            plain.play_round(Some(Gesture::Scissors)),
            with_skips.play_round(Some(Gesture::Scissors))
        );
    }
}

#[test]
fn test_round_carries_both_gestures() {
    let mut engine = RoundEngine::from_seed(3);
    for player in Gesture::iter() {
        let round = engine.play_round(Some(player));
        assert_eq!(round.player(), Some(player));
        let computer = round.computer().expect("computer moves when player does");
        let expected = if player == computer {
            Outcome::Draw
        } else if player.beats() == computer {
            Outcome::PlayerWins
        } else {
            Outcome::ComputerWins
        };
        assert_eq!(round.outcome(), expected);
    }
}

#[test]
fn test_computer_draw_is_roughly_uniform() {
    const DRAWS: usize = 3000;
    let mut engine = RoundEngine::from_seed(2024);
    let mut counts: HashMap<Gesture, usize> = HashMap::new();

    for _ in 0..DRAWS {
        let round = engine.play_round(Some(Gesture::Rock));
        if let Some(computer) = round.computer() {
            *counts.entry(computer).or_default() += 1;
        }
    }

    assert_eq!(counts.values().sum::<usize>(), DRAWS);
    for gesture in Gesture::iter() {
        let count = counts.get(&gesture).copied().unwrap_or(0);
        // Expected 1000 each; standard deviation is about 26.
        assert!(
            (850..=1150).contains(&count),
            "{gesture} drawn {count} times out of {DRAWS}"
        );
    }
}

#[test]
fn test_every_outcome_reachable_from_each_gesture() {
    let mut engine = RoundEngine::from_seed(11);
    for player in Gesture::iter() {
        let mut seen = Vec::new();
        for _ in 0..200 {
            let outcome = engine.play_round(Some(player)).outcome();
            if !seen.contains(&outcome) {
                seen.push(outcome);
            }
        }
        assert_eq!(seen.len(), 3, "{player} saw {seen:?}");
    }
}
