//! End-to-end rounds over capture files on disk.

use std::path::Path;
use strictly_hands::{GameConfig, Gesture, Outcome, RoundRunner, describe, replay_rig};

/// Writes a landmark export with the given fingers extended.
fn write_capture(dir: &Path, name: &str, extended: [bool; 4]) {
    const TIPS: [usize; 4] = [8, 12, 16, 20];
    const MCPS: [usize; 4] = [5, 9, 13, 17];

    let points = (0..21)
        .map(|i| {
            let y = if let Some(finger) = TIPS.iter().position(|&t| t == i) {
                if extended[finger] { 0.3 } else { 0.75 }
            } else if MCPS.contains(&i) {
                0.6
            } else {
                0.8
            };
            format!(r#"{{"x": 0.5, "y": {y}, "z": 0.0}}"#)
        })
        .collect::<Vec<_>>()
        .join(", ");
    let json = format!(r#"{{"multi_hand_landmarks": [[{points}]]}}"#);
    std::fs::write(dir.join(name), json).unwrap();
}

fn config(dir: &Path) -> GameConfig {
    GameConfig::default()
        .with_captures_dir(dir)
        .with_countdown_secs(0)
        .with_seed(17)
}

#[tokio::test]
async fn test_rounds_step_through_captures() {
    let dir = tempfile::tempdir().unwrap();
    write_capture(dir.path(), "01_rock.json", [false; 4]);
    write_capture(dir.path(), "02_paper.json", [true; 4]);
    write_capture(dir.path(), "03_scissors.json", [true, true, false, false]);
    write_capture(dir.path(), "04_point.json", [true, false, false, false]);
    std::fs::write(dir.path().join("05_empty.json"), r#"{"multi_hand_landmarks": []}"#).unwrap();
    std::fs::write(dir.path().join("06_corrupt.json"), "not json").unwrap();

    let mut runner = RoundRunner::new(replay_rig(&config(dir.path())));
    let mut rounds = Vec::new();
    for _ in 0..6 {
        rounds.push(runner.play().await.unwrap());
    }

    assert_eq!(rounds[0].player(), Some(Gesture::Rock));
    assert_eq!(rounds[1].player(), Some(Gesture::Paper));
    assert_eq!(rounds[2].player(), Some(Gesture::Scissors));
    assert_eq!(rounds[3].outcome(), Outcome::NoGestureDetected);
    assert_eq!(rounds[4].outcome(), Outcome::NoGestureDetected);
    assert_eq!(rounds[5].outcome(), Outcome::CaptureFailed);
}

#[tokio::test]
async fn test_missing_captures_is_camera_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let mut runner = RoundRunner::new(replay_rig(&config(&dir.path().join("missing"))));

    let outcome = runner.play().await.unwrap();
    assert_eq!(outcome.outcome(), Outcome::CameraUnavailable);
    assert!(describe(&outcome).contains("camera not found"));
}

#[tokio::test]
async fn test_same_seed_same_game() {
    let dir = tempfile::tempdir().unwrap();
    write_capture(dir.path(), "rock.json", [false; 4]);

    let mut a = RoundRunner::new(replay_rig(&config(dir.path())));
    let mut b = RoundRunner::new(replay_rig(&config(dir.path())));
    for _ in 0..5 {
        assert_eq!(a.play().await.unwrap(), b.play().await.unwrap());
    }
}
