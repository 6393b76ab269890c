//! One camera-to-outcome round.

use crate::GameConfig;
use crate::camera::{Camera, OpenCamera, ReplayCamera};
use crate::detector::{JsonLandmarkDetector, LandmarkDetector};
use rand::Rng;
use rand::rngs::SmallRng;
use std::time::Duration;
use strictly_rps::{RoundEngine, RoundOutcome, classify};
use tracing::{debug, info, instrument, warn};

/// Captures one frame and plays it against the computer.
///
/// Camera and detector failures become [`RoundOutcome`] values; this never
/// fails. The camera is released before returning on every path. After a
/// successful open the player gets `countdown` to strike a pose. A frame the
/// detector cannot decode is reported as [`strictly_rps::Outcome::CaptureFailed`].
#[instrument(skip_all, fields(countdown_ms = countdown.as_millis() as u64))]
pub fn play_captured_round<C, D, R>(
    camera: &mut C,
    detector: &mut D,
    engine: &mut RoundEngine<R>,
    countdown: Duration,
) -> RoundOutcome
where
    C: Camera + ?Sized,
    D: LandmarkDetector + ?Sized,
    R: Rng,
{
    let Some(mut camera) = OpenCamera::open(camera) else {
        warn!("Camera unavailable");
        return RoundOutcome::camera_unavailable();
    };

    if !countdown.is_zero() {
        debug!("Waiting for the player to pose");
        std::thread::sleep(countdown);
    }

    let Some(frame) = camera.read_frame() else {
        warn!("Frame capture failed");
        return RoundOutcome::capture_failed();
    };
    drop(camera);

    let landmarks = match detector.detect(&frame) {
        Ok(Some(landmarks)) => landmarks,
        Ok(None) => {
            info!(source = %frame.source(), "No hand in frame");
            return engine.play_round(None);
        }
        Err(e) => {
            warn!(error = %e, "Frame could not be read");
            return RoundOutcome::capture_failed();
        }
    };

    let gesture = classify(&landmarks);
    info!(source = %frame.source(), ?gesture, "Hand classified");
    engine.play_round(gesture)
}

/// Something that can play a full round on demand.
pub trait RoundSource {
    /// Plays one round and reports how it ended.
    fn play_round(&mut self) -> RoundOutcome;
}

/// Camera, detector and engine bundled for repeated rounds.
#[derive(Debug)]
pub struct Rig<C, D, R> {
    camera: C,
    detector: D,
    engine: RoundEngine<R>,
    countdown: Duration,
}

impl<C, D, R> Rig<C, D, R>
where
    C: Camera,
    D: LandmarkDetector,
    R: Rng,
{
    /// Bundles the collaborators of a round.
    pub fn new(camera: C, detector: D, engine: RoundEngine<R>, countdown: Duration) -> Self {
        Self {
            camera,
            detector,
            engine,
            countdown,
        }
    }

    /// The camera.
    pub fn camera(&self) -> &C {
        &self.camera
    }
}

impl<C, D, R> RoundSource for Rig<C, D, R>
where
    C: Camera,
    D: LandmarkDetector,
    R: Rng,
{
    fn play_round(&mut self) -> RoundOutcome {
        play_captured_round(
            &mut self.camera,
            &mut self.detector,
            &mut self.engine,
            self.countdown,
        )
    }
}

/// Rig that replays captures from disk.
pub type ReplayRig = Rig<ReplayCamera, JsonLandmarkDetector, SmallRng>;

/// Builds a replay rig from configuration.
#[instrument(skip_all, fields(captures_dir = %config.captures_dir().display(), seed = ?config.seed()))]
pub fn replay_rig(config: &GameConfig) -> ReplayRig {
    let engine = match config.seed() {
        Some(seed) => RoundEngine::from_seed(*seed),
        None => RoundEngine::from_entropy(),
    };
    Rig::new(
        ReplayCamera::new(config.captures_dir()),
        JsonLandmarkDetector::new(),
        engine,
        config.countdown(),
    )
}
