//! Landmark detector collaborator.

use crate::camera::Frame;
use derive_more::{Display, Error};
use serde::Deserialize;
use strictly_rps::{Landmark, LandmarkSet};
use tracing::{debug, instrument, warn};

/// Finds a hand in a frame.
pub trait LandmarkDetector {
    /// Returns the landmarks of the hand in `frame`.
    ///
    /// `Ok(None)` means no hand was found, which is not an error.
    fn detect(&mut self, frame: &Frame) -> Result<Option<LandmarkSet>, DetectError>;
}

/// Frame could not be interpreted.
#[derive(Debug, Clone, Display, Error)]
#[display("Detect error: {} at {}:{}", message, file, line)]
pub struct DetectError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DetectError {
    /// Creates a new detect error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Landmark export in the shape MediaPipe Hands reports it.
#[derive(Debug, Deserialize)]
struct HandCapture {
    #[serde(default)]
    multi_hand_landmarks: Vec<Vec<Landmark>>,
}

/// Detector for frames that carry a recorded landmark export.
///
/// Each frame is a JSON document `{"multi_hand_landmarks": [[{x, y, z}, ...]]}`.
/// Only the first hand is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLandmarkDetector;

impl JsonLandmarkDetector {
    /// Creates a detector.
    pub fn new() -> Self {
        Self
    }
}

impl LandmarkDetector for JsonLandmarkDetector {
    #[instrument(skip_all, fields(source = %frame.source()))]
    fn detect(&mut self, frame: &Frame) -> Result<Option<LandmarkSet>, DetectError> {
        let capture: HandCapture = serde_json::from_slice(frame.bytes()).map_err(|e| {
            warn!(error = %e, "Frame is not a landmark export");
            DetectError::new(format!("Failed to parse frame {}: {}", frame.source(), e))
        })?;

        let hands = capture.multi_hand_landmarks.len();
        let Some(points) = capture.multi_hand_landmarks.into_iter().next() else {
            debug!("No hand in frame");
            return Ok(None);
        };
        if hands > 1 {
            debug!(hands, "Multiple hands in frame, using the first");
        }

        let landmarks = LandmarkSet::from_points(points)
            .map_err(|e| DetectError::new(format!("Bad hand in {}: {}", frame.source(), e.message)))?;
        Ok(Some(landmarks))
    }
}
