//! Hand landmarks addressed by anatomical joint name.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::EnumCount;
use tracing::instrument;

/// The 21 hand joints reported by a landmark detector, in detector order.
///
/// Discriminants match the MediaPipe hand-landmark indices.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HandJoint {
    /// Wrist (0)
    Wrist,
    /// Thumb carpometacarpal (1)
    ThumbCmc,
    /// Thumb MCP (2)
    ThumbMcp,
    /// Thumb interphalangeal (3)
    ThumbIp,
    /// Thumb tip (4)
    ThumbTip,
    /// Index knuckle (5)
    IndexMcp,
    /// Index proximal interphalangeal (6)
    IndexPip,
    /// Index distal interphalangeal (7)
    IndexDip,
    /// Index tip (8)
    IndexTip,
    /// Middle knuckle (9)
    MiddleMcp,
    /// Middle proximal interphalangeal (10)
    MiddlePip,
    /// Middle distal interphalangeal (11)
    MiddleDip,
    /// Middle tip (12)
    MiddleTip,
    /// Ring knuckle (13)
    RingMcp,
    /// Ring proximal interphalangeal (14)
    RingPip,
    /// Ring distal interphalangeal (15)
    RingDip,
    /// Ring tip (16)
    RingTip,
    /// Pinky knuckle (17)
    PinkyMcp,
    /// Pinky proximal interphalangeal (18)
    PinkyPip,
    /// Pinky distal interphalangeal (19)
    PinkyDip,
    /// Pinky tip (20)
    PinkyTip,
}

impl HandJoint {
    /// Converts the joint to its detector index (0-20).
    pub fn to_index(self) -> usize {
        self as usize
    }
}

/// A normalized landmark position.
///
/// `x` and `y` are in image-relative units with `y` growing downward.
/// `z` is depth relative to the wrist and is not used for classification.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, derive_new::new)]
pub struct Landmark {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position, smaller is higher in the frame.
    pub y: f32,
    /// Relative depth.
    #[serde(default)]
    pub z: f32,
}

/// Named-joint lookup over a single detected hand.
///
/// Implemented by [`LandmarkSet`]; anything that can answer "where is this
/// joint" can be classified.
pub trait Joints {
    /// Returns the position of `joint`.
    fn joint(&self, joint: HandJoint) -> Landmark;
}

/// One hand's full set of landmarks, one per [`HandJoint`].
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    /// Landmarks in detector order.
    points: [Landmark; HandJoint::COUNT],
}

impl LandmarkSet {
    /// Builds a landmark set from detector-ordered points.
    ///
    /// Fails unless exactly one point per joint is supplied.
    #[instrument(skip(points), fields(count = points.len()))]
    pub fn from_points(points: Vec<Landmark>) -> Result<Self, LandmarkError> {
        let count = points.len();
        let points: [Landmark; HandJoint::COUNT] = points.try_into().map_err(|_| {
            LandmarkError::new(format!(
                "expected {} landmarks, got {}",
                HandJoint::COUNT,
                count
            ))
        })?;
        Ok(Self { points })
    }
}

impl Joints for LandmarkSet {
    fn joint(&self, joint: HandJoint) -> Landmark {
        self.points[joint.to_index()]
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = LandmarkError;

    #[track_caller]
    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.points.to_vec()
    }
}

/// Malformed landmark input.
#[derive(Debug, Clone, Display, Error)]
#[display("Landmark error: {} at {}:{}", message, file, line)]
pub struct LandmarkError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LandmarkError {
    /// Creates a new landmark error with caller location tracking.
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

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn indexed_points() -> Vec<Landmark> {
        (0..HandJoint::COUNT)
            .map(|i| Landmark::new(i as f32, i as f32 * 0.01, 0.0))
            .collect()
    }

    #[test]
    fn test_joint_indices_follow_detector_order() {
        assert_eq!(HandJoint::Wrist.to_index(), 0);
        assert_eq!(HandJoint::IndexMcp.to_index(), 5);
        assert_eq!(HandJoint::IndexTip.to_index(), 8);
        assert_eq!(HandJoint::MiddleTip.to_index(), 12);
        assert_eq!(HandJoint::PinkyTip.to_index(), 20);
        assert_eq!(HandJoint::COUNT, 21);
    }

    #[test]
    fn test_lookup_by_name() {
        let set = LandmarkSet::from_points(indexed_points()).unwrap();
        for joint in HandJoint::iter() {
            assert_eq!(set.joint(joint).x, joint.to_index() as f32);
        }
    }

    #[test]
    fn test_rejects_short_input() {
        let mut points = indexed_points();
        points.truncate(8);
        let err = LandmarkSet::from_points(points).unwrap_err();
        assert!(err.message.contains("got 8"));
    }

    #[test]
    fn test_rejects_long_input() {
        let mut points = indexed_points();
        points.push(Landmark::default());
        assert!(LandmarkSet::from_points(points).is_err());
    }

    #[test]
    fn test_deserializes_from_point_list() {
        let json = serde_json::to_string(&indexed_points()).unwrap();
        let set: LandmarkSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set.joint(HandJoint::RingTip).x, 16.0);
    }

    #[test]
    fn test_missing_z_defaults_to_zero() {
        let point: Landmark = serde_json::from_str(r#"{"x": 0.5, "y": 0.25}"#).unwrap();
        assert_eq!(point, Landmark::new(0.5, 0.25, 0.0));
    }

    #[test]
    fn test_joint_names_match_detector_scheme() {
        assert_eq!(HandJoint::IndexTip.to_string(), "INDEX_TIP");
        assert_eq!(HandJoint::PinkyMcp.to_string(), "PINKY_MCP");
    }
}
