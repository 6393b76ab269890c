//! Hand-pose classification.
//!
//! A gesture is read off which of the four non-thumb fingers are extended.
//! A finger counts as extended when its tip sits higher in the frame than
//! its knuckle (MCP joint). The thumb is not part of the signal.

use crate::gesture::Gesture;
use crate::landmarks::{HandJoint, Joints};
use tracing::{debug, instrument};

/// A non-thumb finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Finger {
    /// Index finger.
    Index,
    /// Middle finger.
    Middle,
    /// Ring finger.
    Ring,
    /// Pinky finger.
    Pinky,
}

impl Finger {
    /// Fingers in pattern bit order.
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Fingertip joint.
    pub fn tip(self) -> HandJoint {
        match self {
            Finger::Index => HandJoint::IndexTip,
            Finger::Middle => HandJoint::MiddleTip,
            Finger::Ring => HandJoint::RingTip,
            Finger::Pinky => HandJoint::PinkyTip,
        }
    }

    /// Knuckle joint the tip is compared against.
    pub fn mcp(self) -> HandJoint {
        match self {
            Finger::Index => HandJoint::IndexMcp,
            Finger::Middle => HandJoint::MiddleMcp,
            Finger::Ring => HandJoint::RingMcp,
            Finger::Pinky => HandJoint::PinkyMcp,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Which of the four non-thumb fingers are extended.
///
/// Bit 0 is the index finger, bit 3 the pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FingerExtension(u8);

impl FingerExtension {
    /// No finger extended.
    pub const NONE: FingerExtension = FingerExtension(0b0000);
    /// Index and middle extended.
    pub const INDEX_MIDDLE: FingerExtension = FingerExtension(0b0011);
    /// All four extended.
    pub const ALL: FingerExtension = FingerExtension(0b1111);

    /// Raw pattern bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Reads the pattern off a hand.
    #[instrument(skip(landmarks))]
    pub fn from_landmarks(landmarks: &impl Joints) -> Self {
        Finger::ALL
            .iter()
            .filter(|finger| {
                landmarks.joint(finger.tip()).y < landmarks.joint(finger.mcp()).y
            })
            .fold(Self::NONE, |pattern, finger| Self(pattern.0 | finger.bit()))
    }

    /// Number of extended fingers.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Maps the pattern to a gesture, if it names one.
    pub fn gesture(self) -> Option<Gesture> {
        match self {
            Self::INDEX_MIDDLE => Some(Gesture::Scissors),
            Self::NONE => Some(Gesture::Rock),
            Self::ALL => Some(Gesture::Paper),
            _ => None,
        }
    }
}

/// Classifies a hand pose as a gesture.
///
/// Returns `None` for any finger pattern other than fist, flat hand or
/// index-and-middle. Only the vertical coordinate is compared, so this
/// assumes an upright hand facing the camera; rotated or sideways hands
/// are not handled.
#[instrument(skip(landmarks))]
pub fn classify(landmarks: &impl Joints) -> Option<Gesture> {
    let pattern = FingerExtension::from_landmarks(landmarks);
    let gesture = pattern.gesture();
    debug!(
        pattern = pattern.bits(),
        extended = pattern.count(),
        ?gesture,
        "Classified hand pose"
    );
    gesture
}
