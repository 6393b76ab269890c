//! Strictly RPS - pure rock-paper-scissors logic.
//!
//! Turns a detected hand into a gesture and two gestures into a round
//! outcome. Nothing here touches a camera, a clock or a terminal; the only
//! side effect is the computer's random draw.
//!
//! # Example
//!
//! ```
//! use strictly_rps::{Gesture, Outcome, RoundEngine};
//!
//! let mut engine = RoundEngine::from_seed(42);
//! let round = engine.play_round(Some(Gesture::Rock));
//! assert!(round.outcome().is_decided());
//!
//! let round = engine.play_round(None);
//! assert_eq!(round.outcome(), Outcome::NoGestureDetected);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod classifier;
mod engine;
mod gesture;
mod landmarks;
mod outcome;

pub use classifier::{Finger, FingerExtension, classify};
pub use engine::{RoundEngine, judge};
pub use gesture::Gesture;
pub use landmarks::{HandJoint, Joints, Landmark, LandmarkError, LandmarkSet};
pub use outcome::{Outcome, RoundOutcome};
