//! Classification of full landmark sets built like detector output.

use strictly_rps::{Gesture, HandJoint, Landmark, LandmarkSet, classify};
use strum::{EnumCount, IntoEnumIterator};

/// Builds an upright hand: knuckles at y = 0.6, fingertips above (0.35)
/// when extended or curled below (0.7) when not.
fn hand(index: bool, middle: bool, ring: bool, pinky: bool) -> LandmarkSet {
    let tip_y = |up: bool| if up { 0.35 } else { 0.7 };
    let points = HandJoint::iter()
        .map(|joint| {
            let y = match joint {
                HandJoint::Wrist => 0.9,
                HandJoint::IndexTip => tip_y(index),
                HandJoint::MiddleTip => tip_y(middle),
                HandJoint::RingTip => tip_y(ring),
                HandJoint::PinkyTip => tip_y(pinky),
                HandJoint::IndexMcp
                | HandJoint::MiddleMcp
                | HandJoint::RingMcp
                | HandJoint::PinkyMcp => 0.6,
                _ => 0.5,
            };
            Landmark::new(0.5, y, 0.0)
        })
        .collect::<Vec<_>>();
    assert_eq!(points.len(), HandJoint::COUNT);
    LandmarkSet::from_points(points).unwrap()
}

#[test]
fn test_scissors() {
    assert_eq!(classify(&hand(true, true, false, false)), Some(Gesture::Scissors));
}

#[test]
fn test_rock() {
    assert_eq!(classify(&hand(false, false, false, false)), Some(Gesture::Rock));
}

#[test]
fn test_paper() {
    assert_eq!(classify(&hand(true, true, true, true)), Some(Gesture::Paper));
}

#[test]
fn test_one_finger_is_unrecognized() {
    assert_eq!(classify(&hand(true, false, false, false)), None);
    assert_eq!(classify(&hand(false, true, false, false)), None);
    assert_eq!(classify(&hand(false, false, true, false)), None);
    assert_eq!(classify(&hand(false, false, false, true)), None);
}

#[test]
fn test_other_two_finger_pairs_are_unrecognized() {
    assert_eq!(classify(&hand(false, false, true, true)), None);
    assert_eq!(classify(&hand(true, false, true, false)), None);
    assert_eq!(classify(&hand(false, true, true, false)), None);
}

#[test]
fn test_three_fingers_are_unrecognized() {
    assert_eq!(classify(&hand(true, true, true, false)), None);
}

#[test]
fn test_thumb_is_ignored() {
    let base = hand(true, true, false, false);
    let mut points: Vec<Landmark> = base.clone().into();
    points[HandJoint::ThumbTip.to_index()] = Landmark::new(0.1, 0.01, 0.0);
    let moved = LandmarkSet::from_points(points).unwrap();
    assert_eq!(classify(&moved), classify(&base));
}

#[test]
fn test_classification_is_deterministic() {
    let set = hand(true, true, true, true);
    let first = classify(&set);
    for _ in 0..10 {
        assert_eq!(classify(&set), first);
    }
}
