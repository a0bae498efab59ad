mod common;

use common::*;
use glam::{Vec2, Vec3};
use tree_core::*;

#[test]
fn no_hands_is_calm_and_clears_history() {
    let mut classifier = GestureClassifier::default();
    let mut channel = ManipulationDelta::new();
    classifier.classify(&[closed_hand(0.5)], &mut channel);
    assert!(classifier.previous_wrist().is_some());

    let result = classifier.classify(&[], &mut channel);
    assert_eq!(result.state, GestureState::HandClosed);
    assert!(result.delta.is_none());
    assert!(classifier.previous_wrist().is_none());
}

#[test]
fn touching_index_and_thumb_tips_make_a_heart() {
    let mut a = hand_points(Vec2::new(0.3, 0.7), 0.1, 0.1);
    let mut b = hand_points(Vec2::new(0.7, 0.7), 0.1, 0.1);
    a[INDEX_TIP] = Vec3::new(0.45, 0.3, 0.0);
    b[INDEX_TIP] = Vec3::new(0.50, 0.3, 0.0);
    a[THUMB_TIP] = Vec3::new(0.45, 0.5, 0.0);
    b[THUMB_TIP] = Vec3::new(0.50, 0.5, 0.0);
    let hands = [
        HandLandmarks::from_points(&a).unwrap(),
        HandLandmarks::from_points(&b).unwrap(),
    ];
    let result = classify_frame(&hands, None, &GestureThresholds::default());
    assert_eq!(result.state, GestureState::HeartShape);
    assert!(result.wrist.is_none());
}

#[test]
fn distant_tips_are_not_a_heart() {
    let hands = [closed_hand(0.2), closed_hand(0.8)];
    let result = classify_frame(&hands, None, &GestureThresholds::default());
    assert_eq!(result.state, GestureState::HandClosed);
}

#[test]
fn wide_reach_is_an_open_hand_and_clears_history() {
    let open = hand(Vec2::new(0.5, 0.6), 0.1, 0.15);
    let ratio = openness_ratio(&open, PALM_SIZE_FLOOR);
    assert!((ratio - 1.5).abs() < 1e-4, "ratio {ratio}");

    let mut classifier = GestureClassifier::default();
    let mut channel = ManipulationDelta::new();
    classifier.classify(&[closed_hand(0.5)], &mut channel);
    let result = classifier.classify(&[open], &mut channel);
    assert_eq!(result.state, GestureState::HandOpen);
    assert!(classifier.previous_wrist().is_none());
}

#[test]
fn any_open_hand_wins_over_a_fist() {
    let open = hand(Vec2::new(0.7, 0.6), 0.1, 0.2);
    let result = classify_frame(&[closed_hand(0.2), open], None, &GestureThresholds::default());
    assert_eq!(result.state, GestureState::HandOpen);
}

#[test]
fn closed_hand_motion_becomes_rotation() {
    let first = closed_hand(0.5);
    let ratio = openness_ratio(&first, PALM_SIZE_FLOOR);
    assert!((ratio - 1.0).abs() < 1e-4);

    let mut classifier = GestureClassifier::default();
    let mut channel = ManipulationDelta::new();
    let r1 = classifier.classify(&[first], &mut channel);
    assert_eq!(r1.state, GestureState::HandClosed);
    assert!(r1.delta.is_none(), "no delta without history");

    let r2 = classifier.classify(&[closed_hand(0.6)], &mut channel);
    let delta = r2.delta.expect("delta with history");
    assert!((delta.rotation - 1.0).abs() < 1e-4, "rotation {}", delta.rotation);
    assert!(delta.zoom.abs() < 1e-4);
    assert!((channel.rotation() - 1.0).abs() < 1e-4);
}

#[test]
fn growing_palm_becomes_zoom() {
    let previous = WristState::of(&hand(Vec2::new(0.5, 0.6), 0.10, 0.10));
    let nearer = hand(Vec2::new(0.5, 0.6), 0.12, 0.12);
    let result = classify_frame(&[nearer], Some(previous), &GestureThresholds::default());
    let delta = result.delta.unwrap();
    assert!((delta.zoom - 0.02 * ZOOM_GAIN).abs() < 1e-3);
    assert!(delta.rotation.abs() < 1e-5);
}

#[test]
fn degenerate_palm_keeps_ratio_finite() {
    let flat = hand(Vec2::new(0.5, 0.5), 0.0, 0.1);
    let ratio = openness_ratio(&flat, PALM_SIZE_FLOOR);
    assert!(ratio.is_finite());
}

#[test]
fn malformed_landmarks_are_rejected() {
    let short = vec![Vec3::ZERO; 20];
    assert_eq!(
        HandLandmarks::from_points(&short),
        Err(LandmarkError::WrongCount {
            expected: 21,
            found: 20
        })
    );

    let mut bad = hand_points(Vec2::new(0.5, 0.5), 0.1, 0.1);
    bad[3].y = f32::NAN;
    assert_eq!(
        HandLandmarks::from_points(&bad),
        Err(LandmarkError::NonFinite { index: 3 })
    );

}

#[test]
fn a_malformed_hand_drops_the_whole_frame() {
    let good = hand_points(Vec2::new(0.5, 0.5), 0.1, 0.1);
    let bad = vec![Vec3::ZERO; 5];
    assert_eq!(parse_hands(&[good.clone()]).len(), 1);
    assert!(parse_hands(&[good, bad]).is_empty());
}

#[test]
fn target_growth_per_state() {
    assert_eq!(GestureState::HandClosed.target_growth(), 1.0);
    assert_eq!(GestureState::HeartShape.target_growth(), 1.0);
    assert_eq!(GestureState::HandOpen.target_growth(), 0.0);
    assert_eq!(GestureState::Idle.target_growth(), 0.0);
}
