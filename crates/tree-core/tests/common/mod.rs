// Shared fixtures for the core integration tests.

#![allow(dead_code)]

use glam::{Vec2, Vec3};
use tree_core::{HandLandmarks, FINGERTIPS, INDEX_MCP, LANDMARK_COUNT};

/// Points for a synthetic hand: every joint on the wrist, the index knuckle
/// `palm` above it, and each fingertip `reach` away in a fan.
pub fn hand_points(wrist: Vec2, palm: f32, reach: f32) -> Vec<Vec3> {
    let mut points = vec![wrist.extend(0.0); LANDMARK_COUNT];
    points[INDEX_MCP] = Vec3::new(wrist.x, wrist.y - palm, 0.0);
    for (k, &tip) in FINGERTIPS.iter().enumerate() {
        let angle = -std::f32::consts::FRAC_PI_2 + (k as f32 - 2.0) * 0.3;
        let dir = Vec2::new(angle.cos(), angle.sin());
        points[tip] = (wrist + dir * reach).extend(0.0);
    }
    points
}

pub fn hand(wrist: Vec2, palm: f32, reach: f32) -> HandLandmarks {
    HandLandmarks::from_points(&hand_points(wrist, palm, reach)).expect("valid hand")
}

/// A fist-like hand: fingertips as far from the wrist as the knuckle.
pub fn closed_hand(wrist_x: f32) -> HandLandmarks {
    hand(Vec2::new(wrist_x, 0.6), 0.1, 0.1)
}

pub fn seeded_scene(count: usize) -> tree_core::Scene {
    tree_core::Scene::new(tree_core::SceneParams {
        particle_count: count,
        seed: Some(7),
        ..Default::default()
    })
    .expect("scene")
}
