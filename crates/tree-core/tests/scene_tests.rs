mod common;

use common::*;
use tree_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn empty_scene_is_rejected() {
    let params = SceneParams {
        particle_count: 0,
        ..Default::default()
    };
    assert!(matches!(Scene::new(params), Err(FieldError::EmptyField)));
}

#[test]
fn default_params_match_constants() {
    let params = SceneParams::default();
    assert_eq!(params.particle_count, DEFAULT_PARTICLE_COUNT);
    assert_eq!(params.burst_capacity, BURST_CAPACITY);
    assert_eq!(params.seed, None);
    assert_eq!(params.thresholds, GestureThresholds::default());
}

#[test]
fn seeded_scenes_are_reproducible() {
    let a = seeded_scene(128);
    let b = seeded_scene(128);
    assert_eq!(a.morph().particles(), b.morph().particles());
    assert_eq!(a.morph().positions(), b.morph().positions());
}

#[test]
fn hands_drive_the_gesture() {
    let mut scene = seeded_scene(64);
    assert_eq!(scene.gesture(), GestureState::Idle);
    let open = hand(glam::Vec2::new(0.5, 0.6), 0.1, 0.2);
    assert_eq!(scene.ingest_hands(&[open]), GestureState::HandOpen);
    assert_eq!(scene.ingest_hands(&[]), GestureState::HandClosed);
}

#[test]
fn fist_motion_spins_the_field() {
    let mut scene = seeded_scene(64);
    scene.ingest_hands(&[closed_hand(0.5)]);
    scene.ingest_hands(&[closed_hand(0.6)]);
    let outcome_before = scene.morph().rotation_y();
    scene.tick(0.0, DT);
    let spun = scene.morph().rotation_y() - outcome_before;
    assert!((spun - ROTATION_APPLY_FRACTION).abs() < 1e-3, "spun {spun}");
}

#[test]
fn pointer_fallback_explodes_and_drags() {
    let mut scene = seeded_scene(64);
    scene.pointer_press(200.0);
    assert_eq!(scene.gesture(), GestureState::HandOpen);
    scene.pointer_move(260.0);
    assert_eq!(scene.gesture(), GestureState::HandClosed);
    assert!(scene.channel().rotation() > 0.0);
    scene.pointer_release();
    assert_eq!(scene.gesture(), GestureState::HandClosed);
}

#[test]
fn release_without_press_keeps_the_gesture() {
    let mut scene = seeded_scene(64);
    scene.set_gesture(GestureState::HeartShape);
    scene.pointer_release();
    assert_eq!(scene.gesture(), GestureState::HeartShape);
}

#[test]
fn wheel_zooms_while_manipulating() {
    let mut scene = seeded_scene(64);
    scene.set_gesture(GestureState::HandClosed);
    scene.wheel(20.0);
    scene.tick(0.0, DT);
    assert!(scene.camera_rig().target_distance() < CAMERA_START_DISTANCE);
}

#[test]
fn reset_input_drops_pending_motion() {
    let mut scene = seeded_scene(64);
    scene.ingest_hands(&[closed_hand(0.5)]);
    scene.ingest_hands(&[closed_hand(0.7)]);
    scene.reset_input();
    assert_eq!(scene.channel().rotation(), 0.0);
    assert!(scene.classifier().previous_wrist().is_none());
}

#[test]
fn particle_count_regenerates_the_field() {
    let mut scene = seeded_scene(64);
    scene.morph_mut().set_growth(0.7);
    scene.set_particle_count(96).unwrap();
    assert_eq!(scene.morph().len(), 96);
    assert_eq!(scene.params().particle_count, 96);
    assert!((scene.morph().growth() - 0.7).abs() < 1e-6);
    assert_eq!(scene.set_particle_count(0), Err(FieldError::EmptyField));
    assert_eq!(scene.morph().len(), 96);
}

#[test]
fn instances_cover_field_burst_and_star() {
    let mut scene = seeded_scene(100);
    let mut out = Vec::new();
    scene.write_instances(&mut out);
    assert_eq!(out.len(), 100);

    scene.morph_mut().set_growth(0.98);
    scene.set_gesture(GestureState::HandClosed);
    for i in 0..10 {
        scene.tick(i as f32 * DT, DT);
    }
    scene.write_instances(&mut out);
    assert_eq!(out.len(), 101, "star should be visible");

    scene.set_gesture(GestureState::HandOpen);
    scene.tick(0.2, DT);
    scene.write_instances(&mut out);
    assert!(out.len() > 100 + BURST_CAPACITY);
    assert!(out.len() <= scene.max_instances());
    assert!(out.iter().all(|p| p.scale > 0.0 && p.pos.iter().all(|c| c.is_finite())));
}

#[test]
fn instances_apply_field_rotation() {
    let mut scene = seeded_scene(16);
    scene.morph_mut().add_rotation(std::f32::consts::FRAC_PI_2);
    let mut out = Vec::new();
    scene.write_instances(&mut out);
    let local = scene.morph().position(3);
    let world = glam::Vec3::from(out[3].pos);
    assert!((world.y - local.y).abs() < 1e-5);
    assert!((world.length() - local.length()).abs() < 1e-4);
    assert!((world.x - local.z).abs() < 1e-4);
}
