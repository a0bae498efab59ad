mod common;

use common::seeded_scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn pool_starts_inactive_with_hidden_slots() {
    let mut rng = StdRng::seed_from_u64(3);
    let pool = BurstPool::new(BURST_CAPACITY, &mut rng);
    assert_eq!(pool.capacity(), BURST_CAPACITY);
    assert!(!pool.is_active());
    assert_eq!(pool.alive_count(), 0);
    assert!(pool.scales().iter().all(|&s| s == 0.0));
    for p in pool.particles() {
        assert!(p.max_life >= BURST_LIFE_MIN && p.max_life <= BURST_LIFE_MIN + BURST_LIFE_SPAN);
    }
}

#[test]
fn trigger_revives_every_slot_at_the_apex() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut pool = BurstPool::new(64, &mut rng);
    pool.trigger(&mut rng);
    assert!(pool.is_active());
    assert_eq!(pool.alive_count(), 64);
    let palette: Vec<_> = BURST_COLORS_HEX.iter().map(|&h| rgb_from_hex(h)).collect();
    for p in pool.particles() {
        assert_eq!(p.position, tree_apex());
        assert_eq!(p.remaining_life, p.max_life);
        let speed = p.velocity.length();
        assert!(speed >= BURST_SPEED_MIN - 1e-4 && speed <= BURST_SPEED_MIN + BURST_SPEED_SPAN + 1e-4);
        assert!(palette.contains(&p.color));
    }
}

#[test]
fn step_applies_gravity_and_drag() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut pool = BurstPool::new(1, &mut rng);
    pool.trigger(&mut rng);
    let before = pool.particles()[0].clone();
    pool.step(DT);
    let after = &pool.particles()[0];
    assert_eq!(after.position, before.position + before.velocity);
    let expected_vy = (before.velocity.y - BURST_GRAVITY) * BURST_DRAG;
    assert!((after.velocity.y - expected_vy).abs() < 1e-6);
    assert!((after.remaining_life - (before.max_life - DT)).abs() < 1e-6);
    let expected_scale = after.remaining_life / after.max_life * BURST_SCALE;
    assert!((pool.scales()[0] - expected_scale).abs() < 1e-6);
}

#[test]
fn inactive_pool_ignores_steps() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut pool = BurstPool::new(8, &mut rng);
    let before = pool.particles().to_vec();
    pool.step(DT);
    assert_eq!(pool.particles(), &before[..]);
}

#[test]
fn opening_an_assembled_tree_fires_then_drains_the_burst() {
    let mut scene = seeded_scene(200);
    scene.morph_mut().set_growth(0.9);
    scene.set_gesture(GestureState::HandClosed);
    scene.tick(0.0, DT);
    assert!(!scene.burst().is_active());

    scene.set_gesture(GestureState::HandOpen);
    let outcome = scene.tick(DT, DT);
    assert!(outcome.burst);
    assert!(scene.burst().is_active());
    assert_eq!(scene.burst().alive_count(), scene.burst().capacity());

    let lifetime = scene.burst().max_lifetime();
    let mut elapsed = DT;
    let mut t = 2.0 * DT;
    while elapsed <= lifetime + DT {
        scene.tick(t, DT);
        elapsed += DT;
        t += DT;
    }
    assert!(!scene.burst().is_active());
    assert_eq!(scene.burst().alive_count(), 0);
    assert!(scene.burst().scales().iter().all(|&s| s == 0.0));
}

#[test]
fn opening_a_sparse_field_does_not_fire() {
    let mut scene = seeded_scene(200);
    scene.morph_mut().set_growth(0.3);
    scene.set_gesture(GestureState::HandClosed);
    scene.tick(0.0, DT);
    scene.set_gesture(GestureState::HandOpen);
    assert!(!scene.tick(DT, DT).burst);
    assert!(!scene.burst().is_active());
}
