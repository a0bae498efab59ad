use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::*;

proptest! {
    #[test]
    fn generated_fields_respect_their_shapes(count in 1usize..400, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = generate_field(count, &mut rng).unwrap();
        prop_assert_eq!(field.len(), count);
        for (i, p) in field.iter().enumerate() {
            prop_assert_eq!(p.id, i);
            prop_assert!(p.tree.is_finite() && p.exploded.is_finite() && p.heart.is_finite());

            prop_assert!(p.tree.y >= -TREE_HEIGHT * 0.5 - 1e-4);
            prop_assert!(p.tree.y <= TREE_HEIGHT * 0.5 + 1e-4);
            let radial = glam::Vec2::new(p.tree.x, p.tree.z).length();
            prop_assert!(radial <= TREE_RADIUS + TREE_RADIUS_JITTER);

            let d = p.exploded.length();
            prop_assert!(d >= EXPLODED_MIN_DIST - 1e-3 && d <= EXPLODED_MAX_DIST + 1e-3);

            prop_assert!(is_inside_heart(p.heart, HEART_SCALE));

            prop_assert!(p.size >= PARTICLE_SIZE_MIN && p.size <= PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN);
        }
    }
}

#[test]
fn same_seed_same_field() {
    let a = generate_field(256, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = generate_field(256, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_field_is_an_error() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(generate_field(0, &mut rng), Err(FieldError::EmptyField));
}

#[test]
fn tree_narrows_toward_the_apex() {
    let mut rng = StdRng::seed_from_u64(2);
    let base = tree_target(0.0, &mut rng);
    let top = tree_target(0.99, &mut rng);
    let radial = |v: glam::Vec3| glam::Vec2::new(v.x, v.z).length();
    assert!((base.y + TREE_HEIGHT * 0.5).abs() < 1e-5);
    assert!(radial(base) > TREE_RADIUS - TREE_RADIUS_JITTER);
    assert!(radial(top) < radial(base));
}

#[test]
fn heart_implicit_classifies_known_points() {
    assert!(heart_implicit(glam::Vec3::ZERO) <= 0.0);
    assert!(heart_implicit(glam::Vec3::new(0.0, 2.0, 0.0)) > 0.0);
    assert!(heart_implicit(glam::Vec3::new(1.5, 1.5, 1.5)) > 0.0);
    assert!(is_inside_heart(glam::Vec3::new(0.0, -0.5 * HEART_SCALE, 0.0), HEART_SCALE));
}

#[test]
fn sampled_heart_points_are_inside() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..500 {
        let p = sample_heart(HEART_SCALE, &mut rng);
        assert!(is_inside_heart(p, HEART_SCALE), "{p:?} outside");
    }
}

#[test]
fn visual_types_follow_the_draw_cutoffs() {
    assert_eq!(VisualType::from_draw(0.99, 0), VisualType::OrnamentWhite);
    assert_eq!(VisualType::from_draw(0.90, 0), VisualType::OrnamentGold);
    assert_eq!(VisualType::from_draw(0.70, 0), VisualType::Berry);
    assert_eq!(
        VisualType::from_draw(0.10, 8),
        VisualType::Foliage(FoliageShade::Emerald)
    );
    assert_eq!(
        VisualType::from_draw(0.10, 5),
        VisualType::Foliage(FoliageShade::Forest)
    );
    assert_eq!(
        VisualType::from_draw(0.10, 1),
        VisualType::Foliage(FoliageShade::Deep)
    );
}
