//! Particle field generation.
//!
//! Each particle gets three fixed targets (tree, exploded, heart), a render
//! size and a visual type. The random source is injected so a seeded
//! [`rand::rngs::StdRng`] reproduces a field exactly.

use crate::constants::*;
use crate::error::FieldError;
use crate::palette::VisualType;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Immutable per-particle target data.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Stable index; lower ids form earlier.
    pub id: usize,
    pub tree: Vec3,
    pub exploded: Vec3,
    pub heart: Vec3,
    pub size: f32,
    pub visual: VisualType,
}

/// Generate `count` particles. Errors on an empty field.
pub fn generate_field<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<Particle>, FieldError> {
    if count == 0 {
        return Err(FieldError::EmptyField);
    }
    let particles = (0..count)
        .map(|id| {
            let p = id as f32 / count as f32;
            Particle {
                id,
                tree: tree_target(p, rng),
                exploded: exploded_target(rng),
                heart: sample_heart(HEART_SCALE, rng),
                size: rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN,
                visual: VisualType::from_draw(rng.gen::<f32>(), id),
            }
        })
        .collect::<Vec<_>>();
    log::debug!("[field] generated {} particles", count);
    Ok(particles)
}

/// Point on the spiral cone at normalized height `p`.
pub fn tree_target<R: Rng + ?Sized>(p: f32, rng: &mut R) -> Vec3 {
    let y = -TREE_HEIGHT * 0.5 + p * TREE_HEIGHT;
    let r = (1.0 - p).powf(TREE_RADIUS_FALLOFF) * TREE_RADIUS;
    let angle = p * TREE_SPIRAL_TURNS_RAD;
    let jittered = r + (rng.gen::<f32>() - 0.5) * TREE_RADIUS_JITTER;
    Vec3::new(angle.cos() * jittered, y, angle.sin() * jittered)
}

/// Uniform direction on the sphere at a distance in the starfield shell.
pub fn exploded_target<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (rng.gen::<f32>() * 2.0 - 1.0).clamp(-1.0, 1.0).acos();
    let dist = rng.gen_range(EXPLODED_MIN_DIST..EXPLODED_MAX_DIST);
    Vec3::new(
        dist * phi.sin() * theta.cos(),
        dist * phi.sin() * theta.sin(),
        dist * phi.cos(),
    )
}

/// Implicit heart surface in unit space, y up. Inside or on the surface iff <= 0.
#[inline]
pub fn heart_implicit(p: Vec3) -> f32 {
    let (x2, y3, z2) = (p.x * p.x, p.y * p.y * p.y, p.z * p.z);
    let a = x2 + 2.25 * z2 + p.y * p.y - 1.0;
    a * a * a - x2 * y3 - 0.1125 * z2 * y3
}

/// Whether a scaled point lies inside a heart of the given scale.
#[inline]
pub fn is_inside_heart(point: Vec3, scale: f32) -> bool {
    heart_implicit(point / scale) <= 0.0
}

/// Rejection-sample a point inside the heart volume.
///
/// Bounded by [`HEART_MAX_ATTEMPTS`]; if the cap is hit the closest candidate
/// is pulled toward the origin (which is always inside) until it is valid.
pub fn sample_heart<R: Rng + ?Sized>(scale: f32, rng: &mut R) -> Vec3 {
    let mut best = Vec3::ZERO;
    let mut best_value = f32::INFINITY;
    for _ in 0..HEART_MAX_ATTEMPTS {
        let candidate = Vec3::new(
            (rng.gen::<f32>() * 2.0 - 1.0) * HEART_BOX_HALF_WIDTH,
            (rng.gen::<f32>() * 2.0 - 1.0) * HEART_BOX_HALF_WIDTH,
            (rng.gen::<f32>() * 2.0 - 1.0) * HEART_BOX_HALF_WIDTH,
        );
        let value = heart_implicit(candidate);
        if value <= 0.0 {
            return candidate * scale;
        }
        if value < best_value {
            best_value = value;
            best = candidate;
        }
    }
    log::warn!(
        "[field] heart sampling hit {} attempts; falling back to nearest valid point",
        HEART_MAX_ATTEMPTS
    );
    nearest_inside(best) * scale
}

fn nearest_inside(mut p: Vec3) -> Vec3 {
    for _ in 0..32 {
        if heart_implicit(p) <= 0.0 {
            return p;
        }
        p *= 0.5;
    }
    Vec3::ZERO
}
