//! Morph engine: eases every particle toward its tree, starfield or heart
//! target and recomputes its color once per tick.
//!
//! A single smoothed scalar, growth, drives the tree/starfield split. The
//! formation front sits at `growth * FRONT_OVERSHOOT` in normalized id space:
//! particles below it are formed, the rest stay in the starfield. As growth
//! eases toward its target the front sweeps through the field, so the tree
//! assembles bottom-up and dissolves top-down.

use crate::constants::*;
use crate::field::Particle;
use crate::gesture::GestureState;
use crate::interaction::{DeltaAxis, ManipulationDelta};
use crate::palette;
use glam::Vec3;
use std::f32::consts::PI;

/// What happened during one [`MorphEngine::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AdvanceOutcome {
    /// Closed-to-open transition on a mostly formed field; fire the burst.
    pub burst: bool,
    pub growth: f32,
}

/// Owns the live position/color buffers for a fixed set of particles.
pub struct MorphEngine {
    particles: Vec<Particle>,
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    sizes: Vec<f32>,
    growth: f32,
    rotation_y: f32,
    previous_state: GestureState,
}

impl MorphEngine {
    /// Start as a finished tree: every particle on its tree target and
    /// growth at 1.
    pub fn new(particles: Vec<Particle>) -> Self {
        let positions = particles.iter().map(|p| p.tree.to_array()).collect();
        let colors = particles
            .iter()
            .map(|p| palette::base_color(p.visual).to_array())
            .collect();
        let sizes = particles.iter().map(|p| p.size).collect();
        Self {
            particles,
            positions,
            colors,
            sizes,
            growth: 1.0,
            rotation_y: 0.0,
            previous_state: GestureState::Idle,
        }
    }

    /// Advance one tick under `state` at elapsed time `t` (seconds).
    ///
    /// Drains the rotation axis of `channel` at most once.
    pub fn advance(
        &mut self,
        state: GestureState,
        t: f32,
        channel: &mut ManipulationDelta,
    ) -> AdvanceOutcome {
        let burst = self.previous_state == GestureState::HandClosed
            && state == GestureState::HandOpen
            && self.growth > BURST_TRIGGER_MIN_GROWTH;
        if self.previous_state != state {
            log::debug!(
                "[morph] {} -> {} at growth {:.2}",
                self.previous_state.as_str(),
                state.as_str(),
                self.growth
            );
        }
        self.previous_state = state;

        let rate = if state == GestureState::HandClosed {
            GROWTH_RATE_ASSEMBLE
        } else {
            GROWTH_RATE_DEFAULT
        };
        self.growth += (state.target_growth() - self.growth) * rate;

        let threshold = self.growth * FRONT_OVERSHOOT;
        let snap = spiral_strength(self.growth);
        let count = self.particles.len() as f32;

        for (i, particle) in self.particles.iter().enumerate() {
            let height = particle.id as f32 / count;
            let front = FrontPosition {
                formed: height < threshold,
                distance: threshold - height,
            };
            let (target, blend) = target_position(particle, state, front, t, snap);
            let next = Vec3::from(self.positions[i]).lerp(target, blend);
            self.positions[i] = next.to_array();
            self.colors[i] = particle_color(particle, state, front, t, next.y).to_array();
        }

        self.rotation_y += match state {
            GestureState::HandOpen => SPIN_EXPLODING,
            _ => match channel.drain(DeltaAxis::Rotation, DELTA_DECAY) {
                Some(delta) => delta * ROTATION_APPLY_FRACTION,
                None if state == GestureState::HeartShape => SPIN_HEART,
                None => SPIN_IDLE,
            },
        };

        AdvanceOutcome {
            burst,
            growth: self.growth,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Packed `x, y, z` per particle, in field space (before `rotation_y`).
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Packed `r, g, b` per particle; values above 1 are intentional glow.
    pub fn colors(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    #[inline]
    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from(self.positions[index])
    }

    #[inline]
    pub fn color(&self, index: usize) -> Vec3 {
        Vec3::from(self.colors[index])
    }

    pub fn growth(&self) -> f32 {
        self.growth
    }

    /// Override growth, e.g. to restore a scene or to stage a test.
    pub fn set_growth(&mut self, growth: f32) {
        self.growth = growth.clamp(0.0, 1.0);
    }

    /// Whole-field spin about the vertical axis, radians.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn add_rotation(&mut self, radians: f32) {
        self.rotation_y += radians;
    }

    pub fn previous_state(&self) -> GestureState {
        self.previous_state
    }
}

#[derive(Clone, Copy, Debug)]
struct FrontPosition {
    formed: bool,
    /// Threshold minus normalized height; positive once formed.
    distance: f32,
}

/// Spiral snap strength: full while the front is sweeping, fading to zero as
/// growth settles so the finished tree rests on its exact targets.
#[inline]
fn spiral_strength(growth: f32) -> f32 {
    ((GROWTH_SETTLED - growth) / (GROWTH_SETTLED - SPIRAL_FADE_START)).clamp(0.0, 1.0)
}

fn target_position(
    particle: &Particle,
    state: GestureState,
    front: FrontPosition,
    t: f32,
    snap: f32,
) -> (Vec3, f32) {
    let phase = particle.id as f32;
    if state == GestureState::HeartShape {
        let pulse = 1.0 + (t * HEART_PULSE_FREQ).sin() * HEART_PULSE_AMPLITUDE;
        return (particle.heart * pulse, BLEND_MORPH);
    }
    if !front.formed {
        let drift = Vec3::new(
            (t * DRIFT_FREQ_X + phase * DRIFT_PHASE_PER_ID).cos(),
            0.0,
            (t * DRIFT_FREQ_Z + phase * DRIFT_PHASE_PER_ID).sin(),
        ) * DRIFT_AMPLITUDE;
        return (particle.exploded + drift, BLEND_MORPH);
    }

    let mut target = particle.tree;
    if state == GestureState::HandClosed && front.distance < SPIRAL_SNAP_WINDOW && snap > 0.0 {
        let angle = front.distance * PI * SPIRAL_SNAP_TURNS * snap;
        let (sin, cos) = angle.sin_cos();
        target = Vec3::new(
            target.x * cos - target.z * sin,
            target.y,
            target.x * sin + target.z * cos,
        );
    }
    target.y += (t * TREE_BOB_FREQ + phase).sin() * TREE_BOB_AMPLITUDE;
    (target, BLEND_TREE)
}

fn particle_color(
    particle: &Particle,
    state: GestureState,
    front: FrontPosition,
    t: f32,
    y: f32,
) -> Vec3 {
    if state == GestureState::HeartShape {
        return palette::heart_color(y, t, particle.id);
    }
    let color = palette::pulse_color(particle.visual, t, particle.id);
    match state {
        GestureState::HandClosed if front.formed => {
            if (0.0..CONSTRUCTION_EDGE_WIDTH).contains(&front.distance) {
                palette::construction_color(1.0 - front.distance / CONSTRUCTION_EDGE_WIDTH)
            } else {
                color
            }
        }
        GestureState::HandOpen => color * EXPLODE_BRIGHTEN,
        _ => color,
    }
}

/// Golden star at the apex, shown only on a finished tree.
#[derive(Clone, Debug, Default)]
pub struct ApexStar {
    scale: f32,
}

impl ApexStar {
    pub fn update(&mut self, state: GestureState, growth: f32) {
        let target = if state == GestureState::HandClosed && growth > STAR_SHOW_GROWTH {
            STAR_SCALE
        } else {
            0.0
        };
        self.scale += (target - self.scale) * STAR_SMOOTHING;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn position(&self) -> Vec3 {
        tree_apex()
    }
}
