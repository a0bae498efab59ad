//! Burst effect: a fixed pool of short-lived sparks thrown from the apex when
//! an assembled tree is blown apart.
//!
//! The pool is allocated once. A trigger revives every slot; dead slots keep
//! their memory and report zero scale until the next trigger.

use crate::constants::*;
use crate::palette::{rgb_from_hex, BURST_COLORS_HEX};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct BurstParticle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub remaining_life: f32,
    pub max_life: f32,
    pub color: Vec3,
}

impl BurstParticle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0.0
    }
}

pub struct BurstPool {
    particles: Vec<BurstParticle>,
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    scales: Vec<f32>,
    active: bool,
}

impl BurstPool {
    /// Allocate `capacity` inactive particles; lifetimes are drawn once here.
    pub fn new<R: Rng + ?Sized>(capacity: usize, rng: &mut R) -> Self {
        let particles = (0..capacity)
            .map(|_| BurstParticle {
                position: tree_apex(),
                velocity: Vec3::ZERO,
                remaining_life: 0.0,
                max_life: rng.gen::<f32>() * BURST_LIFE_SPAN + BURST_LIFE_MIN,
                color: Vec3::ONE,
            })
            .collect::<Vec<_>>();
        Self {
            positions: vec![tree_apex().to_array(); capacity],
            colors: vec![[1.0; 3]; capacity],
            scales: vec![0.0; capacity],
            particles,
            active: false,
        }
    }

    /// Revive the whole pool at the apex with fresh outward velocities.
    pub fn trigger<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in &mut self.particles {
            let dir = Vec3::new(
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5 + BURST_UPWARD_BIAS,
                rng.gen::<f32>() - 0.5,
            )
            .try_normalize()
            .unwrap_or(Vec3::Y);
            p.position = tree_apex();
            p.velocity = dir * (rng.gen::<f32>() * BURST_SPEED_SPAN + BURST_SPEED_MIN);
            p.remaining_life = p.max_life;
            let pick = rng.gen::<f32>();
            let hex = if pick > 0.66 {
                BURST_COLORS_HEX[0]
            } else if pick > 0.33 {
                BURST_COLORS_HEX[1]
            } else {
                BURST_COLORS_HEX[2]
            };
            p.color = rgb_from_hex(hex);
        }
        self.active = true;
        log::info!("[burst] triggered {} particles", self.particles.len());
    }

    /// Integrate live particles by one tick and refresh the render buffers.
    pub fn step(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        let mut alive = 0usize;
        for (i, p) in self.particles.iter_mut().enumerate() {
            if p.is_alive() {
                p.position += p.velocity;
                p.velocity.y -= BURST_GRAVITY;
                p.velocity *= BURST_DRAG;
                p.remaining_life -= dt;
            }
            if p.is_alive() {
                alive += 1;
                self.scales[i] = (p.remaining_life / p.max_life) * BURST_SCALE;
            } else {
                self.scales[i] = 0.0;
            }
            self.positions[i] = p.position.to_array();
            self.colors[i] = p.color.to_array();
        }
        if alive == 0 {
            self.active = false;
            log::debug!("[burst] pool drained");
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn alive_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_alive()).count()
    }

    pub fn particles(&self) -> &[BurstParticle] {
        &self.particles
    }

    /// Longest lifetime in the pool; after this much elapsed time without a
    /// new trigger every slot is dead.
    pub fn max_lifetime(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| p.max_life)
            .fold(0.0, f32::max)
    }

    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn colors(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Render scale per slot; zero for dead slots.
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }
}
