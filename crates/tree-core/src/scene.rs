//! The whole simulation behind one owner.
//!
//! Frontends push input (hands, pointer, explicit gestures) between frames
//! and call [`Scene::tick`] once per frame. Tick order is fixed: re-arm the
//! delta channel, advance the morph, fire/step the burst, update the star,
//! then update the camera rig.

use crate::burst::BurstPool;
use crate::constants::*;
use crate::error::FieldError;
use crate::field::generate_field;
use crate::gesture::{GestureClassifier, GestureState, GestureThresholds};
use crate::interaction::ManipulationDelta;
use crate::landmarks::HandLandmarks;
use crate::morph::{AdvanceOutcome, ApexStar, MorphEngine};
use crate::palette::{rgb_from_hex, GOLD_HEX};
use crate::render::PointInstance;
use crate::session::PointerFallback;
use crate::state::{Camera, CameraRig};
use glam::{Mat3, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Scene construction parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub particle_count: usize,
    pub burst_capacity: usize,
    /// Fixed seed for a reproducible field; `None` draws from entropy.
    pub seed: Option<u64>,
    pub thresholds: GestureThresholds,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            burst_capacity: BURST_CAPACITY,
            seed: None,
            thresholds: GestureThresholds::default(),
        }
    }
}

pub struct Scene {
    params: SceneParams,
    rng: StdRng,
    morph: MorphEngine,
    burst: BurstPool,
    star: ApexStar,
    rig: CameraRig,
    classifier: GestureClassifier,
    channel: ManipulationDelta,
    pointer: PointerFallback,
    gesture: GestureState,
}

impl Scene {
    pub fn new(params: SceneParams) -> Result<Self, FieldError> {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particles = generate_field(params.particle_count, &mut rng)?;
        let burst = BurstPool::new(params.burst_capacity, &mut rng);
        log::info!(
            "[scene] {} particles, burst pool {}, seed {:?}",
            params.particle_count,
            params.burst_capacity,
            params.seed
        );
        Ok(Self {
            classifier: GestureClassifier::new(params.thresholds.clone()),
            params,
            rng,
            morph: MorphEngine::new(particles),
            burst,
            star: ApexStar::default(),
            rig: CameraRig::default(),
            channel: ManipulationDelta::new(),
            pointer: PointerFallback::default(),
            gesture: GestureState::Idle,
        })
    }

    /// Classify one detector frame and adopt its gesture.
    pub fn ingest_hands(&mut self, hands: &[HandLandmarks]) -> GestureState {
        self.gesture = self.classifier.classify(hands, &mut self.channel).state;
        self.gesture
    }

    pub fn set_gesture(&mut self, state: GestureState) {
        self.gesture = state;
    }

    pub fn pointer_press(&mut self, x: f32) {
        self.gesture = self.pointer.press(x);
    }

    /// Release or leave.
    pub fn pointer_release(&mut self) {
        if self.pointer.is_pressed() {
            self.gesture = self.pointer.release();
        }
    }

    pub fn pointer_move(&mut self, x: f32) {
        if let Some(state) = self.pointer.move_to(x, &mut self.channel) {
            self.gesture = state;
        }
    }

    pub fn wheel(&mut self, lines: f32) {
        self.pointer.wheel(lines, &mut self.channel);
    }

    /// Drop wrist history and pending manipulation, e.g. when the
    /// detection loop restarts or input switches between hands and pointer.
    pub fn reset_input(&mut self) {
        self.classifier.reset();
        self.channel.clear();
        _ = self.pointer.release();
    }

    /// Advance one frame. `elapsed` drives animation phases, `dt` burst life.
    pub fn tick(&mut self, elapsed: f32, dt: f32) -> AdvanceOutcome {
        self.channel.begin_tick();
        let outcome = self.morph.advance(self.gesture, elapsed, &mut self.channel);
        if outcome.burst {
            self.burst.trigger(&mut self.rng);
        }
        self.burst.step(dt);
        self.star.update(self.gesture, outcome.growth);
        self.rig.update(self.gesture, &mut self.channel);
        outcome
    }

    /// Regenerate the field at a new size, keeping growth and spin.
    pub fn set_particle_count(&mut self, count: usize) -> Result<(), FieldError> {
        if count == self.morph.len() {
            return Ok(());
        }
        let particles = generate_field(count, &mut self.rng)?;
        let growth = self.morph.growth();
        let rotation = self.morph.rotation_y();
        self.morph = MorphEngine::new(particles);
        self.morph.set_growth(growth);
        self.morph.add_rotation(rotation);
        self.params.particle_count = count;
        log::info!("[scene] field regenerated with {} particles", count);
        Ok(())
    }

    /// Upper bound on what [`Scene::write_instances`] emits.
    pub fn max_instances(&self) -> usize {
        self.morph.len() + self.burst.capacity() + 1
    }

    /// Fill `out` with every visible point in world space.
    pub fn write_instances(&self, out: &mut Vec<PointInstance>) {
        out.clear();
        let spin = Mat3::from_rotation_y(self.morph.rotation_y());
        out.extend((0..self.morph.len()).map(|i| PointInstance {
            pos: (spin * self.morph.position(i)).to_array(),
            scale: self.morph.sizes()[i],
            color: self.morph.color(i).extend(1.0).to_array(),
        }));
        if self.burst.is_active() {
            let scales = self.burst.scales();
            out.extend(
                self.burst
                    .particles()
                    .iter()
                    .zip(scales)
                    .filter(|(_, s)| **s > 0.0)
                    .map(|(p, &s)| PointInstance {
                        pos: p.position.to_array(),
                        scale: s,
                        color: p.color.extend(1.0).to_array(),
                    }),
            );
        }
        if self.star.scale() > 1e-3 {
            let color: Vec3 = rgb_from_hex(GOLD_HEX) * STAR_GLOW;
            out.push(PointInstance {
                pos: (spin * self.star.position()).to_array(),
                scale: self.star.scale(),
                color: color.extend(1.0).to_array(),
            });
        }
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn morph(&self) -> &MorphEngine {
        &self.morph
    }

    pub fn morph_mut(&mut self) -> &mut MorphEngine {
        &mut self.morph
    }

    pub fn burst(&self) -> &BurstPool {
        &self.burst
    }

    pub fn star(&self) -> &ApexStar {
        &self.star
    }

    pub fn camera_rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        self.rig.camera(aspect)
    }

    pub fn channel(&self) -> &ManipulationDelta {
        &self.channel
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn pointer(&self) -> &PointerFallback {
        &self.pointer
    }
}
