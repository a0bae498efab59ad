//! Manipulation delta channel shared by the classifier and its consumers.
//!
//! Writers (gesture classifier, pointer drag, wheel) only ever add. Each
//! consumer drains one axis per tick: it reads the accumulated value and
//! decays it by a constant factor, leaving a remainder so motion coasts to a
//! stop instead of halting. A second drain of the same axis within one tick is
//! refused, so two consumers can never double-decay an axis.

use crate::constants::DELTA_DEAD_ZONE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaAxis {
    Rotation,
    Zoom,
}

#[derive(Clone, Debug, Default)]
pub struct ManipulationDelta {
    rotation: f32,
    zoom: f32,
    rotation_drained: bool,
    zoom_drained: bool,
}

impl ManipulationDelta {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push_rotation(&mut self, delta: f32) {
        self.rotation += delta;
    }

    #[inline]
    pub fn push_zoom(&mut self, delta: f32) {
        self.zoom += delta;
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Re-arm both axes for a new simulation tick.
    pub fn begin_tick(&mut self) {
        self.rotation_drained = false;
        self.zoom_drained = false;
    }

    /// Read an axis and decay it by `decay`.
    ///
    /// Returns `None` when the axis sits inside the dead zone (left untouched)
    /// or was already drained this tick.
    pub fn drain(&mut self, axis: DeltaAxis, decay: f32) -> Option<f32> {
        let (value, drained) = match axis {
            DeltaAxis::Rotation => (&mut self.rotation, &mut self.rotation_drained),
            DeltaAxis::Zoom => (&mut self.zoom, &mut self.zoom_drained),
        };
        if *drained || value.abs() <= DELTA_DEAD_ZONE {
            return None;
        }
        *drained = true;
        let current = *value;
        *value *= decay;
        Some(current)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
