//! View-side state shared with the frontends: the camera description and the
//! rig that turns zoom gestures into a smoothed viewing distance.
//!
//! Nothing here touches platform APIs, so native and web build their view
//! matrices from the same values.

use crate::constants::*;
use crate::gesture::GestureState;
use crate::interaction::{DeltaAxis, ManipulationDelta};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Smoothed camera distance along +Z, driven by the zoom axis.
#[derive(Clone, Debug)]
pub struct CameraRig {
    distance: f32,
    target_distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            distance: CAMERA_START_DISTANCE,
            target_distance: CAMERA_START_DISTANCE,
        }
    }
}

impl CameraRig {
    /// Drain zoom (only while manipulating) and ease toward the target distance.
    ///
    /// A positive zoom delta means the palm grew, i.e. the hand came closer,
    /// which pulls the camera in.
    pub fn update(&mut self, state: GestureState, channel: &mut ManipulationDelta) {
        if state == GestureState::HandClosed {
            if let Some(zoom) = channel.drain(DeltaAxis::Zoom, DELTA_DECAY) {
                self.target_distance = (self.target_distance - zoom * CAMERA_ZOOM_GAIN)
                    .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
            }
        }
        self.distance += (self.target_distance - self.distance) * CAMERA_SMOOTHING;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, self.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 200.0,
        }
    }
}
