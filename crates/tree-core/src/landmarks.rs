//! Hand landmark sets as produced by the detector.
//!
//! Indices follow the detector's anatomical ordering; the ones used by the
//! classifier are named below and must not be renumbered.

use crate::error::LandmarkError;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// The detector reports at most two hands per frame.
pub type Hands = SmallVec<[HandLandmarks; 2]>;

/// One detected hand: 21 normalized keypoints.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Build from exactly 21 finite points.
    pub fn from_points(points: &[Vec3]) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongCount {
                expected: LANDMARK_COUNT,
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(LandmarkError::NonFinite { index });
        }
        let mut out = [Vec3::ZERO; LANDMARK_COUNT];
        out.copy_from_slice(points);
        Ok(Self { points: out })
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    /// Image-plane position of a keypoint; depth is ignored by the classifier.
    #[inline]
    pub fn planar(&self, index: usize) -> Vec2 {
        self.points[index].truncate()
    }

    #[inline]
    pub fn planar_distance(&self, a: usize, b: usize) -> f32 {
        self.planar(a).distance(self.planar(b))
    }

    /// Wrist to index knuckle; a proxy for palm size and camera distance.
    #[inline]
    pub fn palm_size(&self) -> f32 {
        self.planar_distance(WRIST, INDEX_MCP)
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

/// Convert raw per-hand point lists into a frame of hands.
///
/// A frame with any malformed hand is treated as having no hands at all.
pub fn parse_hands<P: AsRef<[Vec3]>>(raw: &[P]) -> Hands {
    let mut hands = Hands::new();
    for points in raw {
        match HandLandmarks::from_points(points.as_ref()) {
            Ok(hand) => hands.push(hand),
            Err(e) => {
                log::debug!("[gesture] dropping frame: {}", e);
                return Hands::new();
            }
        }
    }
    hands
}
