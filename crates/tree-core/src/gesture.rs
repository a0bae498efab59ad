//! Gesture classification from hand landmarks.
//!
//! Per frame:
//!
//! 1. No hands: calm (`HandClosed`), history cleared.
//! 2. Two hands with index tips and thumb tips touching: `HeartShape`.
//! 3. Any hand whose fingertips reach far past its palm: `HandOpen`.
//! 4. Otherwise `HandClosed`, and the first hand's wrist motion becomes
//!    rotation (horizontal travel) and zoom (apparent palm size change).
//!
//! Only `HandClosed` keeps wrist history; every other outcome clears it so
//! manipulation restarts from scratch.

use crate::constants::*;
use crate::interaction::ManipulationDelta;
use crate::landmarks::{HandLandmarks, FINGERTIPS, INDEX_TIP, THUMB_TIP, WRIST};

/// Discrete gesture driving target selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    #[default]
    Idle,
    /// Explode the field.
    HandOpen,
    /// Assemble the tree and manipulate it.
    HandClosed,
    /// Form the heart.
    HeartShape,
}

impl GestureState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::HandOpen => "hand-open",
            Self::HandClosed => "hand-closed",
            Self::HeartShape => "heart",
        }
    }

    /// Growth value the morph engine eases toward in this state.
    #[inline]
    pub fn target_growth(self) -> f32 {
        match self {
            Self::HandClosed | Self::HeartShape => 1.0,
            Self::HandOpen | Self::Idle => 0.0,
        }
    }
}

/// Classifier thresholds; recalibrate per camera setup.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureThresholds {
    pub open_ratio: f32,
    pub heart_index_max: f32,
    pub heart_thumb_max: f32,
    pub rotation_gain: f32,
    pub zoom_gain: f32,
    pub palm_size_floor: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            open_ratio: OPEN_HAND_RATIO,
            heart_index_max: HEART_INDEX_TIP_MAX_DIST,
            heart_thumb_max: HEART_THUMB_TIP_MAX_DIST,
            rotation_gain: ROTATION_GAIN,
            zoom_gain: ZOOM_GAIN,
            palm_size_floor: PALM_SIZE_FLOOR,
        }
    }
}

/// Primary-hand wrist sample kept between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WristState {
    pub x: f32,
    pub size: f32,
}

impl WristState {
    pub fn of(hand: &HandLandmarks) -> Self {
        Self {
            x: hand.point(WRIST).x,
            size: hand.palm_size(),
        }
    }
}

/// Manipulation produced by one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameDelta {
    pub rotation: f32,
    pub zoom: f32,
}

/// Result of classifying one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub state: GestureState,
    /// Present only when manipulating with history from the previous frame.
    pub delta: Option<FrameDelta>,
    /// Wrist history to carry into the next frame.
    pub wrist: Option<WristState>,
}

/// Mean wrist-to-fingertip distance over palm size.
pub fn openness_ratio(hand: &HandLandmarks, palm_size_floor: f32) -> f32 {
    let reach = FINGERTIPS
        .iter()
        .map(|&tip| hand.planar_distance(WRIST, tip))
        .sum::<f32>()
        / FINGERTIPS.len() as f32;
    reach / hand.palm_size().max(palm_size_floor)
}

/// Two hands touching index tips and thumb tips.
pub fn is_heart_pair(a: &HandLandmarks, b: &HandLandmarks, thresholds: &GestureThresholds) -> bool {
    let index = a.planar(INDEX_TIP).distance(b.planar(INDEX_TIP));
    let thumb = a.planar(THUMB_TIP).distance(b.planar(THUMB_TIP));
    index < thresholds.heart_index_max && thumb < thresholds.heart_thumb_max
}

/// Classify one frame given the previous frame's wrist history.
pub fn classify_frame(
    hands: &[HandLandmarks],
    previous: Option<WristState>,
    thresholds: &GestureThresholds,
) -> Classification {
    let primary = match hands.first() {
        Some(hand) => hand,
        None => {
            return Classification {
                state: GestureState::HandClosed,
                delta: None,
                wrist: None,
            }
        }
    };

    if let [a, b] = hands {
        if is_heart_pair(a, b, thresholds) {
            return Classification {
                state: GestureState::HeartShape,
                delta: None,
                wrist: None,
            };
        }
    }

    let any_open = hands
        .iter()
        .any(|h| openness_ratio(h, thresholds.palm_size_floor) > thresholds.open_ratio);
    if any_open {
        return Classification {
            state: GestureState::HandOpen,
            delta: None,
            wrist: None,
        };
    }

    let current = WristState::of(primary);
    let delta = previous.map(|prev| FrameDelta {
        rotation: (current.x - prev.x) * thresholds.rotation_gain,
        zoom: (current.size - prev.size) * thresholds.zoom_gain,
    });
    Classification {
        state: GestureState::HandClosed,
        delta,
        wrist: Some(current),
    }
}

/// Stateful classifier: owns the one frame of wrist history and writes
/// manipulation into the shared delta channel.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    pub thresholds: GestureThresholds,
    previous_wrist: Option<WristState>,
    last_state: Option<GestureState>,
}

impl GestureClassifier {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            previous_wrist: None,
            last_state: None,
        }
    }

    pub fn classify(
        &mut self,
        hands: &[HandLandmarks],
        channel: &mut ManipulationDelta,
    ) -> Classification {
        let result = classify_frame(hands, self.previous_wrist, &self.thresholds);
        self.previous_wrist = result.wrist;
        if let Some(d) = result.delta {
            channel.push_rotation(d.rotation);
            channel.push_zoom(d.zoom);
        }
        if self.last_state != Some(result.state) {
            log::info!(
                "[gesture] {} (hands={})",
                result.state.as_str(),
                hands.len()
            );
            self.last_state = Some(result.state);
        }
        result
    }

    pub fn previous_wrist(&self) -> Option<WristState> {
        self.previous_wrist
    }

    /// Forget history, e.g. when the detection loop restarts.
    pub fn reset(&mut self) {
        self.previous_wrist = None;
        self.last_state = None;
    }
}
