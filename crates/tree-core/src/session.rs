//! Session control: which inputs are live, whether the camera and detector
//! are usable, and the detection schedule.
//!
//! Frontends feed events in (toggles, detector load result, camera
//! permission) and act on the returned [`SessionCommand`]. Every failure
//! lands in a degraded but usable mode; nothing here is fatal.

use crate::constants::*;
use crate::gesture::GestureState;
use crate::interaction::ManipulationDelta;

/// Hand detector lifecycle. `Unavailable` is terminal for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetectorStatus {
    #[default]
    Loading,
    Ready,
    Unavailable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraStatus {
    #[default]
    Off,
    Requesting,
    Available,
    Unavailable,
}

/// Identifies one run of the detection loop. Stopping the loop invalidates
/// every handle issued before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleHandle(u64);

#[derive(Clone, Debug, Default)]
pub struct DetectionSchedule {
    generation: u64,
    running: bool,
    last_video_time: Option<f64>,
}

impl DetectionSchedule {
    pub fn start(&mut self) -> ScheduleHandle {
        self.generation += 1;
        self.running = true;
        self.last_video_time = None;
        ScheduleHandle(self.generation)
    }

    pub fn stop(&mut self) {
        if self.running {
            self.generation += 1;
            self.running = false;
            self.last_video_time = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_current(&self, handle: ScheduleHandle) -> bool {
        self.running && handle.0 == self.generation
    }

    /// Whether the video frame at `video_time` should be sent to the detector.
    ///
    /// Refuses stale handles and frames the video pipeline is re-presenting.
    pub fn accept_frame(&mut self, handle: ScheduleHandle, video_time: f64) -> bool {
        if !self.is_current(handle) || self.last_video_time == Some(video_time) {
            return false;
        }
        self.last_video_time = Some(video_time);
        true
    }
}

/// Side effect a frontend must perform after a session change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    None,
    /// Request the camera and start the detection loop under this handle.
    AcquireCamera(ScheduleHandle),
    /// Stop the detection loop and release the camera now.
    ReleaseCamera,
}

/// Status line shown by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLabel {
    Loading,
    Active,
    NoCamera,
    Disabled,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "Rendering...",
            Self::Active => "Active",
            Self::NoCamera => "No Camera",
            Self::Disabled => "Disabled",
        }
    }
}

/// Instruction line for the current gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureHint {
    Exploding,
    Heart,
    GestureInstructions,
    DragInstructions,
}

impl GestureHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exploding => "Deconstructing",
            Self::Heart => "With Love",
            Self::GestureInstructions => "Open hand to deconstruct. Fist to rotate and zoom.",
            Self::DragInstructions => "Drag to rotate this structure.",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    started: bool,
    gesture_enabled: bool,
    detector: DetectorStatus,
    camera: CameraStatus,
    schedule: DetectionSchedule,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_started(&mut self, started: bool) -> SessionCommand {
        self.started = started;
        self.reconcile()
    }

    pub fn set_gesture_enabled(&mut self, enabled: bool) -> SessionCommand {
        self.gesture_enabled = enabled;
        self.reconcile()
    }

    pub fn detector_ready(&mut self) -> SessionCommand {
        if self.detector == DetectorStatus::Loading {
            self.detector = DetectorStatus::Ready;
            log::info!("[detect] hand detector ready");
        }
        self.reconcile()
    }

    /// Detector could not load; gesture control stays unavailable.
    pub fn detector_failed(&mut self) -> SessionCommand {
        self.detector = DetectorStatus::Unavailable;
        log::warn!("[detect] hand detector unavailable for this session");
        self.reconcile()
    }

    /// Camera stream arrived. Returns `false` if the request belongs to a
    /// stopped run; the caller must release the stream immediately.
    pub fn camera_granted(&mut self, handle: ScheduleHandle) -> bool {
        if !self.schedule.is_current(handle) {
            return false;
        }
        self.camera = CameraStatus::Available;
        log::info!("[camera] stream active");
        true
    }

    pub fn camera_denied(&mut self, handle: ScheduleHandle) {
        if self.schedule.is_current(handle) {
            self.camera = CameraStatus::Unavailable;
            self.schedule.stop();
            log::warn!("[camera] unavailable; pointer control remains active");
        }
    }

    fn wants_detection(&self) -> bool {
        self.started && self.gesture_enabled && self.detector == DetectorStatus::Ready
    }

    fn reconcile(&mut self) -> SessionCommand {
        let wants = self.wants_detection();
        let engaged = self.schedule.is_running() || self.camera == CameraStatus::Available;
        if wants && !engaged && self.camera != CameraStatus::Unavailable {
            self.camera = CameraStatus::Requesting;
            SessionCommand::AcquireCamera(self.schedule.start())
        } else if !wants && (engaged || self.camera == CameraStatus::Requesting) {
            self.schedule.stop();
            self.camera = CameraStatus::Off;
            SessionCommand::ReleaseCamera
        } else {
            if !wants && self.camera == CameraStatus::Unavailable && !self.gesture_enabled {
                // re-enabling later may try the camera again
                self.camera = CameraStatus::Off;
            }
            SessionCommand::None
        }
    }

    /// Whether hand gestures currently drive the scene. When false the
    /// pointer fallback is in charge.
    pub fn gesture_input_active(&self) -> bool {
        self.wants_detection() && self.camera == CameraStatus::Available
    }

    pub fn accept_frame(&mut self, handle: ScheduleHandle, video_time: f64) -> bool {
        self.schedule.accept_frame(handle, video_time)
    }

    pub fn is_current(&self, handle: ScheduleHandle) -> bool {
        self.schedule.is_current(handle)
    }

    pub fn is_loading(&self) -> bool {
        self.detector == DetectorStatus::Loading
    }

    pub fn detector(&self) -> DetectorStatus {
        self.detector
    }

    pub fn camera(&self) -> CameraStatus {
        self.camera
    }

    pub fn camera_available(&self) -> bool {
        self.camera == CameraStatus::Available
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn gesture_enabled(&self) -> bool {
        self.gesture_enabled
    }

    pub fn status(&self) -> StatusLabel {
        if self.is_loading() {
            StatusLabel::Loading
        } else if !self.gesture_enabled {
            StatusLabel::Disabled
        } else if self.camera_available() {
            StatusLabel::Active
        } else {
            StatusLabel::NoCamera
        }
    }

    pub fn hint(&self, gesture: GestureState) -> GestureHint {
        match gesture {
            GestureState::HandOpen => GestureHint::Exploding,
            GestureState::HeartShape => GestureHint::Heart,
            _ if self.gesture_enabled => GestureHint::GestureInstructions,
            _ => GestureHint::DragInstructions,
        }
    }
}

/// Mouse/touch stand-in for hand gestures.
///
/// Press explodes (open hand), release reassembles (closed hand). Once the
/// pointer travels past [`DRAG_SLOP_PX`] while pressed, the press becomes a
/// drag: the field reassembles and horizontal motion feeds the rotation axis.
#[derive(Clone, Debug, Default)]
pub struct PointerFallback {
    pressed_at: Option<f32>,
    last_x: f32,
    dragging: bool,
}

impl PointerFallback {
    pub fn press(&mut self, x: f32) -> GestureState {
        self.pressed_at = Some(x);
        self.last_x = x;
        self.dragging = false;
        GestureState::HandOpen
    }

    /// Release or pointer leave.
    pub fn release(&mut self) -> GestureState {
        self.pressed_at = None;
        self.dragging = false;
        GestureState::HandClosed
    }

    /// Pointer moved to `x` (pixels). Returns a new gesture state when the
    /// press turns into a drag.
    pub fn move_to(&mut self, x: f32, channel: &mut ManipulationDelta) -> Option<GestureState> {
        let origin = self.pressed_at?;
        let mut changed = None;
        if !self.dragging && (x - origin).abs() > DRAG_SLOP_PX {
            self.dragging = true;
            changed = Some(GestureState::HandClosed);
        }
        if self.dragging {
            channel.push_rotation((x - self.last_x) * DRAG_ROTATION_PER_PX);
        }
        self.last_x = x;
        changed
    }

    /// Wheel input in lines; positive zooms in.
    pub fn wheel(&self, lines: f32, channel: &mut ManipulationDelta) {
        channel.push_zoom(lines * WHEEL_ZOOM_PER_LINE);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
