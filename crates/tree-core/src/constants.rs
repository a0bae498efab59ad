use glam::Vec3;

// Shared shape/motion tuning constants used by the core and both frontends.

// Tree cone
pub const TREE_HEIGHT: f32 = 15.0;
pub const TREE_RADIUS: f32 = 4.5;
pub const TREE_RADIUS_FALLOFF: f32 = 1.2; // exponent on (1 - p); >1 thins the tip
pub const TREE_SPIRAL_TURNS_RAD: f32 = 65.0; // azimuth at the apex
pub const TREE_RADIUS_JITTER: f32 = 0.3; // full width, so +-0.15

// Exploded starfield shell
pub const EXPLODED_MIN_DIST: f32 = 12.0;
pub const EXPLODED_MAX_DIST: f32 = 30.0;

// Heart volume
pub const HEART_SCALE: f32 = 8.0;
pub const HEART_BOX_HALF_WIDTH: f32 = 1.5; // in unit-heart space, multiplied by HEART_SCALE
pub const HEART_MAX_ATTEMPTS: u32 = 4096;

// Per-particle render size range
pub const PARTICLE_SIZE_MIN: f32 = 0.05;
pub const PARTICLE_SIZE_SPAN: f32 = 0.15;

// Visual type cutoffs on r ~ U(0,1)
pub const WHITE_CUTOFF: f32 = 0.95;
pub const GOLD_CUTOFF: f32 = 0.80;
pub const BERRY_CUTOFF: f32 = 0.60;

// Gesture classification (normalized detector coordinates)
pub const OPEN_HAND_RATIO: f32 = 1.4;
pub const HEART_INDEX_TIP_MAX_DIST: f32 = 0.10;
pub const HEART_THUMB_TIP_MAX_DIST: f32 = 0.15;
pub const ROTATION_GAIN: f32 = 10.0; // wrist dx -> rotation delta
pub const ZOOM_GAIN: f32 = 60.0; // palm size change -> zoom delta
pub const PALM_SIZE_FLOOR: f32 = 1e-3; // keeps the openness ratio finite

// Growth smoothing (per tick)
pub const GROWTH_RATE_ASSEMBLE: f32 = 0.04; // slow, dramatic tree assembly
pub const GROWTH_RATE_DEFAULT: f32 = 0.08; // explode / heart transitions
pub const FRONT_OVERSHOOT: f32 = 1.1; // lets the front pass the last particle
pub const GROWTH_SETTLED: f32 = 0.99;

// Formation front effects
pub const SPIRAL_SNAP_WINDOW: f32 = 0.25;
pub const SPIRAL_SNAP_TURNS: f32 = 12.0; // angle = dist * PI * turns
pub const SPIRAL_FADE_START: f32 = 0.90; // snap strength fades out between here and GROWTH_SETTLED
pub const CONSTRUCTION_EDGE_WIDTH: f32 = 0.15;
pub const CONSTRUCTION_EDGE_GAIN: f32 = 5.0;

// Position blending (per tick)
pub const BLEND_TREE: f32 = 0.15;
pub const BLEND_MORPH: f32 = 0.08; // heart and exploded targets

// Target animation
pub const HEART_PULSE_FREQ: f32 = 3.0;
pub const HEART_PULSE_AMPLITUDE: f32 = 0.05;
pub const DRIFT_AMPLITUDE: f32 = 1.2;
pub const DRIFT_FREQ_X: f32 = 0.3;
pub const DRIFT_FREQ_Z: f32 = 0.5;
pub const DRIFT_PHASE_PER_ID: f32 = 0.1;
pub const TREE_BOB_AMPLITUDE: f32 = 0.04;
pub const TREE_BOB_FREQ: f32 = 2.0;

// Color dynamics
pub const HEART_HUE_BASE: f32 = 0.95;
pub const HEART_HUE_SPAN: f32 = 0.05;
pub const HEART_HEIGHT_OFFSET: f32 = 8.0; // maps heart y in [-8, 8] to [0, 1]
pub const HEART_LIGHTNESS: f32 = 0.5;
pub const HEART_LIGHTNESS_PULSE: f32 = 0.2;
pub const HEART_LIGHTNESS_FREQ: f32 = 4.0;
pub const HEART_GLOW: f32 = 2.0;
pub const EXPLODE_BRIGHTEN: f32 = 1.5;

// Field rotation (radians per tick)
pub const SPIN_EXPLODING: f32 = 0.0005;
pub const SPIN_IDLE: f32 = 0.0015;
pub const SPIN_HEART: f32 = 0.005;
pub const ROTATION_APPLY_FRACTION: f32 = 0.15;
pub const DELTA_DECAY: f32 = 0.90; // accumulator decay per consumer per tick
pub const DELTA_DEAD_ZONE: f32 = 0.001;

// Burst pool
pub const BURST_CAPACITY: usize = 300;
pub const BURST_TRIGGER_MIN_GROWTH: f32 = 0.5;
pub const BURST_SPEED_MIN: f32 = 0.4;
pub const BURST_SPEED_SPAN: f32 = 0.8;
pub const BURST_UPWARD_BIAS: f32 = 0.5;
pub const BURST_GRAVITY: f32 = 0.02; // per tick
pub const BURST_DRAG: f32 = 0.98; // velocity multiplier per tick
pub const BURST_LIFE_MIN: f32 = 0.5;
pub const BURST_LIFE_SPAN: f32 = 1.5;
pub const BURST_SCALE: f32 = 0.4;

// Apex star
pub const STAR_SCALE: f32 = 1.4;
pub const STAR_SHOW_GROWTH: f32 = 0.96;
pub const STAR_SMOOTHING: f32 = 0.1;

// Camera rig
pub const CAMERA_START_DISTANCE: f32 = 22.0;
pub const CAMERA_MIN_DISTANCE: f32 = 10.0;
pub const CAMERA_MAX_DISTANCE: f32 = 40.0;
pub const CAMERA_ZOOM_GAIN: f32 = 0.5;
pub const CAMERA_SMOOTHING: f32 = 0.05;
pub const CAMERA_FOVY_DEG: f32 = 40.0;

// Pointer fallback
pub const DRAG_ROTATION_PER_PX: f32 = 0.005;
pub const WHEEL_ZOOM_PER_LINE: f32 = 0.05;
pub const DRAG_SLOP_PX: f32 = 8.0; // travel before a press becomes a drag

// Video capture request
pub const VIDEO_WIDTH: u32 = 640;
pub const VIDEO_HEIGHT: u32 = 480;

// Scene defaults
pub const DEFAULT_PARTICLE_COUNT: usize = 6000;
pub const STAR_GLOW: f32 = 2.0; // star color gain over gold
pub const BACKGROUND_RGB: [f64; 3] = [0.0, 0.0, 0.0];

/// Point where the burst is emitted and the star sits: the top of the cone.
#[inline]
pub fn tree_apex() -> Vec3 {
    Vec3::new(0.0, TREE_HEIGHT * 0.5, 0.0)
}
