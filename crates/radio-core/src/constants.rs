use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Transport / scheduling
pub const BEAT_STEP_SEC: f64 = 0.5; // 120 BPM-equivalent spacing
pub const LOOKAHEAD_SEC: f64 = 0.1; // schedule window ahead of the audio clock
pub const BEATS_PER_BAR: u64 = 4;
pub const BURST_WARN_BEATS: usize = 8; // log when one pass drains more than this

// Kick voice
pub const KICK_START_HZ: f32 = 150.0;
pub const KICK_END_HZ: f32 = 0.01;
pub const KICK_DURATION_SEC: f64 = 0.5;

// Snare voice
pub const SNARE_DURATION_SEC: f64 = 0.2;
pub const SNARE_HIGHPASS_HZ: f32 = 1000.0;

// Shared envelope levels
pub const ENVELOPE_PEAK: f32 = 1.0;
pub const ENVELOPE_FLOOR: f32 = 0.01;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 5.0, 10.0];
pub const CAMERA_LOOK_AT: [f32; 3] = [0.0, 2.0, -10.0];
pub const CAMERA_SWAY_RATE: f32 = 0.2;
pub const CAMERA_SWAY_AMPLITUDE: f32 = 2.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Character cards
pub const CARD_BASE_HEIGHT: f32 = 4.0;
pub const CARD_FLOAT_AMPLITUDE: f32 = 0.2;
pub const CARD_SPIN_RATE: f32 = 0.5;
pub const CARD_SPIN_AMPLITUDE: f32 = 0.1;
pub const CARD_WIDTH: f32 = 4.0;
pub const CARD_HEIGHT: f32 = 6.0;
pub const CARD_OPACITY: f32 = 0.8;
pub const CARD_BORDER_WIDTH: f32 = 0.08;

// Sky and fog
pub const SKY_CYCLE_RATE: f32 = 0.05;
pub const SKY_HUE_SPAN: f32 = 0.1;
pub const SKY_HUE_BASE: f32 = 0.05;
pub const SKY_SATURATION: f32 = 1.0;
pub const SKY_LIGHTNESS: f32 = 0.5;
pub const FOG_DENSITY: f32 = 0.002;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const SUN_COLOR: [f32; 3] = [1.0, 0.843, 0.0]; // 0xffd700
pub const SUN_INTENSITY: f32 = 1.0;
pub const SUN_POSITION: [f32; 3] = [10.0, 20.0, 10.0];

// Pointer parallax
pub const POINTER_TILT: f32 = 0.1; // radians at the viewport edge
pub const POINTER_FOLLOW_SEC: f32 = 1.0;

// Palette
pub const GROUND_COLOR: [f32; 3] = [0.133, 0.133, 0.133]; // 0x222222
pub const GRID_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
pub const BUILDING_COLOR: [f32; 3] = [0.067, 0.067, 0.067]; // 0x111111
pub const TRUNK_COLOR: [f32; 3] = [0.290, 0.235, 0.192]; // 0x4a3c31
pub const LEAF_COLOR: [f32; 3] = [0.165, 0.424, 0.204]; // 0x2a6c34
pub const BORDER_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_look_at_vec3() -> Vec3 {
    Vec3::from(CAMERA_LOOK_AT)
}
