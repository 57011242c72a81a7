//! Audio-to-visual mapping constants.
//!
//! Every magic number of the two pipelines lives here; `SphereConfig` and
//! `RoseConfig` start from these values.
use std::f32::consts::PI;

// ---------------- Sphere pipeline ----------------

// Analyser resolution (fftSize); 128 frequency buckets
pub const SPHERE_FFT_SIZE: u32 = 256;

// Per-tick easing of rotation toward the pointer: new = old + (target - old) * k
pub const ROTATION_EASING: f32 = 0.05;

// scale = 1 + avg / SCALE_DIVISOR (not clamped)
pub const SCALE_DIVISOR: f32 = 128.0;

// hue (0..1 turns) = avg / HUE_DIVISOR, wraps past 1
pub const HUE_DIVISOR: f32 = 256.0;
pub const SPHERE_SATURATION: f32 = 1.0;
pub const SPHERE_LIGHTNESS: f32 = 0.5;

// Field of view in degrees: base + avg * gain. Far past 180 on purpose.
pub const FOV_BASE_DEG: f32 = 750.0;
pub const FOV_PER_MAGNITUDE: f32 = 0.01;

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Wireframe mesh
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 16;

// ---------------- Rose pipeline ----------------

// Finer resolution for pitch-ish color: 1024 frequency buckets, 2048 samples
pub const ROSE_FFT_SIZE: u32 = 2048;

pub const NUM_PETALS: usize = 10;

// angle_i = (i / NUM_PETALS) * PETAL_ANGLE_SPAN * random()
pub const PETAL_ANGLE_SPAN: f32 = 20.0 * PI;

// radius/length/width = volume * random() * PETAL_EXTENT
pub const PETAL_EXTENT: f32 = 300.0;

// volume = avg / VOLUME_DIVISOR (may exceed 1)
pub const VOLUME_DIVISOR: f32 = 128.0;

// Center disk radius = volume * CENTER_DISK_GAIN
pub const CENTER_DISK_GAIN: f32 = 50.0;

// Next tick after BASE_DELAY_MS - volume * DELAY_PER_VOLUME_MS (may be <= 0)
pub const BASE_DELAY_MS: f64 = 10.0;
pub const DELAY_PER_VOLUME_MS: f64 = 900.0;

pub const PETAL_SATURATION_PCT: f32 = 100.0;
pub const PETAL_LIGHTNESS_PCT: f32 = 50.0;
pub const CENTER_LIGHTNESS_PCT: f32 = 70.0;

// ---------------- DOM ----------------

pub const START_BUTTON_ID: &str = "start-button";
pub const ROSE_CANVAS_ID: &str = "rose-canvas";
