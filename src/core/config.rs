use crate::constants::*;

#[derive(Clone, Debug)]
pub struct SphereConfig {
    pub fft_size: u32,
    pub easing: f32,
    pub scale_divisor: f32,
    pub hue_divisor: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub fov_base_deg: f32,
    pub fov_per_magnitude: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            fft_size: SPHERE_FFT_SIZE,
            easing: ROTATION_EASING,
            scale_divisor: SCALE_DIVISOR,
            hue_divisor: HUE_DIVISOR,
            saturation: SPHERE_SATURATION,
            lightness: SPHERE_LIGHTNESS,
            fov_base_deg: FOV_BASE_DEG,
            fov_per_magnitude: FOV_PER_MAGNITUDE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RoseConfig {
    pub fft_size: u32,
    pub num_petals: usize,
    pub angle_span: f32,
    pub petal_extent: f32,
    pub volume_divisor: f32,
    pub center_disk_gain: f32,
    pub base_delay_ms: f64,
    pub delay_per_volume_ms: f64,
}

impl Default for RoseConfig {
    fn default() -> Self {
        Self {
            fft_size: ROSE_FFT_SIZE,
            num_petals: NUM_PETALS,
            angle_span: PETAL_ANGLE_SPAN,
            petal_extent: PETAL_EXTENT,
            volume_divisor: VOLUME_DIVISOR,
            center_disk_gain: CENTER_DISK_GAIN,
            base_delay_ms: BASE_DELAY_MS,
            delay_per_volume_ms: DELAY_PER_VOLUME_MS,
        }
    }
}
