use super::color::hsl_to_srgb;
use super::config::SphereConfig;
use super::features::FeatureSet;
use crate::input::PointerState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpherePhase {
    /// Waiting for the start gesture / microphone.
    Idle,
    /// Microphone granted, no frame drawn yet.
    Armed,
    /// Ticking every frame until the page goes away.
    Running,
}

/// Everything the renderer needs for one sphere frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereVisuals {
    pub scale: f32,
    /// Hue in turns; may lie outside `[0, 1]` and wraps when converted.
    pub hue: f32,
    /// Gamma-encoded sRGB, as CSS `hsl()` would show it.
    pub color: [f32; 3],
    pub fov_degrees: f32,
    /// x follows pointer y, y follows pointer x.
    pub rotation: Vec2,
}

pub struct SphereState {
    pub phase: SpherePhase,
    pub rotation: Vec2,
    config: SphereConfig,
}

impl SphereState {
    pub fn new(config: SphereConfig) -> Self {
        Self {
            phase: SpherePhase::Idle,
            rotation: Vec2::ZERO,
            config,
        }
    }

    /// Microphone granted.
    pub fn arm(&mut self) {
        if self.phase == SpherePhase::Idle {
            self.phase = SpherePhase::Armed;
        }
    }

    /// Advance one frame from the latest frequency snapshot and pointer.
    /// Returns `None` while still idle.
    pub fn tick(&mut self, frequency: &[u8], pointer: PointerState) -> Option<SphereVisuals> {
        match self.phase {
            SpherePhase::Idle => return None,
            SpherePhase::Armed => {
                log::info!("[sphere] first frame");
                self.phase = SpherePhase::Running;
            }
            SpherePhase::Running => {}
        }
        let features = FeatureSet::loudness(frequency);
        let target = Vec2::new(pointer.y, pointer.x);
        self.rotation = ease_toward(self.rotation, target, self.config.easing);
        Some(self.visuals_for(features.average))
    }

    fn visuals_for(&self, average: f32) -> SphereVisuals {
        let c = &self.config;
        let hue = average / c.hue_divisor;
        SphereVisuals {
            scale: 1.0 + average / c.scale_divisor,
            hue,
            color: hsl_to_srgb(hue, c.saturation, c.lightness),
            fov_degrees: c.fov_base_deg + average * c.fov_per_magnitude,
            rotation: self.rotation,
        }
    }
}

/// One step of first-order exponential smoothing: `old + (target - old) * k`.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, k: f32) -> Vec2 {
    current + (target - current) * k
}
