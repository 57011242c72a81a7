// Host-side tests for the sphere pipeline's per-tick mapping and state machine.

mod support;

use glam::Vec2;
use mic_bloom::core::*;
use mic_bloom::input::PointerState;
use palette::{LinSrgb, Srgb};
use support::{FixedSource, RecordingScheduler};

fn running() -> SphereState {
    let mut s = SphereState::new(SphereConfig::default());
    s.arm();
    s
}

#[test]
fn phases_advance_idle_armed_running() {
    let mut s = SphereState::new(SphereConfig::default());
    assert_eq!(s.phase, SpherePhase::Idle);
    assert!(s.tick(&[0; 128], PointerState::default()).is_none());
    assert_eq!(s.phase, SpherePhase::Idle);

    s.arm();
    assert_eq!(s.phase, SpherePhase::Armed);
    assert!(s.tick(&[0; 128], PointerState::default()).is_some());
    assert_eq!(s.phase, SpherePhase::Running);

    s.arm();
    assert_eq!(s.phase, SpherePhase::Running);
}

#[test]
fn silence_gives_unit_scale_and_base_fov() {
    let mut s = running();
    let v = s.tick(&[0; 128], PointerState::default()).expect("running");
    assert_eq!(v.scale, 1.0);
    assert_eq!(v.fov_degrees, 750.0);
    assert_eq!(v.hue, 0.0);
    assert!((v.color[0] - 1.0).abs() < 1e-5);
    assert!(v.color[1].abs() < 1e-5 && v.color[2].abs() < 1e-5);
}

#[test]
fn scale_is_monotonic_in_loudness() {
    let mut prev = 0.0f32;
    for level in 0..=255u8 {
        let mut s = running();
        let v = s.tick(&[level; 128], PointerState::default()).expect("running");
        assert!(v.scale >= prev, "scale dropped at level {level}");
        assert!((v.scale - (1.0 + level as f32 / 128.0)).abs() < 1e-5);
        assert!((v.fov_degrees - (750.0 + level as f32 * 0.01)).abs() < 1e-3);
        prev = v.scale;
    }
    // Not clamped
    assert!(prev > 2.9);
}

#[test]
fn hue_is_average_over_256() {
    let mut s = running();
    let v = s.tick(&[64; 128], PointerState::default()).expect("running");
    assert!((v.hue - 0.25).abs() < 1e-6);
}

#[test]
fn in_between_hue_shows_its_css_color_on_an_srgb_surface() {
    // avg 32 -> hue 0.125 (45 deg) -> hsl(45, 100%, 50%) = rgb(255, 191, 0)
    let mut s = running();
    let v = s.tick(&[32; 128], PointerState::default()).expect("running");
    assert!((v.hue - 0.125).abs() < 1e-6);
    let [r, g, b] = v.color;
    assert!((r - 1.0).abs() < 1e-4 && (g - 0.75).abs() < 1e-4 && b.abs() < 1e-4);

    // An *Srgb surface encodes on store; feed it linear and it shows v.color.
    let [lr, lg, lb] = surface_color(v.color, true);
    assert!((lg - 0.5225).abs() < 1e-3, "linear green {lg}");
    let shown: Srgb = Srgb::from_linear(LinSrgb::new(lr, lg, lb));
    assert!((shown.red - 1.0).abs() < 1e-4);
    assert!((shown.green - 0.75).abs() < 1e-4, "green shown as {}", shown.green);
    assert!(shown.blue.abs() < 1e-4);

    // A plain Unorm surface stores as-is.
    assert_eq!(surface_color(v.color, false), v.color);
}

#[test]
fn rotation_converges_geometrically_without_overshoot() {
    let mut s = running();
    s.rotation = Vec2::new(0.3, -0.2);
    let r0 = s.rotation;
    let pointer = PointerState { x: 0.8, y: -0.4 };
    // rotation.x chases pointer.y, rotation.y chases pointer.x
    let target = Vec2::new(pointer.y, pointer.x);
    let mut prev_gap = (target - r0).abs();
    for k in 1..=60 {
        let v = s.tick(&[0; 128], pointer).expect("running");
        let expected = target - (target - r0) * 0.95f32.powi(k);
        assert!((v.rotation - expected).abs().max_element() < 1e-4, "tick {k}");
        let gap = (target - v.rotation).abs();
        assert!(gap.x <= prev_gap.x && gap.y <= prev_gap.y);
        // Same side of the target as the start
        assert!((target.x - v.rotation.x).signum() == (target.x - r0.x).signum());
        assert!((target.y - v.rotation.y).signum() == (target.y - r0.y).signum());
        prev_gap = gap;
    }
}

#[test]
fn ease_toward_is_one_step() {
    let r = ease_toward(Vec2::ZERO, Vec2::new(1.0, -2.0), 0.05);
    assert!((r - Vec2::new(0.05, -0.1)).abs().max_element() < 1e-6);
}

#[test]
fn single_peak_scenario_scale() {
    let mut snap = vec![0u8; 2048];
    snap[1024] = 255;
    let mut s = running();
    let v = s.tick(&snap, PointerState::default()).expect("running");
    assert!((v.scale - 1.00097).abs() < 1e-5);
}

struct SpherePipeline {
    sampler: AudioSampler<FixedSource>,
    state: SphereState,
    pointer: PointerState,
    frames: usize,
}

impl Pipeline for SpherePipeline {
    fn tick(&mut self) -> Reschedule {
        if self.state.tick(self.sampler.frequency_snapshot(), self.pointer).is_some() {
            self.frames += 1;
        }
        Reschedule::NextFrame
    }
}

#[test]
fn sphere_loop_asks_for_every_frame() {
    let mut p = SpherePipeline {
        sampler: AudioSampler::new(FixedSource::flat(128, 256, 40)),
        state: running(),
        pointer: PointerState { x: 0.5, y: 0.5 },
        frames: 0,
    };
    let mut sched = RecordingScheduler::default();
    for _ in 0..5 {
        run_tick(&mut p, &mut sched);
    }
    assert_eq!(p.frames, 5);
    assert_eq!(sched.requests, vec![Reschedule::NextFrame; 5]);
}
