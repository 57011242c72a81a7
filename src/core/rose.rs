use super::config::RoseConfig;
use super::features::FeatureSet;
use super::schedule::Reschedule;
use crate::constants::NUM_PETALS;
use instant::Instant;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

/// One ellipse of the rose, relative to the canvas center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Petal {
    /// Radians. Also the ellipse rotation.
    pub angle: f32,
    /// Distance of the ellipse center from the canvas center.
    pub radius: f32,
    pub length: f32,
    pub width: f32,
}

impl Petal {
    /// Ellipse center offset from the canvas center.
    pub fn offset(&self) -> (f32, f32) {
        (self.angle.cos() * self.radius, self.angle.sin() * self.radius)
    }
}

/// What to draw for one rose tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RoseFrame {
    pub volume: f32,
    /// Degrees, from the time-domain snapshot.
    pub hue: f32,
    pub petals: SmallVec<[Petal; NUM_PETALS]>,
    pub center_radius: f32,
    /// Time since the previous tick; `None` on the first one.
    pub since_last: Option<Duration>,
}

pub struct RoseState {
    pub volume: f32,
    pub last_update: Option<Instant>,
    config: RoseConfig,
}

impl RoseState {
    pub fn new(config: RoseConfig) -> Self {
        Self {
            volume: 0.0,
            last_update: None,
            config,
        }
    }

    /// Build one frame and the delay before the next one.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        frequency: &[u8],
        time_domain: &[u8],
        rng: &mut R,
        now: Instant,
    ) -> (RoseFrame, Reschedule) {
        let c = &self.config;
        let features = FeatureSet::with_hue(frequency, time_domain);
        self.volume = features.average / c.volume_divisor;

        let petals = scatter_petals(
            c.num_petals,
            self.volume,
            c.angle_span,
            c.petal_extent,
            rng,
        );
        let since_last = self.last_update.map(|t| now.duration_since(t));
        self.last_update = Some(now);

        let frame = RoseFrame {
            volume: self.volume,
            hue: features.hue.unwrap_or(0.0),
            petals,
            center_radius: self.volume * c.center_disk_gain,
            since_last,
        };
        let next = Reschedule::After {
            delay_ms: next_delay_ms(self.volume, c),
        };
        (frame, next)
    }
}

/// `base - volume * gain`; negative for loud input.
pub fn next_delay_ms(volume: f32, config: &RoseConfig) -> f64 {
    config.base_delay_ms - volume as f64 * config.delay_per_volume_ms
}

/// Randomize `count` petals. Angles are `(i / count) * span * random()`, a
/// scatter that widens with the index rather than an even spread around the
/// circle. Draw order per petal: angle, radius, length, width.
pub fn scatter_petals<R: Rng + ?Sized>(
    count: usize,
    volume: f32,
    span: f32,
    extent: f32,
    rng: &mut R,
) -> SmallVec<[Petal; NUM_PETALS]> {
    (0..count)
        .map(|i| {
            let angle = (i as f32 / count as f32) * span * rng.gen::<f32>();
            let radius = volume * rng.gen::<f32>() * extent;
            let length = volume * rng.gen::<f32>() * extent;
            let width = volume * rng.gen::<f32>() * extent;
            Petal {
                angle,
                radius,
                length,
                width,
            }
        })
        .collect()
}
