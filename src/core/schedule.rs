use super::error::AudioAccessError;
use crate::constants::START_BUTTON_ID;

/// When a pipeline wants its next tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reschedule {
    /// Next animation frame.
    NextFrame,
    /// Wait `delay_ms`, then the next animation frame. The value is kept as
    /// computed and may be zero or negative.
    After { delay_ms: f64 },
}

impl Reschedule {
    /// Timer delay handed to the host; non-positive delays collapse to 0.
    pub fn timeout_ms(&self) -> Option<i32> {
        match *self {
            Reschedule::NextFrame => None,
            Reschedule::After { delay_ms } => {
                if delay_ms.is_finite() && delay_ms > 0.0 {
                    Some(delay_ms.min(i32::MAX as f64) as i32)
                } else {
                    Some(0)
                }
            }
        }
    }
}

/// One self-rescheduling render loop.
pub trait Pipeline {
    fn tick(&mut self) -> Reschedule;
}

/// Host side of the loop: turns a `Reschedule` into a future `tick` call.
pub trait FrameScheduler {
    fn schedule(&mut self, next: Reschedule);
}

/// Run one tick and hand its reschedule request to the scheduler.
pub fn run_tick<P: Pipeline + ?Sized, S: FrameScheduler + ?Sized>(
    pipeline: &mut P,
    scheduler: &mut S,
) {
    let next = pipeline.tick();
    scheduler.schedule(next);
}

/// Resolve the audio request of a start gesture.
///
/// On success `start` runs once (arming the pipeline and scheduling its first
/// frame). On failure exactly one error is logged and nothing is scheduled.
pub fn launch<T>(
    label: &str,
    access: Result<T, AudioAccessError>,
    start: impl FnOnce(T),
) -> bool {
    match access {
        Ok(sampler) => {
            log::info!("[{}] audio ready, starting", label);
            start(sampler);
            true
        }
        Err(e) => {
            log::error!("[{}] {}", label, e);
            false
        }
    }
}

/// Wire a start gesture only once its control has been found, so a page
/// without one is left with no listeners at all. A missing control logs one
/// error and returns `false`.
pub fn wire_start_control<C>(label: &str, control: Option<C>, wire: impl FnOnce(C)) -> bool {
    match control {
        Some(c) => {
            wire(c);
            true
        }
        None => {
            log::error!("[{}] missing #{}", label, START_BUTTON_ID);
            false
        }
    }
}
