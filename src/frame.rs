use crate::audio::MicAnalyser;
use crate::core::{AudioSampler, FrameScheduler, Pipeline, Reschedule, RoseState, SphereState};
use crate::input::PointerState;
use crate::render;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Sphere ----------------

pub struct SphereFrameContext {
    pub sampler: AudioSampler<MicAnalyser>,
    pub state: SphereState,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
}

impl Pipeline for SphereFrameContext {
    fn tick(&mut self) -> Reschedule {
        let pointer = *self.pointer.borrow();
        let frequency = self.sampler.frequency_snapshot();
        let Some(visuals) = self.state.tick(frequency, pointer) else {
            return Reschedule::NextFrame;
        };
        log::trace!(
            "[sphere] scale={:.4} hue={:.4} fov={:.2}",
            visuals.scale,
            visuals.hue,
            visuals.fov_degrees
        );
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&visuals) {
                log::error!("render error: {:?}", e);
            }
        }
        Reschedule::NextFrame
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

// ---------------- Rose ----------------

pub struct RoseFrameContext {
    pub sampler: AudioSampler<MicAnalyser>,
    pub state: RoseState,
    pub rng: StdRng,
    pub canvas: render::canvas::RoseCanvas,
}

impl Pipeline for RoseFrameContext {
    fn tick(&mut self) -> Reschedule {
        let (frequency, time_domain) = self.sampler.snapshots();
        let (frame, next) = self
            .state
            .tick(frequency, time_domain, &mut self.rng, Instant::now());
        if let Err(e) = self.canvas.draw(&frame) {
            log::error!("[rose] draw error: {:?}", e);
        }
        log::trace!(
            "[rose] volume={:.4} hue={:.1} next={:?} since_last={:?}",
            frame.volume,
            frame.hue,
            next,
            frame.since_last
        );
        next
    }
}

// ---------------- Browser scheduler ----------------

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `NextFrame` → requestAnimationFrame; `After` → setTimeout, then
/// requestAnimationFrame. The browser clamps the timer; we pass it >= 0.
struct BrowserScheduler {
    tick: TickClosure,
    deferred: Closure<dyn FnMut()>,
}

impl BrowserScheduler {
    fn new(tick: TickClosure) -> Self {
        let tick_for_timer = tick.clone();
        let deferred = Closure::wrap(Box::new(move || {
            request_frame(&tick_for_timer);
        }) as Box<dyn FnMut()>);
        Self { tick, deferred }
    }
}

impl FrameScheduler for BrowserScheduler {
    fn schedule(&mut self, next: Reschedule) {
        match next.timeout_ms() {
            None => request_frame(&self.tick),
            Some(ms) => {
                if let Some(w) = web::window() {
                    _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                        self.deferred.as_ref().unchecked_ref(),
                        ms,
                    );
                }
            }
        }
    }
}

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `pipeline` forever: tick on each animation frame, then schedule the
/// next one the way the tick asked for.
pub fn start_loop<P: Pipeline + 'static>(mut pipeline: P) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let mut scheduler = BrowserScheduler::new(tick.clone());
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        crate::core::run_tick(&mut pipeline, &mut scheduler);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
