pub mod camera;
pub mod constants;
pub mod core;
pub mod input;
pub mod mesh;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::{ROSE_CANVAS_ID, START_BUTTON_ID};
    use crate::core::{
        launch, wire_start_control, RoseConfig, RoseState, SphereConfig, SphereState,
    };
    use crate::input::PointerState;
    use crate::{audio, dom, events, frame, overlay, render};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("mic-bloom loaded");
        Ok(())
    }

    /// Wireframe sphere: wait for the start control, open the microphone,
    /// then hide the control and run one tick per animation frame.
    #[wasm_bindgen]
    pub fn start_sphere() -> Result<(), JsValue> {
        if let Err(e) = wire_sphere() {
            log::error!("[sphere] init error: {:?}", e);
        }
        Ok(())
    }

    fn wire_sphere() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let control = document.get_element_by_id(START_BUTTON_ID);

        static STARTED: AtomicBool = AtomicBool::new(false);
        wire_start_control("sphere", control, |button| {
            let pointer = Rc::new(RefCell::new(PointerState::default()));
            events::wire_pointer_tracking(pointer.clone());
            dom::on_click(&button, move || {
                if STARTED.swap(true, Ordering::SeqCst) {
                    return;
                }
                let pointer = pointer.clone();
                spawn_local(async move {
                    let config = SphereConfig::default();
                    let access = audio::open_microphone(config.fft_size).await;
                    launch("sphere", access, move |sampler| {
                        spawn_local(run_sphere(sampler, config, pointer));
                    });
                });
            });
        });
        Ok(())
    }

    async fn run_sphere(
        sampler: crate::core::AudioSampler<audio::MicAnalyser>,
        config: SphereConfig,
        pointer: Rc<RefCell<PointerState>>,
    ) {
        let Some(document) = dom::window_document() else {
            return;
        };
        overlay::hide_start(&document);
        let canvas = match dom::create_fullscreen_canvas(&document) {
            Ok(c) => c,
            Err(e) => {
                log::error!("[sphere] canvas error: {:?}", e);
                return;
            }
        };
        let gpu = frame::init_gpu(&canvas).await;
        let mut state = SphereState::new(config);
        state.arm();
        frame::start_loop(frame::SphereFrameContext {
            sampler,
            state,
            pointer,
            canvas,
            gpu,
        });
    }

    /// Rose: the start control hides on click, before the microphone answers.
    #[wasm_bindgen]
    pub fn start_rose() -> Result<(), JsValue> {
        if let Err(e) = wire_rose() {
            log::error!("[rose] init error: {:?}", e);
        }
        Ok(())
    }

    fn wire_rose() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = render::canvas::RoseCanvas::new(dom::canvas_by_id(&document, ROSE_CANVAS_ID)?)?;
        let canvas = Rc::new(RefCell::new(Some(canvas)));

        let control = document.get_element_by_id(START_BUTTON_ID);

        static STARTED: AtomicBool = AtomicBool::new(false);
        let doc_click = document.clone();
        wire_start_control("rose", control, |button| {
            dom::on_click(&button, move || {
                if STARTED.swap(true, Ordering::SeqCst) {
                    return;
                }
                overlay::hide_start(&doc_click);
                let Some(canvas) = canvas.borrow_mut().take() else {
                    return;
                };
                spawn_local(async move {
                    let config = RoseConfig::default();
                    let access = audio::open_microphone(config.fft_size).await;
                    launch("rose", access, move |sampler| {
                        frame::start_loop(frame::RoseFrameContext {
                            sampler,
                            state: RoseState::new(config),
                            rng: StdRng::from_entropy(),
                            canvas,
                        });
                    });
                });
            });
        });
        Ok(())
    }
}
