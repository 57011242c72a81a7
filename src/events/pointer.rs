use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole viewport, normalized to `[-1, 1]`.
/// The latest position is read by the next sphere tick.
pub fn wire_pointer_tracking(pointer: Rc<RefCell<PointerState>>) {
    let Some(wnd) = web::window() else {
        return;
    };
    let wnd_for_size = wnd.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let width = viewport_extent(wnd_for_size.inner_width());
        let height = viewport_extent(wnd_for_size.inner_height());
        *pointer.borrow_mut() =
            input::normalize_client(ev.client_x() as f32, ev.client_y() as f32, width, height);
    }) as Box<dyn FnMut(_)>);

    _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
fn viewport_extent(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f32 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}
