use crate::constants::START_BUTTON_ID;
use web_sys as web;

/// Hide the start control.
#[inline]
pub fn hide_start(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_BUTTON_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for pages without a .hidden rule
        _ = el.set_attribute("style", "display:none");
    }
}
