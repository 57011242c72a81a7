/// Last pointer position, normalized to roughly `[-1, 1]` with y up.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

// ---------------- Pointer helpers ----------------
/// Map client pixel coordinates over a `width` × `height` viewport to
/// `[-1, 1]`, x right-positive and y up-positive. A degenerate viewport maps
/// to the center.
#[inline]
pub fn normalize_client(client_x: f32, client_y: f32, width: f32, height: f32) -> PointerState {
    if !(width > 0.0 && height > 0.0) {
        return PointerState::default();
    }
    PointerState {
        x: (client_x / width) * 2.0 - 1.0,
        y: -(client_y / height) * 2.0 + 1.0,
    }
}
