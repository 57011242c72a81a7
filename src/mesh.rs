use bytemuck::{Pod, Zeroable};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

/// UV-sphere wireframe as a line list (pairs of vertices).
///
/// `height_segments - 1` latitude rings of `width_segments` edges each, plus
/// `width_segments` meridians of `height_segments` edges each.
pub fn wireframe_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Vec<LineVertex> {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let point = |iu: u32, iv: u32| -> LineVertex {
        let phi = iu as f32 / w as f32 * TAU;
        let theta = iv as f32 / h as f32 * PI;
        LineVertex {
            position: [
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ],
        }
    };

    let mut lines = Vec::with_capacity(line_count(w, h) as usize * 2);
    for iv in 1..h {
        for iu in 0..w {
            lines.push(point(iu, iv));
            lines.push(point((iu + 1) % w, iv));
        }
    }
    for iu in 0..w {
        for iv in 0..h {
            lines.push(point(iu, iv));
            lines.push(point(iu, iv + 1));
        }
    }
    lines
}

/// Number of line segments `wireframe_sphere` emits.
pub fn line_count(width_segments: u32, height_segments: u32) -> u32 {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    (h - 1) * w + w * h
}
