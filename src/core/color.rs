use palette::{FromColor, Hsl, LinSrgb, Srgb};

/// HSL (hue in turns, saturation and lightness in `[0, 1]`) to gamma-encoded
/// sRGB, the same color a CSS `hsl()` would show.
///
/// Hue wraps, so 1.25 is the same color as 0.25. Saturation and lightness are
/// clamped to `[0, 1]`.
pub fn hsl_to_srgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let hsl: Hsl = Hsl::new(
        hue.rem_euclid(1.0) * 360.0,
        saturation.clamp(0.0, 1.0),
        lightness.clamp(0.0, 1.0),
    );
    let rgb: Srgb = Srgb::from_color(hsl);
    [rgb.red, rgb.green, rgb.blue]
}

/// Value to write into a shader color for a surface. An `*Srgb` surface
/// encodes on store, so it must be fed linear values; a plain `Unorm` surface
/// stores what it gets.
pub fn surface_color(srgb: [f32; 3], surface_is_srgb: bool) -> [f32; 3] {
    if !surface_is_srgb {
        return srgb;
    }
    let lin: LinSrgb = Srgb::new(srgb[0], srgb[1], srgb[2]).into_linear();
    [lin.red, lin.green, lin.blue]
}

/// CSS color string for a 2D canvas fill, hue in degrees.
pub fn css_hsl(hue_deg: f32, saturation_pct: f32, lightness_pct: f32) -> String {
    format!(
        "hsl({:.2}, {:.0}%, {:.0}%)",
        hue_deg, saturation_pct, lightness_pct
    )
}
