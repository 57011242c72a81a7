/// Per-tick scalar summary of one snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeatureSet {
    /// Mean byte value, 0..=255.
    pub average: f32,
    /// Dominant-bucket hue in degrees, when extracted.
    pub hue: Option<f32>,
}

impl FeatureSet {
    /// Average only (sphere pipeline).
    pub fn loudness(snapshot: &[u8]) -> Self {
        Self {
            average: average_magnitude(snapshot),
            hue: None,
        }
    }

    /// Average of `magnitudes` and hue of the dominant bucket in `hue_source`.
    pub fn with_hue(magnitudes: &[u8], hue_source: &[u8]) -> Self {
        Self {
            average: average_magnitude(magnitudes),
            hue: Some(dominant_bucket_hue(hue_source)),
        }
    }
}

/// Arithmetic mean of all bytes. An empty snapshot averages to 0.
pub fn average_magnitude(snapshot: &[u8]) -> f32 {
    if snapshot.is_empty() {
        return 0.0;
    }
    let sum: u64 = snapshot.iter().map(|&b| b as u64).sum();
    (sum as f64 / snapshot.len() as f64) as f32
}

/// Index of the largest byte; the first one wins on ties.
pub fn dominant_bucket(snapshot: &[u8]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (i, &v) in snapshot.iter().enumerate() {
        match best {
            Some((_, bv)) if v <= bv => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Hue angle in `[0, 360)` from the dominant bucket's position: `(k / n) * 360`.
pub fn dominant_bucket_hue(snapshot: &[u8]) -> f32 {
    match dominant_bucket(snapshot) {
        Some(k) => (k as f64 / snapshot.len() as f64 * 360.0) as f32,
        None => 0.0,
    }
}
