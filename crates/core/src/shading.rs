//! Brightness quantization: light dot product to glyph ramp index.

/// Map a directional-light dot product in [-1, 1] to a ramp index in
/// [0, levels).
///
/// The dot is remapped to [0, 1], scaled by `levels`, biased by -0.5,
/// truncated toward zero, and clamped into the ramp. `levels` must be
/// nonzero.
#[inline]
pub fn brightness_index(dot: f64, levels: usize) -> usize {
    debug_assert!(levels > 0);
    let raw = ((dot + 1.0) / 2.0 * levels as f64 - 0.5) as i32;
    raw.clamp(0, levels as i32 - 1) as usize
}
