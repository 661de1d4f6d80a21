//! Pixel helpers for the rasterized surfaces.

/// Convert a 0.0–1.0 channel to a byte, rounding to nearest.
pub(crate) fn channel_to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
