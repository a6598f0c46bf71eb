//! Pinhole projection from camera space onto the character grid.

use nalgebra::Vector3;

use crate::types::RenderConfig;

/// Project a camera-space point to integer screen coordinates.
///
/// x and y are scaled by near_clip/z and the resolution factor, then mapped
/// from a centered range onto the grid by adding half the grid extent and
/// halving. Truncation is toward zero. The result may lie outside the grid;
/// callers bounds-check, e.g. via [`crate::Frame::plot`].
#[inline]
pub fn to_screen(point: &Vector3<f64>, config: &RenderConfig) -> (i32, i32) {
    let xd = (point.x * config.near_clip / point.z * config.resolution + config.width as f64) / 2.0;
    let yd =
        (point.y * config.near_clip / point.z * config.resolution + config.height as f64) / 2.0;
    (xd as i32, yd as i32)
}
