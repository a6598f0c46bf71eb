//! Scene types module - shared constants and render configuration
//!
//! This module defines the parameterization of the rendered scene. All types
//! are pure data with no external dependencies, making them usable in any
//! context (core math, terminal output, tests, benches).
//!
//! # Scene Geometry
//!
//! The rendered object is a torus sitting on the Z axis in camera space,
//! viewed from the origin looking down -Z:
//!
//! - **Ring radius** (`RING_RADIUS` = 2.0): distance from the torus axis to
//!   the center of the tube.
//! - **Tube radius** (`TUBE_RADIUS` = 1.25): radius of the tube itself.
//! - **Viewer distance** D = 3·(ring + tube) = 9.75: how far down -Z the
//!   torus center sits.
//! - **Clip planes**: near at `NEAR_CLIP` = 1, far at D + ring + tube = 13.
//!
//! # Sampling & Screen Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINT_DENSITY` | 50.0 | Samples per unit radius along each angle |
//! | `RESOLUTION` | 50.0 | Projection scale factor |
//! | `GRID_WIDTH` | 50 | Output columns |
//! | `GRID_HEIGHT` | 50 | Output rows |
//! | `X_ROTATION_STEP` | 0.07 | Per-frame X rotation increment (radians) |
//! | `Y_ROTATION_STEP` | 0.1 | Per-frame Y rotation increment (radians) |
//!
//! Sample counts derive from the radii: `theta_steps` = ring × density = 100
//! around the ring, `phi_steps` = tube × density = 62 around the tube (both
//! truncated to integers).
//!
//! # Shading
//!
//! A single directional light `LIGHT_DIR` = (-12/13, 4/13, 3/13), already
//! unit length, lights the surface. Brightness maps onto `GLYPH_RAMP`
//! (12 ASCII glyphs from darkest `.` to brightest `@`); cells no sample
//! reaches stay `BLANK_GLYPH`.
//!
//! # Examples
//!
//! ```
//! use tui_donut_types::{RenderConfig, GLYPH_RAMP, GRID_WIDTH};
//!
//! let config = RenderConfig::default();
//! assert_eq!(config.theta_steps(), 100);
//! assert_eq!(config.phi_steps(), 62);
//! assert_eq!(config.viewer_distance(), 9.75);
//! assert_eq!(config.far_clip(), 13.0);
//!
//! assert_eq!(GLYPH_RAMP.len(), 12);
//! assert_eq!(GRID_WIDTH, 50);
//! ```

/// Distance from the torus axis to the center of the tube.
pub const RING_RADIUS: f64 = 2.0;

/// Radius of the tube swept around the ring.
pub const TUBE_RADIUS: f64 = 1.25;

/// Surface samples per unit radius along each angular parameter.
pub const POINT_DENSITY: f64 = 50.0;

/// Near clipping distance used by the pinhole projection.
pub const NEAR_CLIP: f64 = 1.0;

/// Projection scale factor from normalized screen coordinates to cells.
pub const RESOLUTION: f64 = 50.0;

/// Output grid width in character cells.
pub const GRID_WIDTH: usize = 50;

/// Output grid height in character cells.
pub const GRID_HEIGHT: usize = 50;

/// Unit-length directional light (points from the surface toward the light).
pub const LIGHT_DIR: [f64; 3] = [-12.0 / 13.0, 4.0 / 13.0, 3.0 / 13.0];

/// Brightness ramp, darkest to brightest. One byte per level.
pub const GLYPH_RAMP: [u8; 12] = *b".,-~:;=!*#$@";

/// Glyph for cells no surface sample reaches.
pub const BLANK_GLYPH: u8 = b' ';

/// Per-frame rotation increment about the X axis (radians).
pub const X_ROTATION_STEP: f64 = 0.07;

/// Per-frame rotation increment about the Y axis (radians).
pub const Y_ROTATION_STEP: f64 = 0.1;

/// Immutable scene parameterization captured by the renderer.
///
/// `Default` reproduces the reference scene above; tests construct variants
/// with other radii, grids, or lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Distance from the torus axis to the center of the tube.
    pub ring_radius: f64,
    /// Radius of the tube.
    pub tube_radius: f64,
    /// Samples per unit radius along each angular parameter.
    pub point_density: f64,
    /// Near clipping distance.
    pub near_clip: f64,
    /// Projection scale factor.
    pub resolution: f64,
    /// Output grid width in cells.
    pub width: usize,
    /// Output grid height in cells.
    pub height: usize,
    /// Directional light; expected to be unit length.
    pub light: [f64; 3],
}

impl RenderConfig {
    /// Number of samples around the ring (truncated radius × density).
    pub fn theta_steps(&self) -> usize {
        (self.ring_radius * self.point_density) as usize
    }

    /// Number of samples around the tube (truncated radius × density).
    pub fn phi_steps(&self) -> usize {
        (self.tube_radius * self.point_density) as usize
    }

    /// Distance from the viewer to the torus center along -Z.
    pub fn viewer_distance(&self) -> f64 {
        (self.ring_radius + self.tube_radius) * 3.0
    }

    /// Far clipping distance: the viewer distance plus the torus extent.
    ///
    /// Negated, this is the depth floor no surface sample can lose to.
    pub fn far_clip(&self) -> f64 {
        self.viewer_distance() + self.ring_radius + self.tube_radius
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ring_radius: RING_RADIUS,
            tube_radius: TUBE_RADIUS,
            point_density: POINT_DENSITY,
            near_clip: NEAR_CLIP,
            resolution: RESOLUTION,
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            light: LIGHT_DIR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_scene() {
        let config = RenderConfig::default();
        assert_eq!(config.ring_radius, 2.0);
        assert_eq!(config.tube_radius, 1.25);
        assert_eq!(config.theta_steps(), 100);
        assert_eq!(config.phi_steps(), 62);
        assert_eq!(config.viewer_distance(), 9.75);
        assert_eq!(config.far_clip(), 13.0);
        assert_eq!(config.width, 50);
        assert_eq!(config.height, 50);
    }

    #[test]
    fn step_counts_truncate() {
        // 1.25 * 50 = 62.5 and must come out as 62, not 63.
        let config = RenderConfig::default();
        assert_eq!(config.phi_steps(), 62);

        let coarse = RenderConfig {
            tube_radius: 0.9,
            point_density: 10.0,
            ..RenderConfig::default()
        };
        assert_eq!(coarse.phi_steps(), 9);
    }

    #[test]
    fn light_direction_is_unit_length() {
        let [x, y, z] = LIGHT_DIR;
        let norm_sq = x * x + y * y + z * z;
        assert!((norm_sq - 1.0).abs() < 1e-12, "norm^2 = {}", norm_sq);
    }

    #[test]
    fn glyph_ramp_is_ordered_ascii() {
        assert_eq!(GLYPH_RAMP.len(), 12);
        assert_eq!(GLYPH_RAMP[0], b'.');
        assert_eq!(GLYPH_RAMP[11], b'@');
        assert!(GLYPH_RAMP.iter().all(|b| b.is_ascii_graphic()));
        assert_ne!(GLYPH_RAMP[0], BLANK_GLYPH);
    }
}
