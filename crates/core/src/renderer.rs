//! Torus renderer: samples the surface, shades, projects, and plots.

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::frame::Frame;
use crate::projection;
use crate::shading;
use crate::types::{RenderConfig, GLYPH_RAMP};

/// Renders one parametric torus into a [`Frame`].
///
/// The renderer is a pure function of (angles, config): it captures an
/// immutable [`RenderConfig`] at construction, holds no mutable state, and
/// the same inputs always produce the same frame.
pub struct TorusRenderer {
    config: RenderConfig,
    light: Vector3<f64>,
}

impl TorusRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let light = Vector3::from(config.light);
        Self { config, light }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render into a fresh frame.
    pub fn render(&self, x_rot: f64, y_rot: f64) -> Frame {
        let mut frame = Frame::new(self.config.width, self.config.height);
        self.render_into(x_rot, y_rot, &mut frame);
        frame
    }

    /// Render into an existing frame.
    ///
    /// This is the allocation-free hot path. Callers can reuse one frame
    /// for the whole animation; it is resized and cleared up front, so the
    /// result is identical to [`TorusRenderer::render`].
    pub fn render_into(&self, x_rot: f64, y_rot: f64, frame: &mut Frame) {
        let cfg = &self.config;

        frame.resize(cfg.width, cfg.height);
        frame.clear(-cfg.far_clip());

        let theta_steps = cfg.theta_steps();
        let phi_steps = cfg.phi_steps();
        let viewer_distance = cfg.viewer_distance();
        let levels = GLYPH_RAMP.len();

        let (sin_x, cos_x) = x_rot.sin_cos();
        let (sin_y, cos_y) = y_rot.sin_cos();

        for i in 0..theta_steps {
            let theta = 2.0 * PI * i as f64 / theta_steps as f64;
            let (sin_t, cos_t) = theta.sin_cos();

            for j in 0..phi_steps {
                let phi = 2.0 * PI * j as f64 / phi_steps as f64;
                let (sin_p, cos_p) = phi.sin_cos();

                // Tube cross-section before rotation: distance from the
                // torus axis, and height out of the torus plane.
                let circle = cfg.ring_radius + cos_p * cfg.tube_radius;
                let tube = sin_p * cfg.tube_radius;

                // Rotate about X by x_rot, then about Y by y_rot, then push
                // the torus down -Z to the viewing distance.
                let point = Vector3::new(
                    (cos_y * cos_t - sin_y * sin_x * sin_t) * circle + sin_y * cos_x * tube,
                    cos_x * sin_t * circle + sin_x * tube,
                    cos_y * cos_x * tube - (cos_y * sin_x * sin_t + sin_y * cos_t) * circle
                        - viewer_distance,
                );

                // The analytic surface normal under the same rotation;
                // already unit length, no renormalization needed.
                let slope = cos_x * sin_p - sin_x * sin_t * cos_p;
                let normal = Vector3::new(
                    cos_y * cos_t * cos_p + sin_y * slope,
                    cos_x * sin_t * cos_p + sin_x * sin_p,
                    cos_y * slope - sin_y * cos_t * cos_p,
                );

                let level = shading::brightness_index(self.light.dot(&normal), levels);
                let (xd, yd) = projection::to_screen(&point, cfg);
                frame.plot(xd, yd, point.z, GLYPH_RAMP[level]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_written_depth_is_attainable() {
        // All surface z lie in (-far_clip, 0); the floor never survives a
        // write and nothing behind the far plane is ever stored.
        let config = RenderConfig::default();
        let renderer = TorusRenderer::new(config);
        let frame = renderer.render(0.07, 0.1);

        for y in 0..config.height {
            for x in 0..config.width {
                let z = frame.depth(x, y).unwrap();
                if frame.glyph(x, y) != Some(b' ') {
                    assert!(z > -config.far_clip() && z < 0.0, "z = {}", z);
                } else {
                    assert_eq!(z, -config.far_clip());
                }
            }
        }
    }

    #[test]
    fn small_grid_still_renders_something() {
        let config = RenderConfig {
            width: 10,
            height: 10,
            resolution: 10.0,
            ..RenderConfig::default()
        };
        let renderer = TorusRenderer::new(config);
        let frame = renderer.render(0.07, 0.1);
        assert!(frame.rows().any(|row| row.iter().any(|&b| b != b' ')));
    }

    #[test]
    fn zero_density_yields_a_blank_frame() {
        let config = RenderConfig {
            point_density: 0.0,
            ..RenderConfig::default()
        };
        let renderer = TorusRenderer::new(config);
        let frame = renderer.render(0.07, 0.1);
        assert!(frame.rows().all(|row| row.iter().all(|&b| b == b' ')));
    }
}
