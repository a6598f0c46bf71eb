//! Renderer tests - determinism, grid shape, glyph coverage, symmetry

use tui_donut::core::{Frame, TorusRenderer};
use tui_donut::types::{RenderConfig, GLYPH_RAMP, GRID_HEIGHT, GRID_WIDTH};

fn default_renderer() -> TorusRenderer {
    TorusRenderer::new(RenderConfig::default())
}

#[test]
fn render_is_deterministic() {
    let renderer = default_renderer();
    let a = renderer.render(0.07, 0.1);
    let b = renderer.render(0.07, 0.1);
    assert_eq!(a, b);
    assert_eq!(a.to_text(), b.to_text());
}

#[test]
fn render_into_matches_render() {
    let renderer = default_renderer();
    let fresh = renderer.render(1.3, -0.4);

    // Start from a deliberately wrong-sized frame.
    let mut reused = Frame::new(1, 1);
    renderer.render_into(1.3, -0.4, &mut reused);
    assert_eq!(fresh, reused);
}

#[test]
fn reused_frame_is_fully_reset_between_angles() {
    let renderer = default_renderer();
    let mut frame = Frame::new(GRID_WIDTH, GRID_HEIGHT);
    renderer.render_into(2.0, 3.0, &mut frame);
    renderer.render_into(0.07, 0.1, &mut frame);
    assert_eq!(frame.to_text(), renderer.render(0.07, 0.1).to_text());
}

#[test]
fn grid_shape_holds_for_any_angles() {
    let renderer = default_renderer();
    // Zero, negative, and far beyond 2 pi.
    for &(x_rot, y_rot) in &[(0.0, 0.0), (-3.5, 12.9), (123.456, -98.7)] {
        let frame = renderer.render(x_rot, y_rot);
        let text = frame.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), GRID_HEIGHT, "rows at ({}, {})", x_rot, y_rot);
        for line in &lines {
            assert_eq!(line.len(), GRID_WIDTH, "cols at ({}, {})", x_rot, y_rot);
        }
    }
}

#[test]
fn output_uses_only_ramp_glyphs_and_blanks() {
    let renderer = default_renderer();
    for &(x_rot, y_rot) in &[(0.07, 0.1), (2.1, 4.9), (-0.9, 40.0)] {
        let frame = renderer.render(x_rot, y_rot);
        for row in frame.rows() {
            for &b in row {
                assert!(
                    b == b' ' || GLYPH_RAMP.contains(&b),
                    "unexpected glyph {:?} at ({}, {})",
                    b as char,
                    x_rot,
                    y_rot
                );
            }
        }
    }
}

#[test]
fn torus_is_visible() {
    let renderer = default_renderer();
    let frame = renderer.render(0.07, 0.1);
    let lit = frame
        .rows()
        .flat_map(|row| row.iter())
        .filter(|&&b| b != b' ')
        .count();
    assert!(lit > 100, "only {} cells written", lit);
}

#[test]
fn head_on_view_is_symmetric() {
    // Unrotated, the torus faces the camera dead on; the set of written
    // cells mirrors about both screen axes even though the shading does not.
    let renderer = default_renderer();
    let frame = renderer.render(0.0, 0.0);

    let lit: Vec<Vec<bool>> = frame
        .rows()
        .map(|row| row.iter().map(|&b| b != b' ').collect())
        .collect();

    let w = frame.width();
    let h = frame.height();
    for y in 0..h {
        for x in 0..w {
            assert_eq!(
                lit[y][x],
                lit[y][w - 1 - x],
                "left-right mismatch at ({}, {})",
                x,
                y
            );
            assert_eq!(
                lit[y][x],
                lit[h - 1 - y][x],
                "top-bottom mismatch at ({}, {})",
                x,
                y
            );
        }
    }
    assert!(lit.iter().flatten().any(|&cell| cell));
}
