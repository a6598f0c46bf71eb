//! Golden-frame regression test against a captured reference grid.

use tui_donut::core::TorusRenderer;
use tui_donut::engine::{Driver, FrameBudget};
use tui_donut::term::WriterSink;
use tui_donut::types::RenderConfig;

/// First animated frame (one rotation step from zero), captured with
/// `frame-dump 1`.
const FIRST_FRAME: &str = include_str!("golden/first_frame.txt");

#[test]
fn first_animated_frame_matches_reference() {
    let renderer = TorusRenderer::new(RenderConfig::default());
    let frame = renderer.render(0.07, 0.1);
    assert_eq!(frame.to_text(), FIRST_FRAME);
}

#[test]
fn one_frame_driver_run_reproduces_reference() {
    let mut driver = Driver::new(RenderConfig::default());
    let mut sink = WriterSink::new(Vec::new());
    driver.run(&mut sink, FrameBudget::Frames(1)).unwrap();
    assert_eq!(sink.into_inner(), FIRST_FRAME.as_bytes());
}

#[test]
fn reference_grid_is_well_formed() {
    assert_eq!(FIRST_FRAME.lines().count(), 50);
    assert!(FIRST_FRAME.lines().all(|line| line.len() == 50));
    // All twelve ramp glyphs appear in this frame.
    for glyph in ".,-~:;=!*#$@".chars() {
        assert!(FIRST_FRAME.contains(glyph), "missing {:?}", glyph);
    }
}
