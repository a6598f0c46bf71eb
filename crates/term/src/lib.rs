//! Terminal output module.
//!
//! A small output layer between the pure renderer and the screen. Frames
//! arrive as finished glyph grids; this crate only decides where the bytes
//! go and how the display is cleared between frames.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Make the clear-and-present cycle an injectable capability, so the
//!   animation is testable without a terminal

pub mod sink;
pub mod terminal;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use sink::{DisplaySink, WriterSink};
pub use terminal::TerminalSink;
