//! TUI donut (workspace facade crate).
//!
//! This package re-exports the workspace members as
//! `tui_donut::{core,engine,term,types}`, so binaries and tests see one
//! stable API regardless of how the crates underneath are split.

pub use tui_donut_core as core;
pub use tui_donut_engine as engine;
pub use tui_donut_term as term;
pub use tui_donut_types as types;
