//! Animation engine: advances the rotation and drives frames into a sink.
//!
//! The engine owns the loop, not the policy: a [`FrameBudget`] decides how
//! long a run lasts, and the sink decides where frames go. The renderer
//! stays a pure function of (angles, config) throughout.

pub mod driver;

pub use tui_donut_core as core;
pub use tui_donut_term as term;
pub use tui_donut_types as types;

pub use driver::{Animator, Driver, FrameBudget};
