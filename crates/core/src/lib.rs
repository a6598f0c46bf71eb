//! Core rendering logic - pure, deterministic, and testable
//!
//! This module contains the whole rendering pipeline for one frame of the
//! spinning torus. It has **zero dependencies** on terminals or I/O beyond
//! writing frame bytes to a generic `std::io::Write`, making it:
//!
//! - **Deterministic**: the same (angles, config) always produce a
//!   byte-identical frame
//! - **Testable**: every stage (plotting, shading, projection, sampling) is
//!   exercisable on its own
//! - **Portable**: runs anywhere (terminal, file dump, headless tests)
//! - **Fast**: an allocation-free hot path renders into a reused frame
//!
//! # Module Structure
//!
//! - [`frame`]: co-indexed glyph and depth grids with depth-tested plotting
//! - [`shading`]: directional-light dot product to glyph ramp index
//! - [`projection`]: pinhole projection from camera space to screen cells
//! - [`renderer`]: the torus sampler tying the stages together
//!
//! # Rendering Pipeline
//!
//! Per frame, for each of theta_steps × phi_steps surface samples:
//!
//! 1. Place the sample on the torus (tube circle swept around the ring)
//! 2. Rotate about X, then about Y, then translate down -Z to the viewer
//!    distance
//! 3. Shade: dot the rotated surface normal with the fixed light direction
//!    and quantize onto the glyph ramp
//! 4. Project through a pinhole onto the character grid
//! 5. Plot with a z-buffer test so the nearest sample per cell survives
//!
//! # Example
//!
//! ```
//! use tui_donut_core::TorusRenderer;
//! use tui_donut_types::RenderConfig;
//!
//! let renderer = TorusRenderer::new(RenderConfig::default());
//! let frame = renderer.render(0.07, 0.1);
//!
//! assert_eq!(frame.width(), 50);
//! assert_eq!(frame.height(), 50);
//! ```

pub mod frame;
pub mod projection;
pub mod renderer;
pub mod shading;

pub use tui_donut_types as types;

// Re-export commonly used items for convenience
pub use frame::Frame;
pub use projection::to_screen;
pub use renderer::TorusRenderer;
pub use shading::brightness_index;
