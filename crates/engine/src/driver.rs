//! Driver: the frame loop connecting renderer, rotation state, and sink.

use anyhow::Result;

use crate::core::{Frame, TorusRenderer};
use crate::term::DisplaySink;
use crate::types::{RenderConfig, X_ROTATION_STEP, Y_ROTATION_STEP};

/// Rotation state advanced by fixed per-frame steps.
///
/// [`Animator::advance`] steps first and then returns, so the first frame
/// rendered from a zero start already uses one step's worth of rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    x_rot: f64,
    y_rot: f64,
    x_step: f64,
    y_step: f64,
}

impl Animator {
    pub fn new() -> Self {
        Self::with_steps(X_ROTATION_STEP, Y_ROTATION_STEP)
    }

    pub fn with_steps(x_step: f64, y_step: f64) -> Self {
        Self {
            x_rot: 0.0,
            y_rot: 0.0,
            x_step,
            y_step,
        }
    }

    /// The angles most recently returned by [`Animator::advance`].
    pub fn angles(&self) -> (f64, f64) {
        (self.x_rot, self.y_rot)
    }

    /// Step both angles and return the pair to render next.
    pub fn advance(&mut self) -> (f64, f64) {
        self.x_rot += self.x_step;
        self.y_rot += self.y_step;
        (self.x_rot, self.y_rot)
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

/// How many frames a driver run may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBudget {
    /// Run until the sink fails or the process is killed.
    Unbounded,
    /// Render exactly this many frames, then return.
    Frames(u64),
}

impl FrameBudget {
    /// Consume one frame from the budget. Returns false when exhausted.
    pub fn take_frame(&mut self) -> bool {
        match self {
            FrameBudget::Unbounded => true,
            FrameBudget::Frames(n) => {
                if *n == 0 {
                    return false;
                }
                *n -= 1;
                true
            }
        }
    }
}

/// Owns the renderer and a reused frame; pushes frames into a sink.
///
/// Each iteration advances the rotation, renders into the internal frame,
/// clears the sink, and presents. There is no pacing: the sink's write-back
/// pressure governs the frame rate.
pub struct Driver {
    renderer: TorusRenderer,
    animator: Animator,
    frame: Frame,
}

impl Driver {
    pub fn new(config: RenderConfig) -> Self {
        let frame = Frame::new(config.width, config.height);
        Self {
            renderer: TorusRenderer::new(config),
            animator: Animator::new(),
            frame,
        }
    }

    pub fn with_animator(mut self, animator: Animator) -> Self {
        self.animator = animator;
        self
    }

    /// Run the frame loop until the budget is exhausted or the sink errors.
    pub fn run(&mut self, sink: &mut dyn DisplaySink, mut budget: FrameBudget) -> Result<()> {
        log::debug!("render loop started ({:?})", budget);
        let mut frames: u64 = 0;

        while budget.take_frame() {
            let (x_rot, y_rot) = self.animator.advance();
            self.renderer.render_into(x_rot, y_rot, &mut self.frame);
            sink.clear()?;
            sink.present(&self.frame)?;
            frames += 1;
            log::trace!("frame {}: x_rot={:.3} y_rot={:.3}", frames, x_rot, y_rot);
        }

        log::debug!("render loop finished after {} frames", frames);
        Ok(())
    }
}
