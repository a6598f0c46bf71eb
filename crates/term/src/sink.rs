//! Display sinks: where rendered frames go.
//!
//! The driver talks to an abstract sink, so the animation can run against a
//! real terminal, a file, or a test buffer without changing the loop.

use std::io::Write;

use anyhow::Result;

use crate::core::Frame;

/// Abstract frame destination.
pub trait DisplaySink {
    /// Prepare the display for the next frame (e.g. erase the previous one).
    fn clear(&mut self) -> Result<()>;

    /// Emit one frame.
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// Sink that writes plain frame text to any `Write`.
///
/// No control sequences are emitted and `clear` is a no-op, so successive
/// frames simply append. Used by the frame dump binary and by tests.
pub struct WriterSink<W> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for WriterSink<W> {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        frame.write_to(&mut self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
