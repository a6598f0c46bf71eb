//! TerminalSink: flushes frames to a real terminal via crossterm.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, terminal, QueueableCommand};

use crate::core::Frame;
use crate::sink::DisplaySink;

/// Crossterm-backed sink drawing on the primary screen.
///
/// Commands are queued into an internal buffer and flushed once per frame,
/// so the clear sequence and the new frame reach the terminal in a single
/// write. The animation draws with plain newlines on the normal screen; no
/// raw mode and no alternate screen.
pub struct TerminalSink {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    /// Hide the cursor for the duration of the animation.
    pub fn enter(&mut self) -> Result<()> {
        log::debug!("entering terminal output mode");
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the cursor.
    pub fn exit(&mut self) -> Result<()> {
        log::debug!("restoring terminal state");
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl DisplaySink for TerminalSink {
    fn clear(&mut self) -> Result<()> {
        // Queued only; present flushes, so clear + frame land in one write.
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        frame.write_to(&mut self.buf)?;
        self.flush_buf()?;
        Ok(())
    }
}
