//! Frame dump utility (debug binary).
//!
//! Renders a fixed number of frames from a zero start and writes them as
//! plain text (no control sequences) to stdout or a file:
//!
//! ```text
//! frame-dump [frames] [path]
//! ```
//!
//! Successive frames are appended in order. The reference grid used by the
//! golden-frame test was captured with `frame-dump 1`.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use tui_donut::engine::{Driver, FrameBudget};
use tui_donut::term::WriterSink;
use tui_donut::types::RenderConfig;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let frames: u64 = match args.next() {
        Some(arg) => arg
            .parse()
            .context("frame count must be a non-negative integer")?,
        None => 1,
    };
    let path = args.next();

    let mut driver = Driver::new(RenderConfig::default());

    match path {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("creating {}", path))?;
            let mut sink = WriterSink::new(BufWriter::new(file));
            driver.run(&mut sink, FrameBudget::Frames(frames))
        }
        None => {
            let stdout = io::stdout();
            let mut sink = WriterSink::new(stdout.lock());
            driver.run(&mut sink, FrameBudget::Frames(frames))
        }
    }
}
