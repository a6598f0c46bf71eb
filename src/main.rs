//! Terminal donut runner (default binary).
//!
//! Spins the torus forever on the primary screen. There is no input
//! handling and no exit condition; stop it with Ctrl-C or a kill. The
//! cursor is restored on the way out when the loop returns an error.

use anyhow::Result;

use tui_donut::engine::{Driver, FrameBudget};
use tui_donut::term::TerminalSink;
use tui_donut::types::RenderConfig;

fn main() -> Result<()> {
    env_logger::init();

    let mut sink = TerminalSink::new();
    sink.enter()?;

    let result = run(&mut sink);

    // Unhide the cursor even when the loop failed.
    let _ = sink.exit();
    result
}

fn run(sink: &mut TerminalSink) -> Result<()> {
    let config = RenderConfig::default();
    log::debug!(
        "starting animation: {}x{} grid, {}x{} samples per frame",
        config.width,
        config.height,
        config.theta_steps(),
        config.phi_steps()
    );

    let mut driver = Driver::new(config);
    driver.run(sink, FrameBudget::Unbounded)
}
