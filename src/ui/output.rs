//! Console output for greetings.
//!
//! The runner writes to any [`Write`] so the binary can hand it a locked
//! stdout while tests hand it a buffer.

use crate::formatter::format_message;
use crate::models::greeting::GreetingConfig;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Writes the formatted greeting, one per line, `cfg.count()` times.
///
/// # Arguments
/// * `cfg` - The configuration to greet with
/// * `out` - Destination for the greeting lines
///
/// # Errors
/// Returns the first write error; lines already written stay written.
pub fn run<W: Write>(cfg: &GreetingConfig, out: &mut W) -> io::Result<()> {
    let message = format_message(cfg);
    debug!(times = cfg.count(), "printing greeting");

    for line in 1..=cfg.count() {
        trace!(line, "writing greeting line");
        writeln!(out, "{}", message)?;
    }

    out.flush()
}
