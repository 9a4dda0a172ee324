//! Where the client writes diagnostic messages.
//!
//! Only unexpected Gigya error envelopes are written to the sink. The sink
//! is injected when the client is built; it defaults to [`StdoutSink`].
//! Hosts that run a `tracing` subscriber should use [`TracingSink`], and
//! tests can pass any `Fn(&str)` closure to capture messages.

use std::io::{self, Write};

use tracing::info;

/// A destination for client log messages.
///
/// Implementations must not panic; a failed write is dropped.
pub trait LogSink: Send + Sync {
    /// Records one message.
    fn info(&self, message: &str);
}

/// Writes each message and a trailing newline to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn info(&self, message: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = write_line(&mut handle, message);
    }
}

/// Forwards messages to `tracing` at INFO level under the `gigya` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        info!(target: "gigya", "{message}");
    }
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn info(&self, message: &str) {
        self(message);
    }
}

fn write_line<W: Write>(writer: &mut W, message: &str) -> io::Result<()> {
    writeln!(writer, "{message}")?;
    writer.flush()
}
