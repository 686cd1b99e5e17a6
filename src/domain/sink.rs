//! Output sink capability

use std::io;

/// Destination for the text emitted by components.
///
/// Accepts one line at a time and appends the newline itself. Concrete sinks
/// (stdout, tracing, in-memory buffer) live in the infrastructure layer.
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}
