//! Output sink implementations

use std::io::{self, Write};

use tracing::info;

use crate::config::SinkKind;
use crate::domain::OutputSink;

/// Sink writing one line per call to any `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// Sink forwarding each line to the tracing subscriber at INFO.
#[derive(Debug, Default)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        info!(target: "arbor::action", "{}", line);
        Ok(())
    }
}

/// Sink keeping every line in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Create the sink selected in settings.
pub fn create_sink(kind: SinkKind) -> Box<dyn OutputSink> {
    match kind {
        SinkKind::Stdout => Box::new(WriterSink::stdout()),
        SinkKind::Log => Box::new(LogSink),
    }
}
