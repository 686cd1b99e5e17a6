//! Infrastructure layer: concrete sinks and console I/O

pub mod console;
pub mod error;
pub mod sink;

pub use error::InfraError;
pub use sink::{create_sink, BufferSink, LogSink, WriterSink};
