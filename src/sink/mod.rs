//! Destinations for composed log lines.

mod console;
mod tracing_sink;

pub use console::{ConsoleSink, WriterSink};
pub use tracing_sink::TracingSink;

/// Receives one fully composed log line per call.
pub trait Sink {
    fn write_line(&mut self, line: &str) -> crate::Result<()>;
}

/// Keeps every line in memory.
#[derive(Default, Debug, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> crate::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

/// Adapts a closure into a [`Sink`].
pub struct FnSink<F>(pub F);

impl<F> Sink for FnSink<F>
where
    F: FnMut(&str) -> crate::Result<()>,
{
    fn write_line(&mut self, line: &str) -> crate::Result<()> {
        (self.0)(line)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&mut self, line: &str) -> crate::Result<()> {
        (**self).write_line(line)
    }
}
