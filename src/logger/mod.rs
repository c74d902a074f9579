use crate::{
    clock::{self, Clock, LocalClock},
    color::ColorMap,
    severity::Severity,
    sink::Sink,
};

pub mod builder;

use builder::ConsoleLoggerBuilder;

pub trait Logger {
    /// Log a `message` with the given [`Severity`].
    fn log(&mut self, severity: Severity, message: &str) -> crate::Result<()>;

    /// Log a `message` with [`Severity::Info`].
    fn info(&mut self, message: &str) -> crate::Result<()> {
        self.log(Severity::Info, message)
    }

    /// Log a `message` with [`Severity::Warn`].
    fn warn(&mut self, message: &str) -> crate::Result<()> {
        self.log(Severity::Warn, message)
    }

    /// Log a `message` with [`Severity::Error`].
    fn error(&mut self, message: &str) -> crate::Result<()> {
        self.log(Severity::Error, message)
    }

    /// Log a `message` with [`Severity::Severe`].
    fn severe(&mut self, message: &str) -> crate::Result<()> {
        self.log(Severity::Severe, message)
    }
}

/// Composes `H:M:S [LABEL] message` lines and hands them to a [`Sink`].
///
/// In color mode the message part is passed through the [`ColorMap`] entry
/// matching the severity's color hint. A missing entry fails the call and
/// nothing reaches the sink.
pub struct ConsoleLogger<S, C = LocalClock> {
    sink: S,
    colors: Option<ColorMap>,
    clock: C,
}

impl<S: Sink> ConsoleLogger<S> {
    pub fn builder(sink: S) -> ConsoleLoggerBuilder<S> {
        ConsoleLoggerBuilder::new(sink)
    }

    pub fn new(sink: S) -> ConsoleLogger<S> {
        ConsoleLoggerBuilder::new(sink).build()
    }

    pub fn with_colors(sink: S, colors: ColorMap) -> ConsoleLogger<S> {
        ConsoleLoggerBuilder::new(sink)
            .color_enabled(true)
            .color_map(colors)
            .build()
    }
}

impl<S: Sink, C: Clock> ConsoleLogger<S, C> {
    pub fn is_colored(&self) -> bool {
        self.colors.is_some()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Builds the line `log` would send for `severity` and `message`.
    pub fn format_line(&self, severity: Severity, message: &str) -> crate::Result<String> {
        let label = severity.label();
        let timestamp = clock::timestamp(self.clock.now());

        let line = match &self.colors {
            Some(colors) => {
                let message = colors.apply(severity.color_hint(), message)?;
                format!("{timestamp} [{label}] {message}")
            }
            None => format!("{timestamp} [{label}] {message}"),
        };

        Ok(line)
    }
}

impl<S: Sink, C: Clock> Logger for ConsoleLogger<S, C> {
    fn log(&mut self, severity: Severity, message: &str) -> crate::Result<()> {
        let line = self.format_line(severity, message)?;
        self.sink.write_line(&line)
    }
}
