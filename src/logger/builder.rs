use crate::{
    clock::{Clock, LocalClock},
    color::ColorMap,
    sink::Sink,
};

use super::ConsoleLogger;

pub struct ConsoleLoggerBuilder<S, C = LocalClock> {
    sink: S,
    color_enabled: bool,
    color_map: Option<ColorMap>,
    clock: C,
}

impl<S: Sink> ConsoleLoggerBuilder<S> {
    pub fn new(sink: S) -> ConsoleLoggerBuilder<S> {
        ConsoleLoggerBuilder {
            sink,
            color_enabled: false,
            color_map: None,
            clock: LocalClock,
        }
    }
}

impl<S: Sink, C: Clock> ConsoleLoggerBuilder<S, C> {
    pub fn color_enabled(self, color_enabled: bool) -> ConsoleLoggerBuilder<S, C> {
        ConsoleLoggerBuilder {
            color_enabled,
            ..self
        }
    }

    /// Only used when color mode is enabled.
    pub fn color_map(self, color_map: ColorMap) -> ConsoleLoggerBuilder<S, C> {
        ConsoleLoggerBuilder {
            color_map: Some(color_map),
            ..self
        }
    }

    pub fn clock<K: Clock>(self, clock: K) -> ConsoleLoggerBuilder<S, K> {
        ConsoleLoggerBuilder {
            sink: self.sink,
            color_enabled: self.color_enabled,
            color_map: self.color_map,
            clock,
        }
    }

    pub fn build(self) -> ConsoleLogger<S, C> {
        let colors = if self.color_enabled {
            Some(self.color_map.unwrap_or_default())
        } else {
            None
        };

        ConsoleLogger {
            sink: self.sink,
            colors,
            clock: self.clock,
        }
    }
}
