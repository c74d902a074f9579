pub mod clock;
pub mod color;
pub mod logger;
pub mod severity;
pub mod sink;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, LocalClock};
pub use color::{ColorHint, ColorMap};
pub use logger::{ConsoleLogger, Logger};
pub use severity::Severity;
pub use sink::Sink;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No color function registered for `{hint}`.")]
    MissingColor { hint: ColorHint },

    #[error("Unknown color name `{0}`.")]
    UnknownColor(String),

    #[error("Sink Error")]
    Sink(#[from] std::io::Error),

    #[error("Sink rejected line: {0}")]
    SinkRejected(String),
}

pub type Result<T> = std::result::Result<T, crate::Error>;
