use crate::color::ColorHint;

/// Importance of a log line. Only decides the prefix and color of the line,
/// never whether the line is written.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum Severity {
    #[default]
    Info,
    Warn,
    Error,
    Severe,
}

impl Severity {
    /// Maps the numeric levels 1 to 4 onto [`Severity::Info`] through
    /// [`Severity::Severe`]. Any other level is treated as [`Severity::Info`].
    pub fn from_level(level: u8) -> Severity {
        match level {
            1 => Severity::Info,
            2 => Severity::Warn,
            3 => Severity::Error,
            4 => Severity::Severe,
            unknown => {
                tracing::debug!("Unrecognized severity level {unknown}, using INFO.");
                Severity::Info
            }
        }
    }

    /// Prefix written between the brackets of a log line.
    pub fn label(&self) -> &'static str {
        use Severity::*;

        match self {
            Info => "INFO",
            Warn => "WARN",
            Error => "ERROR",
            Severe => "SEVERE",
        }
    }

    pub fn color_hint(&self) -> ColorHint {
        use Severity::*;

        match self {
            Info => ColorHint::Green,
            Warn => ColorHint::Yellow,
            Error => ColorHint::Red,
            Severe => ColorHint::BgRed,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
