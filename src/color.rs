use std::{collections::HashMap, fmt, str::FromStr};

use colored::Colorize;

/// Keys of a [`ColorMap`].
///
/// `White` is a valid key, but no [`Severity`](crate::Severity) resolves to it.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ColorHint {
    Green,
    Yellow,
    Red,
    BgRed,
    White,
}

impl ColorHint {
    pub fn name(&self) -> &'static str {
        use ColorHint::*;

        match self {
            Green => "green",
            Yellow => "yellow",
            Red => "red",
            BgRed => "bgRed",
            White => "white",
        }
    }
}

impl fmt::Display for ColorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ColorHint {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        use ColorHint::*;

        match s {
            "green" => Ok(Green),
            "yellow" => Ok(Yellow),
            "red" => Ok(Red),
            "bgRed" => Ok(BgRed),
            "white" => Ok(White),
            other => Err(crate::Error::UnknownColor(other.to_owned())),
        }
    }
}

type ColorFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Text transforms applied to messages when a logger runs in color mode.
#[derive(Default)]
pub struct ColorMap {
    colors: HashMap<ColorHint, ColorFn>,
}

impl ColorMap {
    pub fn new() -> ColorMap {
        ColorMap::default()
    }

    /// Transforms producing ANSI escape sequences for every [`ColorHint`].
    pub fn ansi() -> ColorMap {
        ColorMap::new()
            .with(ColorHint::Green, |text| text.green().to_string())
            .with(ColorHint::Yellow, |text| text.yellow().to_string())
            .with(ColorHint::Red, |text| text.red().to_string())
            .with(ColorHint::BgRed, |text| text.on_red().to_string())
            .with(ColorHint::White, |text| text.white().to_string())
    }

    pub fn with<F>(mut self, hint: ColorHint, color: F) -> ColorMap
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.insert(hint, color);
        self
    }

    pub fn insert<F>(&mut self, hint: ColorHint, color: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.colors.insert(hint, Box::new(color));
    }

    pub fn contains(&self, hint: ColorHint) -> bool {
        self.colors.contains_key(&hint)
    }

    /// Applies the transform registered for `hint` to `text`.
    pub fn apply(&self, hint: ColorHint, text: &str) -> crate::Result<String> {
        let Some(color) = self.colors.get(&hint) else {
            tracing::warn!("Color map has no entry for {hint}.");
            return Err(crate::Error::MissingColor { hint });
        };

        Ok(color(text))
    }
}

impl fmt::Debug for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.colors.keys()).finish()
    }
}
