use crate::{
    clock::FixedClock, color::ColorHint, logger::ConsoleLogger, sink::MemorySink, ColorMap,
};

pub fn nine_oh_five() -> FixedClock {
    FixedClock::at(9, 5, 0).unwrap()
}

/// Wraps text in a tag per color, e.g. `<Y>text</Y>` for yellow.
pub fn marker_colors() -> ColorMap {
    ColorMap::new()
        .with(ColorHint::Green, |text| format!("<G>{text}</G>"))
        .with(ColorHint::Yellow, |text| format!("<Y>{text}</Y>"))
        .with(ColorHint::Red, |text| format!("<R>{text}</R>"))
        .with(ColorHint::BgRed, |text| format!("<BR>{text}</BR>"))
}

pub fn fixed_logger(colors: Option<ColorMap>) -> ConsoleLogger<MemorySink, FixedClock> {
    let builder = ConsoleLogger::builder(MemorySink::new()).clock(nine_oh_five());

    match colors {
        Some(colors) => builder.color_enabled(true).color_map(colors).build(),
        None => builder.build(),
    }
}
