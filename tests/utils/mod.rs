use std::{cell::RefCell, rc::Rc};

use console_logger::{sink::FnSink, Result};
use regex::Regex;

/// A sink whose captured lines stay reachable after the logger takes it.
pub fn shared_capture() -> (FnSink<impl FnMut(&str) -> Result<()>>, Rc<RefCell<Vec<String>>>) {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let captured = Rc::clone(&lines);

    let sink = FnSink(move |line: &str| -> Result<()> {
        captured.borrow_mut().push(line.to_owned());
        Ok(())
    });

    (sink, lines)
}

/// Matches `H:M:S [LABEL] message`, where every time field is an unpadded number.
pub fn line_regex(label: &str, message: &str) -> Regex {
    let hour = r"(1?\d|2[0-3])";
    let minute_or_second = r"[1-5]?\d";
    let timestamp = format!("{hour}:{minute_or_second}:{minute_or_second}");

    Regex::new(&format!(
        r"^{timestamp} \[{}\] {}$",
        regex::escape(label),
        regex::escape(message)
    ))
    .unwrap()
}
