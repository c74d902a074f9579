use chrono::{Local, NaiveTime, Timelike};

/// Source of the local wall-clock time stamped onto log lines.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time of day.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    pub fn at(hour: u32, minute: u32, second: u32) -> Option<FixedClock> {
        NaiveTime::from_hms_opt(hour, minute, second).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Renders `time` as `H:M:S` without zero padding, e.g. `9:5:0`.
pub fn timestamp(time: NaiveTime) -> String {
    format!("{}:{}:{}", time.hour(), time.minute(), time.second())
}
