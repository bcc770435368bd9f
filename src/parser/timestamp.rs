//! SRT Timestamps
//!
//! Zero-padded `HH:MM:SS,mmm` clock values. Ordering between timestamps is
//! exact, but the linter compares them at whole-second granularity through
//! [`Timestamp::is_before`].

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{2}):([0-9]{2}),([0-9]{3})$")
        .expect("timestamp pattern compiles")
});

/// A clock time with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveTime);

impl Timestamp {
    /// Build a timestamp from its components, `None` when out of range
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, milli: u32) -> Option<Self> {
        if milli > 999 {
            return None;
        }
        NaiveTime::from_hms_milli_opt(hour, minute, second, milli).map(Self)
    }

    /// Parse `HH:MM:SS,mmm`.
    ///
    /// The hour may be one or two digits; minutes and seconds are exactly
    /// two digits and milliseconds exactly three. No surrounding text is
    /// accepted.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = TIMESTAMP_RE.captures(text)?;
        let field = |i: usize| caps[i].parse::<u32>().ok();
        Self::from_hms_milli(field(1)?, field(2)?, field(3)?, field(4)?)
    }

    /// Seconds since midnight, milliseconds discarded
    pub fn whole_seconds(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    pub fn millis(&self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }

    /// True when `self` falls in an earlier second than `other`
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.whole_seconds() < other.whole_seconds()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.0.hour(),
            self.0.minute(),
            self.0.second(),
            self.millis()
        )
    }
}
