//! Minute-of-day times and intervals.
//!
//! All scheduling math works in integer minutes since midnight. Times are
//! parsed from `HH:MM` text and intervals from `HH:MM-HH:MM`. Parsing checks
//! structure only: separators and integer parts. Hour/minute ranges and
//! start/end ordering are deliberately not validated here -- ordering is a
//! soft concern the downstream sweep tolerates, and the form layer decides
//! whether to reject reversed input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Parse `HH:MM` into minutes since midnight.
///
/// # Errors
/// Returns [`ParseError::MalformedTime`] when the text does not contain
/// exactly one `:` or either part is not an integer.
pub fn parse_time(text: &str) -> Result<i32, ParseError> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 2 {
        return Err(ParseError::MalformedTime {
            text: text.to_string(),
        });
    }

    let hours: i32 = parts[0].parse().map_err(|_| ParseError::MalformedTime {
        text: text.to_string(),
    })?;
    let minutes: i32 = parts[1].parse().map_err(|_| ParseError::MalformedTime {
        text: text.to_string(),
    })?;

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as zero-padded `HH:MM`.
pub fn format_time(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A time range in minutes since midnight.
///
/// Well-formed intervals satisfy `start < end`. Reversed input is accepted
/// and tolerated downstream (see [`crate::slots::free`]); padding may push
/// bounds outside the 0..1440 day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    /// Create a new interval.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Parse an interval from `HH:MM-HH:MM` text.
    ///
    /// # Errors
    /// Returns [`ParseError::MalformedInterval`] when the text does not
    /// contain exactly one `-` separator or either side is not `HH:MM`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let halves: Vec<&str> = text.split('-').collect();
        if halves.len() != 2 {
            return Err(ParseError::MalformedInterval {
                text: text.to_string(),
            });
        }

        let start = parse_time(halves[0]).map_err(|_| ParseError::MalformedInterval {
            text: text.to_string(),
        })?;
        let end = parse_time(halves[1]).map_err(|_| ParseError::MalformedInterval {
            text: text.to_string(),
        })?;

        Ok(Self { start, end })
    }

    /// Length in minutes. Negative when the interval is reversed.
    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }

    /// Expand both ends by `minutes`, unclamped.
    ///
    /// The result may start below 0 or end past 1440.
    pub fn padded(&self, minutes: i32) -> Self {
        Self {
            start: self.start - minutes,
            end: self.end + minutes,
        }
    }

    /// Check if this interval overlaps another.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_time(self.start), format_time(self.end))
    }
}

/// The daily bounds within which scheduling is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub start: i32,
    pub end: i32,
}

impl WorkWindow {
    /// Create a new work window.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Build a window from `HH:MM` start and end times.
    ///
    /// # Errors
    /// Returns [`ParseError::MalformedTime`] if either time fails to parse.
    pub fn from_times(start: &str, end: &str) -> Result<Self, ParseError> {
        Ok(Self {
            start: parse_time(start)?,
            end: parse_time(end)?,
        })
    }

    /// Window length in minutes.
    pub fn total_minutes(&self) -> i32 {
        self.end - self.start
    }
}

impl fmt::Display for WorkWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_time(self.start), format_time(self.end))
    }
}
