use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MAX_HOUR: u8 = 23;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Component {
    Hour,
    Minute,
    Second,
}

impl Component {
    pub fn label(self) -> &'static str {
        match self {
            Component::Hour => "hour",
            Component::Minute => "minute",
            Component::Second => "second",
        }
    }

    pub fn max(self) -> u8 {
        match self {
            Component::Hour => MAX_HOUR,
            Component::Minute => MAX_MINUTE,
            Component::Second => MAX_SECOND,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ClockError {
    #[error("invalid time format {input:?} (expected HH:MM:SS)")]
    InvalidTimeFormat { input: String },
    #[error("{component} {value} is out of range (0-{max})")]
    OutOfRangeComponent {
        component: Component,
        value: u32,
        max: u8,
    },
}

impl ClockError {
    fn invalid(input: &str) -> Self {
        ClockError::InvalidTimeFormat {
            input: input.to_string(),
        }
    }

    fn out_of_range(component: Component, value: u32) -> Self {
        ClockError::OutOfRangeComponent {
            component,
            value,
            max: component.max(),
        }
    }
}

/// A validated time of day. Fields are private so every value in circulation
/// is within range.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ClockError> {
        check(Component::Hour, u32::from(hour))?;
        check(Component::Minute, u32::from(minute))?;
        check(Component::Second, u32::from(second))?;
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Builds a time of day from seconds elapsed since midnight, wrapping at
    /// 24 hours. Used by clocks, which count seconds rather than parse text.
    pub fn from_seconds_of_day(total: u64) -> Self {
        let total = total % 86_400;
        Self {
            hour: (total / 3600) as u8,
            minute: (total / 60 % 60) as u8,
            second: (total % 60) as u8,
        }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn second(self) -> u8 {
        self.second
    }

    pub fn seconds_of_day(self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

fn check(component: Component, value: u32) -> Result<(), ClockError> {
    if value > u32::from(component.max()) {
        return Err(ClockError::out_of_range(component, value));
    }
    Ok(())
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = ClockError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let mut fields = trimmed.split(':');
        let (Some(h), Some(m), Some(s), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(ClockError::invalid(input));
        };

        let hour = parse_field(h).ok_or_else(|| ClockError::invalid(input))?;
        let minute = parse_field(m).ok_or_else(|| ClockError::invalid(input))?;
        let second = parse_field(s).ok_or_else(|| ClockError::invalid(input))?;

        check(Component::Hour, hour)?;
        check(Component::Minute, minute)?;
        check(Component::Second, second)?;

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        })
    }
}

/// A non-empty run of ASCII digits. Signs and spaces are rejected. Runs too
/// long for a `u32` saturate so range checking still reports them.
fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(field.parse().unwrap_or(u32::MAX))
}

impl TryFrom<(u8, u8, u8)> for TimeOfDay {
    type Error = ClockError;

    fn try_from((hour, minute, second): (u8, u8, u8)) -> Result<Self, Self::Error> {
        TimeOfDay::new(hour, minute, second)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Anything that can be turned into a [`TimeOfDay`]: structured values or
/// `HH:MM:SS` text.
pub trait TimeInput {
    fn into_time_of_day(self) -> Result<TimeOfDay, ClockError>;
}

impl TimeInput for TimeOfDay {
    fn into_time_of_day(self) -> Result<TimeOfDay, ClockError> {
        Ok(self)
    }
}

impl TimeInput for &TimeOfDay {
    fn into_time_of_day(self) -> Result<TimeOfDay, ClockError> {
        Ok(*self)
    }
}

impl TimeInput for &str {
    fn into_time_of_day(self) -> Result<TimeOfDay, ClockError> {
        self.parse()
    }
}

impl TimeInput for String {
    fn into_time_of_day(self) -> Result<TimeOfDay, ClockError> {
        self.parse()
    }
}

impl TimeInput for &String {
    fn into_time_of_day(self) -> Result<TimeOfDay, ClockError> {
        self.parse()
    }
}

impl TimeInput for (u8, u8, u8) {
    fn into_time_of_day(self) -> Result<TimeOfDay, ClockError> {
        TimeOfDay::try_from(self)
    }
}
