mod time_of_day;

pub use time_of_day::{ClockError, Component, TimeInput, TimeOfDay};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Row {
    FiveHours,
    OneHours,
    FiveMinutes,
    OneMinutes,
}

impl Row {
    /// Top to bottom, as the rows hang on the clock.
    pub const ALL: [Row; 4] = [
        Row::FiveHours,
        Row::OneHours,
        Row::FiveMinutes,
        Row::OneMinutes,
    ];

    pub fn len(self) -> usize {
        match self {
            Row::FiveHours | Row::OneHours | Row::OneMinutes => 4,
            Row::FiveMinutes => 11,
        }
    }

    /// Hours or minutes contributed by one lit lamp of this row.
    pub fn weight(self) -> u8 {
        match self {
            Row::FiveHours | Row::FiveMinutes => 5,
            Row::OneHours | Row::OneMinutes => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Row::FiveHours => "5h",
            Row::OneHours => "1h",
            Row::FiveMinutes => "5m",
            Row::OneMinutes => "1m",
        }
    }

    pub fn counts_hours(self) -> bool {
        matches!(self, Row::FiveHours | Row::OneHours)
    }

    /// The 3rd, 6th and 9th five-minute lamps mark the quarter hours.
    pub fn is_quarter_lamp(self, index: usize) -> bool {
        self == Row::FiveMinutes && index % 3 == 2 && index < self.len()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lamp values for one time of day. `1` is lit, `0` is dark.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LampState {
    pub seconds: u8,
    pub five_hours: [u8; 4],
    pub one_hours: [u8; 4],
    pub five_minutes: [u8; 11],
    pub one_minutes: [u8; 4],
}

impl LampState {
    pub fn from_time(time: TimeOfDay) -> Self {
        let h = time.hour();
        let m = time.minute();
        Self {
            seconds: time.second() % 2,
            five_hours: lamps(|i| h >= i * 5),
            one_hours: lamps(|i| h % 5 >= i),
            five_minutes: lamps(|i| m >= i * 5),
            one_minutes: lamps(|i| m % 5 >= i),
        }
    }

    pub fn row(&self, row: Row) -> &[u8] {
        match row {
            Row::FiveHours => &self.five_hours,
            Row::OneHours => &self.one_hours,
            Row::FiveMinutes => &self.five_minutes,
            Row::OneMinutes => &self.one_minutes,
        }
    }

    pub fn lit(&self, row: Row) -> usize {
        self.row(row).iter().filter(|&&lamp| lamp == 1).count()
    }

    pub fn seconds_lit(&self) -> bool {
        self.seconds == 1
    }

    pub fn hours(&self) -> usize {
        self.sum(|row| row.counts_hours())
    }

    pub fn minutes(&self) -> usize {
        self.sum(|row| !row.counts_hours())
    }

    fn sum(&self, include: impl Fn(Row) -> bool) -> usize {
        Row::ALL
            .into_iter()
            .filter(|&row| include(row))
            .map(|row| self.lit(row) * usize::from(row.weight()))
            .sum()
    }

    /// Reads the time back off the lamps. Only the parity of the second
    /// survives conversion, so the second is `0` or `1`.
    pub fn time_of_day(&self) -> Result<TimeOfDay, ClockError> {
        let hour = u8::try_from(self.hours()).unwrap_or(u8::MAX);
        let minute = u8::try_from(self.minutes()).unwrap_or(u8::MAX);
        TimeOfDay::new(hour, minute, self.seconds)
    }
}

/// `N` lamps where lamp `i` (1-based) is lit when `on(i)` holds.
fn lamps<const N: usize>(on: impl Fn(u8) -> bool) -> [u8; N] {
    std::array::from_fn(|idx| u8::from(on(idx as u8 + 1)))
}

pub fn convert<T: TimeInput>(time: T) -> Result<LampState, ClockError> {
    let time = time.into_time_of_day()?;
    Ok(LampState::from_time(time))
}
