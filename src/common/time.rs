use crate::clock::TimeOfDay;
use crate::config::UtcOffset;
use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock {
    fn now(&self) -> SystemTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

/// Wall-clock time of day for `now`, shifted by `offset`.
pub fn time_of_day(now: SystemTime, offset: UtcOffset) -> TimeOfDay {
    let epoch_secs = epoch_secs(now);
    let shifted = epoch_secs + offset_seconds(offset, epoch_secs);
    TimeOfDay::from_seconds_of_day(shifted.rem_euclid(86_400) as u64)
}

/// Minutes east of UTC that `offset` stands for at `now`.
pub fn offset_minutes(offset: UtcOffset, now: SystemTime) -> i16 {
    (offset_seconds(offset, epoch_secs(now)) / 60) as i16
}

fn epoch_secs(now: SystemTime) -> i64 {
    match now.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    }
}

fn offset_seconds(offset: UtcOffset, epoch_secs: i64) -> i64 {
    match offset {
        UtcOffset::Fixed { minutes } => i64::from(minutes) * 60,
        UtcOffset::Local => local_offset_seconds(epoch_secs).unwrap_or(0),
    }
}

#[cfg(unix)]
fn local_offset_seconds(epoch_secs: i64) -> Option<i64> {
    let time = libc::time_t::try_from(epoch_secs).ok()?;
    unsafe {
        let mut tm: libc::tm = std::mem::zeroed();
        if libc::localtime_r(&time, &mut tm).is_null() {
            return None;
        }
        Some(i64::from(tm.tm_gmtoff))
    }
}

#[cfg(not(unix))]
fn local_offset_seconds(_epoch_secs: i64) -> Option<i64> {
    None
}
