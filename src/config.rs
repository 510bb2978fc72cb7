use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_REFRESH_HZ: u16 = 10;
/// Offsets beyond ±18:00 are not used anywhere on earth.
pub const MAX_OFFSET_MINUTES: i16 = 18 * 60;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub refresh_hz: u16,
    pub utc_offset: UtcOffset,
    pub show_text_clock: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_hz: DEFAULT_REFRESH_HZ,
            utc_offset: UtcOffset::Local,
            show_text_clock: true,
        }
    }
}

impl DisplayConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.refresh_hz.max(1)))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtcOffset {
    Local,
    Fixed { minutes: i16 },
}

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset::Fixed { minutes: 0 };

    /// Parses `local`, `utc`, `z`, or a signed `±HH:MM` / `±HH` offset.
    pub fn parse_cli(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Some(UtcOffset::Local),
            "utc" | "z" => return Some(UtcOffset::UTC),
            _ => {}
        }

        let (sign, rest) = match trimmed.as_bytes().first()? {
            b'+' => (1, &trimmed[1..]),
            b'-' => (-1, &trimmed[1..]),
            _ => return None,
        };
        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None => (rest, "0"),
        };
        if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hours = hours.parse::<i16>().ok()?;
        let minutes = minutes.parse::<i16>().ok()?;
        if minutes >= 60 {
            return None;
        }
        let total = hours.checked_mul(60)?.checked_add(minutes)?;
        if total > MAX_OFFSET_MINUTES {
            return None;
        }
        Some(UtcOffset::Fixed {
            minutes: sign * total,
        })
    }

    /// Fixed offset `delta` minutes away from `minutes`, clamped to ±18:00.
    pub fn shifted_from(minutes: i16, delta: i16) -> Self {
        UtcOffset::Fixed {
            minutes: minutes
                .saturating_add(delta)
                .clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES),
        }
    }

    pub fn label(self) -> String {
        match self {
            UtcOffset::Local => "local".to_string(),
            UtcOffset::Fixed { minutes: 0 } => "UTC".to_string(),
            UtcOffset::Fixed { minutes } => {
                let sign = if minutes < 0 { '-' } else { '+' };
                let abs = minutes.unsigned_abs();
                format!("UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
            }
        }
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
