use crate::clock::{LampState, TimeOfDay};
use crate::config::{DisplayConfig, UtcOffset};

pub struct AppState {
    pub display: DisplayConfig,
    pub paused: bool,
    text: String,
    lamps: LampState,
    conversions: u64,
}

impl AppState {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            display,
            paused: false,
            text: String::new(),
            lamps: LampState::default(),
            conversions: 0,
        }
    }

    /// Takes a tick from the time source. The lamps are only recomputed when
    /// the `HH:MM:SS` text differs from what is on screen; returns whether
    /// anything changed.
    pub fn apply_time(&mut self, time: TimeOfDay) -> bool {
        if self.paused {
            return false;
        }
        let text = time.to_string();
        if text == self.text {
            return false;
        }
        self.lamps = LampState::from_time(time);
        self.text = text;
        self.conversions += 1;
        true
    }

    /// Empty until the first tick arrives.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lamps(&self) -> &LampState {
        &self.lamps
    }

    /// How many times the lamps were recomputed since start.
    pub fn conversions(&self) -> u64 {
        self.conversions
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn toggle_text_clock(&mut self) {
        self.display.show_text_clock = !self.display.show_text_clock;
    }

    /// Switches the zone. Lamps follow once the ticker sends a time in the
    /// new zone.
    pub fn set_offset(&mut self, offset: UtcOffset) -> bool {
        if self.display.utc_offset == offset {
            return false;
        }
        self.display.utc_offset = offset;
        true
    }
}
